use std::ops::Range;

use crate::range_comparator::RangeComparator;

/// Compares strings token by token.
///
/// A token is a run of whitespace, a run of alphanumeric characters or `_`,
/// or any other single character. Offsets are byte offsets into the text.
#[derive(Debug, Clone)]
pub struct TokenComparator {
    text: String,
    tokens: Vec<Range<usize>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Whitespace,
    Word,
    Other,
}

impl TokenClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            TokenClass::Whitespace
        } else if c.is_alphanumeric() || c == '_' {
            TokenClass::Word
        } else {
            TokenClass::Other
        }
    }
}

impl TokenComparator {
    pub fn new(text: &str) -> Self {
        let mut tokens: Vec<Range<usize>> = Vec::new();
        let mut current: Option<(TokenClass, usize)> = None;

        for (offset, c) in text.char_indices() {
            let class = TokenClass::of(c);
            match current {
                Some((open, _)) if open == class && class != TokenClass::Other => {}
                Some((_, start)) => {
                    tokens.push(start..offset);
                    current = Some((class, offset));
                }
                None => current = Some((class, offset)),
            }
        }
        if let Some((_, start)) = current {
            tokens.push(start..text.len());
        }

        Self {
            text: text.to_string(),
            tokens,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of token `index`; the text length past the last token
    pub fn token_start(&self, index: usize) -> usize {
        self.tokens
            .get(index)
            .map_or(self.text.len(), |token| token.start)
    }

    /// Byte length of token `index`
    pub fn token_length(&self, index: usize) -> usize {
        self.tokens.get(index).map_or(0, |token| token.len())
    }

    /// Text of token `index`
    pub fn token_text(&self, index: usize) -> &str {
        self.tokens
            .get(index)
            .map_or("", |token| &self.text[token.clone()])
    }

    /// Text covered by `length` tokens starting at `start`
    pub fn text_of(&self, start: usize, length: usize) -> &str {
        if length == 0 {
            return "";
        }
        let from = self.token_start(start);
        let to = self.token_start(start + length);
        &self.text[from..to]
    }
}

impl RangeComparator for TokenComparator {
    fn range_count(&self) -> usize {
        self.tokens.len()
    }

    fn ranges_equal(&self, this_index: usize, other: &Self, other_index: usize) -> bool {
        self.token_text(this_index) == other.token_text(other_index)
    }

    /// Give up on long token diffs; a line diff is more useful there.
    fn should_abort(&self, edit_distance: usize, max_edit_distance: usize, other: &Self) -> bool {
        if self.range_count() < 50 || other.range_count() < 50 {
            return false;
        }
        if max_edit_distance < 100 || edit_distance < 100 {
            return false;
        }
        if max_edit_distance > 800 {
            return true;
        }
        edit_distance >= max_edit_distance / 4
    }
}
