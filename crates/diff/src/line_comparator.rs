use ropey::Rope;
use std::borrow::Cow;

use crate::range_comparator::RangeComparator;

/// Compares text documents line by line.
///
/// Lines follow rope semantics: a trailing line break is followed by one
/// final empty line. Line breaks themselves never take part in the
/// comparison.
#[derive(Debug, Clone)]
pub struct LineComparator {
    text: Rope,
    ignore_whitespace: bool,
}

impl LineComparator {
    /// Create a comparator that compares lines exactly
    pub fn new(text: &str) -> Self {
        Self {
            text: Rope::from_str(text),
            ignore_whitespace: false,
        }
    }

    /// Create a comparator that ignores all whitespace within lines
    pub fn ignoring_whitespace(text: &str) -> Self {
        Self {
            text: Rope::from_str(text),
            ignore_whitespace: true,
        }
    }

    /// Get the text of line `index` without its line break
    pub fn line_text(&self, index: usize) -> Cow<'_, str> {
        let line: Cow<'_, str> = self.text.line(index).into();
        match line {
            Cow::Borrowed(line) => Cow::Borrowed(trim_line_break(line)),
            Cow::Owned(mut line) => {
                let keep = trim_line_break(&line).len();
                line.truncate(keep);
                Cow::Owned(line)
            }
        }
    }

    /// Get the text of `length` lines starting at `start`, including the
    /// line breaks between and after them
    pub fn text_of(&self, start: usize, length: usize) -> String {
        if length == 0 {
            return String::new();
        }
        let from = self.text.line_to_char(start);
        let to = self.text.line_to_char(start + length);
        self.text.slice(from..to).to_string()
    }
}

impl RangeComparator for LineComparator {
    fn range_count(&self) -> usize {
        self.text.len_lines()
    }

    fn ranges_equal(&self, this_index: usize, other: &Self, other_index: usize) -> bool {
        let this_line = self.line_text(this_index);
        let other_line = other.line_text(other_index);

        if self.ignore_whitespace || other.ignore_whitespace {
            this_line
                .chars()
                .filter(|c| !c.is_whitespace())
                .eq(other_line.chars().filter(|c| !c.is_whitespace()))
        } else {
            this_line == other_line
        }
    }
}

const LINE_BREAKS: [char; 7] = [
    '\n', '\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{2028}', '\u{2029}',
];

fn trim_line_break(line: &str) -> &str {
    match line.strip_suffix("\r\n") {
        Some(line) => line,
        None => line.strip_suffix(&LINE_BREAKS[..]).unwrap_or(line),
    }
}
