use derive_more::Display;
use std::fmt;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a range difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RangeDifferenceKind {
    /// The range is identical on all sides
    #[display(fmt = "NoChange")]
    NoChange,

    /// Two-way change between the right and left sequence
    #[display(fmt = "Change")]
    Change,

    /// Both sides changed the same ancestor region differently
    #[display(fmt = "Conflict")]
    Conflict,

    /// Only the right side differs from the ancestor
    #[display(fmt = "RightOnly")]
    RightOnly,

    /// Only the left side differs from the ancestor
    #[display(fmt = "LeftOnly")]
    LeftOnly,

    /// Both sides made the same change (a pseudo-conflict)
    #[display(fmt = "Ancestor")]
    Ancestor,

    /// Undetermined; only used internally as a sentinel
    #[display(fmt = "Error")]
    Error,
}

/// A region of difference between two or three sequences.
///
/// For a two-way comparison the `right` coordinates refer to the first
/// sequence and the `left` coordinates to the second one. The ancestor
/// coordinates are only set by three-way comparisons. All coordinates are
/// zero-based; a length of zero denotes an insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangeDifference {
    kind: RangeDifferenceKind,
    right_start: usize,
    right_length: usize,
    left_start: usize,
    left_length: usize,
    ancestor_start: usize,
    ancestor_length: usize,
}

impl RangeDifference {
    /// Create an empty range difference of the given kind
    pub fn new(kind: RangeDifferenceKind) -> Self {
        Self::three_way(kind, 0, 0, 0, 0, 0, 0)
    }

    /// Create a range difference between a right and a left sequence
    pub fn two_way(
        kind: RangeDifferenceKind,
        right_start: usize,
        right_length: usize,
        left_start: usize,
        left_length: usize,
    ) -> Self {
        Self::three_way(kind, right_start, right_length, left_start, left_length, 0, 0)
    }

    /// Create a range difference that also covers an ancestor sequence
    pub fn three_way(
        kind: RangeDifferenceKind,
        right_start: usize,
        right_length: usize,
        left_start: usize,
        left_length: usize,
        ancestor_start: usize,
        ancestor_length: usize,
    ) -> Self {
        Self {
            kind,
            right_start,
            right_length,
            left_start,
            left_length,
            ancestor_start,
            ancestor_length,
        }
    }

    pub fn kind(&self) -> RangeDifferenceKind {
        self.kind
    }

    pub fn right_start(&self) -> usize {
        self.right_start
    }

    pub fn right_length(&self) -> usize {
        self.right_length
    }

    /// End of the right range (exclusive)
    pub fn right_end(&self) -> usize {
        self.right_start + self.right_length
    }

    pub fn left_start(&self) -> usize {
        self.left_start
    }

    pub fn left_length(&self) -> usize {
        self.left_length
    }

    /// End of the left range (exclusive)
    pub fn left_end(&self) -> usize {
        self.left_start + self.left_length
    }

    pub fn ancestor_start(&self) -> usize {
        self.ancestor_start
    }

    pub fn ancestor_length(&self) -> usize {
        self.ancestor_length
    }

    /// End of the ancestor range (exclusive)
    pub fn ancestor_end(&self) -> usize {
        self.ancestor_start + self.ancestor_length
    }

    /// The largest of the right, left and ancestor lengths
    pub fn max_length(&self) -> usize {
        self.right_length
            .max(self.left_length)
            .max(self.ancestor_length)
    }

    /// Convert the right coordinates to a standard Range
    pub fn right_range(&self) -> Range<usize> {
        self.right_start..self.right_end()
    }

    /// Convert the left coordinates to a standard Range
    pub fn left_range(&self) -> Range<usize> {
        self.left_start..self.left_end()
    }

    /// Convert the ancestor coordinates to a standard Range
    pub fn ancestor_range(&self) -> Range<usize> {
        self.ancestor_start..self.ancestor_end()
    }

    /// Check if this range describes an actual difference
    pub fn has_changes(&self) -> bool {
        self.kind != RangeDifferenceKind::NoChange
    }
}

impl fmt::Display for RangeDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} left: ({}, {}) right: ({}, {})",
            self.kind, self.left_start, self.left_length, self.right_start, self.right_length
        )?;
        if self.ancestor_start > 0 || self.ancestor_length > 0 {
            write!(
                f,
                " ancestor: ({}, {})",
                self.ancestor_start, self.ancestor_length
            )?;
        }
        Ok(())
    }
}
