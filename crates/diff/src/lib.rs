// Range differencing for compare and merge views
// This crate finds the differences between two or three sequences of comparable elements

mod differencer;
mod line_comparator;
mod merge;
mod progress;
mod range_comparator;
mod range_difference;
mod ranges;
mod token_comparator;

pub use differencer::RangeDifferencer;
pub use line_comparator::LineComparator;
pub use progress::{max_work, max_work3, Progress};
pub use range_comparator::RangeComparator;
pub use range_difference::{RangeDifference, RangeDifferenceKind};
pub use token_comparator::TokenComparator;

use anyhow::Result;

/// Find the differences between `right` and `left`.
///
/// The `right_*` coordinates of the returned ranges refer to `right`, the
/// `left_*` coordinates to `left`. The result is empty if both sequences are
/// equal or if the comparator abandoned the comparison.
pub fn find_differences<C>(right: &C, left: &C) -> Result<Vec<RangeDifference>>
where
    C: RangeComparator + ?Sized,
{
    RangeDifferencer::new().find_differences(right, left)
}

/// Find the differences between `left` and `right` relative to `ancestor`
pub fn find_differences3<C>(
    ancestor: Option<&C>,
    left: &C,
    right: &C,
) -> Result<Vec<RangeDifference>>
where
    C: RangeComparator + ?Sized,
{
    RangeDifferencer::new().find_differences3(ancestor, left, right)
}

/// Find the differences between `right` and `left`, including the
/// unchanged ranges between them
pub fn find_ranges<C>(right: &C, left: &C) -> Result<Vec<RangeDifference>>
where
    C: RangeComparator + ?Sized,
{
    RangeDifferencer::new().find_ranges(right, left)
}

/// Find the differences between `left` and `right` relative to `ancestor`,
/// including the unchanged ranges between them
pub fn find_ranges3<C>(ancestor: Option<&C>, left: &C, right: &C) -> Result<Vec<RangeDifference>>
where
    C: RangeComparator + ?Sized,
{
    RangeDifferencer::new().find_ranges3(ancestor, left, right)
}
