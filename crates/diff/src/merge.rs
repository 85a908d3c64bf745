//! Three-way merge of two two-way edit scripts.
//!
//! Both scripts are computed against the ancestor, which is always passed
//! as the first (right) sequence. In their ranges the `right_*` coordinates
//! are therefore ancestor coordinates and the `left_*` coordinates belong to
//! the changed side.

use anyhow::{ensure, Result};
use log::{debug, trace};

use crate::differencer::{Outcome, RangeDifferencer};
use crate::range_comparator::RangeComparator;
use crate::range_difference::{RangeDifference, RangeDifferenceKind};

/// Walks one edit script and collects the ranges that take part in the
/// current merge window.
struct DifferencesIterator<'s> {
    script: &'s [RangeDifference],
    index: usize,
    window: Vec<RangeDifference>,
}

impl<'s> DifferencesIterator<'s> {
    fn new(script: &'s [RangeDifference]) -> Self {
        Self {
            script,
            index: 0,
            window: Vec::new(),
        }
    }

    fn current(&self) -> Option<&RangeDifference> {
        self.script.get(self.index)
    }

    /// Move the current range into the window
    fn advance(&mut self) {
        if let Some(&range) = self.current() {
            self.window.push(range);
            self.index += 1;
        }
    }

    fn clear(&mut self) {
        self.window.clear();
    }

    /// Translate the window boundaries from ancestor to side coordinates
    fn side_span(&self, change_start: usize, change_end: usize) -> Option<Result<(usize, usize)>> {
        let first = self.window.first()?;
        let last = self.window.last()?;
        Some(
            shift(change_start, first.left_start(), first.right_start()).and_then(|start| {
                let end = shift(change_end, last.left_end(), last.right_end())?;
                Ok((start, end))
            }),
        )
    }
}

/// `position - from + to` without going below zero
fn shift(position: usize, to: usize, from: usize) -> Result<usize> {
    let shifted = position as isize - from as isize + to as isize;
    ensure!(
        shifted >= 0,
        "merge window boundary {} maps to negative position {}",
        position,
        shifted
    );
    Ok(shifted as usize)
}

pub(crate) fn merge<C>(
    differencer: &mut RangeDifferencer<'_>,
    ancestor: &C,
    left: &C,
    right: &C,
) -> Result<Vec<RangeDifference>>
where
    C: RangeComparator + ?Sized,
{
    let right_script = match differencer.diff(ancestor, right)? {
        Outcome::Complete(script) => script,
        Outcome::Interrupted => return Ok(Vec::new()),
    };
    let left_script = match differencer.diff(ancestor, left)? {
        Outcome::Complete(script) => script,
        Outcome::Interrupted => return Ok(Vec::new()),
    };

    // [right, left]
    let mut iters = [
        DifferencesIterator::new(&right_script),
        DifferencesIterator::new(&left_script),
    ];

    let mut merged = Vec::new();
    let mut last = RangeDifference::new(RangeDifferenceKind::Error);

    loop {
        let (right_current, left_current) = (iters[0].current(), iters[1].current());
        // take the range that starts first in the ancestor
        let mut lead = match (right_current, left_current) {
            (None, None) => break,
            (Some(_), None) => 0,
            (None, Some(_)) => 1,
            (Some(r), Some(l)) => {
                if r.right_start() <= l.right_start() {
                    0
                } else {
                    1
                }
            }
        };

        iters[0].clear();
        iters[1].clear();

        let (change_start, mut change_end) = match iters[lead].current() {
            Some(range) => (range.right_start(), range.right_end()),
            None => break,
        };
        iters[lead].advance();

        // pull in overlapping ranges, switching sides whenever one reaches
        // the current end of the window
        let mut other = 1 - lead;
        while let Some(range) = iters[other].current() {
            if range.right_start() > change_end {
                break;
            }
            let new_end = range.right_end();
            iters[other].advance();
            if new_end >= change_end {
                change_end = new_end;
                lead = other;
                other = 1 - lead;
            }
        }

        let difference = window_difference(&iters, &last, right, left, change_start, change_end)?;
        trace!("merged window {}..{}: {}", change_start, change_end, difference);
        merged.push(difference);
        last = difference;
    }

    debug!(
        "merged {} right and {} left differences into {} ranges",
        right_script.len(),
        left_script.len(),
        merged.len()
    );
    Ok(merged)
}

fn window_difference<C>(
    iters: &[DifferencesIterator<'_>; 2],
    last: &RangeDifference,
    right: &C,
    left: &C,
    change_start: usize,
    change_end: usize,
) -> Result<RangeDifference>
where
    C: RangeComparator + ?Sized,
{
    ensure!(
        !iters[0].window.is_empty() || !iters[1].window.is_empty(),
        "merge window {}..{} has no contributing ranges",
        change_start,
        change_end
    );

    let mut kind = RangeDifferenceKind::Error;

    let (right_start, right_end) = match iters[0].side_span(change_start, change_end) {
        Some(span) => span?,
        None => {
            // only the left side changed
            kind = RangeDifferenceKind::LeftOnly;
            (
                shift(change_start, last.right_end(), last.ancestor_end())?,
                shift(change_end, last.right_end(), last.ancestor_end())?,
            )
        }
    };

    let (left_start, left_end) = match iters[1].side_span(change_start, change_end) {
        Some(span) => span?,
        None => {
            // only the right side changed
            kind = RangeDifferenceKind::RightOnly;
            (
                shift(change_start, last.left_end(), last.ancestor_end())?,
                shift(change_end, last.left_end(), last.ancestor_end())?,
            )
        }
    };

    if kind == RangeDifferenceKind::Error {
        kind = if spans_equal(right, right_start, right_end, left, left_start, left_end) {
            RangeDifferenceKind::Ancestor
        } else {
            RangeDifferenceKind::Conflict
        };
    }

    Ok(RangeDifference::three_way(
        kind,
        right_start,
        right_end - right_start,
        left_start,
        left_end - left_start,
        change_start,
        change_end - change_start,
    ))
}

/// Element-wise equality of `right[right_start..right_end]` and
/// `left[left_start..left_end]`
fn spans_equal<C>(
    right: &C,
    right_start: usize,
    right_end: usize,
    left: &C,
    left_start: usize,
    left_end: usize,
) -> bool
where
    C: RangeComparator + ?Sized,
{
    right_end - right_start == left_end - left_start
        && (right_start..right_end)
            .zip(left_start..left_end)
            .all(|(r, l)| right.ranges_equal(r, left, l))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift() {
        assert_eq!(shift(5, 7, 3).unwrap(), 9);
        assert_eq!(shift(3, 0, 3).unwrap(), 0);
        assert!(shift(1, 0, 3).is_err());
    }

    #[test]
    fn test_iterator_collects_window() {
        let script = [
            RangeDifference::two_way(RangeDifferenceKind::Change, 1, 1, 1, 2),
            RangeDifference::two_way(RangeDifferenceKind::Change, 4, 0, 5, 1),
        ];
        let mut iter = DifferencesIterator::new(&script);

        assert!(iter.side_span(0, 0).is_none());
        iter.advance();
        iter.advance();
        assert!(iter.current().is_none());

        // window 1..4 in the ancestor covers 1..6 on the side
        let (start, end) = iter.side_span(1, 4).unwrap().unwrap();
        assert_eq!((start, end), (1, 6));

        iter.clear();
        assert!(iter.side_span(1, 4).is_none());
    }

    #[test]
    fn test_spans_equal() {
        let right = ['a', 'x', 'c'];
        let left = ['x', 'c'];

        assert!(spans_equal(&right[..], 1, 3, &left[..], 0, 2));
        assert!(!spans_equal(&right[..], 0, 2, &left[..], 0, 2));
        assert!(!spans_equal(&right[..], 1, 3, &left[..], 0, 1));
    }
}
