//! Two-way differencing with Myers' greedy O(ND) algorithm.
//!
//! Only the furthest reaching row of every diagonal is kept, together with
//! the edit step that got there. Edit steps live in an arena and point back
//! to their predecessor, so a full script can be rebuilt from the step that
//! reaches the end of both sequences.

use anyhow::{ensure, Result};
use log::debug;
use std::fmt;
use std::ops::ControlFlow;

use crate::progress::{max_work, max_work3, Progress};
use crate::range_comparator::RangeComparator;
use crate::range_difference::{RangeDifference, RangeDifferenceKind};
use crate::{merge, ranges};

type ProgressFn<'a> = dyn FnMut(Progress) -> ControlFlow<()> + 'a;

/// Computes the differences between two or three sequences.
///
/// A differencer without a progress callback always runs to completion.
/// With one, the callback is invoked once per edit distance step and may
/// cancel the comparison by returning [`ControlFlow::Break`], in which case
/// the result is empty.
#[derive(Default)]
pub struct RangeDifferencer<'a> {
    progress: Option<Box<ProgressFn<'a>>>,
    worked: usize,
    total: usize,
}

/// Result of a single two-way run
#[derive(Debug)]
pub(crate) enum Outcome {
    Complete(Vec<RangeDifference>),
    /// Canceled through the progress callback, or abandoned by the
    /// comparator's abort hint
    Interrupted,
}

impl Outcome {
    pub(crate) fn into_ranges(self) -> Vec<RangeDifference> {
        match self {
            Outcome::Complete(ranges) => ranges,
            Outcome::Interrupted => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditKind {
    /// Consumes an element of the right sequence
    Delete,
    /// Consumes an element of the left sequence
    Insert,
}

/// One step of an edit script. Rows and columns are 1-based.
#[derive(Debug, Clone, Copy)]
struct EditStep {
    kind: EditKind,
    row: usize,
    col: usize,
    prev: Option<usize>,
}

impl<'a> RangeDifferencer<'a> {
    /// Create a differencer without progress reporting
    pub fn new() -> Self {
        Self::default()
    }

    /// Report progress to `callback`, which may cancel the comparison
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Progress) -> ControlFlow<()> + 'a,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Find the differences between `right` and `left`.
    ///
    /// Returns an empty list if both are equal, or if the comparison was
    /// canceled or abandoned.
    pub fn find_differences<C>(&mut self, right: &C, left: &C) -> Result<Vec<RangeDifference>>
    where
        C: RangeComparator + ?Sized,
    {
        self.begin(max_work(right, left));
        Ok(self.diff(right, left)?.into_ranges())
    }

    /// Find the differences between `left` and `right` relative to a common
    /// `ancestor`.
    ///
    /// Without an ancestor this is a two-way comparison of `left` and
    /// `right` and all ranges are of kind [`RangeDifferenceKind::Change`].
    pub fn find_differences3<C>(
        &mut self,
        ancestor: Option<&C>,
        left: &C,
        right: &C,
    ) -> Result<Vec<RangeDifference>>
    where
        C: RangeComparator + ?Sized,
    {
        self.begin(max_work3(ancestor, left, right));
        match ancestor {
            Some(ancestor) => merge::merge(self, ancestor, left, right),
            None => Ok(self.diff(right, left)?.into_ranges()),
        }
    }

    /// Like [`find_differences`](Self::find_differences), but the gaps
    /// between the differences are filled with
    /// [`RangeDifferenceKind::NoChange`] ranges.
    pub fn find_ranges<C>(&mut self, right: &C, left: &C) -> Result<Vec<RangeDifference>>
    where
        C: RangeComparator + ?Sized,
    {
        let differences = self.find_differences(right, left)?;
        Ok(ranges::expand(
            &differences,
            right.range_count(),
            left.range_count(),
        ))
    }

    /// Like [`find_differences3`](Self::find_differences3), but the gaps
    /// between the differences are filled with
    /// [`RangeDifferenceKind::NoChange`] ranges.
    pub fn find_ranges3<C>(
        &mut self,
        ancestor: Option<&C>,
        left: &C,
        right: &C,
    ) -> Result<Vec<RangeDifference>>
    where
        C: RangeComparator + ?Sized,
    {
        match ancestor {
            Some(ancestor) => {
                let differences = self.find_differences3(Some(ancestor), left, right)?;
                Ok(ranges::expand3(
                    &differences,
                    ancestor.range_count(),
                    left.range_count(),
                    right.range_count(),
                ))
            }
            None => self.find_ranges(right, left),
        }
    }

    fn begin(&mut self, total: usize) {
        self.worked = 0;
        self.total = total;
    }

    fn report(&mut self, edit_distance: usize) -> ControlFlow<()> {
        self.worked += 1;
        let progress = Progress {
            edit_distance,
            worked: self.worked,
            total: self.total,
        };
        match self.progress.as_mut() {
            Some(callback) => callback(progress),
            None => ControlFlow::Continue(()),
        }
    }

    /// Run the two-way algorithm. Rows walk `right`, columns walk `left`.
    pub(crate) fn diff<C>(&mut self, right: &C, left: &C) -> Result<Outcome>
    where
        C: RangeComparator + ?Sized,
    {
        let right_size = right.range_count() as isize;
        let left_size = left.range_count() as isize;

        let max_diagonal = 2 * right_size.max(left_size);
        let origin = max_diagonal / 2;
        let diagonals = max_diagonal as usize + 1;

        // Row of the furthest reaching point on each diagonal
        let mut last_diagonal = vec![0isize; diagonals];
        // Edit step that reached that point
        let mut script: Vec<Option<usize>> = vec![None; diagonals];
        let mut steps: Vec<EditStep> = Vec::new();

        let mut row = 0isize;
        while row < right_size
            && row < left_size
            && right.ranges_equal(row as usize, left, row as usize)
        {
            row += 1;
        }

        last_diagonal[origin as usize] = row;
        let mut lower = if row == right_size { origin + 1 } else { origin - 1 };
        let mut upper = if row == left_size { origin - 1 } else { origin + 1 };

        if lower > upper {
            return Ok(Outcome::Complete(Vec::new()));
        }

        for d in 1..=max_diagonal {
            if self.report(d as usize).is_break() {
                debug!("comparison canceled at edit distance {}", d);
                return Ok(Outcome::Interrupted);
            }
            if right.should_abort(d as usize, max_diagonal as usize, left) {
                debug!("comparison abandoned at edit distance {}", d);
                return Ok(Outcome::Interrupted);
            }

            let mut k = lower;
            while k <= upper {
                let step = if k == origin - d
                    || (k != origin + d
                        && last_diagonal[diagonal(k + 1, max_diagonal)?]
                            >= last_diagonal[diagonal(k - 1, max_diagonal)?])
                {
                    // move down
                    let above = diagonal(k + 1, max_diagonal)?;
                    row = last_diagonal[above] + 1;
                    EditStep {
                        kind: EditKind::Delete,
                        row: row as usize,
                        col: (row + k - origin) as usize,
                        prev: script[above],
                    }
                } else {
                    // move right
                    let before = diagonal(k - 1, max_diagonal)?;
                    row = last_diagonal[before];
                    EditStep {
                        kind: EditKind::Insert,
                        row: row as usize,
                        col: (row + k - origin) as usize,
                        prev: script[before],
                    }
                };
                let mut col = row + k - origin;

                let index = diagonal(k, max_diagonal)?;
                steps.push(step);
                script[index] = Some(steps.len() - 1);

                // slide down the diagonal as far as possible
                while row < right_size
                    && col < left_size
                    && right.ranges_equal(row as usize, left, col as usize)
                {
                    row += 1;
                    col += 1;
                }

                last_diagonal[index] = row;

                if row == right_size && col == left_size {
                    let differences = into_ranges(&trace(&steps, script[index]));
                    debug!(
                        "found {} differences at edit distance {}",
                        differences.len(),
                        d
                    );
                    return Ok(Outcome::Complete(differences));
                }
                if row == right_size {
                    lower = k + 2;
                }
                if col == left_size {
                    upper = k - 2;
                }
                k += 2;
            }
            lower -= 1;
            upper += 1;
        }

        anyhow::bail!(
            "edit distance exceeded its bound of {} ({} vs {} elements)",
            max_diagonal,
            right_size,
            left_size
        )
    }
}

impl fmt::Debug for RangeDifferencer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeDifferencer")
            .field("progress", &self.progress.is_some())
            .field("worked", &self.worked)
            .field("total", &self.total)
            .finish()
    }
}

/// Index of diagonal `k` in the diagonal arrays
fn diagonal(k: isize, max_diagonal: isize) -> Result<usize> {
    ensure!(
        (0..=max_diagonal).contains(&k),
        "diagonal {} out of range 0..={}",
        k,
        max_diagonal
    );
    Ok(k as usize)
}

/// Rebuild the edit script ending at `last`, in forward order
fn trace(steps: &[EditStep], last: Option<usize>) -> Vec<EditStep> {
    let mut script = Vec::new();
    let mut cursor = last;
    while let Some(index) = cursor {
        let step = steps[index];
        script.push(step);
        cursor = step.prev;
    }
    script.reverse();
    script
}

/// Coalesce an edit script into zero-based change ranges
fn into_ranges(script: &[EditStep]) -> Vec<RangeDifference> {
    let mut ranges = Vec::new();
    let mut i = 0;

    while i < script.len() {
        let first = script[i];
        let (right_start, right_length, left_start, left_length);

        match first.kind {
            EditKind::Insert => {
                let mut inserted = 0;
                while i < script.len()
                    && script[i].kind == EditKind::Insert
                    && script[i].row == first.row
                {
                    inserted += 1;
                    i += 1;
                }
                // "insert after row" becomes "insert before row + 1"
                right_start = first.row + 1;
                right_length = 0;
                left_start = first.col;
                left_length = inserted;
            }
            EditKind::Delete => {
                let mut deleted = 0;
                let mut last_row;
                loop {
                    last_row = script[i].row;
                    deleted += 1;
                    i += 1;
                    if !(i < script.len()
                        && script[i].kind == EditKind::Delete
                        && script[i].row == last_row + 1)
                    {
                        break;
                    }
                }

                // insertions pivoting on the last deleted row replace it
                let mut inserted = 0;
                if i < script.len() && script[i].kind == EditKind::Insert && script[i].row == last_row {
                    while i < script.len()
                        && script[i].kind == EditKind::Insert
                        && script[i].row == last_row
                    {
                        inserted += 1;
                        i += 1;
                    }
                }
                right_start = first.row;
                right_length = deleted;
                left_start = first.col + 1;
                left_length = inserted;
            }
        }

        ranges.push(RangeDifference::two_way(
            RangeDifferenceKind::Change,
            right_start - 1,
            right_length,
            left_start - 1,
            left_length,
        ));
    }

    ranges
}
