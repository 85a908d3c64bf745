use crate::range_comparator::RangeComparator;

/// Progress of a running comparison, reported once per edit distance step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// The edit distance currently being explored by the two-way run
    pub edit_distance: usize,

    /// Steps performed so far across the whole operation
    pub worked: usize,

    /// Upper bound on the number of steps of the whole operation
    pub total: usize,
}

impl Progress {
    /// Fraction of the upper bound already performed, in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            (self.worked as f64 / self.total as f64).min(1.0)
        }
    }
}

/// Upper bound on the number of steps of a two-way comparison
pub fn max_work<C: RangeComparator + ?Sized>(right: &C, left: &C) -> usize {
    2 * right.range_count().max(left.range_count())
}

/// Upper bound on the number of steps of a three-way comparison
pub fn max_work3<C: RangeComparator + ?Sized>(ancestor: Option<&C>, left: &C, right: &C) -> usize {
    match ancestor {
        Some(ancestor) => max_work(ancestor, left) + max_work(ancestor, right),
        None => max_work(left, right),
    }
}
