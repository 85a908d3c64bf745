/// A sequence of comparable elements ("ranges") that the differencer
/// works on.
///
/// Both sequences of a comparison are always of the same type, so an
/// implementation only ever has to compare against itself.
pub trait RangeComparator {
    /// Number of elements in the sequence
    fn range_count(&self) -> usize;

    /// Whether element `this_index` of `self` equals element `other_index`
    /// of `other`
    fn ranges_equal(&self, this_index: usize, other: &Self, other_index: usize) -> bool;

    /// Hint that the comparison is not worth finishing.
    ///
    /// Called once per edit distance step with the current and the maximum
    /// possible edit distance. Returning `true` makes the differencer report
    /// no differences at all.
    fn should_abort(&self, _edit_distance: usize, _max_edit_distance: usize, _other: &Self) -> bool {
        false
    }
}

impl<T: PartialEq> RangeComparator for [T] {
    fn range_count(&self) -> usize {
        self.len()
    }

    fn ranges_equal(&self, this_index: usize, other: &Self, other_index: usize) -> bool {
        self[this_index] == other[other_index]
    }
}

impl<T: PartialEq> RangeComparator for Vec<T> {
    fn range_count(&self) -> usize {
        self.len()
    }

    fn ranges_equal(&self, this_index: usize, other: &Self, other_index: usize) -> bool {
        self[this_index] == other[other_index]
    }
}
