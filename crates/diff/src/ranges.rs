use crate::range_difference::{RangeDifference, RangeDifferenceKind};

/// Fill the gaps around two-way differences with `NoChange` ranges
pub(crate) fn expand(
    differences: &[RangeDifference],
    right_count: usize,
    left_count: usize,
) -> Vec<RangeDifference> {
    let mut ranges = Vec::with_capacity(differences.len() * 2 + 1);
    let (mut right_start, mut left_start) = (0, 0);

    for difference in differences {
        push_unchanged(
            &mut ranges,
            RangeDifference::two_way(
                RangeDifferenceKind::NoChange,
                right_start,
                difference.right_start() - right_start,
                left_start,
                difference.left_start() - left_start,
            ),
        );
        ranges.push(*difference);
        right_start = difference.right_end();
        left_start = difference.left_end();
    }

    push_unchanged(
        &mut ranges,
        RangeDifference::two_way(
            RangeDifferenceKind::NoChange,
            right_start,
            right_count - right_start,
            left_start,
            left_count - left_start,
        ),
    );

    ranges
}

/// Fill the gaps around three-way differences with `NoChange` ranges
pub(crate) fn expand3(
    differences: &[RangeDifference],
    ancestor_count: usize,
    left_count: usize,
    right_count: usize,
) -> Vec<RangeDifference> {
    let mut ranges = Vec::with_capacity(differences.len() * 2 + 1);
    let (mut right_start, mut left_start, mut ancestor_start) = (0, 0, 0);

    for difference in differences {
        push_unchanged(
            &mut ranges,
            RangeDifference::three_way(
                RangeDifferenceKind::NoChange,
                right_start,
                difference.right_start() - right_start,
                left_start,
                difference.left_start() - left_start,
                ancestor_start,
                difference.ancestor_start() - ancestor_start,
            ),
        );
        ranges.push(*difference);
        right_start = difference.right_end();
        left_start = difference.left_end();
        ancestor_start = difference.ancestor_end();
    }

    push_unchanged(
        &mut ranges,
        RangeDifference::three_way(
            RangeDifferenceKind::NoChange,
            right_start,
            right_count - right_start,
            left_start,
            left_count - left_start,
            ancestor_start,
            ancestor_count - ancestor_start,
        ),
    );

    ranges
}

fn push_unchanged(ranges: &mut Vec<RangeDifference>, unchanged: RangeDifference) {
    if unchanged.max_length() > 0 {
        ranges.push(unchanged);
    }
}
