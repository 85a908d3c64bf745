use std::ops::ControlFlow;

use pretty_assertions::assert_eq;
use range_diff::{
    find_differences, find_differences3, LineComparator, Progress, RangeDifference,
    RangeDifferenceKind, RangeDifferencer, TokenComparator,
};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_line_merge() {
    let ancestor = LineComparator::new("one\ntwo\nthree\n");
    let left = LineComparator::new("one\nTWO\nthree\n");
    let right = LineComparator::new("one\ntwo\nthree\nfour\n");

    let merged = find_differences3(Some(&ancestor), &left, &right).unwrap();

    assert_eq!(
        merged,
        vec![
            RangeDifference::three_way(RangeDifferenceKind::LeftOnly, 1, 1, 1, 1, 1, 1),
            RangeDifference::three_way(RangeDifferenceKind::RightOnly, 3, 1, 3, 0, 3, 0),
        ]
    );
    assert_eq!(left.text_of(merged[0].left_start(), merged[0].left_length()), "TWO\n");
    assert_eq!(right.text_of(merged[1].right_start(), merged[1].right_length()), "four\n");
}

#[test]
fn test_line_diff_ignoring_whitespace() {
    let old = "fn main() {\n    let x = 1;\n}\n";
    let new = "fn main() {\n\tlet x=1;\n}\n";

    let exact = find_differences(&LineComparator::new(old), &LineComparator::new(new)).unwrap();
    assert_eq!(
        exact,
        vec![RangeDifference::two_way(RangeDifferenceKind::Change, 1, 1, 1, 1)]
    );

    let relaxed = find_differences(
        &LineComparator::ignoring_whitespace(old),
        &LineComparator::ignoring_whitespace(new),
    )
    .unwrap();
    assert!(relaxed.is_empty());
}

#[test]
fn test_token_refinement() {
    let right = TokenComparator::new("The quick brown fox");
    let left = TokenComparator::new("The quick red fox");

    let differences = find_differences(&right, &left).unwrap();

    assert_eq!(
        differences,
        vec![RangeDifference::two_way(RangeDifferenceKind::Change, 4, 1, 4, 1)]
    );
    let difference = differences[0];
    assert_eq!(right.text_of(difference.right_start(), difference.right_length()), "brown");
    assert_eq!(left.text_of(difference.left_start(), difference.left_length()), "red");
}

#[test]
fn test_long_token_diff_is_abandoned() {
    let right = TokenComparator::new(&(0..600).map(|i| format!("a{} ", i)).collect::<String>());
    let left = TokenComparator::new(&(0..600).map(|i| format!("b{} ", i)).collect::<String>());

    assert!(find_differences(&right, &left).unwrap().is_empty());
}

#[test]
fn test_progress_is_reported_per_edit_distance() {
    let right = chars("abc");
    let left = chars("axc");
    let mut reports: Vec<Progress> = Vec::new();

    let differences = RangeDifferencer::new()
        .with_progress(|progress| {
            reports.push(progress);
            ControlFlow::Continue(())
        })
        .find_differences(&right, &left)
        .unwrap();

    assert_eq!(differences.len(), 1);
    assert_eq!(
        reports,
        vec![
            Progress {
                edit_distance: 1,
                worked: 1,
                total: 6
            },
            Progress {
                edit_distance: 2,
                worked: 2,
                total: 6
            },
        ]
    );
}

#[test]
fn test_cancellation_returns_empty() {
    let right = chars("abcdef");
    let left = chars("azcdyf");

    let differences = RangeDifferencer::new()
        .with_progress(|progress| {
            if progress.edit_distance > 1 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .find_differences(&right, &left)
        .unwrap();

    assert!(differences.is_empty());
}

#[test]
fn test_cancellation_in_second_run_empties_merge() {
    let ancestor = chars("abc");
    let left = chars("xyz");
    let right = chars("abc");

    // ancestor and right are identical, so only the left run reports
    let mut calls = 0;
    let merged = RangeDifferencer::new()
        .with_progress(|_| {
            calls += 1;
            ControlFlow::Break(())
        })
        .find_differences3(Some(&ancestor), &left, &right)
        .unwrap();

    assert!(merged.is_empty());
    assert_eq!(calls, 1);
    assert!(!find_differences3(Some(&ancestor), &left, &right)
        .unwrap()
        .is_empty());
}

#[test]
fn test_progress_total_covers_both_runs() {
    let ancestor = chars("abcd");
    let left = chars("abXd");
    let right = chars("aYcd");
    let mut last = None;

    RangeDifferencer::new()
        .with_progress(|progress| {
            last = Some(progress);
            ControlFlow::Continue(())
        })
        .find_differences3(Some(&ancestor), &left, &right)
        .unwrap();

    let last = last.unwrap();
    assert_eq!(last.total, 16);
    assert_eq!(last.worked, 4);
    assert!(last.fraction() < 1.0);
}
