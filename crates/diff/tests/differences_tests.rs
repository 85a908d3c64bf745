use pretty_assertions::assert_eq;
use range_diff::{find_differences, RangeComparator, RangeDifference, RangeDifferenceKind};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn change(right_start: usize, right_length: usize, left_start: usize, left_length: usize) -> RangeDifference {
    RangeDifference::two_way(
        RangeDifferenceKind::Change,
        right_start,
        right_length,
        left_start,
        left_length,
    )
}

#[test]
fn test_identical_sequences() {
    let text = chars("identical");
    assert!(find_differences(&text, &text).unwrap().is_empty());
}

#[test]
fn test_empty_sequences() {
    let empty = chars("");
    assert!(find_differences(&empty, &empty).unwrap().is_empty());
}

#[test]
fn test_insert_into_empty() {
    let right = chars("");
    let left = chars("abc");

    assert_eq!(find_differences(&right, &left).unwrap(), vec![change(0, 0, 0, 3)]);
}

#[test]
fn test_delete_everything() {
    let right = chars("abc");
    let left = chars("");

    assert_eq!(find_differences(&right, &left).unwrap(), vec![change(0, 3, 0, 0)]);
}

#[test]
fn test_replacement() {
    let right = chars("abc");
    let left = chars("axc");

    assert_eq!(find_differences(&right, &left).unwrap(), vec![change(1, 1, 1, 1)]);
}

#[test]
fn test_insertion_in_the_middle() {
    let right = chars("abc");
    let left = chars("abxc");

    // zero-length right range: insert before element 2
    assert_eq!(find_differences(&right, &left).unwrap(), vec![change(2, 0, 2, 1)]);
}

#[test]
fn test_deletion_at_the_end() {
    let right = chars("abc");
    let left = chars("ab");

    assert_eq!(find_differences(&right, &left).unwrap(), vec![change(2, 1, 2, 0)]);
}

#[test]
fn test_multiple_replacements() {
    let right = chars("abcde");
    let left = chars("axcye");

    assert_eq!(
        find_differences(&right, &left).unwrap(),
        vec![change(1, 1, 1, 1), change(3, 1, 3, 1)]
    );
}

#[test]
fn test_swapped_arguments_transpose_unique_alignment() {
    let a = chars("abcde");
    let b = chars("axcye");

    let forward = find_differences(&a, &b).unwrap();
    let backward = find_differences(&b, &a).unwrap();

    let transposed: Vec<_> = backward
        .iter()
        .map(|r| change(r.left_start(), r.left_length(), r.right_start(), r.right_length()))
        .collect();
    assert_eq!(forward, transposed);
}

#[test]
fn test_works_on_slices() {
    let right = ["fn main() {", "    println!(\"hi\");", "}"];
    let left = ["fn main() {", "    let x = 1;", "    println!(\"hi\");", "}"];

    let differences = find_differences(&right[..], &left[..]).unwrap();
    assert_eq!(differences, vec![change(1, 0, 1, 1)]);
    assert_eq!(&left[differences[0].left_range()], &["    let x = 1;"]);
}

#[test]
fn test_ranges_are_ordered() {
    let right = chars("the quick brown fox jumps over the lazy dog");
    let left = chars("a quick brown cat jumped over lazy dogs");

    let differences = find_differences(&right, &left).unwrap();
    assert!(!differences.is_empty());
    for pair in differences.windows(2) {
        assert!(pair[0].right_end() <= pair[1].right_start());
        assert!(pair[0].left_end() <= pair[1].left_start());
    }
}

struct GivingUp(Vec<char>);

impl RangeComparator for GivingUp {
    fn range_count(&self) -> usize {
        self.0.len()
    }

    fn ranges_equal(&self, this_index: usize, other: &Self, other_index: usize) -> bool {
        self.0[this_index] == other.0[other_index]
    }

    fn should_abort(&self, edit_distance: usize, _max_edit_distance: usize, _other: &Self) -> bool {
        edit_distance > 1
    }
}

#[test]
fn test_abort_reports_no_differences() {
    let right = GivingUp(chars("abcdef"));
    let left = GivingUp(chars("uvwxyz"));

    assert!(find_differences(&right, &left).unwrap().is_empty());
}

#[test]
fn test_abort_is_not_consulted_for_equal_sequences() {
    let right = GivingUp(chars("same"));
    let left = GivingUp(chars("same"));

    assert!(find_differences(&right, &left).unwrap().is_empty());
}

#[test]
fn test_abort_after_a_single_step_is_too_late() {
    // edit distance 1 finishes before the hint fires
    let right = GivingUp(chars("abc"));
    let left = GivingUp(chars("ab"));

    assert_eq!(find_differences(&right, &left).unwrap(), vec![change(2, 1, 2, 0)]);
}
