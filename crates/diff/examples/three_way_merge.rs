use anyhow::Result;
use range_diff::{find_ranges3, LineComparator, RangeDifferenceKind};

fn main() -> Result<()> {
    env_logger::init();

    let ancestor = "[server]\nhost = localhost\nport = 8080\n\n[log]\nlevel = info\n";
    let left = "[server]\nhost = 0.0.0.0\nport = 8080\n\n[log]\nlevel = debug\n";
    let right = "[server]\nhost = 127.0.0.1\nport = 8080\n\n[log]\nlevel = debug\nfile = out.log\n";

    let ancestor = LineComparator::new(ancestor);
    let left = LineComparator::new(left);
    let right = LineComparator::new(right);

    // Print the merged text, marking conflicts
    let mut conflicts = 0;
    for range in find_ranges3(Some(&ancestor), &left, &right)? {
        match range.kind() {
            RangeDifferenceKind::NoChange | RangeDifferenceKind::LeftOnly => {
                print!("{}", left.text_of(range.left_start(), range.left_length()));
            }
            RangeDifferenceKind::RightOnly | RangeDifferenceKind::Ancestor => {
                print!("{}", right.text_of(range.right_start(), range.right_length()));
            }
            _ => {
                conflicts += 1;
                println!("<<<<<<< left");
                print!("{}", left.text_of(range.left_start(), range.left_length()));
                println!("||||||| ancestor");
                print!(
                    "{}",
                    ancestor.text_of(range.ancestor_start(), range.ancestor_length())
                );
                println!("=======");
                print!("{}", right.text_of(range.right_start(), range.right_length()));
                println!(">>>>>>> right");
            }
        }
    }

    println!();
    println!("{} conflict(s)", conflicts);

    Ok(())
}
