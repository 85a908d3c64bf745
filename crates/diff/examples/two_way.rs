use anyhow::Result;
use range_diff::{find_ranges, LineComparator};

fn main() -> Result<()> {
    env_logger::init();

    // Two versions of a small source file
    let old = r#"fn main() {
    println!("Hello, world!");
}
"#;

    let new = r#"fn main() {
    // Add a greeting with name
    let name = "Rust";
    println!("Hello, {}!", name);
}
"#;

    let right = LineComparator::new(old);
    let left = LineComparator::new(new);

    println!("Line ranges:");
    for range in find_ranges(&right, &left)? {
        println!("  {}", range);
        if range.has_changes() {
            for line in range.right_range() {
                println!("    \x1b[31m- {}\x1b[0m", right.line_text(line));
            }
            for line in range.left_range() {
                println!("    \x1b[32m+ {}\x1b[0m", left.line_text(line));
            }
        } else {
            for line in range.right_range() {
                println!("    \x1b[37m  {}\x1b[0m", right.line_text(line));
            }
        }
    }

    Ok(())
}
