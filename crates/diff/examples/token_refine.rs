use std::ops::ControlFlow;

use anyhow::Result;
use range_diff::{find_differences, LineComparator, RangeDifferencer, TokenComparator};

fn main() -> Result<()> {
    env_logger::init();

    let old = "function calculateTotal(items) {\n    let sum = 0;\n    for (let i = 0; i < items.length; i++) {\n        sum += items[i].price;\n    }\n    return sum;\n}";
    let new = "function calculateTotal(items) {\n    let sum = 0;\n    for (let i = 0; i < items.length; i++) {\n        sum += items[i].price * items[i].quantity;\n    }\n    return total;\n}";

    let right = LineComparator::new(old);
    let left = LineComparator::new(new);

    let mut differencer = RangeDifferencer::new().with_progress(|progress| {
        log::debug!("{:.0}% done", progress.fraction() * 100.0);
        ControlFlow::Continue(())
    });

    // Refine every changed line range into token differences
    for range in differencer.find_differences(&right, &left)? {
        println!("{}", range);

        let right_tokens =
            TokenComparator::new(&right.text_of(range.right_start(), range.right_length()));
        let left_tokens =
            TokenComparator::new(&left.text_of(range.left_start(), range.left_length()));

        for token_range in find_differences(&right_tokens, &left_tokens)? {
            println!(
                "  {:?} -> {:?}",
                right_tokens.text_of(token_range.right_start(), token_range.right_length()),
                left_tokens.text_of(token_range.left_start(), token_range.left_length())
            );
        }
    }

    Ok(())
}
