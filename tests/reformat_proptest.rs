//! Property-based tests for the reformatting invariants
//!
//! Two properties hold for arbitrary inputs: a failing embedded formatter
//! never changes a value, and a whitespace-normalizing one never changes
//! token content.

use alpine_fmt::reformat;
use alpine_fmt::testing::{FailingFormatter, StatementFormatter};
use alpine_fmt::FormatOptions;
use proptest::prelude::*;

fn without_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn block_on<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime to build")
        .block_on(future)
}

proptest! {
    #[test]
    fn failing_formatter_leaves_any_input_unchanged(
        code in ".*",
        is_expression in any::<bool>(),
        base_indent in 0usize..12,
    ) {
        let options = FormatOptions::default();
        let result = block_on(reformat(
            &code,
            is_expression,
            &options,
            "x-data",
            base_indent,
            &FailingFormatter,
        ));
        prop_assert_eq!(result, code);
    }

    // Token equivalence over expression code that is not itself fully
    // parenthesized and carries no terminator of its own; the unwrap only
    // guarantees round-trips for that shape.
    #[test]
    fn tokens_survive_the_wrap_and_unwrap(
        code in "[A-Za-z0-9_ .!&|<>=+*-]{1,40}",
    ) {
        let options = FormatOptions::default();
        let result = block_on(reformat(
            &code,
            true,
            &options,
            ":value",
            0,
            &StatementFormatter,
        ));
        prop_assert_eq!(without_whitespace(&result), without_whitespace(&code));
    }

    #[test]
    fn action_tokens_survive_formatting(
        code in "[A-Za-z0-9_ .!&|<>=+*()-]{1,40}",
    ) {
        let options = FormatOptions::default();
        let result = block_on(reformat(
            &code,
            false,
            &options,
            "@click",
            0,
            &StatementFormatter,
        ));
        prop_assert_eq!(without_whitespace(&result), without_whitespace(&code));
    }
}
