//! Example with conditionals.

use super::*;

/// Conditional whose comparison holds.
pub fn greater() -> String {
    compare(5, 3)
}

/// Conditional whose comparison fails.
pub fn not_greater() -> String {
    compare(1, 3)
}

/// Compares `a` against `b`, with an `else` branch.
///
/// The `end` of the conditional also closes the function block, so the
/// trailing `end` is ignored at top level.
pub fn compare(a: i64, b: i64) -> String {
    unindent(&format!(
        r#"
        let int a = {a}
        let int b = {b}
        fun main
            if a > b:
                printf("yes")
            else
                printf("no")
            end
        end
        "#
    ))
}
