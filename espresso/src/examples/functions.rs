//! Example with several functions.

use super::*;

/// Two functions, run in source order, with a redeclaration between them.
pub fn two_functions() -> String {
    unindent(
        r#"
        let int x = 1
        let string who = "first"
        fun first
            printf("in", who)
        end
        let string who = "second"
        fun second
            printf("in", who, x)
        end
        "#,
    )
}

/// A function that is never closed.
pub fn unclosed() -> String {
    unindent(
        r#"
        let int x = 1
        fun main
            printf(x)
        "#,
    )
}
