//! Declarations and formatted output.

use super::*;

/// Prints literals and variables of both kinds.
pub fn hello_world() -> String {
    unindent(
        r#"
        let int answer = 42
        let string greeting = "Hello"

        fun main
            printf(greeting, "world")
            printf("The answer is", answer)
        end
        "#,
    )
}

/// Prints a variable that was never declared, between two literals.
pub fn undeclared() -> String {
    unindent(
        r#"
        fun main
            printf("before", ghost, "after")
            printf("alone", ghost)
        end
        "#,
    )
}
