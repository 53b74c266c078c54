use super::*;

// The scan window is the whole function, `fun` and `if` lines included: both
// render as empty lines. Then the function body goes on, printing its
// `printf` lines again.
#[espresso_test("\n\nyes\nyes\nno\n")]
fn greater() -> String {
    examples::greater()
}

// When the comparison fails, lines on both sides of `else` are rendered.
#[espresso_test("\n\nyes\nno\nyes\nno\n")]
fn not_greater() -> String {
    examples::not_greater()
}

#[espresso_test("\n\nyes\nyes\n")]
fn without_else() -> &'static str {
    "let int a = 2\nlet int b = 1\nfun main\nif a > b:\nprintf(\"yes\")\nend\n"
}

#[espresso_test("before\n\nbefore\n\nafter\nafter\n")]
fn printf_before_the_if_is_repeated() -> &'static str {
    "let int a = 0\nlet int b = 1\nfun main\nprintf(\"before\")\nif a > b:\nelse\nprintf(\"after\")\nend\n"
}

#[espresso_test("yes\n")]
fn text_operands_leave_the_conditional_unevaluated() -> &'static str {
    "let int a = 2\nlet string b = \"1\"\nfun main\nif a > b:\nprintf(\"yes\")\nend\n"
}

#[espresso_test("yes\n")]
fn unsupported_operator() -> &'static str {
    "let int a = 2\nlet int b = 1\nfun main\nif a < b:\nprintf(\"yes\")\nend\n"
}

#[espresso_test("yes\n")]
fn undeclared_operand() -> &'static str {
    "let int a = 2\nfun main\nif a > ghost:\nprintf(\"yes\")\nend\n"
}

#[espresso_test("yes\n")]
fn condition_needs_three_tokens() -> &'static str {
    "let int a = 2\nlet int b = 1\nfun main\nif a>b:\nprintf(\"yes\")\nend\n"
}

#[espresso_test("\n\n2\n")]
fn variables_render_in_the_window() -> &'static str {
    "let int a = 2\nlet int b = 1\nfun main\nif a > b:\na\nend\n"
}
