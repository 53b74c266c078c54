use super::*;

#[espresso_test("in first\nin second 1\n")]
fn two_functions() -> String {
    examples::two_functions()
}

#[espresso_test("")]
fn unclosed() -> String {
    examples::unclosed()
}

#[espresso_test("outer\ninner\n")]
fn functions_do_not_nest() -> &'static str {
    "fun outer\nprintf(\"outer\")\nfun inner\nprintf(\"inner\")\nend\nprintf(\"ignored\")\nend\n"
}

#[espresso_test("ok\n")]
fn stray_end_at_top_level() -> &'static str {
    "end\nfun main\nprintf(\"ok\")\nend\nend\n"
}

#[espresso_test("ok\n")]
fn indentation_and_crlf() -> &'static str {
    "fun main\r\n    printf(\"ok\")   \r\n  end\r\n"
}
