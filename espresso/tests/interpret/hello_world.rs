use super::*;

#[espresso_test("Hello world\nThe answer is 42\n")]
fn hello_world() -> String {
    examples::hello_world()
}

#[espresso_test("a b\n")]
fn two_literals() -> &'static str {
    "fun main\nprintf(\"a\", \"b\")\nend\n"
}

#[espresso_test("before  after\nalone\n")]
fn undeclared() -> String {
    examples::undeclared()
}

#[espresso_test("\nkeep  inner spaces\n")]
fn empty_and_spaced_literals() -> &'static str {
    "fun main\nprintf()\nprintf(\"keep  inner spaces  \")\nend\n"
}

// Only the end of the line is trimmed.
#[espresso_test(" 1\n")]
fn leading_empty_field_is_kept() -> &'static str {
    "let int n = 1\nfun main\nprintf(ghost, n)\nend\n"
}

#[espresso_test("x\n")]
fn literals_lose_all_enclosing_quotes() -> &'static str {
    "fun main\nprintf(\"\"\"x\"\"\")\nend\n"
}
