use super::*;

#[espresso_test("-12\n")]
fn negative_integer() -> &'static str {
    "let int n = -12\nfun main\nprintf(n)\nend\n"
}

#[espresso_test("0\n")]
fn invalid_integer_is_zero() -> &'static str {
    "let int n = twelve\nfun main\nprintf(n)\nend\n"
}

#[espresso_test("9223372036854775807\n")]
fn huge_integer_saturates() -> &'static str {
    "let int n = 123456789012345678901234567890\nfun main\nprintf(n)\nend\n"
}

// The value stops at the second `=`, leaving an unbalanced quote.
#[espresso_test("\"a\n")]
fn equal_sign_cuts_strings() -> &'static str {
    "let string s = \"a = b\"\nfun main\nprintf(s)\nend\n"
}

#[espresso_test("\"quoted\"\n")]
fn one_pair_of_quotes_only() -> &'static str {
    "let string s = \"\"quoted\"\"\nfun main\nprintf(s)\nend\n"
}

#[espresso_test("\n")]
fn unknown_kind_declares_nothing() -> &'static str {
    "let float f = 1.5\nfun main\nprintf(f)\nend\n"
}

#[espresso_test("text\n")]
fn redeclaration_changes_kind() -> &'static str {
    "let int v = 1\nlet string v = \"text\"\nfun main\nprintf(v)\nend\n"
}

#[espresso_test("1\n")]
fn declarations_in_functions_are_ignored() -> &'static str {
    "let int v = 1\nfun main\nlet int v = 2\nprintf(v)\nend\n"
}

#[espresso_test("5\n")]
fn malformed_declarations_are_skipped() -> &'static str {
    "let int v\nlet v = 3\nlet int v = 5\nfun main\nprintf(v)\nend\n"
}
