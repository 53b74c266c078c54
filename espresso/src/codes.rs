//! Defining the diagnostics warning codes.

/// Declaration with an unknown kind token.
pub const UNKNOWN_KIND_WARNING: &str = "W0001";
/// Declaration that cannot be split into kind, name and value.
pub const MALFORMED_DECLARATION_WARNING: &str = "W0002";
/// Integer literal that does not parse.
pub const INVALID_INTEGER_WARNING: &str = "W0003";
/// Condition that is not made of exactly three tokens.
pub const MALFORMED_CONDITION_WARNING: &str = "W0004";
/// Unknown variable name.
pub const UNKNOWN_VAR_WARNING: &str = "W0005";
/// Comparison operand that is not an integer.
pub const TYPE_MISMATCH_WARNING: &str = "W0006";
/// Comparison operator other than `>`.
pub const UNSUPPORTED_OPERATOR_WARNING: &str = "W0007";
/// Function block that is never closed.
pub const UNCLOSED_FUNCTION_WARNING: &str = "W0008";
/// Non-`printf` line rendered while scanning a conditional.
pub const STRAY_LINE_NOTE: &str = "W0009";
