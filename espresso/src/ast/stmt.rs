//! Parsing statements, and defining their representation in the AST.

use pest::iterators::Pair;
use pest::Parser;

use super::Parsable;
use crate::grammar::{Grammar, Rule};

/// A statement: the meaning of one trimmed source line.
///
/// Lines are classified once, when the program is read. Whether a statement
/// does anything depends on where it is met (top level, function body, or
/// conditional scan).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stmt<'ctx> {
    /// `let <kind> <name> = <value>`.
    Let {
        /// Text between `let ` and the first `=`.
        head: &'ctx str,
        /// Text between the first and the second `=`, if there is an `=`.
        value: Option<&'ctx str>,
    },
    /// `fun <name>`, opening a function block.
    Fun(&'ctx str),
    /// `end`, closing a function block.
    End,
    /// `else`.
    Else,
    /// `if <condition>`.
    If(&'ctx str),
    /// `printf(<args>`, with everything following the opening parenthesis.
    Printf(&'ctx str),
    /// Empty line.
    Blank,
    /// Any other line.
    Other,
}

/// A declaration, as read from a well-formed `let` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decl<'ctx> {
    /// Kind token (`int`, `string`, or anything else).
    pub kind: &'ctx str,
    /// Variable name.
    pub name: &'ctx str,
    /// Raw value text, trimmed.
    pub value: &'ctx str,
}

impl<'ctx> Stmt<'ctx> {
    /// Sees this statement as a declaration.
    ///
    /// # Errors
    /// Returns `None` if the statement is not a `let`, if it has no `=`, or
    /// if its head does not hold both a kind and a name.
    pub fn as_decl(&self) -> Option<Decl<'ctx>> {
        let Stmt::Let { head, value } = *self else {
            return None;
        };
        let mut tokens = head.split_whitespace();
        let kind = tokens.next()?;
        let name = tokens.next()?;
        Some(Decl {
            kind,
            name,
            value: value?.trim(),
        })
    }

    /// Is this the `let` statement?
    pub fn is_let(&self) -> bool {
        matches!(self, Stmt::Let { .. })
    }
}

impl<'ctx> Parsable<'ctx, Pair<'ctx, Rule>> for Stmt<'ctx> {
    fn parse(pair: Pair<'ctx, Rule>) -> Self {
        let rule = pair.as_rule();
        let mut inner = pair.into_inner();
        match rule {
            Rule::line => inner.next().map_or(Stmt::Other, Stmt::parse),
            Rule::let_stmt => {
                let head = inner.next().map_or("", |pair| pair.as_str());
                let value = inner.next().map(|pair| pair.as_str());
                Stmt::Let { head, value }
            }
            Rule::fun_stmt => Stmt::Fun(inner.next().map_or("", |pair| pair.as_str())),
            Rule::end_stmt => Stmt::End,
            Rule::else_stmt => Stmt::Else,
            Rule::if_stmt => Stmt::If(inner.next().map_or("", |pair| pair.as_str())),
            Rule::printf_stmt => Stmt::Printf(inner.next().map_or("", |pair| pair.as_str())),
            Rule::blank_line => Stmt::Blank,
            _ => Stmt::Other,
        }
    }
}

impl<'ctx> Parsable<'ctx, &'ctx str> for Stmt<'ctx> {
    /// Classifies an already trimmed line.
    fn parse(line: &'ctx str) -> Self {
        match Grammar::parse(Rule::line, line) {
            Ok(mut pairs) => pairs.next().map_or(Stmt::Other, Stmt::parse),
            Err(_) => Stmt::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> Stmt<'_> {
        Stmt::parse(line)
    }

    #[parses("let int x = 5" as let_stmt)]
    #[test]
    fn simple_let(stmt: Stmt) {
        assert_eq!(
            stmt,
            Stmt::Let {
                head: "int x ",
                value: Some(" 5")
            }
        );
        assert_eq!(
            stmt.as_decl(),
            Some(Decl {
                kind: "int",
                name: "x",
                value: "5"
            })
        );
    }

    #[parses("let string s = \"a=b\"" as let_stmt)]
    #[test]
    fn let_value_stops_at_second_equal(stmt: Stmt) {
        assert_eq!(stmt.as_decl().map(|decl| decl.value), Some("\"a"));
    }

    #[parses("if a > b:" as if_stmt)]
    #[test]
    fn simple_if(stmt: Stmt) {
        assert_eq!(stmt, Stmt::If("a > b:"));
    }

    #[parses("printf(\"x\", y)" as printf_stmt)]
    #[test]
    fn simple_printf(stmt: Stmt) {
        assert_eq!(stmt, Stmt::Printf("\"x\", y)"));
    }

    #[test]
    fn keywords_need_their_exact_form() {
        assert_eq!(classify("end"), Stmt::End);
        assert_eq!(classify("else"), Stmt::Else);
        assert_eq!(classify("endx"), Stmt::Other);
        assert_eq!(classify("elsewhere"), Stmt::Other);
        assert_eq!(classify("fun"), Stmt::Other);
        assert_eq!(classify("fun main"), Stmt::Fun("main"));
        assert_eq!(classify("ifx > y:"), Stmt::Other);
        assert_eq!(classify("printf \"x\""), Stmt::Other);
        assert_eq!(classify(""), Stmt::Blank);
        assert_eq!(classify("# a comment"), Stmt::Other);
    }

    #[test]
    fn malformed_declarations() {
        assert_eq!(
            classify("let int x"),
            Stmt::Let {
                head: "int x",
                value: None
            }
        );
        assert_eq!(classify("let int x").as_decl(), None);
        assert_eq!(classify("let x = 5").as_decl(), None);
        assert_eq!(classify("let int x = ").as_decl().map(|decl| decl.value), Some(""));
        assert!(classify("let float f = 1.5").is_let());
        assert_eq!(
            classify("let float f = 1.5").as_decl().map(|decl| decl.kind),
            Some("float")
        );
    }

    #[test]
    fn extra_head_tokens_are_ignored() {
        let decl = classify("let int x y = 3").as_decl();
        assert_eq!(decl.map(|decl| decl.name), Some("x"));
    }
}
