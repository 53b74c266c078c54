//! Conditional evaluator.
//!
//! A conditional compares two integer variables. Depending on the result, the
//! lines of the enclosing function are scanned from its very first line and
//! rendered:
//! * when the condition holds, up to the first `else` (or `end`);
//! * when it does not, up to `end`, jumping over `else` lines.

use std::str::FromStr;

use super::interpreter::Interpreter;
use super::value::Value;
use crate::ast::{Line, Stmt};
use crate::codes::{
    MALFORMED_CONDITION_WARNING, STRAY_LINE_NOTE, TYPE_MISMATCH_WARNING, UNKNOWN_VAR_WARNING,
    UNSUPPORTED_OPERATOR_WARNING,
};
use crate::reporter::Diagnostic;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `>`, strictly greater than.
    Gt,
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            ">" => Ok(Operator::Gt),
            _ => Err(()),
        }
    }
}

impl Operator {
    /// Compares `lhs` and `rhs`.
    pub fn apply(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Operator::Gt => lhs > rhs,
        }
    }
}

/// A parsed condition: `<left> <op> <right>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition<'ctx> {
    /// Left operand name.
    pub left: &'ctx str,
    /// Operator token.
    pub op: &'ctx str,
    /// Right operand name.
    pub right: &'ctx str,
}

impl<'ctx> Condition<'ctx> {
    /// Parses the text following `if `.
    ///
    /// The last character (conventionally `:`) is dropped whatever it is; the
    /// rest must split into exactly three whitespace-separated tokens.
    pub fn parse(text: &'ctx str) -> Option<Self> {
        let mut chars = text.chars();
        chars.next_back();
        let mut tokens = chars.as_str().split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(left), Some(op), Some(right), None) => Some(Self { left, op, right }),
            _ => None,
        }
    }
}

impl<'ctx> Interpreter<'_, 'ctx> {
    /// Integer value of operand `name`, reporting why there is none.
    fn operand(&self, name: &str, line: &Line<'ctx>) -> Option<i64> {
        match self.env.get_var(name) {
            Some(Value::IntV(i)) => Some(*i),
            Some(value) => {
                self.ctx.warn(
                    TYPE_MISMATCH_WARNING,
                    format!("`{name}` is a {}, only integers can be compared", value.kind()),
                    line.span,
                );
                None
            }
            None => {
                self.ctx.warn(
                    UNKNOWN_VAR_WARNING,
                    format!("unknown variable `{name}` in condition"),
                    line.span,
                );
                None
            }
        }
    }

    /// Evaluates the condition `text` of `line`.
    ///
    /// Returns `None` when the condition cannot be evaluated.
    pub(crate) fn check(&self, text: &'ctx str, line: &Line<'ctx>) -> Option<bool> {
        let Some(cond) = Condition::parse(text) else {
            self.ctx.warn(
                MALFORMED_CONDITION_WARNING,
                "expected a condition of the form `if <var> <op> <var>:`",
                line.span,
            );
            return None;
        };
        let lhs = self.operand(cond.left, line);
        let rhs = self.operand(cond.right, line);
        let (lhs, rhs) = (lhs?, rhs?);
        let Ok(op) = cond.op.parse::<Operator>() else {
            self.ctx.warn(
                UNSUPPORTED_OPERATOR_WARNING,
                format!("unsupported operator `{}`, only `>` is supported", cond.op),
                line.span,
            );
            return None;
        };
        Some(op.apply(lhs, rhs))
    }

    /// Evaluates the conditional on `line`, scanning `window` to render the
    /// branch lines.
    pub(crate) fn eval_if(&mut self, text: &'ctx str, line: &Line<'ctx>, window: &[Line<'ctx>]) {
        let Some(taken) = self.check(text, line) else {
            return;
        };
        verbose_println!(self.ctx, "Condition `{}` is {taken}", line.text);
        for inner in window {
            match inner.stmt {
                Stmt::Else if taken => break,
                Stmt::End => return,
                Stmt::Else | Stmt::Blank => continue,
                Stmt::Printf(_) => self.printf(inner),
                _ => {
                    self.note_stray(inner, line);
                    self.printf(inner);
                }
            }
        }
    }

    /// Notes that `inner`, not a `printf`, is rendered because of the
    /// conditional on `line`.
    fn note_stray(&self, inner: &Line<'ctx>, line: &Line<'ctx>) {
        if self.ctx.config.warnings {
            self.ctx.emit(
                Diagnostic::note()
                    .with_code(STRAY_LINE_NOTE)
                    .with_message("line rendered as output by a conditional")
                    .with_labels(vec![
                        inner.span.as_label(),
                        line.span
                            .as_secondary_label()
                            .with_message("conditional scanning the whole function"),
                    ]),
            );
        }
    }
}
