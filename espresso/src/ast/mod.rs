//! Source representation of the language.
//!
//! The language is line-oriented: a program is a list of lines, each of them
//! classified into a statement once and for all.

pub mod line;
pub mod program;
pub mod span;
pub mod stmt;

pub use line::Line;
pub use program::Program;
pub use span::Span;
pub use stmt::{Decl, Stmt};

use crate::context::Context;

/// Can be parsed from elements of `T`.
pub trait Parsable<'ctx, T> {
    /// Parses `tokens` into `Self`.
    fn parse(tokens: T) -> Self;
}

/// Reads the source held by the context, and returns the parsed program.
pub fn parse_file<'ctx>(ctx: &Context<'ctx>) -> Program<'ctx> {
    Program::new(ctx.config.input)
}
