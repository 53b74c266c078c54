//! Interpreter.

use anyhow::{Context as AnyhowContext, Result};

use crate::ast::Program;
use crate::context::Context;

mod block;
mod cond;
mod env;
mod interpreter;
mod printf;
mod value;

pub use block::Block;
pub use cond::{Condition, Operator};
pub use env::{Declaration, Env};
use interpreter::Interpreter;
pub use value::{Kind, Value};

/// Runs the interpreter on a given program.
///
/// Returns the output of the program, as a `String`.
pub fn interpret<'ctx>(ctx: &Context<'ctx>, p: &Program<'ctx>) -> Result<String> {
    let mut i = Interpreter::new(ctx);
    i.run(p);
    i.stdout().context("program output is not valid UTF-8")
}
