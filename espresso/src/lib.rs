//! Toy EspressoScript interpreter library.
//!
//! A program is a list of lines: top-level `let` declarations and `fun` ...
//! `end` function blocks, each function being executed as soon as it is
//! closed. Function bodies contain `if` conditionals and `printf` calls.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;
use std::time::Instant;

// Defined first so that the macros can be used in the other modules.
#[macro_use]
pub mod context;

pub mod ast;
pub mod codes;
pub mod config;
pub mod examples;
pub mod grammar;
mod interpret;
pub mod reporter;

#[cfg(test)]
#[macro_use]
extern crate espresso_tests_proc;

#[macro_use]
extern crate lazy_static;

extern crate pest;
#[macro_use]
extern crate pest_derive;

use anyhow::{Context as AnyhowContext, Result};
pub use context::Context;
pub use interpret::{Block, Condition, Declaration, Env, Kind, Operator, Value};

/// Reads the source file at `path`.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("could not open source file `{}`", path.display()))
}

/// Executes the program held by the context, returning its standard output.
///
/// Diagnostics, if any were requested, are left in the context reporter.
pub fn execute(ctx: &Context<'_>) -> Result<String> {
    let p = steps::parse(ctx);
    steps::interpret(ctx, &p)
}

mod steps {
    //! Defining the function for all the steps of the interpreter.

    use std::io::Write;

    use super::*;
    use crate::ast::{parse_file, Program};

    /// Reads and classifies all the lines of the program.
    pub fn parse<'ctx>(ctx: &Context<'ctx>) -> Program<'ctx> {
        verbose_print!(ctx, "Parsing...");
        let _ = std::io::stderr().flush();
        let start = Instant::now();
        let program = parse_file(ctx);
        verbose_println!(
            ctx,
            "\rParsed {} lines [{:?}]",
            program.len(),
            start.elapsed()
        );
        program
    }

    /// Interprets a given program.
    ///
    /// Under the hood, it will allocate a new `Interpreter` and launch it on
    /// your program. It returns the standard output of your program.
    pub fn interpret<'ctx>(ctx: &Context<'ctx>, p: &Program<'ctx>) -> Result<String> {
        verbose_println!(ctx, "Interpreting...");
        let start = Instant::now();
        let res = crate::interpret::interpret(ctx, p)?;
        verbose_println!(
            ctx,
            "Interpreted [{:?}], {} diagnostic(s)",
            start.elapsed(),
            ctx.reporter.count()
        );
        Ok(res)
    }
}
