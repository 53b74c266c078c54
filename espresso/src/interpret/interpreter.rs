//! Visiting the program lines to execute them.
//!
//! This is where the program is effectively being executed. This module brings
//! all other submodules together.

use string_builder::Builder as StringBuilder;

use super::block::{Block, Collector};
use super::env::{Declaration, Env};
use crate::ast::{Line, Program, Stmt};
use crate::codes::{
    INVALID_INTEGER_WARNING, MALFORMED_DECLARATION_WARNING, UNCLOSED_FUNCTION_WARNING,
    UNKNOWN_KIND_WARNING,
};
use crate::context::Context;

/// Interpreter for our language.
pub(crate) struct Interpreter<'a, 'ctx> {
    /// Interpreter context, for configuration and diagnostics.
    pub ctx: &'a Context<'ctx>,
    /// The global variable table.
    pub env: Env,
    /// Standard output, as a growable string.
    pub stdout: StringBuilder,
}

impl<'a, 'ctx> Interpreter<'a, 'ctx> {
    /// Creates an interpreter with no variable declared.
    pub fn new(ctx: &'a Context<'ctx>) -> Self {
        Self {
            ctx,
            env: Env::new(),
            stdout: StringBuilder::default(),
        }
    }

    /// Runs the whole program, line after line.
    ///
    /// Top-level `let` lines declare variables. Every function block is
    /// executed as soon as its `end` line is met.
    pub fn run(&mut self, program: &Program<'ctx>) {
        use Collector::*;

        let mut state = Idle;
        for line in program {
            state = match (state, line.stmt) {
                (Idle, Stmt::Let { .. }) => {
                    self.declare(line);
                    Idle
                }
                (Idle, Stmt::Fun(_)) => InFunction(Block::open(*line)),
                (Idle, _) => Idle,
                (InFunction(block), Stmt::End) => {
                    self.call(&block);
                    Idle
                }
                (InFunction(mut block), stmt) => {
                    if stmt.is_let() {
                        self.ctx.warn(
                            MALFORMED_DECLARATION_WARNING,
                            "declarations are only allowed at top level",
                            line.span,
                        );
                    }
                    block.push(*line);
                    InFunction(block)
                }
            };
        }

        if let InFunction(block) = state {
            self.ctx.warn(
                UNCLOSED_FUNCTION_WARNING,
                format!("function `{}` is never closed by `end`, it will not run", block.name()),
                block.span(),
            );
        }
    }

    /// Executes the declaration on `line`.
    fn declare(&mut self, line: &Line<'ctx>) {
        let Some(decl) = line.stmt.as_decl() else {
            self.ctx.warn(
                MALFORMED_DECLARATION_WARNING,
                "expected a declaration of the form `let <kind> <name> = <value>`",
                line.span,
            );
            return;
        };
        match self.env.declare(decl.name, decl.kind, decl.value) {
            Declaration::Declared => {}
            Declaration::Defaulted(err) => self.ctx.warn(
                INVALID_INTEGER_WARNING,
                format!("`{}` is not a valid integer ({err})", decl.value),
                line.span,
            ),
            Declaration::UnknownKind => self.ctx.warn(
                UNKNOWN_KIND_WARNING,
                format!(
                    "unknown kind `{}`, expected `int` or `string`: `{}` is not declared",
                    decl.kind, decl.name
                ),
                line.span,
            ),
        }
    }

    /// Executes a function block.
    ///
    /// Each conditional scans the whole block, not only the lines that follow
    /// it.
    fn call(&mut self, block: &Block<'ctx>) {
        verbose_println!(self.ctx, "Calling function `{}`", block.name());
        for line in block.iter() {
            match line.stmt {
                Stmt::If(cond) => self.eval_if(cond, line, block.lines()),
                Stmt::Printf(_) => self.printf(line),
                _ => {}
            }
        }
    }

    /// Returns the final standard output of the execution of the program.
    pub fn stdout(self) -> anyhow::Result<String> {
        Ok(self.stdout.string()?)
    }
}
