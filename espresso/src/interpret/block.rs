//! Function blocks, as collected by the top-level driver.

use std::slice::Iter;

use crate::ast::{Line, Span, Stmt};

/// The lines of a function, from its `fun` line (included) to its `end` line
/// (excluded).
#[derive(Debug, Clone)]
pub struct Block<'ctx> {
    /// Collected lines, in source order.
    lines: Vec<Line<'ctx>>,
}

impl<'ctx> Block<'ctx> {
    /// Opens a block on its `fun` line.
    pub fn open(fun_line: Line<'ctx>) -> Self {
        Self {
            lines: vec![fun_line],
        }
    }

    /// Appends a body line.
    pub fn push(&mut self, line: Line<'ctx>) {
        self.lines.push(line);
    }

    /// Name given on the `fun` line.
    pub fn name(&self) -> &'ctx str {
        match self.lines.first().map(|line| line.stmt) {
            Some(Stmt::Fun(name)) => name,
            _ => "",
        }
    }

    /// Location of the `fun` line.
    pub fn span(&self) -> Span {
        self.lines.first().map(|line| line.span).unwrap_or_default()
    }

    /// All the lines of the block, `fun` line included.
    pub fn lines(&self) -> &[Line<'ctx>] {
        &self.lines
    }

    /// Iterates over the lines of the block.
    pub fn iter(&self) -> Iter<'_, Line<'ctx>> {
        self.lines.iter()
    }
}

/// State of the top-level driver.
#[derive(Debug)]
pub enum Collector<'ctx> {
    /// Outside of any function.
    Idle,
    /// Collecting the lines of a function.
    InFunction(Block<'ctx>),
}
