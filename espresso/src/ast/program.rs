//! Reading programs, and defining their representation in the AST.

use std::ops::Index;

use super::Line;

/// A program: the ordered lines of a source text.
///
/// Read once, never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct Program<'ctx> {
    /// Lines of the program, in source order.
    pub lines: Vec<Line<'ctx>>,
}

impl<'ctx> Program<'ctx> {
    /// Splits `input` into lines and classifies them.
    pub fn new(input: &'ctx str) -> Self {
        let mut offset = 0;
        let lines = input
            .split_inclusive('\n')
            .map(|raw| {
                let line = Line::new(raw, offset);
                offset += raw.len();
                line
            })
            .collect();
        Self { lines }
    }

    /// Number of lines in the program.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Is the program empty?
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over the lines, in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Line<'ctx>> {
        self.lines.iter()
    }
}

impl<'ctx> From<&'ctx str> for Program<'ctx> {
    fn from(input: &'ctx str) -> Self {
        Program::new(input)
    }
}

impl<'ctx> Index<usize> for Program<'ctx> {
    type Output = Line<'ctx>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lines[index]
    }
}

impl<'a, 'ctx> IntoIterator for &'a Program<'ctx> {
    type IntoIter = std::slice::Iter<'a, Line<'ctx>>;
    type Item = &'a Line<'ctx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
