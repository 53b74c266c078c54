//! Source lines, as read by the interpreter.

use super::{Parsable, Span, Stmt};

/// One line of source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'ctx> {
    /// Line content, with surrounding whitespace trimmed.
    pub text: &'ctx str,
    /// Location of the trimmed content in the source.
    pub span: Span,
    /// Classification of the line.
    pub stmt: Stmt<'ctx>,
}

impl<'ctx> Line<'ctx> {
    /// Reads the raw line `raw`, starting at byte `offset` in the source.
    pub fn new(raw: &'ctx str, offset: usize) -> Self {
        let text = raw.trim();
        let start = offset + (raw.len() - raw.trim_start().len());
        Self {
            text,
            span: Span::new(start, start + text.len()),
            stmt: Stmt::parse(text),
        }
    }

    /// Does this line carry nothing?
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_locates() {
        let line = Line::new("   printf(x)  \r\n", 10);
        assert_eq!(line.text, "printf(x)");
        assert_eq!(line.span.range(), 13..22);
        assert_eq!(line.stmt, Stmt::Printf("x)"));
    }

    #[test]
    fn whitespace_only_is_blank() {
        let line = Line::new(" \t ", 0);
        assert!(line.is_blank());
        assert_eq!(line.stmt, Stmt::Blank);
    }
}
