//! Defining spans, with are markers for sections of code.
//!
//! Really handy to relate some warning to the actual, original source code.

use std::fmt;
use std::ops::Range;

use codespan_reporting::diagnostic::Label;

/// A span of source code.
///
/// Note: Influenced by `codespan`.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct Span(codespan::Span);

impl Span {
    /// Gives an empty span at the start of a source.
    pub const fn initial() -> Self {
        Self(codespan::Span::initial())
    }

    /// Builds the span covering bytes `start..end` of the source.
    ///
    /// Offsets beyond `u32::MAX` are clamped.
    pub fn new(start: usize, end: usize) -> Self {
        let clamp = |offset: usize| u32::try_from(offset).unwrap_or(u32::MAX);
        Self(codespan::Span::new(clamp(start), clamp(end)))
    }

    /// Byte range covered by this span.
    pub fn range(&self) -> Range<usize> {
        self.0.start().to_usize()..self.0.end().to_usize()
    }

    /// Returns the `codespan_reporting` label for this span.
    pub fn as_label(&self) -> Label<()> {
        Label::primary((), self.range())
    }

    /// Returns the `codespan_reporting` (secondary) label for this span.
    pub fn as_secondary_label(&self) -> Label<()> {
        Label::secondary((), self.range())
    }
}

impl Default for Span {
    fn default() -> Self {
        Span::initial()
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let range = self.range();
        write!(f, "{}..{}", range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_the_given_bytes() {
        let span = Span::new(14, 22);
        assert_eq!(span.range(), 14..22);
        assert_eq!(format!("{span:?}"), "14..22");
        assert_eq!(Span::default().range(), 0..0);
    }
}
