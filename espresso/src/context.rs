//! Defining the interpreter context.

use codespan_reporting::files::SimpleFile;

use crate::ast::Span;
use crate::config::Config;
use crate::reporter::{Diagnostic, Reporter};

/// Prints to the standard error, without a newline, if in verbose mode.
///
/// Standard output is left untouched, since it belongs to the interpreted
/// program.
macro_rules! verbose_print {
    ($ctx:expr, $($arg:tt)*) => {
        if $ctx.config.verbose {
            eprint!($($arg)*);
        }
    };
}

/// Prints a line to the standard error if in verbose mode.
macro_rules! verbose_println {
    ($ctx:expr, $($arg:tt)*) => {
        if $ctx.config.verbose {
            eprintln!($($arg)*);
        }
    };
}

/// Interpreter context.
pub struct Context<'ctx> {
    /// Interpreter configuration.
    pub config: Config<'ctx>,
    /// Error reporter.
    pub reporter: Reporter<'ctx>,
}

impl<'ctx> Context<'ctx> {
    /// Creates a new interpreter context.
    pub fn new(config: Config<'ctx>) -> Self {
        let files = SimpleFile::new(config.filename.unwrap_or("unknown file"), config.input);
        Self {
            reporter: Reporter::new(files),
            config,
        }
    }

    /// Records a diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.reporter.emit(diagnostic);
    }

    /// Records a warning about a construct that was ignored at `span`.
    ///
    /// Does nothing unless warnings were requested in the config.
    pub fn warn(&self, code: &str, message: impl Into<String>, span: Span) {
        if self.config.warnings {
            self.emit(
                Diagnostic::warning()
                    .with_code(code)
                    .with_message(message)
                    .with_labels(vec![span.as_label()]),
            );
        }
    }

    /// Was there any errors so far?
    pub fn has_errors(&self) -> bool {
        self.reporter.has_errors()
    }
}
