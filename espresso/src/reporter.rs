//! User-facing error reporting facility.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use codespan_reporting::diagnostic::Severity;
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use crossbeam_queue::SegQueue;

/// An interpreter diagnostic.
pub type Diagnostic = codespan_reporting::diagnostic::Diagnostic<()>;

/// Source file, as seen by the diagnostics.
pub type SourceFile<'ctx> = SimpleFile<&'ctx str, &'ctx str>;

lazy_static! {
    /// Terminal configuration.
    static ref TERM_CONFIG: term::Config = term::Config::default();
    /// Standard stream handle.
    static ref STD_STREAM: StandardStream = StandardStream::stderr(ColorChoice::Auto);
}

/// Dummy file descriptor for errors that do not relate to any source.
fn internal_file() -> SourceFile<'static> {
    SimpleFile::new("internal error", "")
}

/// Collection of interpreter diagnostics, ready to be displayed.
pub struct Diagnostics<'ctx> {
    /// Reference into the original file/source code.
    ///
    /// Needed to display the labels of the diagnostics.
    files: SourceFile<'ctx>,
    /// The actual list of diagnostics.
    diagnostics: SegQueue<Diagnostic>,
    /// True iff `self.diagnostics` contains at least one error diagnostic.
    is_error: AtomicBool,
}

impl From<anyhow::Error> for Diagnostics<'_> {
    fn from(err: anyhow::Error) -> Self {
        let diagnostics = SegQueue::default();
        let mut chain = err.chain();
        if let Some(top_error) = chain.next() {
            let caused_by: Vec<_> = chain.map(|x| format!("Caused by: {x}")).collect();
            diagnostics.push(
                Diagnostic::error()
                    .with_message(top_error.to_string())
                    .with_notes(caused_by),
            );
        } else {
            diagnostics.push(Diagnostic::error().with_message("internal interpreter error"));
        }
        Self {
            files: internal_file(),
            diagnostics,
            is_error: AtomicBool::new(true),
        }
    }
}

impl From<std::io::Error> for Diagnostics<'_> {
    fn from(err: std::io::Error) -> Self {
        let diagnostics = SegQueue::default();
        diagnostics.push(
            Diagnostic::error()
                .with_message("I/O error")
                .with_notes(vec![err.to_string()]),
        );
        Self {
            files: internal_file(),
            diagnostics,
            is_error: AtomicBool::new(true),
        }
    }
}

impl<'ctx> Diagnostics<'ctx> {
    /// Displays all the diagnostics with nice colors and formatting to the
    /// standard error.
    ///
    /// # Warning
    /// WILL FLUSH/TRASH the diagnostics that are displayed.
    pub fn display(&self) -> anyhow::Result<()> {
        let mut writer = STD_STREAM.lock();
        while let Some(diagnostic) = self.diagnostics.pop() {
            term::emit(&mut writer, &TERM_CONFIG, &self.files, &diagnostic)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Pushes a new diagnostic to the list.
    pub fn push(&self, diagnostic: Diagnostic) {
        self.is_error.fetch_or(
            matches!(diagnostic.severity, Severity::Error | Severity::Bug),
            Ordering::Relaxed,
        );
        self.diagnostics.push(diagnostic);
    }

    /// Number of diagnostics waiting to be displayed.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Is there no diagnostic waiting to be displayed?
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Flushes all diagnostics and returns them, leaving self's own diagnostic
    /// list empty and ready to receive messages.
    fn flush(&mut self) -> Diagnostics<'ctx> {
        Diagnostics {
            files: self.files.clone(),
            diagnostics: std::mem::take(&mut self.diagnostics),
            // Revert error flag and get it back
            is_error: AtomicBool::new(self.is_error.swap(false, Ordering::SeqCst)),
        }
    }
}

impl IntoIterator for Diagnostics<'_> {
    type IntoIter = ::std::vec::IntoIter<Diagnostic>;
    type Item = Diagnostic;

    fn into_iter(self) -> Self::IntoIter {
        let mut res = vec![];
        while let Some(diagnostic) = self.diagnostics.pop() {
            res.push(diagnostic);
        }
        res.into_iter()
    }
}

/// Interpreter reporter.
///
/// Collects and reports any diagnostics emitted while running a program.
pub struct Reporter<'ctx> {
    /// The actual diagnostics.
    diagnostics: Diagnostics<'ctx>,
}

impl<'ctx> Reporter<'ctx> {
    /// Create a new `Reporter` for the source `files`.
    pub fn new(files: SourceFile<'ctx>) -> Self {
        Self {
            diagnostics: Diagnostics {
                files,
                diagnostics: SegQueue::default(),
                is_error: AtomicBool::new(false),
            },
        }
    }

    /// Records a new diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Flushes all diagnostics and returns them.
    pub fn flush(&mut self) -> Diagnostics<'ctx> {
        self.diagnostics.flush()
    }

    /// Displays all the diagnostics to the `stderr` output.
    pub fn display(&self) -> anyhow::Result<()> {
        self.diagnostics.display()
    }

    /// Number of diagnostics recorded and not yet displayed.
    pub fn count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Was there any errors so far?
    pub fn has_errors(&self) -> bool {
        self.diagnostics.is_error.load(Ordering::SeqCst)
    }
}
