//! Defining the interpreter config options.

/// Interpreter configuration.
#[derive(Default, Clone, Copy, Debug)]
pub struct Config<'ctx> {
    /// Interpreter input string.
    pub input: &'ctx str,
    /// Interpreter input filename.
    pub filename: Option<&'ctx str>,
    /// Do we report the constructs that were silently ignored.
    pub warnings: bool,
    /// Verbose mode.
    pub verbose: bool,
}
