//! Output formatter: renders `printf` argument lists.

use itertools::Itertools;

use super::interpreter::Interpreter;
use crate::ast::{Line, Stmt};
use crate::codes::UNKNOWN_VAR_WARNING;

/// Inner text of a quoted literal argument, if `arg` is one.
///
/// All the enclosing quotes go, not only the outer pair.
fn literal(arg: &str) -> Option<&str> {
    if arg.starts_with('"') && arg.ends_with('"') {
        Some(arg.trim_matches('"'))
    } else {
        None
    }
}

impl<'ctx> Interpreter<'_, 'ctx> {
    /// Renders `line` as a `printf` call.
    ///
    /// The `printf(` prefix and the closing parenthesis are removed when
    /// present, so any line can be rendered. Each comma-separated argument
    /// yields a literal, the text of a variable, or nothing.
    pub(crate) fn render(&self, line: &Line<'ctx>) -> String {
        let args = line.text.strip_prefix("printf(").unwrap_or(line.text);
        let args = args.strip_suffix(')').unwrap_or(args);
        let fields = args
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(i, arg)| self.render_arg(i, arg, line))
            .join(" ");
        fields.trim_end().to_string()
    }

    /// Renders the `i`th argument `arg` of `line`.
    fn render_arg(&self, i: usize, arg: &str, line: &Line<'ctx>) -> String {
        if let Some(text) = literal(arg) {
            return text.to_string();
        }
        match self.env.get_var(arg) {
            Some(value) => value.to_string(),
            None => {
                if !arg.is_empty() && matches!(line.stmt, Stmt::Printf(_)) {
                    self.ctx.warn(
                        UNKNOWN_VAR_WARNING,
                        format!("unknown variable `{arg}` in argument {}", i + 1),
                        line.span,
                    );
                }
                String::new()
            }
        }
    }

    /// Renders `line` and writes it as one line of output.
    pub(crate) fn printf(&mut self, line: &Line<'ctx>) {
        let rendered = self.render(line);
        self.stdout.append(rendered);
        self.stdout.append("\n");
    }
}
