//! Defining the environment in which the program executes.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::num::ParseIntError;

use super::value::{Kind, Value};

/// Outcome of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// The variable now holds the declared value.
    Declared,
    /// The integer text did not parse: the variable holds a default value.
    Defaulted(ParseIntError),
    /// The kind token is unknown: nothing was declared.
    UnknownKind,
}

/// Execution environment: the global variable table.
///
/// Variables live until the environment is dropped. Declaring a variable
/// under an existing name overwrites it, possibly changing its kind.
#[derive(Default)]
pub struct Env {
    /// Map between variable names and their values.
    var_env: HashMap<String, Value>,
}

impl Env {
    /// Creates a new, empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares variable `name`, of kind token `kind`, with the value read
    /// from `raw`.
    pub fn declare(&mut self, name: &str, kind: &str, raw: &str) -> Declaration {
        let Ok(kind) = kind.parse::<Kind>() else {
            return Declaration::UnknownKind;
        };
        let (value, err) = Value::parse(kind, raw);
        self.add_var(name, value);
        match err {
            Some(err) => Declaration::Defaulted(err),
            None => Declaration::Declared,
        }
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn add_var(&mut self, name: impl Into<String>, value: Value) {
        self.var_env.insert(name.into(), value);
    }

    /// Gets the value of a variable.
    pub fn get_var(&self, name: impl Borrow<str>) -> Option<&Value> {
        self.var_env.get(name.borrow())
    }

    /// Number of declared variables.
    pub fn len(&self) -> usize {
        self.var_env.len()
    }

    /// Is there no variable at all?
    pub fn is_empty(&self) -> bool {
        self.var_env.is_empty()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env").field("vars", &self.var_env).finish()
    }
}
