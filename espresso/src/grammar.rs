//! Parser generated from the line grammar.
#![allow(missing_docs)]

/// Parser for single source lines.
#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct Grammar;
