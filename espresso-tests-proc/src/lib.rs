//! Test attributes for the EspressoScript interpreter.

extern crate proc_macro;
use proc_macro::TokenStream;

#[macro_use]
extern crate quote;

mod by_resources;
mod parses;

/// Runs the program returned by the function, and checks its output.
///
/// `#[espresso_test("expected output")]`
#[proc_macro_attribute]
pub fn espresso_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    espresso_test::espresso_test(attr, item)
}

/// Parses a string with a given grammar rule, and hands the parsed element to
/// the function.
///
/// `#[parses("input" as rule)]`
#[proc_macro_attribute]
pub fn parses(attr: TokenStream, item: TokenStream) -> TokenStream {
    parses::parses(attr, item)
}

/// Generates one copy of the function per file matching a glob pattern,
/// relative to the crate root.
///
/// `#[by_resources("tests/programs/*.esp")]`
#[proc_macro_attribute]
pub fn by_resources(attr: TokenStream, item: TokenStream) -> TokenStream {
    by_resources::by_resources(attr, item)
}
