//! Example programs.

mod functions;
mod hello_world;
mod ifs;

pub use functions::*;
pub use hello_world::*;
pub use ifs::*;
use unindent::unindent;
