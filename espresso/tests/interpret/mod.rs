use super::*;

mod conditionals;
mod declarations;
mod functions;
mod hello_world;
