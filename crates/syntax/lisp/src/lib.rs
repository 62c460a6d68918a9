//! gisp reader.
//!
//! Turns source text into the node sequence consumed by the compiler:
//! lexing, nesting and literal parsing happen here and nowhere else.

mod reader;

pub use reader::{read, ReadError};

#[cfg(test)]
mod tests;
