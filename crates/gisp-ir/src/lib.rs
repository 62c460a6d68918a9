//! Source node tree for gisp.
//!
//! This crate defines the tree the reader produces and the compiler
//! consumes. It has no behavior of its own beyond construction, inspection
//! and printing.
//!
//! # Node format
//!
//! A node is one of:
//! - A call: `(callee arg ...)`
//! - A vector: `[element ...]`
//! - A number literal, keeping its lexical kind (int, float, imaginary, char)
//! - A string literal
//! - An identifier
//!
//! Example:
//! ```
//! use rhizome_gisp_ir::Node;
//!
//! let add = Node::call(Node::ident("+"), vec![Node::ident("a"), Node::int("1")]);
//! assert_eq!(add.to_string(), "(+ a 1)");
//! ```

mod node;

pub use node::{Node, NumberKind};

#[cfg(test)]
mod tests;
