//! gisp compiler.
//!
//! Compiles gisp nodes into a Go syntax tree. Rendering the tree is left to
//! `rhizome-gisp-target-go`.

mod codegen;
mod config;

pub use codegen::{compile, idiomatic_ident, idiomatic_selector, CompileError, Compiler};
pub use config::CompilerConfig;
