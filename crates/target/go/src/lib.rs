//! Go target for gisp.
//!
//! Holds the Go syntax tree the compiler produces and the printer that
//! renders it as gofmt-style source. The tree only covers the constructs
//! the compiler emits.

pub mod ast;
mod printer;

pub use ast::{
    AssignOp, BasicLit, BinaryOp, Decl, Expr, Field, File, FuncDecl, FuncLit, FuncType,
    ImportSpec, LitKind, Stmt, Type, UnaryOp, ValueSpec,
};
pub use printer::{render_decl, render_expr, render_file, render_stmt};
