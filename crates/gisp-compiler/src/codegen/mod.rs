//! gisp node to Go syntax tree code generation.

mod bindings;
mod declarations;
mod forms;
mod imports;
mod loops;
mod naming;
mod operators;

pub use naming::{idiomatic_ident, idiomatic_selector};

use crate::CompilerConfig;
use rhizome_gisp_ir::{Node, NumberKind};
use rhizome_gisp_target_go::{Expr, File, FuncLit, FuncType, LitKind, Stmt, Type};
use thiserror::Error;

/// Errors that can occur during compilation.
///
/// Compilation stops at the first error; no partial output is produced.
#[derive(Debug, Error, PartialEq)]
pub enum CompileError {
    #[error("invalid argument count for {form}: expected {expected}, got {got}")]
    InvalidArgCount {
        form: String,
        expected: &'static str,
        got: usize,
    },

    #[error("invalid argument for {form}: {reason}")]
    InvalidArgument { form: String, reason: String },

    #[error("def is only allowed at the top level")]
    DefInExpression,

    #[error("ns is only allowed as the first top-level form")]
    NamespaceInExpression,

    #[error("namespace name must be an identifier, got {0}")]
    InvalidNamespace(String),

    #[error("invalid import {0}: expected \"path\" or [\"path\" :as alias]")]
    InvalidImport(String),

    #[error("expected a call at the top level, got {0}")]
    TopLevelNotCall(String),

    #[error("no recur found in loop body")]
    LoopWithoutRecur,

    #[error("recur used outside of a loop")]
    RecurOutsideLoop,

    #[error("recur expects {expected} values to match the loop bindings, got {got}")]
    RecurArity { expected: usize, got: usize },
}

pub(crate) fn invalid_arg_count(form: &str, expected: &'static str, got: usize) -> CompileError {
    CompileError::InvalidArgCount {
        form: form.to_string(),
        expected,
        got,
    }
}

pub(crate) fn invalid_argument(form: &str, reason: impl Into<String>) -> CompileError {
    CompileError::InvalidArgument {
        form: form.to_string(),
        reason: reason.into(),
    }
}

/// Compile a whole source file with the default configuration.
pub fn compile(nodes: &[Node]) -> Result<File, CompileError> {
    Compiler::new(CompilerConfig::default()).compile_file(nodes)
}

/// One compilation session.
///
/// A compiler owns the counter used for synthetic identifiers, so two
/// sessions never share state. Reuse a compiler across calls only when the
/// outputs end up in the same Go scope and must not collide.
#[derive(Debug)]
pub struct Compiler {
    config: CompilerConfig,
    next_ident: usize,
    /// Enclosing loops, innermost last.
    loops: Vec<loops::LoopContext>,
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self {
            config,
            next_ident: 0,
            loops: Vec::new(),
        }
    }

    /// Compile each node as a free-standing expression.
    pub fn compile_exprs(&mut self, nodes: &[Node]) -> Result<Vec<Expr>, CompileError> {
        nodes.iter().map(|node| self.compile_expr(node)).collect()
    }

    /// Compile a node in expression position.
    pub fn compile_expr(&mut self, node: &Node) -> Result<Expr, CompileError> {
        match node {
            Node::Call { callee, args } => self.compile_call(callee, args),
            Node::Vector { elements } => Ok(Expr::CompositeLit {
                ty: Type::slice(self.any_type()),
                elements: self.compile_exprs(elements)?,
            }),
            Node::Number { literal, number } => {
                let kind = match number {
                    NumberKind::Int => LitKind::Int,
                    NumberKind::Float => LitKind::Float,
                    NumberKind::Imag => LitKind::Imag,
                    NumberKind::Char => LitKind::Char,
                };
                Ok(Expr::lit(kind, literal.as_str()))
            }
            Node::String { value } => Ok(Expr::string(value.as_str())),
            Node::Ident { name } => Ok(idiomatic_selector(name)),
        }
    }

    fn compile_call(&mut self, callee: &Node, args: &[Node]) -> Result<Expr, CompileError> {
        if let Some(name) = callee.as_ident() {
            if let Some(expr) = self.compile_special_form(name, args)? {
                return Ok(expr);
            }
        }
        self.compile_plain_call(callee, args)
    }

    /// Try each special form in order. Returns None if `name` is not one.
    fn compile_special_form(
        &mut self,
        name: &str,
        args: &[Node],
    ) -> Result<Option<Expr>, CompileError> {
        if let Some(expr) = self.compile_unary(name, args)? {
            return Ok(Some(expr));
        }
        if let Some(expr) = self.compile_callable_operator(name, args)? {
            return Ok(Some(expr));
        }
        if let Some(expr) = self.compile_logic(name, args)? {
            return Ok(Some(expr));
        }
        if let Some(expr) = self.compile_loop(name, args)? {
            return Ok(Some(expr));
        }
        if let Some(expr) = self.compile_recur(name, args)? {
            return Ok(Some(expr));
        }
        if let Some(expr) = self.compile_assert(name, args)? {
            return Ok(Some(expr));
        }
        if let Some(expr) = self.compile_core_call(name, args)? {
            return Ok(Some(expr));
        }
        if let Some(expr) = self.compile_let(name, args)? {
            return Ok(Some(expr));
        }
        if let Some(expr) = self.compile_if(name, args)? {
            return Ok(Some(expr));
        }
        if let Some(expr) = self.compile_fn(name, args)? {
            return Ok(Some(expr));
        }

        match name {
            declarations::DEF => Err(CompileError::DefInExpression),
            declarations::NS => Err(CompileError::NamespaceInExpression),
            _ => Ok(None),
        }
    }

    /// Compile `(callee args...)` as an ordinary Go call.
    fn compile_plain_call(&mut self, callee: &Node, args: &[Node]) -> Result<Expr, CompileError> {
        let func = self.compile_expr(callee)?;
        let args = self.compile_exprs(args)?;
        Ok(Expr::call(func, args))
    }

    /// The catch-all type, e.g. `core.Any`.
    fn any_type(&self) -> Type {
        Type::qualified(&self.config.core_package, &self.config.any_type)
    }

    fn fresh_ident(&mut self, hint: &str) -> String {
        let ident = format!("{}{}{}", naming::SYNTHETIC_PREFIX, hint, self.next_ident);
        self.next_ident += 1;
        ident
    }

    /// Body of `fn` and `let`: every form but the last is evaluated for its
    /// effects, the last one is returned.
    fn implicit_return(&mut self, body: &[Node]) -> Result<Vec<Stmt>, CompileError> {
        let mut stmts = Vec::with_capacity(body.len());
        if let Some((last, init)) = body.split_last() {
            for node in init {
                stmts.push(Stmt::Expr(self.compile_expr(node)?));
            }
            stmts.push(Stmt::Return(vec![self.compile_expr(last)?]));
        }
        Ok(stmts)
    }

    /// `func() core.Any { body }()`, turning statements into an expression.
    fn immediately_invoked(&self, body: Vec<Stmt>) -> Expr {
        let func = FuncLit {
            ty: FuncType {
                params: vec![],
                results: vec![self.any_type()],
            },
            body,
        };
        Expr::call(Expr::FuncLit(func), vec![])
    }
}
