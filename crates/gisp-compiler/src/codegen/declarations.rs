//! Top-level forms: `ns`, `def`, and bare calls.

use super::imports::compile_imports;
use super::{idiomatic_ident, invalid_arg_count, invalid_argument, CompileError, Compiler};
use rhizome_gisp_ir::Node;
use rhizome_gisp_target_go::{Decl, Expr, File, FuncLit, Stmt, ValueSpec};
use tracing::debug;

pub(super) const DEF: &str = "def";
pub(super) const NS: &str = "ns";

/// `(ns name ...)` with at least the package name.
fn is_namespace(node: &Node) -> bool {
    node.is_call_to(NS) && node.as_call().is_some_and(|(_, args)| !args.is_empty())
}

impl Compiler {
    /// Compile a whole source file.
    ///
    /// Only a leading `(ns ...)` declares the package and its imports; every
    /// following node must be a call, compiled by [`Compiler::compile_decl`].
    pub fn compile_file(&mut self, nodes: &[Node]) -> Result<File, CompileError> {
        let mut package = self.config.package.clone();
        let mut decls = Vec::with_capacity(nodes.len() + 1);

        let mut rest = nodes;
        if let Some((first, tail)) = nodes.split_first() {
            if is_namespace(first) {
                let (name, imports) = self.compile_namespace(first)?;
                package = name;
                decls.extend(imports);
                rest = tail;
            }
        }

        for node in rest {
            decls.push(self.compile_decl(node)?);
        }

        debug!(%package, decls = decls.len(), "compiled file");
        Ok(File { package, decls })
    }

    fn compile_namespace(&mut self, node: &Node) -> Result<(String, Option<Decl>), CompileError> {
        let Some((_, args)) = node.as_call() else {
            return Err(CompileError::TopLevelNotCall(node.to_string()));
        };
        let Some((name, imports)) = args.split_first() else {
            return Err(invalid_arg_count(NS, "at least 1", 0));
        };
        let Some(name) = name.as_ident() else {
            return Err(CompileError::InvalidNamespace(name.to_string()));
        };
        debug!(package = name, imports = imports.len(), "namespace");
        Ok((name.to_string(), compile_imports(imports)?))
    }

    /// Compile one top-level call.
    ///
    /// `def` becomes a function or variable declaration; anything else is
    /// evaluated at package initialization as `var _ = call`.
    pub fn compile_decl(&mut self, node: &Node) -> Result<Decl, CompileError> {
        let Some((callee, args)) = node.as_call() else {
            return Err(CompileError::TopLevelNotCall(node.to_string()));
        };

        match callee.as_ident() {
            Some(DEF) => self.compile_def(args),
            Some(NS) => {
                let call = self.compile_plain_call(callee, args)?;
                Ok(discarded(call))
            }
            _ => {
                let expr = self.compile_expr(node)?;
                Ok(discarded(expr))
            }
        }
    }

    fn compile_def(&mut self, args: &[Node]) -> Result<Decl, CompileError> {
        let [name, value, ..] = args else {
            return Err(invalid_arg_count(DEF, "at least 2", args.len()));
        };
        let Some(name) = name.as_ident() else {
            return Err(invalid_argument(
                DEF,
                format!("name must be an identifier, got {name}"),
            ));
        };
        let name = idiomatic_ident(name);

        match self.compile_expr(value)? {
            Expr::FuncLit(lit) => {
                debug!(%name, "function declaration");
                let lit = if name == self.config.entry_point {
                    entry_point(lit)
                } else {
                    lit
                };
                Ok(Decl::Func(lit.into_decl(name)))
            }
            value => {
                debug!(%name, "variable declaration");
                Ok(Decl::Var(ValueSpec {
                    names: vec![name],
                    ty: None,
                    values: vec![value],
                }))
            }
        }
    }
}

/// Go's entry point returns nothing: drop the result type and evaluate the
/// final expression for its effects.
fn entry_point(mut lit: FuncLit) -> FuncLit {
    lit.ty.results.clear();
    if let Some(Stmt::Return(values)) = lit.body.last_mut() {
        let values = std::mem::take(values);
        lit.body.pop();
        lit.body.extend(values.into_iter().map(Stmt::Expr));
    }
    lit
}

/// `var _ = expr`
fn discarded(expr: Expr) -> Decl {
    Decl::Var(ValueSpec {
        names: vec!["_".to_string()],
        ty: None,
        values: vec![expr],
    })
}
