//! `loop` / `recur` desugaring.
//!
//! ```text
//! (loop [i 0] (if (< i 3) (recur (+ i 1)) i))
//! ```
//!
//! becomes
//!
//! ```go
//! func() core.Any {
//!     i := 0
//!     var __result1 core.Any
//!     for __continue0 := true; __continue0; {
//!         __continue0 = false
//!         __result1 = /* body, with recur reassigning i and setting __continue0 */
//!     }
//!     return __result1
//! }()
//! ```
//!
//! While a loop body is compiled its context sits on top of
//! `Compiler::loops`, so a `recur` always targets the nearest enclosing
//! `loop`.

use super::bindings::parse_bindings;
use super::{idiomatic_selector, invalid_arg_count, CompileError, Compiler};
use rhizome_gisp_ir::Node;
use rhizome_gisp_target_go::{AssignOp, Expr, Stmt, ValueSpec};
use tracing::debug;

const LOOP: &str = "loop";
const RECUR: &str = "recur";

/// A `loop` whose body is being compiled.
#[derive(Debug, Clone)]
pub(super) struct LoopContext {
    /// Identifiers of each binding, in binding order.
    targets: Vec<Vec<String>>,
    /// Continue flag the loop's `for` tests.
    flag: String,
}

/// Whether a `recur` call is reachable from `node` through call arguments.
fn contains_recur(node: &Node) -> bool {
    node.is_call_to(RECUR)
        || node
            .as_call()
            .is_some_and(|(_, args)| args.iter().any(contains_recur))
}

impl Compiler {
    pub(super) fn compile_loop(
        &mut self,
        name: &str,
        args: &[Node],
    ) -> Result<Option<Expr>, CompileError> {
        if name != LOOP {
            return Ok(None);
        }
        let Some((bindings, body)) = args.split_first().filter(|(_, body)| !body.is_empty())
        else {
            return Err(invalid_arg_count(name, "at least 2", args.len()));
        };
        let bindings = parse_bindings(name, bindings)?;
        if !body.iter().any(contains_recur) {
            return Err(CompileError::LoopWithoutRecur);
        }

        let flag = self.fresh_ident("continue");
        let result = self.fresh_ident("result");
        debug!(%flag, %result, bindings = bindings.len(), "desugaring loop");

        // Initial values are outside the loop: a recur there belongs to an
        // enclosing loop.
        let mut stmts = self.compile_bindings(&bindings, AssignOp::Define)?;

        self.loops.push(LoopContext {
            targets: bindings.iter().map(|b| b.targets.clone()).collect(),
            flag: flag.clone(),
        });
        let loop_body = self.compile_loop_body(&flag, &result, body);
        self.loops.pop();

        stmts.push(Stmt::Var(ValueSpec {
            names: vec![result.clone()],
            ty: Some(self.any_type()),
            values: vec![],
        }));
        stmts.push(Stmt::For {
            init: Some(Box::new(Stmt::define(Expr::ident(&flag), Expr::bool(true)))),
            cond: Some(Expr::ident(&flag)),
            post: None,
            body: loop_body?,
        });
        stmts.push(Stmt::Return(vec![Expr::ident(result)]));
        Ok(Some(self.immediately_invoked(stmts)))
    }

    /// `flag = false`, the body for effects, then `result = <last form>`.
    fn compile_loop_body(
        &mut self,
        flag: &str,
        result: &str,
        body: &[Node],
    ) -> Result<Vec<Stmt>, CompileError> {
        let mut stmts = vec![Stmt::assign(Expr::ident(flag), Expr::bool(false))];
        if let Some((last, init)) = body.split_last() {
            for node in init {
                stmts.push(Stmt::Expr(self.compile_expr(node)?));
            }
            stmts.push(Stmt::assign(Expr::ident(result), self.compile_expr(last)?));
        }
        Ok(stmts)
    }

    pub(super) fn compile_recur(
        &mut self,
        name: &str,
        args: &[Node],
    ) -> Result<Option<Expr>, CompileError> {
        if name != RECUR {
            return Ok(None);
        }
        let Some(LoopContext { targets, flag }) = self.loops.last().cloned() else {
            return Err(CompileError::RecurOutsideLoop);
        };
        if args.len() != targets.len() {
            return Err(CompileError::RecurArity {
                expected: targets.len(),
                got: args.len(),
            });
        }

        let values = self.compile_exprs(args)?;
        let mut stmts = Vec::with_capacity(targets.len() + 2);
        if targets.iter().all(|names| names.len() == 1) {
            // One parallel assignment, so every value sees the previous pass.
            if !targets.is_empty() {
                stmts.push(Stmt::Assign {
                    lhs: targets.iter().flatten().map(|t| idiomatic_selector(t)).collect(),
                    op: AssignOp::Assign,
                    rhs: values,
                });
            }
        } else {
            for (names, value) in targets.iter().zip(values) {
                stmts.push(Stmt::Assign {
                    lhs: names.iter().map(|t| idiomatic_selector(t)).collect(),
                    op: AssignOp::Assign,
                    rhs: vec![value],
                });
            }
        }
        stmts.push(Stmt::assign(Expr::ident(flag), Expr::bool(true)));
        stmts.push(Stmt::Return(vec![Expr::nil()]));
        Ok(Some(self.immediately_invoked(stmts)))
    }
}
