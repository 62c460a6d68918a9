//! `assert`, core library calls, `let`, `if` and `fn`.

use super::bindings::parse_bindings;
use super::naming::type_from_name;
use super::{idiomatic_ident, idiomatic_selector, invalid_arg_count, invalid_argument};
use super::{CompileError, Compiler};
use rhizome_gisp_ir::Node;
use rhizome_gisp_target_go::{AssignOp, Expr, Field, FuncLit, FuncType, Stmt};

/// Functions resolved to the core package: `(get m k)` calls `core.Get`.
static CORE_FUNCTIONS: &[&str] = &["get"];

const VARIADIC_MARKER: &str = "&";

impl Compiler {
    pub(super) fn compile_assert(
        &mut self,
        name: &str,
        args: &[Node],
    ) -> Result<Option<Expr>, CompileError> {
        if name != "assert" {
            return Ok(None);
        }
        let [ty, value] = args else {
            return Err(invalid_arg_count(name, "2", args.len()));
        };
        let Some(ty) = ty.as_ident() else {
            return Err(invalid_argument(
                name,
                format!("type must be an identifier, got {ty}"),
            ));
        };
        let value = self.compile_expr(value)?;
        Ok(Some(Expr::type_assert(value, type_from_name(ty))))
    }

    pub(super) fn compile_core_call(
        &mut self,
        name: &str,
        args: &[Node],
    ) -> Result<Option<Expr>, CompileError> {
        if !CORE_FUNCTIONS.contains(&name) {
            return Ok(None);
        }
        let func = idiomatic_selector(&format!("{}/{}", self.config.core_package, name));
        Ok(Some(Expr::call(func, self.compile_exprs(args)?)))
    }

    pub(super) fn compile_let(
        &mut self,
        name: &str,
        args: &[Node],
    ) -> Result<Option<Expr>, CompileError> {
        if name != "let" {
            return Ok(None);
        }
        let Some((bindings, body)) = args.split_first().filter(|(_, body)| !body.is_empty())
        else {
            return Err(invalid_arg_count(name, "at least 2", args.len()));
        };

        let bindings = parse_bindings(name, bindings)?;
        let mut stmts = self.compile_bindings(&bindings, AssignOp::Define)?;
        stmts.extend(self.implicit_return(body)?);
        Ok(Some(self.immediately_invoked(stmts)))
    }

    pub(super) fn compile_if(
        &mut self,
        name: &str,
        args: &[Node],
    ) -> Result<Option<Expr>, CompileError> {
        if name != "if" {
            return Ok(None);
        }
        let (cond, then, otherwise) = match args {
            [cond, then] => (cond, then, None),
            [cond, then, otherwise] => (cond, then, Some(otherwise)),
            _ => return Err(invalid_arg_count(name, "2 or 3", args.len())),
        };

        let cond = self.compile_expr(cond)?;
        let then = self.compile_expr(then)?;
        let otherwise = match otherwise {
            Some(node) => self.compile_expr(node)?,
            None => Expr::nil(),
        };
        let stmt = Stmt::If {
            cond,
            then: vec![Stmt::Return(vec![then])],
            otherwise: Some(vec![Stmt::Return(vec![otherwise])]),
        };
        Ok(Some(self.immediately_invoked(vec![stmt])))
    }

    pub(super) fn compile_fn(
        &mut self,
        name: &str,
        args: &[Node],
    ) -> Result<Option<Expr>, CompileError> {
        if name != "fn" {
            return Ok(None);
        }
        let Some((params, body)) = args.split_first().filter(|(_, body)| !body.is_empty()) else {
            return Err(invalid_arg_count(name, "at least 2", args.len()));
        };

        let params = self.compile_params(name, params)?;
        let body = self.implicit_return(body)?;
        Ok(Some(Expr::FuncLit(FuncLit {
            ty: FuncType {
                params,
                results: vec![self.any_type()],
            },
            body,
        })))
    }

    /// `[a b & rest]` to `a, b core.Any, rest ...core.Any`.
    fn compile_params(&self, form: &str, params: &Node) -> Result<Vec<Field>, CompileError> {
        let Some(elements) = params.as_vector() else {
            return Err(invalid_argument(
                form,
                format!("expected a parameter vector, got {}", params.kind_name()),
            ));
        };

        let mut names = Vec::with_capacity(elements.len());
        let mut rest = None;
        let mut idx = 0;
        while idx < elements.len() {
            let Some(param) = elements[idx].as_ident() else {
                return Err(invalid_argument(
                    form,
                    format!("parameter must be an identifier, got {}", elements[idx]),
                ));
            };
            if param == VARIADIC_MARKER {
                let [rest_param] = &elements[idx + 1..] else {
                    return Err(invalid_argument(
                        form,
                        "& must be followed by exactly one parameter",
                    ));
                };
                let Some(rest_name) = rest_param.as_ident().filter(|n| *n != VARIADIC_MARKER)
                else {
                    return Err(invalid_argument(
                        form,
                        format!("rest parameter must be an identifier, got {rest_param}"),
                    ));
                };
                rest = Some(idiomatic_ident(rest_name));
                break;
            }
            names.push(idiomatic_ident(param));
            idx += 1;
        }

        let mut fields = Vec::with_capacity(2);
        if !names.is_empty() {
            fields.push(Field {
                names,
                ty: self.any_type(),
                variadic: false,
            });
        }
        if let Some(rest) = rest {
            fields.push(Field {
                names: vec![rest],
                ty: self.any_type(),
                variadic: true,
            });
        }
        Ok(fields)
    }
}
