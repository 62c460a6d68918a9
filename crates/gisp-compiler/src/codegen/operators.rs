//! Operator forms.

use super::{invalid_arg_count, CompileError, Compiler};
use rhizome_gisp_ir::Node;
use rhizome_gisp_target_go::{BinaryOp, Expr, UnaryOp};

/// Prefix operators, valid with exactly one argument.
static UNARY_OPERATORS: &[(&str, UnaryOp)] = &[("!", UnaryOp::Not), ("not", UnaryOp::Not)];

/// Operators compiled to a variadic call of a core package helper.
static CALLABLE_OPERATORS: &[(&str, &str)] = &[
    ("+", "ADD"),
    ("-", "SUB"),
    ("*", "MUL"),
    ("/", "DIV"),
    ("mod", "MOD"),
    ("=", "EQ"),
    ("not=", "NEQ"),
    ("<", "LT"),
    ("<=", "LTE"),
    (">", "GT"),
    (">=", "GTE"),
];

/// Short-circuit operators, left-folded into a Go binary expression.
static LOGIC_OPERATORS: &[(&str, BinaryOp)] = &[
    ("and", BinaryOp::LogicalAnd),
    ("or", BinaryOp::LogicalOr),
];

fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

impl Compiler {
    pub(super) fn compile_unary(
        &mut self,
        name: &str,
        args: &[Node],
    ) -> Result<Option<Expr>, CompileError> {
        let Some(op) = lookup(UNARY_OPERATORS, name) else {
            return Ok(None);
        };
        let [operand] = args else {
            return Err(invalid_arg_count(name, "1", args.len()));
        };
        Ok(Some(Expr::unary(op, self.compile_expr(operand)?)))
    }

    pub(super) fn compile_callable_operator(
        &mut self,
        name: &str,
        args: &[Node],
    ) -> Result<Option<Expr>, CompileError> {
        let Some(helper) = lookup(CALLABLE_OPERATORS, name) else {
            return Ok(None);
        };
        let func = Expr::selector(Expr::ident(self.config.core_package.as_str()), helper);
        Ok(Some(Expr::call(func, self.compile_exprs(args)?)))
    }

    pub(super) fn compile_logic(
        &mut self,
        name: &str,
        args: &[Node],
    ) -> Result<Option<Expr>, CompileError> {
        let Some(op) = lookup(LOGIC_OPERATORS, name) else {
            return Ok(None);
        };
        let mut operands = self.compile_exprs(args)?.into_iter();
        let Some(first) = operands.next() else {
            return Err(invalid_arg_count(name, "at least 1", 0));
        };
        Ok(Some(operands.fold(first, |left, right| Expr::binary(op, left, right))))
    }
}
