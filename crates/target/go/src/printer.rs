//! Go source rendering.

use crate::ast::{
    BasicLit, Decl, Expr, Field, File, FuncType, LitKind, Stmt, Type, ValueSpec,
};

/// Binding power of primary expressions (operands, calls, selectors).
const PRIMARY: u8 = 7;
/// Binding power of unary expressions.
const UNARY: u8 = 6;

/// Render a whole file.
pub fn render_file(file: &File) -> String {
    let mut printer = Printer::default();
    printer.file(file);
    printer.out
}

/// Render a single declaration.
pub fn render_decl(decl: &Decl) -> String {
    let mut printer = Printer::default();
    printer.decl(decl);
    printer.out
}

/// Render a single statement.
pub fn render_stmt(stmt: &Stmt) -> String {
    let mut printer = Printer::default();
    printer.stmt(stmt);
    printer.out
}

/// Render a single expression.
pub fn render_expr(expr: &Expr) -> String {
    let mut printer = Printer::default();
    printer.expr(expr);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.indent {
            self.out.push('\t');
        }
    }

    fn file(&mut self, file: &File) {
        self.push("package ");
        self.push(&file.package);
        self.push("\n");
        for decl in &file.decls {
            self.push("\n");
            self.decl(decl);
            self.push("\n");
        }
    }

    fn decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Import(specs) => {
                self.push("import (");
                self.indent += 1;
                for spec in specs {
                    self.newline();
                    if let Some(name) = &spec.name {
                        self.push(name);
                        self.push(" ");
                    }
                    self.push(&quote(&spec.path));
                }
                self.indent -= 1;
                self.newline();
                self.push(")");
            }
            Decl::Func(func) => {
                self.push("func ");
                self.push(&func.name);
                self.func_type(&func.ty);
                self.push(" ");
                self.block(&func.body);
            }
            Decl::Var(spec) => {
                self.push("var ");
                self.value_spec(spec);
            }
        }
    }

    fn value_spec(&mut self, spec: &ValueSpec) {
        self.push(&spec.names.join(", "));
        if let Some(ty) = &spec.ty {
            self.push(" ");
            self.ty(ty);
        }
        if !spec.values.is_empty() {
            self.push(" = ");
            self.expr_list(&spec.values);
        }
    }

    fn func_type(&mut self, ty: &FuncType) {
        self.push("(");
        for (idx, field) in ty.params.iter().enumerate() {
            if idx > 0 {
                self.push(", ");
            }
            self.field(field);
        }
        self.push(")");

        match ty.results.as_slice() {
            [] => {}
            [single] => {
                self.push(" ");
                self.ty(single);
            }
            many => {
                self.push(" (");
                for (idx, result) in many.iter().enumerate() {
                    if idx > 0 {
                        self.push(", ");
                    }
                    self.ty(result);
                }
                self.push(")");
            }
        }
    }

    fn field(&mut self, field: &Field) {
        if !field.names.is_empty() {
            self.push(&field.names.join(", "));
            self.push(" ");
        }
        if field.variadic {
            self.push("...");
        }
        self.ty(&field.ty);
    }

    fn ty(&mut self, ty: &Type) {
        match ty {
            Type::Name(name) => self.push(name),
            Type::Qualified { package, name } => {
                self.push(package);
                self.push(".");
                self.push(name);
            }
            Type::Slice(element) => {
                self.push("[]");
                self.ty(element);
            }
        }
    }

    fn block(&mut self, stmts: &[Stmt]) {
        self.push("{");
        self.indent += 1;
        for stmt in stmts {
            self.newline();
            self.stmt(stmt);
        }
        self.indent -= 1;
        self.newline();
        self.push("}");
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Assign { lhs, op, rhs } => {
                self.expr_list(lhs);
                self.push(" ");
                self.push(op.token());
                self.push(" ");
                self.expr_list(rhs);
            }
            Stmt::Var(spec) => {
                self.push("var ");
                self.value_spec(spec);
            }
            Stmt::If {
                cond,
                then,
                otherwise,
            } => {
                self.push("if ");
                self.expr(cond);
                self.push(" ");
                self.block(then);
                if let Some(otherwise) = otherwise {
                    self.push(" else ");
                    self.block(otherwise);
                }
            }
            Stmt::For {
                init,
                cond,
                post,
                body,
            } => {
                self.push("for ");
                if init.is_some() || post.is_some() {
                    if let Some(init) = init {
                        self.stmt(init);
                    }
                    self.push("; ");
                    if let Some(cond) = cond {
                        self.expr(cond);
                    }
                    self.push(";");
                    if let Some(post) = post {
                        self.push(" ");
                        self.stmt(post);
                    }
                    self.push(" ");
                } else if let Some(cond) = cond {
                    self.expr(cond);
                    self.push(" ");
                }
                self.block(body);
            }
            Stmt::Return(values) => {
                self.push("return");
                if !values.is_empty() {
                    self.push(" ");
                    self.expr_list(values);
                }
            }
            Stmt::Expr(expr) => self.expr(expr),
        }
    }

    fn expr_list(&mut self, exprs: &[Expr]) {
        for (idx, expr) in exprs.iter().enumerate() {
            if idx > 0 {
                self.push(", ");
            }
            self.expr(expr);
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(name) => self.push(name),
            Expr::Selector { base, field } => {
                self.operand(base, PRIMARY);
                self.push(".");
                self.push(field);
            }
            Expr::BasicLit(lit) => self.lit(lit),
            Expr::Call { func, args } => {
                self.operand(func, PRIMARY);
                self.push("(");
                self.expr_list(args);
                self.push(")");
            }
            Expr::CompositeLit { ty, elements } => {
                self.ty(ty);
                self.push("{");
                self.expr_list(elements);
                self.push("}");
            }
            Expr::FuncLit(lit) => {
                self.push("func");
                self.func_type(&lit.ty);
                self.push(" ");
                self.block(&lit.body);
            }
            Expr::TypeAssert { expr, ty } => {
                self.operand(expr, PRIMARY);
                self.push(".(");
                self.ty(ty);
                self.push(")");
            }
            Expr::Unary { op, operand } => {
                self.push(op.token());
                self.operand(operand, UNARY);
            }
            Expr::Binary { op, left, right } => {
                let prec = op.precedence();
                self.operand(left, prec);
                self.push(" ");
                self.push(op.token());
                self.push(" ");
                // Left associative: an equal-precedence right operand needs parens.
                self.operand(right, prec + 1);
            }
        }
    }

    /// Print `expr`, parenthesized if it binds looser than `min`.
    fn operand(&mut self, expr: &Expr, min: u8) {
        if binding_power(expr) < min {
            self.push("(");
            self.expr(expr);
            self.push(")");
        } else {
            self.expr(expr);
        }
    }

    fn lit(&mut self, lit: &BasicLit) {
        match lit.kind {
            LitKind::String => {
                let quoted = quote(&lit.value);
                self.push(&quoted);
            }
            LitKind::Int | LitKind::Float | LitKind::Imag | LitKind::Char => self.push(&lit.value),
        }
    }
}

fn binding_power(expr: &Expr) -> u8 {
    match expr {
        Expr::Binary { op, .. } => op.precedence(),
        Expr::Unary { .. } => UNARY,
        Expr::BasicLit(BasicLit { kind, value })
            if *kind != LitKind::String && value.starts_with('-') =>
        {
            UNARY
        }
        _ => PRIMARY,
    }
}

/// Quote a string as an interpreted Go string literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

