//! Go syntax tree.

/// A type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// `int`, `error`
    Name(String),
    /// `core.Any`
    Qualified { package: String, name: String },
    /// `[]T`
    Slice(Box<Type>),
}

impl Type {
    pub fn name(name: impl Into<String>) -> Self {
        Type::Name(name.into())
    }

    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Type::Qualified {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn slice(element: Type) -> Self {
        Type::Slice(Box::new(element))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

/// A literal. For strings `value` is the unescaped text and the printer
/// quotes it; every other kind is printed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicLit {
    pub kind: LitKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
}

impl UnaryOp {
    pub fn token(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    LogicalAnd,
    LogicalOr,
}

impl BinaryOp {
    pub fn token(self) -> &'static str {
        match self {
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
        }
    }

    /// Go operator precedence, higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::LogicalOr => 1,
            BinaryOp::LogicalAnd => 2,
        }
    }
}

/// One parameter group: `a, b T` or `rest ...T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: Type,
    pub variadic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncType {
    pub params: Vec<Field>,
    pub results: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncLit {
    pub ty: FuncType,
    pub body: Vec<Stmt>,
}

impl FuncLit {
    /// Turns the literal into a named top-level function.
    pub fn into_decl(self, name: impl Into<String>) -> FuncDecl {
        FuncDecl {
            name: name.into(),
            ty: self.ty,
            body: self.body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(String),
    Selector {
        base: Box<Expr>,
        field: String,
    },
    BasicLit(BasicLit),
    Call {
        func: Box<Expr>,
        args: Vec<Expr>,
    },
    CompositeLit {
        ty: Type,
        elements: Vec<Expr>,
    },
    FuncLit(FuncLit),
    TypeAssert {
        expr: Box<Expr>,
        ty: Type,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn nil() -> Self {
        Expr::ident("nil")
    }

    pub fn bool(value: bool) -> Self {
        Expr::ident(if value { "true" } else { "false" })
    }

    pub fn selector(base: Expr, field: impl Into<String>) -> Self {
        Expr::Selector {
            base: Box::new(base),
            field: field.into(),
        }
    }

    pub fn lit(kind: LitKind, value: impl Into<String>) -> Self {
        Expr::BasicLit(BasicLit {
            kind,
            value: value.into(),
        })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::lit(LitKind::String, value)
    }

    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            func: Box::new(func),
            args,
        }
    }

    pub fn type_assert(expr: Expr, ty: Type) -> Self {
        Expr::TypeAssert {
            expr: Box::new(expr),
            ty,
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `:=`
    Define,
    /// `=`
    Assign,
}

impl AssignOp {
    pub fn token(self) -> &'static str {
        match self {
            AssignOp::Define => ":=",
            AssignOp::Assign => "=",
        }
    }
}

/// `names [type] [= values]`, shared by `var` statements and declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    pub names: Vec<String>,
    pub ty: Option<Type>,
    pub values: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Assign {
        lhs: Vec<Expr>,
        op: AssignOp,
        rhs: Vec<Expr>,
    },
    Var(ValueSpec),
    If {
        cond: Expr,
        then: Vec<Stmt>,
        otherwise: Option<Vec<Stmt>>,
    },
    For {
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        post: Option<Box<Stmt>>,
        body: Vec<Stmt>,
    },
    Return(Vec<Expr>),
    Expr(Expr),
}

impl Stmt {
    /// `target := value`
    pub fn define(target: Expr, value: Expr) -> Self {
        Stmt::Assign {
            lhs: vec![target],
            op: AssignOp::Define,
            rhs: vec![value],
        }
    }

    /// `target = value`
    pub fn assign(target: Expr, value: Expr) -> Self {
        Stmt::Assign {
            lhs: vec![target],
            op: AssignOp::Assign,
            rhs: vec![value],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    pub ty: FuncType,
    pub body: Vec<Stmt>,
}

/// `[name] "path"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub name: Option<String>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Func(FuncDecl),
    Var(ValueSpec),
    Import(Vec<ImportSpec>),
}

/// A compilation unit: package clause plus declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub package: String,
    pub decls: Vec<Decl>,
}
