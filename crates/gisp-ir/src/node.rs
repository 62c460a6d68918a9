//! Node types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical kind of a number literal.
///
/// The kind is decided by the reader and carried through to the generated
/// literal unchanged, so `1`, `1.0`, `1i` and `\a` stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    Int,
    Float,
    Imag,
    Char,
}

/// A node of the source tree.
///
/// Nodes are immutable once read. The compiler never edits a node in place;
/// rewrites build new nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// `(callee args...)`
    Call { callee: Box<Node>, args: Vec<Node> },
    /// `[elements...]`
    Vector { elements: Vec<Node> },
    /// A number, `literal` is the text to emit (e.g. `0x1f`, `2.5e3`, `'a'`).
    Number { literal: String, number: NumberKind },
    /// A string, `value` is already unescaped.
    String { value: String },
    /// Any other atom: `foo`, `fmt/println`, `&`, `:as`.
    Ident { name: String },
}

impl Node {
    /// Creates a call node.
    pub fn call(callee: Node, args: Vec<Node>) -> Self {
        Node::Call {
            callee: Box::new(callee),
            args,
        }
    }

    /// Creates a vector node.
    pub fn vector(elements: Vec<Node>) -> Self {
        Node::Vector { elements }
    }

    /// Creates a number node of the given kind.
    pub fn number(literal: impl Into<String>, number: NumberKind) -> Self {
        Node::Number {
            literal: literal.into(),
            number,
        }
    }

    /// Creates an integer number node.
    pub fn int(literal: impl Into<String>) -> Self {
        Node::number(literal, NumberKind::Int)
    }

    /// Creates a float number node.
    pub fn float(literal: impl Into<String>) -> Self {
        Node::number(literal, NumberKind::Float)
    }

    /// Creates a string node.
    pub fn string(value: impl Into<String>) -> Self {
        Node::String {
            value: value.into(),
        }
    }

    /// Creates an identifier node.
    pub fn ident(name: impl Into<String>) -> Self {
        Node::Ident { name: name.into() }
    }

    /// Returns the identifier name if this is an Ident.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Node::Ident { name } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Returns the elements if this is a Vector.
    pub fn as_vector(&self) -> Option<&[Node]> {
        match self {
            Node::Vector { elements } => Some(elements),
            _ => None,
        }
    }

    /// Returns the unescaped value if this is a String.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Node::String { value } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns callee and arguments if this is a Call.
    pub fn as_call(&self) -> Option<(&Node, &[Node])> {
        match self {
            Node::Call { callee, args } => Some((callee, args)),
            _ => None,
        }
    }

    /// Returns the callee name if this is a call to an identifier.
    pub fn call_name(&self) -> Option<&str> {
        self.as_call().and_then(|(callee, _)| callee.as_ident())
    }

    /// Returns true if this is a call to the identifier `name`.
    pub fn is_call_to(&self, name: &str) -> bool {
        self.call_name() == Some(name)
    }

    /// Short lowercase name of the node kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Call { .. } => "call",
            Node::Vector { .. } => "vector",
            Node::Number { .. } => "number",
            Node::String { .. } => "string",
            Node::Ident { .. } => "identifier",
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Call { callee, args } => {
                write!(f, "({}", callee)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
            Node::Vector { elements } => {
                write!(f, "[")?;
                for (idx, element) in elements.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            Node::Number { literal, .. } => write!(f, "{}", literal),
            Node::String { value } => {
                write!(f, "\"")?;
                for c in value.chars() {
                    match c {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        '\r' => write!(f, "\\r")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                write!(f, "\"")
            }
            Node::Ident { name } => write!(f, "{}", name),
        }
    }
}
