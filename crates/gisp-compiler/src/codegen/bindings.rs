//! Binding vectors shared by `let` and `loop`.

use super::{idiomatic_selector, invalid_argument, CompileError, Compiler};
use rhizome_gisp_ir::Node;
use rhizome_gisp_target_go::{AssignOp, Stmt};

/// One entry of a binding vector: `[a 1]` or `[a b (pair)]`.
#[derive(Debug, Clone)]
pub(super) struct Binding {
    pub targets: Vec<String>,
    pub value: Node,
}

/// Parse a binding vector in either the nested (`[[a 1] [b 2]]`) or the flat
/// (`[a 1 b 2]`) shape.
pub(super) fn parse_bindings(form: &str, node: &Node) -> Result<Vec<Binding>, CompileError> {
    let Some(elements) = node.as_vector() else {
        return Err(invalid_argument(
            form,
            format!("expected a binding vector, got {}", node.kind_name()),
        ));
    };

    if !elements.is_empty() && elements.iter().all(|element| element.as_vector().is_some()) {
        elements
            .iter()
            .map(|element| parse_nested(form, element))
            .collect()
    } else {
        parse_flat(form, elements)
    }
}

fn parse_nested(form: &str, node: &Node) -> Result<Binding, CompileError> {
    let elements = node.as_vector().unwrap_or_default();
    let Some((value, targets)) = elements.split_last() else {
        return Err(invalid_argument(form, "empty binding"));
    };
    if targets.is_empty() {
        return Err(invalid_argument(form, format!("binding {node} has no name")));
    }
    Ok(Binding {
        targets: targets
            .iter()
            .map(|target| binding_name(form, target))
            .collect::<Result<_, _>>()?,
        value: value.clone(),
    })
}

fn parse_flat(form: &str, elements: &[Node]) -> Result<Vec<Binding>, CompileError> {
    if elements.len() % 2 != 0 {
        return Err(invalid_argument(
            form,
            "binding vector needs an even number of forms",
        ));
    }
    elements
        .chunks(2)
        .map(|pair| {
            Ok(Binding {
                targets: vec![binding_name(form, &pair[0])?],
                value: pair[1].clone(),
            })
        })
        .collect()
}

fn binding_name(form: &str, node: &Node) -> Result<String, CompileError> {
    node.as_ident().map(str::to_string).ok_or_else(|| {
        invalid_argument(
            form,
            format!("binding name must be an identifier, got {node}"),
        )
    })
}

impl Compiler {
    /// One assignment per binding, in source order.
    pub(super) fn compile_bindings(
        &mut self,
        bindings: &[Binding],
        op: AssignOp,
    ) -> Result<Vec<Stmt>, CompileError> {
        bindings
            .iter()
            .map(|binding| {
                Ok(Stmt::Assign {
                    lhs: binding
                        .targets
                        .iter()
                        .map(|target| idiomatic_selector(target))
                        .collect(),
                    op,
                    rhs: vec![self.compile_expr(&binding.value)?],
                })
            })
            .collect()
    }
}
