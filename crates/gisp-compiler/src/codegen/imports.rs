//! Import specs of an `(ns ...)` form.

use super::CompileError;
use rhizome_gisp_ir::Node;
use rhizome_gisp_target_go::{Decl, ImportSpec};

const ALIAS_MARKER: &str = ":as";

/// One import declaration for all specs, or None if there are none.
pub(super) fn compile_imports(specs: &[Node]) -> Result<Option<Decl>, CompileError> {
    if specs.is_empty() {
        return Ok(None);
    }
    let specs = specs.iter().map(import_spec).collect::<Result<_, _>>()?;
    Ok(Some(Decl::Import(specs)))
}

/// `"fmt"` or `["example.com/core" :as c]`.
fn import_spec(node: &Node) -> Result<ImportSpec, CompileError> {
    if let Some(path) = node.as_string() {
        return Ok(ImportSpec {
            name: None,
            path: path.to_string(),
        });
    }

    let invalid = || CompileError::InvalidImport(node.to_string());
    let Some([path, marker, alias, ..]) = node.as_vector() else {
        return Err(invalid());
    };
    let path = path.as_string().ok_or_else(invalid)?;
    if marker.as_ident() != Some(ALIAS_MARKER) {
        return Err(invalid());
    }
    let alias = alias.as_ident().ok_or_else(invalid)?;
    Ok(ImportSpec {
        name: Some(alias.to_string()),
        path: path.to_string(),
    })
}
