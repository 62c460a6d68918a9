//! Source identifiers to Go naming convention.

use rhizome_gisp_target_go::{Expr, Type};

/// Go reserved keywords that need escaping.
const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return",
    "select", "struct", "switch", "type", "var",
];

/// Prefix of compiler-generated identifiers, which always end in a digit.
/// Translated source identifiers with this prefix get a trailing `_`, so the
/// two never collide.
pub(super) const SYNTHETIC_PREFIX: &str = "__";

/// Convert a source identifier to an unexported Go identifier.
///
/// `string-length` becomes `stringLength`; characters Go does not allow in
/// identifiers become `_`; a leading digit or a keyword gets a `_` prefix.
/// Names starting with [`SYNTHETIC_PREFIX`] get a `_` suffix.
pub fn idiomatic_ident(name: &str) -> String {
    camel_case(name, false)
}

/// Like [`idiomatic_ident`] but capitalized, for names reached through a
/// package selector.
fn exported_ident(name: &str) -> String {
    camel_case(name, true)
}

fn camel_case(name: &str, exported: bool) -> String {
    if name == "_" {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len());
    for (idx, word) in name.split('-').filter(|word| !word.is_empty()).enumerate() {
        let mut chars = word.chars().map(|c| {
            if c.is_alphabetic() || c.is_ascii_digit() || c == '_' {
                c
            } else {
                '_'
            }
        });
        if idx > 0 || exported {
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
            }
        }
        out.extend(chars);
    }

    if out.is_empty() {
        out.push('_');
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) || GO_KEYWORDS.contains(&out.as_str()) {
        out.insert(0, '_');
    }
    if out.starts_with(SYNTHETIC_PREFIX) {
        out.push('_');
    }
    out
}

/// Convert a possibly package-qualified identifier to a Go expression.
///
/// `fmt/println` becomes the selector `fmt.Println`; a name without `/`
/// (or with an empty segment, like `/`) becomes a plain identifier.
pub fn idiomatic_selector(name: &str) -> Expr {
    let segments: Vec<&str> = name.split('/').collect();
    match segments.split_first() {
        Some((package, fields))
            if !fields.is_empty() && segments.iter().all(|segment| !segment.is_empty()) =>
        {
            fields
                .iter()
                .fold(Expr::ident(idiomatic_ident(package)), |base, field| {
                    Expr::selector(base, exported_ident(field))
                })
        }
        _ => Expr::ident(idiomatic_ident(name)),
    }
}

/// A type named literally in source: `int`, or `pkg/Name` for a qualified one.
pub(super) fn type_from_name(name: &str) -> Type {
    match name.split_once('/') {
        Some((package, name)) if !package.is_empty() && !name.is_empty() => {
            Type::qualified(package, name)
        }
        _ => Type::name(name),
    }
}
