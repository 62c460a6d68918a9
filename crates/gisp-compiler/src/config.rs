//! Compiler configuration.

use serde::{Deserialize, Serialize};

/// Names the compiler bakes into generated code.
///
/// Every field has a default, so a configuration file only needs the keys it
/// changes:
///
/// ```toml
/// core_package = "rt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Package name used when the source has no `(ns ...)` form.
    pub package: String,
    /// Function name Go treats as the program entry point.
    pub entry_point: String,
    /// Package holding the runtime helpers (`ADD`, `Get`, `Any`, ...).
    pub core_package: String,
    /// Name of the catch-all type inside `core_package`.
    pub any_type: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            package: "main".to_string(),
            entry_point: "main".to_string(),
            core_package: "core".to_string(),
            any_type: "Any".to_string(),
        }
    }
}
