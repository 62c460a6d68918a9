//! Integration tests for the outputs the CLI can emit.

use rhizome_gisp_compiler::{compile, Compiler, CompilerConfig};
use rhizome_gisp_syntax_lisp::read;
use rhizome_gisp_target_go::{render_expr, render_file};
use serde_json::json;

#[test]
fn test_emit_nodes_json() {
    let nodes = read("(f [1 \"a\"] x)").expect("read failed");
    let value = serde_json::to_value(&nodes).expect("serialize failed");
    assert_eq!(
        value,
        json!([{
            "kind": "call",
            "callee": { "kind": "ident", "name": "f" },
            "args": [
                {
                    "kind": "vector",
                    "elements": [
                        { "kind": "number", "literal": "1", "number": "int" },
                        { "kind": "string", "value": "a" }
                    ]
                },
                { "kind": "ident", "name": "x" }
            ]
        }])
    );
}

#[test]
fn test_emit_go_with_config_file() {
    let config: CompilerConfig =
        toml::from_str("package = \"tools\"\ncore_package = \"rt\"").expect("bad config");
    let nodes = read("(def inc (fn [x] (+ x 1)))").expect("read failed");
    let file = Compiler::new(config).compile_file(&nodes).expect("compile failed");
    assert_eq!(
        render_file(&file),
        "package tools\n\nfunc inc(x rt.Any) rt.Any {\n\treturn rt.ADD(x, 1)\n}\n"
    );
}

#[test]
fn test_emit_ast_is_debug_output() {
    let nodes = read("(def x 1)").expect("read failed");
    let file = compile(&nodes).expect("compile failed");
    let ast = format!("{:#?}", file);
    assert!(ast.starts_with("File {"));
    assert!(ast.contains("package: \"main\""));
}

#[test]
fn test_repl_line_compiles_each_form() {
    let nodes = read("(+ 1 2) (not ok)").expect("read failed");
    let mut compiler = Compiler::new(CompilerConfig::default());
    let rendered: Vec<String> = compiler
        .compile_exprs(&nodes)
        .expect("compile failed")
        .iter()
        .map(render_expr)
        .collect();
    assert_eq!(rendered, vec!["core.ADD(1, 2)", "!ok"]);
}
