//! Whole files through read, compile and render.

use rhizome_gisp_compiler::{compile, CompileError, Compiler, CompilerConfig};
use rhizome_gisp_syntax_lisp::read;
use rhizome_gisp_target_go::{render_file, Decl};

fn compile_source(source: &str) -> Result<String, CompileError> {
    let nodes = read(source).expect("read failed");
    compile(&nodes).map(|file| render_file(&file))
}

fn assert_file(source: &str, expected: &str) {
    let rendered = compile_source(source).expect("compile failed");
    assert_eq!(rendered, expected, "source: {}", source);
}

#[test]
fn test_empty_file() {
    assert_file("", "package main\n");
}

#[test]
fn test_function_definition() {
    assert_file(
        "(def add (fn [a b] (+ a b)))",
        "package main\n\nfunc add(a, b core.Any) core.Any {\n\treturn core.ADD(a, b)\n}\n",
    );
}

#[test]
fn test_variable_definition() {
    assert_file(
        "(def max-depth 10) (def names [\"a\" \"b\"])",
        "package main\n\nvar maxDepth = 10\n\nvar names = []core.Any{\"a\", \"b\"}\n",
    );
}

#[test]
fn test_namespace_and_entry_point() {
    let source = r#"
        ; greeting program
        (ns demo
          "fmt"
          ["github.com/gisp/core" :as core])

        (def greeting "hi")

        (def main
          (fn []
            (fmt/println greeting)))
    "#;
    let expected = "\
package demo

import (
\t\"fmt\"
\tcore \"github.com/gisp/core\"
)

var greeting = \"hi\"

func main() {
\tfmt.Println(greeting)
}
";
    assert_file(source, expected);
}

#[test]
fn test_entry_point_keeps_earlier_statements() {
    assert_file(
        "(def main (fn [] (setup) (run 1)))",
        "package main\n\nfunc main() {\n\tsetup()\n\trun(1)\n}\n",
    );
}

#[test]
fn test_namespace_without_imports() {
    assert_file("(ns util) (def x 1)", "package util\n\nvar x = 1\n");
}

#[test]
fn test_later_namespace_is_a_call() {
    assert_file(
        "(def x 1) (ns other)",
        "package main\n\nvar x = 1\n\nvar _ = ns(other)\n",
    );

    let nodes = read("(def x 1) (ns other)").unwrap();
    let file = compile(&nodes).unwrap();
    assert_eq!(file.package, "main");
    assert!(!file.decls.iter().any(|decl| matches!(decl, Decl::Import(_))));
}

#[test]
fn test_top_level_call() {
    assert_file(
        "(fmt/println \"hi\")",
        "package main\n\nvar _ = fmt.Println(\"hi\")\n",
    );
}

#[test]
fn test_loop_in_function() {
    let source = "
        (def count-to (fn [n]
          (loop [i 0]
            (if (< i n) (recur (+ i 1)) i))))
    ";
    let expected = "\
package main

func countTo(n core.Any) core.Any {
\treturn func() core.Any {
\t\ti := 0
\t\tvar __result1 core.Any
\t\tfor __continue0 := true; __continue0; {
\t\t\t__continue0 = false
\t\t\t__result1 = func() core.Any {
\t\t\t\tif core.LT(i, n) {
\t\t\t\t\treturn func() core.Any {
\t\t\t\t\t\ti = core.ADD(i, 1)
\t\t\t\t\t\t__continue0 = true
\t\t\t\t\t\treturn nil
\t\t\t\t\t}()
\t\t\t\t} else {
\t\t\t\t\treturn i
\t\t\t\t}
\t\t\t}()
\t\t}
\t\treturn __result1
\t}()
}
";
    assert_file(source, expected);
}

#[test]
fn test_configured_names() {
    let config = CompilerConfig {
        package: "lib".into(),
        entry_point: "start".into(),
        core_package: "rt".into(),
        any_type: "Value".into(),
    };
    let nodes = read("(def start (fn [x] (+ x 1))) (def main (fn [] 1))").unwrap();
    let file = Compiler::new(config).compile_file(&nodes).unwrap();
    assert_eq!(
        render_file(&file),
        "package lib\n\nfunc start(x rt.Value) {\n\trt.ADD(x, 1)\n}\n\nfunc main() rt.Value {\n\treturn 1\n}\n"
    );
}

#[test]
fn test_top_level_errors() {
    assert_eq!(
        compile_source("42"),
        Err(CompileError::TopLevelNotCall("42".into()))
    );
    assert_eq!(
        compile_source("(def x 1) [1]"),
        Err(CompileError::TopLevelNotCall("[1]".into()))
    );
    assert_eq!(
        compile_source("(ns \"demo\")"),
        Err(CompileError::InvalidNamespace("\"demo\"".into()))
    );
    assert_eq!(
        compile_source("(ns demo 42)"),
        Err(CompileError::InvalidImport("42".into()))
    );
    assert!(matches!(
        compile_source("(ns demo [\"fmt\" as f])"),
        Err(CompileError::InvalidImport(_))
    ));
    assert!(matches!(
        compile_source("(ns demo [\"fmt\"])"),
        Err(CompileError::InvalidImport(_))
    ));
    assert!(matches!(
        compile_source("(def x)"),
        Err(CompileError::InvalidArgCount { .. })
    ));
    assert!(matches!(
        compile_source("(def \"x\" 1)"),
        Err(CompileError::InvalidArgument { .. })
    ));
    assert_eq!(
        compile_source("(def f (fn [] (def g 1)))"),
        Err(CompileError::DefInExpression)
    );
}

#[test]
fn test_first_error_aborts() {
    assert_eq!(
        compile_source("(def ok 1) (recur 1) (loop [i 0] i)"),
        Err(CompileError::RecurOutsideLoop)
    );
}
