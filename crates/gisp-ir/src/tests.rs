//! Tests for the node model.

use crate::{Node, NumberKind};

#[test]
fn test_display_call() {
    let node = Node::call(
        Node::ident("fmt/println"),
        vec![Node::string("hi"), Node::int("42")],
    );
    assert_eq!(node.to_string(), "(fmt/println \"hi\" 42)");
}

#[test]
fn test_display_vector() {
    let node = Node::vector(vec![
        Node::vector(vec![Node::ident("i"), Node::int("0")]),
        Node::float("2.5"),
    ]);
    assert_eq!(node.to_string(), "[[i 0] 2.5]");
}

#[test]
fn test_display_string_escapes() {
    let node = Node::string("say \"hi\"\n");
    assert_eq!(node.to_string(), "\"say \\\"hi\\\"\\n\"");
}

#[test]
fn test_accessors() {
    let call = Node::call(Node::ident("loop"), vec![Node::vector(vec![])]);
    assert_eq!(call.call_name(), Some("loop"));
    assert!(call.is_call_to("loop"));
    assert!(!call.is_call_to("recur"));

    let (callee, args) = call.as_call().unwrap();
    assert_eq!(callee.as_ident(), Some("loop"));
    assert_eq!(args[0].as_vector(), Some(&[][..]));

    assert_eq!(Node::string("x").as_string(), Some("x"));
    assert_eq!(Node::int("1").as_ident(), None);
}

#[test]
fn test_call_name_requires_ident_callee() {
    let inner = Node::call(Node::ident("f"), vec![]);
    let call = Node::call(inner, vec![Node::int("1")]);
    assert_eq!(call.call_name(), None);
}

#[test]
fn test_kind_names() {
    assert_eq!(Node::ident("a").kind_name(), "identifier");
    assert_eq!(Node::vector(vec![]).kind_name(), "vector");
    assert_eq!(Node::number("1i", NumberKind::Imag).kind_name(), "number");
}

#[test]
fn test_json_shape() {
    let node = Node::call(Node::ident("+"), vec![Node::int("1")]);
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "call",
            "callee": { "kind": "ident", "name": "+" },
            "args": [{ "kind": "number", "literal": "1", "number": "int" }]
        })
    );

    let back: Node = serde_json::from_value(json).unwrap();
    assert_eq!(back, node);
}
