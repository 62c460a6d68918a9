//! Tests for the gisp reader.

use super::*;
use rhizome_gisp_ir::{Node, NumberKind};

fn read_one(source: &str) -> Node {
    let mut nodes = read(source).expect("read failed");
    assert_eq!(nodes.len(), 1, "source: {}", source);
    nodes.remove(0)
}

#[test]
fn test_number_literals() {
    assert_eq!(read_one("42"), Node::int("42"));
    assert_eq!(read_one("-7"), Node::int("-7"));
    assert_eq!(read_one("+7"), Node::int("7"));
    assert_eq!(read_one("0x1F"), Node::int("0x1F"));
    assert_eq!(read_one("3.14"), Node::float("3.14"));
    assert_eq!(read_one("1e9"), Node::float("1e9"));
    assert_eq!(read_one("2.5e-3"), Node::float("2.5e-3"));
    assert_eq!(read_one("4i"), Node::number("4i", NumberKind::Imag));
    assert_eq!(read_one("1.5i"), Node::number("1.5i", NumberKind::Imag));
}

#[test]
fn test_invalid_number() {
    assert_eq!(
        read("(f 12abc)"),
        Err(ReadError::InvalidNumber {
            text: "12abc".into(),
            line: 1,
            column: 4,
        })
    );
    assert!(matches!(read("1e"), Err(ReadError::InvalidNumber { .. })));
    assert!(matches!(read("0x"), Err(ReadError::InvalidNumber { .. })));
}

#[test]
fn test_digit_separators() {
    assert_eq!(read_one("1_000"), Node::int("1_000"));
    assert_eq!(read_one("1_0.2_5"), Node::float("1_0.2_5"));
    assert_eq!(read_one("0x_FF_FF"), Node::int("0x_FF_FF"));
    for source in ["1__0", "1_", "1_.5", "1._5", "1e_5", "0xF_", "0xF__F"] {
        assert!(
            matches!(read(source), Err(ReadError::InvalidNumber { .. })),
            "source: {}",
            source
        );
    }
}

#[test]
fn test_sign_alone_is_ident() {
    assert_eq!(read_one("-"), Node::ident("-"));
    assert_eq!(read_one("-x"), Node::ident("-x"));
}

#[test]
fn test_char_literals() {
    assert_eq!(read_one("\\a"), Node::number("'a'", NumberKind::Char));
    assert_eq!(read_one("\\newline"), Node::number("'\\n'", NumberKind::Char));
    assert_eq!(read_one("\\space"), Node::number("' '", NumberKind::Char));
    assert_eq!(read_one("\\("), Node::number("'('", NumberKind::Char));
    assert!(matches!(read("\\bogus"), Err(ReadError::InvalidChar { .. })));
}

#[test]
fn test_strings() {
    assert_eq!(read_one("\"hello\""), Node::string("hello"));
    assert_eq!(read_one("\"a\\n\\\"b\\\"\""), Node::string("a\n\"b\""));
    assert_eq!(read_one("\"(not a call)\""), Node::string("(not a call)"));
}

#[test]
fn test_string_errors() {
    assert_eq!(
        read("\"open"),
        Err(ReadError::UnterminatedString { line: 1, column: 1 })
    );
    assert!(matches!(
        read("\"bad \\q\""),
        Err(ReadError::InvalidEscape { escape: 'q', .. })
    ));
}

#[test]
fn test_identifiers() {
    assert_eq!(read_one("fmt/println"), Node::ident("fmt/println"));
    assert_eq!(read_one(":as"), Node::ident(":as"));
    assert_eq!(read_one("&"), Node::ident("&"));
    assert_eq!(read_one("empty?"), Node::ident("empty?"));
}

#[test]
fn test_call_and_vector() {
    assert_eq!(
        read_one("(def add (fn [a b] (+ a b)))"),
        Node::call(
            Node::ident("def"),
            vec![
                Node::ident("add"),
                Node::call(
                    Node::ident("fn"),
                    vec![
                        Node::vector(vec![Node::ident("a"), Node::ident("b")]),
                        Node::call(Node::ident("+"), vec![Node::ident("a"), Node::ident("b")]),
                    ],
                ),
            ],
        )
    );
}

#[test]
fn test_multiple_forms_comments_and_commas() {
    let nodes = read("; header\n(ns demo)\n\n(def x [1, 2, 3]) ; trailing\n").unwrap();
    assert_eq!(nodes.len(), 2);
    assert!(nodes[0].is_call_to("ns"));
    assert_eq!(
        nodes[1],
        Node::call(
            Node::ident("def"),
            vec![
                Node::ident("x"),
                Node::vector(vec![Node::int("1"), Node::int("2"), Node::int("3")]),
            ],
        )
    );
}

#[test]
fn test_empty_source() {
    assert_eq!(read("").unwrap(), vec![]);
    assert_eq!(read("  ; nothing\n").unwrap(), vec![]);
}

#[test]
fn test_empty_call() {
    assert_eq!(read("\n  ()"), Err(ReadError::EmptyCall { line: 2, column: 3 }));
}

#[test]
fn test_unbalanced() {
    assert!(matches!(
        read("(f [1 2)"),
        Err(ReadError::UnexpectedCloser { found: ')', line: 1, column: 8 })
    ));
    assert!(matches!(
        read("(f 1"),
        Err(ReadError::UnexpectedEof { expected: "')'", .. })
    ));
    assert!(matches!(
        read("]"),
        Err(ReadError::UnexpectedCloser { found: ']', .. })
    ));
}

#[test]
fn test_error_display() {
    let err = read("(f\n  12x)").unwrap_err();
    assert_eq!(err.to_string(), "2:3: invalid number: 12x");
}
