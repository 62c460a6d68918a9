//! Hand-written reader for gisp source.

use rhizome_gisp_ir::{Node, NumberKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ReadError {
    #[error("{line}:{column}: unexpected end of input, expected {expected}")]
    UnexpectedEof {
        expected: &'static str,
        line: usize,
        column: usize,
    },

    #[error("{line}:{column}: unexpected '{found}'")]
    UnexpectedCloser {
        found: char,
        line: usize,
        column: usize,
    },

    #[error("{line}:{column}: empty call, a call needs a callee")]
    EmptyCall { line: usize, column: usize },

    #[error("{line}:{column}: unterminated string")]
    UnterminatedString { line: usize, column: usize },

    #[error("{line}:{column}: invalid escape '\\{escape}' in string")]
    InvalidEscape {
        escape: char,
        line: usize,
        column: usize,
    },

    #[error("{line}:{column}: invalid number: {text}")]
    InvalidNumber {
        text: String,
        line: usize,
        column: usize,
    },

    #[error("{line}:{column}: invalid character literal: \\{text}")]
    InvalidChar {
        text: String,
        line: usize,
        column: usize,
    },
}

/// Read every top-level form in `source`.
pub fn read(source: &str) -> Result<Vec<Node>, ReadError> {
    let mut reader = Reader::new(source);
    let mut nodes = Vec::new();

    reader.skip_trivia();
    while reader.peek().is_some() {
        nodes.push(reader.read_node()?);
        reader.skip_trivia();
    }

    Ok(nodes)
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | '(' | ')' | '[' | ']' | '"')
}

struct Reader<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Reader<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            if c == ';' {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else if c.is_whitespace() || c == ',' {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn read_node(&mut self) -> Result<Node, ReadError> {
        self.skip_trivia();
        let (line, column) = self.position();

        match self.peek() {
            None => Err(ReadError::UnexpectedEof {
                expected: "a form",
                line,
                column,
            }),
            Some('(') => {
                self.bump();
                let mut items = self.read_sequence(')')?;
                if items.is_empty() {
                    return Err(ReadError::EmptyCall { line, column });
                }
                let callee = items.remove(0);
                Ok(Node::call(callee, items))
            }
            Some('[') => {
                self.bump();
                Ok(Node::vector(self.read_sequence(']')?))
            }
            Some(found @ (')' | ']')) => Err(ReadError::UnexpectedCloser {
                found,
                line,
                column,
            }),
            Some('"') => self.read_string(),
            Some('\\') => self.read_char(),
            Some(_) => self.read_atom(),
        }
    }

    fn read_sequence(&mut self, close: char) -> Result<Vec<Node>, ReadError> {
        let mut items = Vec::new();
        loop {
            self.skip_trivia();
            match self.peek() {
                None => {
                    let (line, column) = self.position();
                    return Err(ReadError::UnexpectedEof {
                        expected: if close == ')' { "')'" } else { "']'" },
                        line,
                        column,
                    });
                }
                Some(c) if c == close => {
                    self.bump();
                    return Ok(items);
                }
                Some(_) => items.push(self.read_node()?),
            }
        }
    }

    fn read_string(&mut self) -> Result<Node, ReadError> {
        let (line, column) = self.position();
        self.bump();

        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(ReadError::UnterminatedString { line, column }),
                Some('"') => return Ok(Node::string(value)),
                Some('\\') => {
                    let (esc_line, esc_column) = self.position();
                    let escape = self
                        .bump()
                        .ok_or(ReadError::UnterminatedString { line, column })?;
                    value.push(match escape {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '"' => '"',
                        '\\' => '\\',
                        _ => {
                            return Err(ReadError::InvalidEscape {
                                escape,
                                line: esc_line,
                                column: esc_column,
                            });
                        }
                    });
                }
                Some(c) => value.push(c),
            }
        }
    }

    fn read_char(&mut self) -> Result<Node, ReadError> {
        let (line, column) = self.position();
        self.bump();

        let first = self.bump().ok_or(ReadError::UnexpectedEof {
            expected: "a character",
            line,
            column,
        })?;
        let mut name = String::from(first);
        while let Some(c) = self.peek() {
            if is_delimiter(c) {
                break;
            }
            name.push(c);
            self.bump();
        }

        let c = match name.as_str() {
            "newline" => '\n',
            "space" => ' ',
            "tab" => '\t',
            _ if name.chars().count() == 1 => first,
            _ => return Err(ReadError::InvalidChar { text: name, line, column }),
        };

        Ok(Node::number(rune_literal(c), NumberKind::Char))
    }

    fn read_atom(&mut self) -> Result<Node, ReadError> {
        let (line, column) = self.position();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_delimiter(c) {
                break;
            }
            self.bump();
        }
        let text = &self.source[start..self.pos];

        let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
        if !unsigned.starts_with(|c: char| c.is_ascii_digit()) {
            return Ok(Node::ident(text));
        }

        let number = classify_number(unsigned).ok_or_else(|| ReadError::InvalidNumber {
            text: text.to_string(),
            line,
            column,
        })?;
        let literal = text.strip_prefix('+').unwrap_or(text);
        Ok(Node::number(literal, number))
    }
}

/// Decide the kind of an unsigned numeric token, or None if it is malformed.
fn classify_number(text: &str) -> Option<NumberKind> {
    let (body, imaginary) = match text.strip_suffix('i') {
        Some(body) => (body, true),
        None => (text, false),
    };

    if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        let valid = !hex.is_empty()
            && !hex.ends_with('_')
            && !hex.contains("__")
            && hex.chars().all(|c| c.is_ascii_hexdigit() || c == '_');
        return (valid && !imaginary).then_some(NumberKind::Int);
    }

    let bytes = body.as_bytes();
    let mut idx = 0;
    // `_` is only allowed between two digits.
    let digits = |idx: &mut usize| {
        let start = *idx;
        while let Some(&b) = bytes.get(*idx) {
            let separator = b == b'_'
                && *idx > start
                && bytes[*idx - 1].is_ascii_digit()
                && bytes.get(*idx + 1).is_some_and(u8::is_ascii_digit);
            if !b.is_ascii_digit() && !separator {
                break;
            }
            *idx += 1;
        }
        *idx > start
    };

    if !digits(&mut idx) {
        return None;
    }

    let mut float = false;
    if idx < bytes.len() && bytes[idx] == b'.' {
        idx += 1;
        digits(&mut idx);
        float = true;
    }
    if idx < bytes.len() && (bytes[idx] == b'e' || bytes[idx] == b'E') {
        idx += 1;
        if idx < bytes.len() && (bytes[idx] == b'+' || bytes[idx] == b'-') {
            idx += 1;
        }
        if !digits(&mut idx) {
            return None;
        }
        float = true;
    }
    if idx != bytes.len() {
        return None;
    }

    Some(if imaginary {
        NumberKind::Imag
    } else if float {
        NumberKind::Float
    } else {
        NumberKind::Int
    })
}

fn rune_literal(c: char) -> String {
    match c {
        '\n' => "'\\n'".to_string(),
        '\t' => "'\\t'".to_string(),
        '\r' => "'\\r'".to_string(),
        '\'' => "'\\''".to_string(),
        '\\' => "'\\\\'".to_string(),
        c => format!("'{}'", c),
    }
}
