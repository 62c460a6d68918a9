use std::io::{self, BufRead, Write};

use rhizome_gisp_compiler::{Compiler, CompilerConfig};
use rhizome_gisp_ir::Node;
use rhizome_gisp_syntax_lisp::read;
use rhizome_gisp_target_go::render_expr;

const PROMPT: &str = ">> ";

/// Read a line, show its nodes, then each node compiled as an expression.
pub fn start(config: CompilerConfig) {
    println!("gisp REPL");
    println!("Type 'exit' or 'quit' to exit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", PROMPT);
        if let Err(e) = io::stdout().flush() {
            eprintln!("Error writing prompt: {}", e);
            break;
        }

        let input = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
            None => break,
        };
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        let nodes = match read(input) {
            Ok(nodes) => nodes,
            Err(e) => {
                eprintln!("Read error: {}", e);
                continue;
            }
        };
        eval_line(&config, &nodes);
    }
}

fn eval_line(config: &CompilerConfig, nodes: &[Node]) {
    for node in nodes {
        println!("{}", node);
    }

    // A fresh compiler per line, so synthetic names restart at zero.
    let mut compiler = Compiler::new(config.clone());
    for node in nodes {
        match compiler.compile_expr(node) {
            Ok(expr) => {
                println!("{:#?}", expr);
                println!("{}", render_expr(&expr));
            }
            Err(e) => {
                eprintln!("Compile error: {}", e);
                return;
            }
        }
    }
}
