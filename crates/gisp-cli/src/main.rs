//! gisp CLI entry point.

mod repl;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rhizome_gisp_compiler::{Compiler, CompilerConfig};
use rhizome_gisp_syntax_lisp::read;
use rhizome_gisp_target_go::render_file;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gisp")]
#[command(about = "Compile gisp source to Go")]
struct Cli {
    /// Source file to compile; starts a REPL when omitted
    file: Option<PathBuf>,

    /// What to print
    #[arg(long, value_enum, default_value_t = Emit::Go)]
    emit: Emit,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Compiler configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Package holding the runtime helpers, overrides the config file
    #[arg(long)]
    core_package: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Emit {
    /// Rendered Go source
    Go,
    /// Go syntax tree, debug formatted
    Ast,
    /// Parsed nodes as JSON
    Nodes,
}

fn load_config(cli: &Cli) -> Result<CompilerConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading config: {}", path.display());
            toml::from_str(&std::fs::read_to_string(path)?)?
        }
        None => CompilerConfig::default(),
    };
    if let Some(core_package) = &cli.core_package {
        config.core_package = core_package.clone();
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only compiler output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("gisp=info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let Some(file) = &cli.file else {
        repl::start(config);
        return Ok(());
    };

    info!("Compiling {}", file.display());
    let source = std::fs::read_to_string(file)?;
    let nodes = read(&source)?;

    let output = match cli.emit {
        Emit::Nodes => serde_json::to_string_pretty(&nodes)?,
        Emit::Ast => format!("{:#?}", Compiler::new(config).compile_file(&nodes)?),
        Emit::Go => render_file(&Compiler::new(config).compile_file(&nodes)?),
    };

    match &cli.out {
        Some(path) => {
            std::fs::write(path, &output)?;
            info!("Wrote: {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}
