use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Context;
use clap::Parser as _;
use tracing::info;

use jsparse::{
    config::ParserConfig,
    display_error,
    lexer::{lexer::tokenize, source::TokenBuffer},
    parser::parser::Parser,
    tracing_config::init_tracing,
};

/// Parse a source file and print its syntax tree.
#[derive(clap::Parser, Debug)]
#[command(name = "jsparse", version, about)]
struct Args {
    /// Source file to parse
    file: PathBuf,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Stop at the first statement that fails to parse
    #[arg(long)]
    no_recover: bool,

    /// Stop after this many diagnostics
    #[arg(long)]
    max_errors: Option<usize>,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let args = Args::parse();
    let file_name = args.file.to_string_lossy().to_string();
    let source = read_to_string(&args.file).with_context(|| format!("failed to read {}", file_name))?;

    let start = Instant::now();
    let tokens = tokenize(&source);
    info!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    if args.tokens {
        for token in &tokens {
            token.debug();
        }
    }

    let config = ParserConfig::default()
        .with_recover(!args.no_recover)
        .with_max_errors(args.max_errors);

    let parse_start = Instant::now();
    let mut parser = Parser::with_config(TokenBuffer::new(tokens), config);
    let program = parser.parse_program();
    info!(
        statements = program.body.len(),
        errors = parser.diagnostics().len(),
        elapsed = ?parse_start.elapsed(),
        "parsed"
    );

    println!("{:#?}", program);

    let diagnostics = parser.into_diagnostics();
    for error in &diagnostics {
        display_error(error, &source, &file_name);
    }

    if diagnostics.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
