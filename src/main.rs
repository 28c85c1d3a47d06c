use std::fs;

use clap::{Parser, ValueEnum};
use minnow::{
    Error, get_result,
    interpreter::{lexer::tokenize, parser::core::parse_program},
};
use tracing_subscriber::EnvFilter;

/// minnow is a tiny imperative scripting language with variables, `print`
/// and `if`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minnow to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// What to print: the program's output, its tokens, or its syntax tree.
    #[arg(short, long, value_enum, default_value_t = Emit::Output)]
    emit: Emit,

    contents: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    Output,
    Tokens,
    Ast,
}

fn main() {
    // Diagnostics go to stderr; stdout carries only the script's output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let result = match args.emit {
        Emit::Output => get_result(&script),
        Emit::Tokens => dump_tokens(&script),
        Emit::Ast => dump_ast(&script),
    };

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    }
}

/// Renders the token sequence, one `line:token` pair per line.
fn dump_tokens(script: &str) -> Result<String, Error> {
    let tokens = tokenize(script)?;

    Ok(tokens.iter()
             .map(|(token, line)| format!("{line}:{token}"))
             .collect::<Vec<_>>()
             .join("\n"))
}

/// Renders the parsed program as a pretty-printed syntax tree.
fn dump_ast(script: &str) -> Result<String, Error> {
    let tokens = tokenize(script)?;
    let program = parse_program(&tokens)?;

    Ok(format!("{program:#?}"))
}
