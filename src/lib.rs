//! # minnow
//!
//! minnow is a tiny imperative scripting language written in Rust.
//! Source text is tokenized, parsed into an abstract syntax tree and run by a
//! tree-walking interpreter. A program can assign variables, print values and
//! branch with `if`; its result is the printed text or a one-line error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{
    evaluator::core::Context, lexer::tokenize, parser::core::parse_program,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code, each carrying the source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Provides the crate-level `Error` that every stage converts into.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use error::Error;

/// Runs a program and returns its printed output.
///
/// The source is tokenized, parsed in full, and executed against a fresh
/// context. On success the printed lines are joined with `"\n"`; a program
/// that prints nothing yields an empty string. The first failure at any stage
/// aborts the run, and output printed before it is discarded.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use minnow::get_result;
///
/// let source = "x = 10\nprint x\nx = x + 5\nprint x";
/// assert_eq!(get_result(source).unwrap(), "10\n15");
///
/// // Output printed before a failure is not returned.
/// let source = "print 1\nprint 1 / 0";
/// assert!(get_result(source).is_err());
/// ```
pub fn get_result(source: &str) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "tokenized source");

    let program = parse_program(&tokens)?;
    debug!(statements = program.len(), "parsed program");

    let mut context = Context::new();
    context.run(&program)?;
    debug!(lines = context.output.len(), "program finished");

    Ok(context.output.join("\n"))
}

/// Runs a program and returns either its output or an error line.
///
/// This is the entry point for hosts: lexical, syntax and runtime failures
/// are rendered as `"Error: <message>"` instead of being returned. Nesting
/// depth is bounded only by the thread's stack, so pathologically deep
/// parentheses or negations can still exhaust it.
///
/// # Examples
/// ```
/// use minnow::execute;
///
/// assert_eq!(execute("print \"Hello, World!\""), "Hello, World!");
/// assert_eq!(execute("a = -7\nb = 2\nprint a / b"), "-4");
/// assert!(execute("a = 1\nb = 0\nprint a / b").starts_with("Error: "));
/// ```
#[must_use]
pub fn execute(source: &str) -> String {
    get_result(source).unwrap_or_else(|e| {
                          debug!(error = %e, "script failed");
                          format!("Error: {e}")
                      })
}
