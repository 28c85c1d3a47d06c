use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_comparison, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token sequence into a program.
///
/// Statements are parsed until the sequence is exhausted. Every token must be
/// part of some statement: a stray token after a complete statement is
/// reported, never skipped. The first error aborts parsing and no partial
/// program is returned.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: The `(Token, line)` pairs produced by the lexer.
///
/// # Returns
/// The ordered list of top-level statements.
///
/// # Example
/// ```
/// use minnow::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("x = 1\nif x { print x }").unwrap();
/// let program = parse_program(&tokens).unwrap();
/// assert_eq!(program.len(), 2);
///
/// let tokens = tokenize("print 1 }").unwrap();
/// assert!(parse_program(&tokens).is_err());
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter)?);
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_comparison(tokens)
}
