use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, statement::parse_statement, utils::expect_token},
    },
};

/// Parses a block of statements delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// closing `}` token is consumed; running out of tokens first is an error.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The statements of the block, in source order.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, TokenKind::LBrace)?;

    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: TokenKind::RBrace.to_string() });
            },
        }
    }

    Ok(statements)
}
