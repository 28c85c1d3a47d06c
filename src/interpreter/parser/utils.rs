use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Consumes the next token, which must be of the `expected` kind.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the required token.
/// - `expected`: The kind that must come next.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is of another kind,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: TokenKind)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok.kind() == expected => Ok(*line),
        Some((tok, line)) => Err(ParseError::ExpectedToken { expected,
                                                             found: tok.kind(),
                                                             line: *line }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: expected.to_string() }),
    }
}

/// Parses a plain identifier and returns its name with its line.
///
/// The next token must be `Token::Identifier`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok((name.clone(), *line)),
        Some((tok, line)) => Err(ParseError::ExpectedToken { expected: TokenKind::Identifier,
                                                             found:    tok.kind(),
                                                             line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: TokenKind::Identifier.to_string() }),
    }
}
