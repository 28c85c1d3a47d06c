use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a print statement (`print <expression>`).
/// - a conditional (`if <expression> { ... }`).
/// - an assignment (`<identifier> = <expression>`).
///
/// The first token decides which form is parsed. A bare expression is not a
/// statement, so any other leading token is a syntax error.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Print, _)) => parse_print(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::Identifier(_), _)) => parse_assignment(tokens),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { found: tok.kind(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "statement".to_string() }),
    }
}

/// Parses a print statement of the form `print <expression>`.
///
/// # Errors
/// Propagates any error from parsing the printed expression.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, TokenKind::Print)?;
    let expr = parse_expression(tokens)?;

    Ok(Statement::Print { expr, line })
}

/// Parses a conditional statement.
///
/// Syntax:
/// ```text
///     if <condition> { <statement>* }
/// ```
/// There is no `else` branch. The body is a plain statement list; it does not
/// open a new variable scope.
///
/// # Errors
/// - `ExpectedToken` if the `{` after the condition is missing.
/// - `UnexpectedEndOfInput` if the closing `}` never comes.
/// - Propagates any errors from condition or body parsing.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, TokenKind::If)?;
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::If { condition,
                       body,
                       line })
}

/// Parses an assignment statement of the form `<identifier> = <expression>`.
///
/// The caller has already seen the identifier; the `=` is verified with a
/// second token of lookahead before anything is consumed, so a lone
/// identifier is reported as a missing `=`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is not followed by `=`,
/// - the assigned expression fails to parse,
/// - input ends unexpectedly.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    match lookahead.peek() {
        Some((Token::Assign, _)) => {},
        Some((tok, line)) => {
            return Err(ParseError::ExpectedToken { expected: TokenKind::Assign,
                                                   found:    tok.kind(),
                                                   line:     *line, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected: TokenKind::Assign.to_string() });
        },
    }

    let (name, line) = parse_identifier(tokens)?;
    expect_token(tokens, TokenKind::Assign)?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Assignment { name, value, line })
}
