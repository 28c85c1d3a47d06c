use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect_token,
        },
    },
};

/// Parses a unary expression.
///
/// The only prefix operator is `-` (numeric negation). It is
/// right-associative, so `--x` is parsed as `-(-x)`, and binds tighter than
/// `*` and `/`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Operator(BinaryOperator::Sub), line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - integer and string literals
/// - variable references
/// - parenthesized expressions
///
/// Grammar: `primary := NUMBER | STRING | IDENTIFIER | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary expression.
///
/// # Errors
/// - `UnexpectedToken` if the token cannot start an expression.
/// - `ExpectedToken` if a parenthesized expression is not closed.
/// - `UnexpectedEndOfInput` if the input ends before an expression.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), line)) => Ok(Expr::Literal { value: LiteralValue::Integer(*n),
                                                             line:  *line, }),
        Some((Token::Str(s), line)) => Ok(Expr::Literal { value: LiteralValue::Text(s.clone()),
                                                          line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens)?;
            expect_token(tokens, TokenKind::RParen)?;
            Ok(expr)
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { found: tok.kind(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "expression".to_string() }),
    }
}
