use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer met a character that starts no token.
    #[error("Syntax error on line {line}: Unexpected character '{found}'.")]
    UnexpectedCharacter {
        /// The unrecognized source text.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("Syntax error on line {line}: Literal is too large.")]
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a token that cannot start a statement or an expression.
    #[error("Syntax error on line {line}: Unexpected token {found}.")]
    UnexpectedToken {
        /// The kind of the offending token.
        found: TokenKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token kind was required but another one was found.
    #[error("Syntax error on line {line}: Expected {expected}, found {found}.")]
    ExpectedToken {
        /// The kind that was required.
        expected: TokenKind,
        /// The kind that was actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input in the middle of a construct.
    #[error("Syntax error: Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
    },
}
