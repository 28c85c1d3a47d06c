use logos::Logos;

use crate::{ast::BinaryOperator, error::ParseError};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Matching follows maximal munch: the longest match wins, and a fixed
/// keyword beats the identifier pattern on a tie. `print` and `if` are
/// therefore reserved, while `printer` is an ordinary identifier.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// String literal tokens, such as `"hello"`. No escape sequences.
    #[regex(r#""[^"]*""#, parse_string, allow_greedy = true)]
    Str(String),
    /// `print`
    #[token("print")]
    Print,
    /// `if`
    #[token("if")]
    If,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `=`
    #[token("=")]
    Assign,
    /// Arithmetic operators: `+`, `-`, `*` and `/`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    Operator(BinaryOperator),
    /// Comparison operators: `<=`, `>=`, `==`, `<` and `>`.
    #[token("<=", |_| BinaryOperator::LessEqual)]
    #[token(">=", |_| BinaryOperator::GreaterEqual)]
    #[token("==", |_| BinaryOperator::Equal)]
    #[token("<", |_| BinaryOperator::Less)]
    #[token(">", |_| BinaryOperator::Greater)]
    Compare(BinaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Identifier tokens; variable names such as `x` or `total_sum`.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Line breaks are skipped but counted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the payload-free kind of this token.
    ///
    /// ```
    /// use minnow::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Number(7).kind(), TokenKind::Number);
    /// assert_eq!(Token::Identifier("x".into()).kind(), TokenKind::Identifier);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Str(_) => TokenKind::Str,
            Self::Print => TokenKind::Print,
            Self::If => TokenKind::If,
            Self::LBrace => TokenKind::LBrace,
            Self::RBrace => TokenKind::RBrace,
            Self::Assign => TokenKind::Assign,
            Self::Operator(_) => TokenKind::Operator,
            Self::Compare(_) => TokenKind::Compare,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Identifier(_) => TokenKind::Identifier,
            // Skipped by the lexer callbacks, never yielded.
            Self::NewLine | Self::Ignored => TokenKind::Whitespace,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}({n})", self.kind()),
            Self::Str(s) => write!(f, "{}({s:?})", self.kind()),
            Self::Operator(op) | Self::Compare(op) => write!(f, "{}({op})", self.kind()),
            Self::Identifier(name) => write!(f, "{}({name})", self.kind()),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

/// The kind of a [`Token`], without its value.
///
/// Syntax errors carry a `TokenKind` to name the offending or missing token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal.
    Number,
    /// String literal.
    Str,
    /// `print` keyword.
    Print,
    /// `if` keyword.
    If,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `=`
    Assign,
    /// `+`, `-`, `*` or `/`.
    Operator,
    /// `<`, `>`, `<=`, `>=` or `==`.
    Compare,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Variable name.
    Identifier,
    /// Whitespace; never part of a token sequence.
    Whitespace,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Str => "STRING",
            Self::Print => "PRINT",
            Self::If => "IF",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Assign => "ASSIGN",
            Self::Operator => "OP",
            Self::Compare => "COMPARE",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Identifier => "IDENTIFIER",
            Self::Whitespace => "WHITESPACE",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Converts source text into a sequence of `(token, line)` pairs.
///
/// Whitespace is skipped. The first character that starts no token aborts
/// tokenization with an error instead of truncating the sequence.
///
/// # Errors
/// - `ParseError::UnexpectedCharacter` for text that matches no token,
///   including an unterminated string literal.
/// - `ParseError::LiteralTooLarge` for a digit run that overflows `i64`.
///
/// # Example
/// ```
/// use minnow::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1\nprint x").unwrap();
///
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[3], (Token::Print, 2));
/// assert!(tokenize("print 1 $ 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            // A string's line is the one it opens on; the callback has
            // already counted any newlines inside it.
            Ok(tok @ Token::Str(_)) => {
                let inner_lines = lexer.slice().matches('\n').count();
                tokens.push((tok, line - inner_lines));
            },
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => {
                let slice = lexer.slice();
                if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::LiteralTooLarge { line });
                }
                // An unterminated string's slice runs to the end of input;
                // only the character where lexing stopped is reported.
                let found = slice.chars().next().map(String::from).unwrap_or_default();
                return Err(ParseError::UnexpectedCharacter { found, line });
            },
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the quotes from a string literal and counts the line breaks it
/// spans.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();
    slice[1..slice.len() - 1].to_string()
}
