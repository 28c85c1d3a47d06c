/// Parser entry points.
///
/// Contains the program-level loop, the expression entry point and the shared
/// result type.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the first token of a statement: `print`, `if`, or an
/// identifier followed by `=`.
pub mod statement;

/// Block parsing.
///
/// Parses the braced statement list that forms an `if` body.
pub mod block;

/// Binary operator parsing.
///
/// Implements the comparison, additive and multiplicative precedence levels.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix negation, literals, variable references and parenthesized
/// expressions.
pub mod unary;

/// Parser utilities.
///
/// Helpers for consuming a required token kind.
pub mod utils;
