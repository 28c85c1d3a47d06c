/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unrecognized characters, oversized literals, unexpected or missing
/// tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: division by
/// zero, unsupported operand types and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a complete run, from whichever stage raised it.
///
/// The runner only ever reports the first failure; the `Display` text of this
/// type is what follows `"Error: "` in the string handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of a parsed program failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
