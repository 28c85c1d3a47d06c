use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments and conditions. The set is closed: every operator decides
/// explicitly which combinations it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A string value.
    Text(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, etc.). There is no boolean
    /// literal.
    Bool(bool),
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Text(s) => Self::Text(s.clone()),
        }
    }
}

impl Value {
    /// Applies the truthiness rule used by `if`.
    ///
    /// Integers are truthy when non-zero, strings when non-empty, and
    /// booleans are their own value.
    ///
    /// # Example
    /// ```
    /// use minnow::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(-3).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Text(String::new()).is_truthy());
    /// assert!(Value::Bool(true).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Text(s) => !s.is_empty(),
            Self::Bool(b) => *b,
        }
    }

    /// The user-facing name of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Text(_) => "string",
            Self::Bool(_) => "boolean",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
