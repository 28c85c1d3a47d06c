/// Represents a literal value in the language.
///
/// Only integers and strings can be written directly in source code.
/// Booleans exist at runtime but are produced exclusively by comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A string literal, stored without its surrounding quotes.
    Text(String),
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions never have side effects; evaluating one only reads the
/// variable store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value (integer or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator token.
        line:  usize,
    },
}

/// Represents a statement.
///
/// A program is an ordered list of statements. Statements inside an `if`
/// body share the variable store of the enclosing program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `print <expr>`: appends the rendered value to the output.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `<name> = <expr>`: binds or overwrites a variable.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if <condition> { <body> }`, without an `else` branch.
    If {
        /// The condition, tested for truthiness.
        condition: Expr,
        /// Statements executed when the condition is truthy.
        body:      Vec<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// Gets the line number of the keyword or identifier that starts the
    /// statement.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Print { line, .. } | Self::Assignment { line, .. } | Self::If { line, .. } => {
                *line
            },
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
}

impl BinaryOperator {
    /// Returns `true` for the operators that produce a boolean.
    ///
    /// ```
    /// use minnow::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::LessEqual.is_comparison());
    /// assert!(!BinaryOperator::Div.is_comparison());
    /// ```
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less | Self::Greater | Self::LessEqual | Self::GreaterEqual | Self::Equal)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
