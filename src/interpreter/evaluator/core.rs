use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable store and the lines
/// printed so far.
///
/// ## Usage
///
/// A `Context` is created fresh for every program run. There is exactly one
/// variable store; `if` bodies execute against it directly, so assignments
/// made inside a body stay visible afterwards.
#[derive(Debug, Default)]
pub struct Context {
    /// A mapping from variable names to their current values.
    pub variables: HashMap<String, Value>,
    /// One rendered entry per executed `print`, in execution order.
    pub output:    Vec<String>,
}

impl Context {
    /// Creates a new evaluation context with no variables and no output.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(),
               output:    Vec::new(), }
    }

    /// Executes a whole program, statement by statement.
    ///
    /// Execution stops at the first failing statement. Output produced before
    /// the failure stays in the buffer; discarding it is up to the caller.
    ///
    /// # Example
    /// ```
    /// use minnow::{
    ///     interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_program},
    /// };
    ///
    /// let tokens = tokenize("x = 2\nprint x * 21").unwrap();
    /// let program = parse_program(&tokens).unwrap();
    ///
    /// let mut context = Context::new();
    /// context.run(&program).unwrap();
    ///
    /// assert_eq!(context.output, vec!["42".to_string()]);
    /// ```
    pub fn run(&mut self, program: &[Statement]) -> EvalResult<()> {
        program.iter().try_for_each(|statement| self.eval_statement(statement))
    }

    /// Evaluates a single statement.
    ///
    /// - `Print` renders the value and appends it to the output.
    /// - `Assignment` binds or overwrites the variable.
    /// - `If` runs its body, in order and against this same context, when the
    ///   condition is truthy.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        trace!(line = statement.line_number(), "executing statement");

        match statement {
            Statement::Print { expr, .. } => {
                let value = self.eval(expr)?;
                self.output.push(value.to_string());
            },
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.variables.insert(name.clone(), value);
            },
            Statement::If { condition, body, .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.run(body)?;
                }
            },
        }

        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// Operands are evaluated left to right before their operator is applied.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed `Value`.
    ///
    /// # Example
    /// ```
    /// use minnow::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new();
    /// let expr = Expr::Variable { name: "missing".to_string(),
    ///                             line: 1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Value::Integer(0));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, .. } => Ok(self.get_variable(name)),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
        }
    }

    /// Looks up a variable. Unbound names read as `Integer(0)`.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Value {
        self.variables.get(name).cloned().unwrap_or(Value::Integer(0))
    }
}
