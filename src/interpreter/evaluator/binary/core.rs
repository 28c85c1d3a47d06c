use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators are handled by `eval_scalar_op`; relational and
    /// equality operators by `eval_comparison`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use minnow::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    /// let line = 1;
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, line);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Sub};

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, left, right, line),
            Less | Greater | LessEqual | GreaterEqual | Equal => {
                Self::eval_comparison(op, left, right, line)
            },
        }
    }
}
