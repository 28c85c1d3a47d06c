use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{floor_div, unsupported_operands},
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Both operands must be of the same kind. Integers support all four
    /// operators with overflow checking; `/` is floor division. Strings
    /// support `+` only, as concatenation. Every other combination, including
    /// any boolean operand, is a type error.
    ///
    /// The operator must be one of `Add`, `Sub`, `Mul` or `Div`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use minnow::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let x = Value::Text("foo".to_string());
    /// let y = Value::Text("bar".to_string());
    /// let line = 1;
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Add, &x, &y, line).unwrap();
    /// assert_eq!(result, Value::Text("foobar".to_string()));
    ///
    /// let mixed = Context::eval_scalar_op(BinaryOperator::Add, &x, &Value::Integer(1), line);
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Text};

        match (left, right) {
            (Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => return Ok(Integer(floor_div(*a, *b, line)?)),
                    _ => unreachable!("eval_scalar_op used with non arithmetic operator"),
                };
                result.map(Integer).ok_or(RuntimeError::Overflow { line })
            },
            (Text(a), Text(b)) if op == Add => Ok(Text(format!("{a}{b}"))),
            _ => Err(unsupported_operands(op, left, right, line)),
        }
    }
}
