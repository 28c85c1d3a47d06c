use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::unsupported_operands,
        },
        value::core::Value,
    },
};

/// Maps a relational operator and the ordering of its operands to the final
/// boolean value.
///
/// This function does not inspect the operands itself.
#[must_use]
pub fn ordering_op_result(op: BinaryOperator, ordering: Ordering) -> bool {
    match op {
        BinaryOperator::Less => ordering.is_lt(),
        BinaryOperator::Greater => ordering.is_gt(),
        BinaryOperator::LessEqual => ordering.is_le(),
        BinaryOperator::GreaterEqual => ordering.is_ge(),
        BinaryOperator::Equal => ordering.is_eq(),
        _ => unreachable!("ordering_op_result used with non comparison operator"),
    }
}

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Operands of the same type compare naturally: integers numerically,
    /// strings lexicographically by bytes, booleans with `false < true`.
    ///
    /// Operands of different types are never coerced. `==` between them is
    /// `false`; the relational operators reject them with a type error.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use minnow::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Integer(3);
    /// let b = Value::Integer(5);
    /// let line = 1;
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &b, line);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let text = Value::Text("3".to_string());
    /// let result = Context::eval_comparison(BinaryOperator::Equal, &a, &text, line);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use Value::{Bool, Integer, Text};

        let ordering = match (left, right) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (Bool(a), Bool(b)) => a.cmp(b),
            _ if op == BinaryOperator::Equal => return Ok(Bool(false)),
            _ => return Err(unsupported_operands(op, left, right, line)),
        };

        Ok(Bool(ordering_op_result(op, ordering)))
    }
}
