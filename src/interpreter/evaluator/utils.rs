use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Integer division rounding toward negative infinity.
///
/// Rust's `/` truncates toward zero; the quotient is adjusted down by one
/// whenever the remainder is non-zero and the operands have opposite signs.
///
/// # Errors
/// - `DivisionByZero` when `right` is zero.
/// - `Overflow` for `i64::MIN / -1`.
///
/// # Example
/// ```
/// use minnow::interpreter::evaluator::utils::floor_div;
///
/// assert_eq!(floor_div(-7, 2, 1).unwrap(), -4);
/// assert_eq!(floor_div(7, -2, 1).unwrap(), -4);
/// assert_eq!(floor_div(7, 2, 1).unwrap(), 3);
/// assert!(floor_div(1, 0, 1).is_err());
/// ```
pub fn floor_div(left: i64, right: i64, line: usize) -> EvalResult<i64> {
    if right == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }

    let quotient = left.checked_div(right)
                       .ok_or(RuntimeError::Overflow { line })?;

    if left % right != 0 && ((left < 0) != (right < 0)) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

/// Builds the error for an operator applied to operand types it rejects.
#[must_use]
pub fn unsupported_operands(op: BinaryOperator,
                            left: &Value,
                            right: &Value,
                            line: usize)
                            -> RuntimeError {
    RuntimeError::TypeError { details: format!("{} {op} {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}
