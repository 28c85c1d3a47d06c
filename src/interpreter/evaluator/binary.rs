/// Operator dispatch.
///
/// Routes each binary operator to arithmetic or comparison evaluation.
pub mod core;

/// Arithmetic on scalar operands.
///
/// Checked integer arithmetic, floor division and string concatenation.
pub mod scalar;

/// Comparison operators.
///
/// Ordering and equality, including the rules for operands of different
/// types.
pub mod comparison;
