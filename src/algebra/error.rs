use thiserror::Error;

/// An arithmetic operation that can't be expressed in CSS.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum AlgebraError {
  #[error("Unable to add \"{lhs}\" with \"{rhs}\"")]
  UnitMismatch { lhs: String, rhs: String },
  #[error("Unable to multiply \"{lhs}\" with \"{rhs}\"")]
  MultiplyExpressions { lhs: String, rhs: String },
  #[error("Unable to multiply by a number with units!")]
  MultiplyUnits,
  #[error("Divisor is equation.")]
  DivisorIsExpression,
  #[error("Divisor has unit.")]
  DivisorHasUnit,
  #[error("Division by zero.")]
  DivisionByZero,
}

impl AlgebraError {
  pub(super) fn unit_mismatch(lhs: impl ToString, rhs: impl ToString) -> Self {
    AlgebraError::UnitMismatch { lhs: lhs.to_string(), rhs: rhs.to_string() }
  }
}
