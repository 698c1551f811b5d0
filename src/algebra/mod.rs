//! Arithmetic over [`Term`] values.
//!
//! Every operation here consumes its operands and produces a fresh
//! term; nothing is modified in place. Results never contain `*` or
//! `/`: a product or quotient is always either collapsed into a
//! single quantity or distributed over the terms of a sum.

mod addition;
mod error;
mod multiplication;

pub use error::AlgebraError;

use crate::parsing::operator::Operator;
use crate::term::{Term, Quantity};

use log::trace;

/// Applies `op` to `lhs` and `rhs`, simplifying as far as the units
/// involved allow.
pub fn calculate(lhs: Term, op: Operator, rhs: Term) -> Result<Term, AlgebraError> {
  trace!("calculate: ({}) {} ({})", lhs, op, rhs);
  match op {
    Operator::Plus => addition::add(lhs, rhs),
    Operator::Minus => subtract(lhs, rhs),
    Operator::Times => multiplication::multiply(lhs, rhs),
    Operator::Divide => divide(lhs, rhs),
  }
}

/// `a - b` is `a + (-b)`. Subtracting an expression negates each of
/// its terms.
fn subtract(lhs: Term, rhs: Term) -> Result<Term, AlgebraError> {
  let negated = match rhs {
    Term::Quantity(q) => Term::Quantity(q.opposite()),
    Term::Expression(e) => {
      multiplication::multiply(Term::Expression(e), Term::Quantity(Quantity::unitless(-1.0)))?
    }
  };
  addition::add(lhs, negated)
}

fn divide(lhs: Term, rhs: Term) -> Result<Term, AlgebraError> {
  let divisor = match rhs {
    Term::Expression(_) => return Err(AlgebraError::DivisorIsExpression),
    Term::Quantity(q) => q,
  };
  if divisor.has_unit() {
    return Err(AlgebraError::DivisorHasUnit);
  }
  if divisor.is_zero() {
    return Err(AlgebraError::DivisionByZero);
  }
  match lhs {
    Term::Expression(e) => {
      multiplication::multiply(Term::Expression(e), Term::Quantity(divisor.inverse()))
    }
    Term::Quantity(q) if q.is_zero() => Ok(Term::Quantity(Quantity::zero())),
    Term::Quantity(q) => Ok(Term::Quantity(q.with_value(q.value() / divisor.value()))),
  }
}
