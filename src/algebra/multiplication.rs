use super::{calculate, AlgebraError};
use crate::term::{Term, Quantity, Expression};

pub(super) fn multiply(lhs: Term, rhs: Term) -> Result<Term, AlgebraError> {
  match (lhs, rhs) {
    (Term::Expression(lhs), Term::Expression(rhs)) => {
      Err(AlgebraError::MultiplyExpressions { lhs: lhs.to_string(), rhs: rhs.to_string() })
    }
    (Term::Expression(expr), Term::Quantity(q)) | (Term::Quantity(q), Term::Expression(expr)) => {
      if q.has_unit() && expr.carries_units() {
        Err(AlgebraError::MultiplyUnits)
      } else {
        distribute(expr, q)
      }
    }
    (Term::Quantity(lhs), Term::Quantity(rhs)) => {
      if lhs.has_unit() && rhs.has_unit() {
        Err(AlgebraError::MultiplyUnits)
      } else if lhs.is_zero() || rhs.is_zero() {
        Ok(Term::Quantity(Quantity::zero()))
      } else {
        let unit = if lhs.has_unit() { lhs.unit() } else { rhs.unit() };
        Ok(Term::Quantity(Quantity::new(lhs.value() * rhs.value(), unit)))
      }
    }
  }
}

/// Multiplies every term of `expr` by `factor`. Each product is folded
/// back into the running result with its original operator as soon as
/// it is produced, so terms which end up sharing a unit (or vanishing)
/// are combined again.
fn distribute(expr: Expression, factor: Quantity) -> Result<Term, AlgebraError> {
  let mut terms = expr.into_signed_terms().into_iter();
  let Some((_, head)) = terms.next() else {
    return Ok(Term::Quantity(Quantity::zero()));
  };
  let mut result = multiply(head, Term::Quantity(factor.clone()))?;
  for (op, term) in terms {
    let product = multiply(term, Term::Quantity(factor.clone()))?;
    result = calculate(result, op, product)?;
  }
  Ok(result)
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::super::test_utils::{q, n, expr};
  use crate::parsing::operator::Operator::{Plus, Minus};

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_multiply_quantities() {
    assert_eq!(multiply(q(50.0, "px"), n(5.0)), Ok(q(250.0, "px")));
    assert_eq!(multiply(q(50.0, "px"), n(-5.0)), Ok(q(-250.0, "px")));
    assert_eq!(multiply(n(8.0), q(8.0, "px")), Ok(q(64.0, "px")));
    assert_eq!(multiply(n(3.0), n(4.0)), Ok(n(12.0)));
  }

  #[test]
  fn test_multiply_by_zero() {
    assert_eq!(multiply(q(50.0, "px"), n(0.0)), Ok(n(0.0)));
    let sum = expr(q(2.0, "px"), &[(Minus, q(2.0, "vh"))]);
    assert_eq!(multiply(n(0.0), sum), Ok(n(0.0)));
    let sum = expr(q(1.0, "px"), &[(Plus, q(1.0, "vh")), (Plus, q(1.0, "em")), (Minus, q(1.0, "rem"))]);
    assert_eq!(multiply(sum, n(0.0)), Ok(n(0.0)));
  }

  #[test]
  fn test_multiply_fractional() {
    let Ok(Term::Quantity(result)) = multiply(q(50.0, "px"), n(2.3333)) else {
      panic!("expected a quantity");
    };
    assert_abs_diff_eq!(result.value(), 116.665, epsilon = 1e-9);
    assert_eq!(result.unit(), "px");
  }

  #[test]
  fn test_multiply_units_fails() {
    assert_eq!(multiply(q(50.0, "px"), q(50.0, "px")), Err(AlgebraError::MultiplyUnits));
    assert_eq!(multiply(q(1.0, "px"), q(1.0, "vh")), Err(AlgebraError::MultiplyUnits));
    let sum = expr(q(1.0, "em"), &[(Plus, q(1.0, "rem"))]);
    assert_eq!(multiply(sum.clone(), q(2.0, "px")), Err(AlgebraError::MultiplyUnits));
    assert_eq!(multiply(q(2.0, "px"), sum), Err(AlgebraError::MultiplyUnits));
  }

  #[test]
  fn test_multiply_expressions_fails() {
    let lhs = expr(q(1.0, "em"), &[(Plus, q(1.0, "rem"))]);
    let rhs = expr(q(1.0, "px"), &[(Plus, q(1.0, "vh"))]);
    assert_eq!(
      multiply(lhs, rhs),
      Err(AlgebraError::MultiplyExpressions { lhs: "1em + 1rem".to_owned(), rhs: "1px + 1vh".to_owned() }),
    );
  }

  #[test]
  fn test_distribute_over_long_expression() {
    let sum = expr(q(20.0, "%"), &[(Plus, q(20.0, "px")), (Minus, q(20.0, "vh")), (Plus, q(20.0, "vw"))]);
    assert_eq!(
      multiply(sum, n(2.0)),
      Ok(expr(q(40.0, "%"), &[(Plus, q(40.0, "px")), (Minus, q(40.0, "vh")), (Plus, q(40.0, "vw"))])),
    );
  }

  #[test]
  fn test_distribute_negative_factor_flips_signs() {
    let diff = expr(q(5.0, "px"), &[(Minus, q(5.0, "vh"))]);
    assert_eq!(
      multiply(diff, n(-1.0)),
      Ok(expr(q(-5.0, "px"), &[(Plus, q(5.0, "vh"))])),
    );
  }

  #[test]
  fn test_distribute_refolds_matching_units() {
    // A hand-built expression holding two terms with the same unit
    // collapses once the products are folded back together.
    let sum = expr(q(1.0, "px"), &[(Plus, q(2.0, "vh")), (Plus, q(3.0, "px"))]);
    assert_eq!(
      multiply(sum, n(2.0)),
      Ok(expr(q(8.0, "px"), &[(Plus, q(4.0, "vh"))])),
    );
  }
}
