use super::{calculate, AlgebraError};
use crate::parsing::operator::Operator;
use crate::term::{Term, Quantity, Expression};

/// Which side of the `+` the expression was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
  Left,
  Right,
}

pub(super) fn add(lhs: Term, rhs: Term) -> Result<Term, AlgebraError> {
  match (lhs, rhs) {
    (Term::Expression(lhs), Term::Expression(rhs)) => {
      // Fold the right-hand expression in one term at a time, each
      // with its own sign.
      rhs.into_signed_terms()
        .into_iter()
        .try_fold(Term::Expression(lhs), |acc, (op, term)| calculate(acc, op, term))
    }
    (Term::Expression(expr), Term::Quantity(q)) => {
      if q.is_zero() {
        Ok(Term::Expression(expr))
      } else {
        add_to_expression(expr, q, Side::Left)
      }
    }
    (Term::Quantity(q), Term::Expression(expr)) => {
      if q.is_zero() {
        Ok(Term::Expression(expr))
      } else {
        add_to_expression(expr, q, Side::Right)
      }
    }
    (Term::Quantity(lhs), Term::Quantity(rhs)) => add_quantities(lhs, rhs),
  }
}

fn add_quantities(lhs: Quantity, rhs: Quantity) -> Result<Term, AlgebraError> {
  if rhs.is_zero() {
    Ok(Term::Quantity(lhs))
  } else if lhs.is_zero() {
    Ok(Term::Quantity(rhs))
  } else if lhs.has_no_unit() != rhs.has_no_unit() {
    Err(AlgebraError::unit_mismatch(&lhs, &rhs))
  } else if lhs.same_unit(&rhs) {
    Ok(Term::Quantity(lhs.with_value(lhs.value() + rhs.value())))
  } else {
    let (op, rhs) = signed(rhs);
    Ok(Term::Expression(Expression::binary(lhs, op, rhs)))
  }
}

/// Adds a nonzero quantity to an expression. If the expression
/// already has a term with the same unit, the two are combined in
/// place; otherwise the quantity becomes a new term at the end (or at
/// the start, if it was written on the left).
fn add_to_expression(expr: Expression, item: Quantity, expr_side: Side) -> Result<Term, AlgebraError> {
  let Some((index, op, existing)) = expr.find_quantity(item.unit()) else {
    if item.has_no_unit() {
      return Err(match expr_side {
        Side::Left => AlgebraError::unit_mismatch(&expr, &item),
        Side::Right => AlgebraError::unit_mismatch(&item, &expr),
      });
    }
    return Ok(insert_new_term(expr, item, expr_side));
  };
  let existing = if op == Operator::Minus { existing.opposite() } else { existing.clone() };

  let mut terms = expr.into_signed_terms();
  terms.remove(index);
  let combined = existing.with_value(existing.value() + item.value());

  if combined.is_zero() {
    // The term cancelled out entirely. If it was the leading term,
    // the next term inherits the leading position, and with it the
    // sign of its operator.
    if index == 0 && !terms.is_empty() {
      let (next_op, next) = terms.remove(0);
      let next = if next_op == Operator::Minus { negate(next)? } else { next };
      terms.insert(0, (Operator::Plus, next));
    }
  } else if index == 0 {
    terms.insert(0, (Operator::Plus, Term::Quantity(combined)));
  } else {
    let (op, combined) = signed(combined);
    terms.insert(index, (op, Term::Quantity(combined)));
  }
  Ok(Expression::from_signed_terms(terms))
}

fn insert_new_term(expr: Expression, item: Quantity, expr_side: Side) -> Term {
  let mut terms = expr.into_signed_terms();
  match expr_side {
    Side::Left => {
      let (op, item) = signed(item);
      terms.push((op, Term::Quantity(item)));
    }
    Side::Right => {
      // The old leading term now follows an operator, so a negative
      // leading quantity turns into a subtraction.
      let (_, head) = terms.remove(0);
      let head = match head {
        Term::Quantity(q) => {
          let (op, q) = signed(q);
          (op, Term::Quantity(q))
        }
        Term::Expression(e) => (Operator::Plus, Term::Expression(e)),
      };
      terms.insert(0, head);
      terms.insert(0, (Operator::Plus, Term::Quantity(item)));
    }
  }
  Expression::from_signed_terms(terms)
}

/// Splits a quantity into the operator it should follow and its
/// magnitude, so that `x + -5px` is written `x - 5px`.
fn signed(q: Quantity) -> (Operator, Quantity) {
  if q.is_negative() {
    (Operator::Minus, q.abs())
  } else {
    (Operator::Plus, q)
  }
}

fn negate(term: Term) -> Result<Term, AlgebraError> {
  match term {
    Term::Quantity(q) => Ok(Term::Quantity(q.opposite())),
    term => calculate(term, Operator::Times, Term::Quantity(Quantity::unitless(-1.0))),
  }
}
