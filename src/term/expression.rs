use super::{Term, Quantity};
use crate::parsing::operator::Operator;

/// A sequence of terms joined by operators, such as `5px + 2vh - 1em`.
///
/// An expression always begins and ends with a term. Structurally it
/// is a leading term followed by zero or more `(operator, term)`
/// pairs, so the alternation can't be violated. Expressions are never
/// modified in place; every transformation builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
  head: Box<Term>,
  tail: Vec<(Operator, Term)>,
}

impl Expression {
  pub fn new(head: Term, tail: Vec<(Operator, Term)>) -> Self {
    Self { head: Box::new(head), tail }
  }

  pub fn binary(lhs: impl Into<Term>, op: Operator, rhs: impl Into<Term>) -> Self {
    Self::new(lhs.into(), vec![(op, rhs.into())])
  }

  /// Builds a term out of a list of signed terms. The operator
  /// attached to the first element is ignored. A single-element list
  /// produces that element alone, and an empty list produces zero.
  pub fn from_signed_terms(terms: Vec<(Operator, Term)>) -> Term {
    let mut iter = terms.into_iter();
    let Some((_, head)) = iter.next() else {
      return Term::Quantity(Quantity::zero());
    };
    let tail: Vec<_> = iter.collect();
    if tail.is_empty() {
      head
    } else {
      Term::Expression(Expression::new(head, tail))
    }
  }

  pub fn head(&self) -> &Term {
    &self.head
  }

  pub fn tail(&self) -> &[(Operator, Term)] {
    &self.tail
  }

  /// Number of terms (not operators) in the expression.
  #[allow(clippy::len_without_is_empty)] // Expressions are never empty
  pub fn len(&self) -> usize {
    self.tail.len() + 1
  }

  /// Iterates over every term together with the operator preceding
  /// it. The leading term is reported with [`Operator::Plus`].
  pub fn iter(&self) -> impl Iterator<Item = (Operator, &Term)> {
    std::iter::once((Operator::Plus, self.head.as_ref()))
      .chain(self.tail.iter().map(|(op, term)| (*op, term)))
  }

  pub fn into_signed_terms(self) -> Vec<(Operator, Term)> {
    let mut terms = Vec::with_capacity(self.len());
    terms.push((Operator::Plus, *self.head));
    terms.extend(self.tail);
    terms
  }

  /// The first quantity term whose unit is `unit`, together with its
  /// index (in [`Expression::iter`] order) and preceding operator.
  pub fn find_quantity(&self, unit: &str) -> Option<(usize, Operator, &Quantity)> {
    self.iter().enumerate().find_map(|(index, (op, term))| {
      term.as_quantity()
        .filter(|q| q.unit() == unit)
        .map(|q| (index, op, q))
    })
  }

  /// Whether any quantity in the expression, at any depth, has a
  /// unit.
  pub fn carries_units(&self) -> bool {
    self.iter().any(|(_, term)| match term {
      Term::Quantity(q) => q.has_unit(),
      Term::Expression(e) => e.carries_units(),
    })
  }

  pub fn contains_multiplicative(&self) -> bool {
    self.iter().any(|(op, term)| {
      !op.is_additive() || term.as_expression().is_some_and(Expression::contains_multiplicative)
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn px(v: f64) -> Term {
    Term::Quantity(Quantity::new(v, "px"))
  }

  fn vh(v: f64) -> Term {
    Term::Quantity(Quantity::new(v, "vh"))
  }

  #[test]
  fn test_iter_reports_leading_plus() {
    let expr = Expression::new(px(1.0), vec![(Operator::Minus, vh(2.0))]);
    let items: Vec<_> = expr.iter().collect();
    assert_eq!(items, vec![(Operator::Plus, &px(1.0)), (Operator::Minus, &vh(2.0))]);
    assert_eq!(expr.len(), 2);
  }

  #[test]
  fn test_find_quantity() {
    let expr = Expression::new(px(1.0), vec![(Operator::Minus, vh(2.0))]);
    assert_eq!(expr.find_quantity("px"), Some((0, Operator::Plus, &Quantity::new(1.0, "px"))));
    assert_eq!(expr.find_quantity("vh"), Some((1, Operator::Minus, &Quantity::new(2.0, "vh"))));
    assert_eq!(expr.find_quantity("em"), None);
  }

  #[test]
  fn test_from_signed_terms() {
    assert_eq!(Expression::from_signed_terms(vec![]), Term::Quantity(Quantity::zero()));
    assert_eq!(Expression::from_signed_terms(vec![(Operator::Plus, px(3.0))]), px(3.0));
    assert_eq!(
      Expression::from_signed_terms(vec![(Operator::Plus, px(3.0)), (Operator::Minus, vh(1.0))]),
      Term::Expression(Expression::binary(px(3.0), Operator::Minus, vh(1.0))),
    );
  }

  #[test]
  fn test_carries_units() {
    let expr = Expression::binary(px(1.0), Operator::Plus, vh(1.0));
    assert!(expr.carries_units());
    let expr = Expression::binary(Quantity::unitless(1.0), Operator::Plus, Quantity::unitless(2.0));
    assert!(!expr.carries_units());
  }

  #[test]
  fn test_contains_multiplicative() {
    let expr = Expression::binary(px(1.0), Operator::Minus, vh(1.0));
    assert!(!expr.contains_multiplicative());
    let expr = Expression::binary(px(1.0), Operator::Times, Quantity::unitless(2.0));
    assert!(expr.contains_multiplicative());
  }

  #[test]
  fn test_into_signed_terms_keeps_order() {
    let expr = Expression::new(px(1.0), vec![(Operator::Minus, vh(2.0)), (Operator::Plus, px(3.0))]);
    let terms = expr.into_signed_terms();
    assert_eq!(terms, vec![
      (Operator::Plus, px(1.0)),
      (Operator::Minus, vh(2.0)),
      (Operator::Plus, px(3.0)),
    ]);
  }
}
