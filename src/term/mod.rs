//! The values the reducer works with: single quantities, and
//! expressions which couldn't be collapsed any further.

mod display;
mod expression;
mod quantity;

pub use display::stringify;
pub use expression::Expression;
pub use quantity::Quantity;

/// Either a single [`Quantity`] or a composite [`Expression`].
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
  Quantity(Quantity),
  Expression(Expression),
}

impl Term {
  pub fn as_quantity(&self) -> Option<&Quantity> {
    match self {
      Term::Quantity(q) => Some(q),
      Term::Expression(_) => None,
    }
  }

  pub fn as_expression(&self) -> Option<&Expression> {
    match self {
      Term::Quantity(_) => None,
      Term::Expression(e) => Some(e),
    }
  }
}

impl From<Quantity> for Term {
  fn from(q: Quantity) -> Self {
    Term::Quantity(q)
  }
}

impl From<Expression> for Term {
  fn from(e: Expression) -> Self {
    Term::Expression(e)
  }
}
