use super::{Term, Expression};

use std::fmt::{self, Display, Formatter};

/// Renders an optional term. An absent term renders as the empty
/// string.
pub fn stringify(term: Option<&Term>) -> String {
  term.map(Term::to_string).unwrap_or_default()
}

impl Display for Term {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Term::Quantity(q) => q.fmt(f),
      Term::Expression(e) => e.fmt(f),
    }
  }
}

impl Display for Expression {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    fmt_nested(self.head(), f)?;
    for (op, term) in self.tail() {
      write!(f, " {} ", op)?;
      fmt_nested(term, f)?;
    }
    Ok(())
  }
}

/// Nested expressions are parenthesized; quantities are written as-is.
fn fmt_nested(term: &Term, f: &mut Formatter<'_>) -> fmt::Result {
  match term {
    Term::Quantity(q) => q.fmt(f),
    Term::Expression(e) => write!(f, "({})", e),
  }
}
