//! The four arithmetic operators and their precedence. All of them
//! group to the left: `a - b - c` is `(a - b) - c`.

use std::fmt::{self, Display, Formatter};

/// An infix arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Plus,
  Minus,
  Times,
  Divide,
}

/// Binding power of an operator. Higher binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u64);

impl Operator {
  pub const ALL: [Operator; 4] = [Operator::Plus, Operator::Minus, Operator::Times, Operator::Divide];

  pub fn from_char(ch: char) -> Option<Operator> {
    match ch {
      '+' => Some(Operator::Plus),
      '-' => Some(Operator::Minus),
      '*' => Some(Operator::Times),
      '/' => Some(Operator::Divide),
      _ => None,
    }
  }

  pub fn as_char(self) -> char {
    match self {
      Operator::Plus => '+',
      Operator::Minus => '-',
      Operator::Times => '*',
      Operator::Divide => '/',
    }
  }

  /// Binding power of the operator. Multiplicative operators bind
  /// tighter than additive ones.
  pub fn precedence(self) -> Precedence {
    match self {
      Operator::Times | Operator::Divide => Precedence(14),
      Operator::Plus | Operator::Minus => Precedence(13),
    }
  }

  /// The minimum precedence an operator must have to appear on the
  /// right-hand side of `self` without parentheses.
  pub fn right_precedence(self) -> Precedence {
    self.precedence().next()
  }

  pub fn is_additive(self) -> bool {
    matches!(self, Operator::Plus | Operator::Minus)
  }
}

impl Precedence {
  pub const MIN: Precedence = Precedence(1);

  /// The smallest precedence strictly greater than `self`.
  pub fn next(self) -> Precedence {
    Precedence(self.0 + 1)
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_char())
  }
}
