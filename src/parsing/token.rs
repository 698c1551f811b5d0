use super::operator::Operator;
use crate::term::Quantity;

use std::fmt::{self, Display, Formatter};

/// A single lexical token of an arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
  Quantity(Quantity),
  Operator(Operator),
  LeftParen,
  RightParen,
}

/// The grammatical role of a token, for the purposes of checking
/// which tokens may follow which. `Start` and `End` stand for the
/// boundaries of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Start,
  Operand,
  Operator,
  LeftParen,
  RightParen,
  End,
}

impl Token {
  pub fn kind(&self) -> TokenKind {
    match self {
      Token::Quantity(_) => TokenKind::Operand,
      Token::Operator(_) => TokenKind::Operator,
      Token::LeftParen => TokenKind::LeftParen,
      Token::RightParen => TokenKind::RightParen,
    }
  }

  pub fn from_reserved_char(ch: char) -> Option<Token> {
    match ch {
      '(' => Some(Token::LeftParen),
      ')' => Some(Token::RightParen),
      ch => Operator::from_char(ch).map(Token::Operator),
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Token::Quantity(q) => q.fmt(f),
      Token::Operator(op) => op.fmt(f),
      Token::LeftParen => write!(f, "("),
      Token::RightParen => write!(f, ")"),
    }
  }
}
