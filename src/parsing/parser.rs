//! Precedence climbing over a token sequence.
//!
//! No syntax tree is ever built. Each time both operands of an
//! operator are known, they're handed to [`calculate`] and the
//! reduced term takes their place, so by the time parsing finishes
//! the result is already fully simplified.

use super::operator::Precedence;
use super::token::Token;
use crate::algebra::{calculate, AlgebraError};
use crate::term::Term;

use thiserror::Error;

/// A cursor over a token sequence.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
  tokens: &'a [Token],
  index: usize,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum ParserError {
  #[error("{0}")]
  AlgebraError(#[from] AlgebraError),
  #[error("unexpected end of input")]
  UnexpectedEOF,
  #[error("unexpected token {0}")]
  UnexpectedToken(Token),
}

impl<'a> TokenStream<'a> {
  pub fn new(tokens: &'a [Token]) -> Self {
    Self { tokens, index: 0 }
  }

  pub fn current(&self) -> Option<&'a Token> {
    self.tokens.get(self.index)
  }

  pub fn advance(&mut self) -> &mut Self {
    self.index += 1;
    self
  }
}

/// Parses and reduces a token sequence. An empty sequence produces no
/// term at all.
pub fn parse(tokens: &[Token]) -> Result<Option<Term>, ParserError> {
  if tokens.is_empty() {
    return Ok(None);
  }
  let mut stream = TokenStream::new(tokens);
  let term = compute_expr(&mut stream, Precedence::MIN)?;
  match stream.current() {
    None => Ok(Some(term)),
    Some(token) => Err(ParserError::UnexpectedToken(token.clone())),
  }
}

fn compute_expr(stream: &mut TokenStream<'_>, min_precedence: Precedence) -> Result<Term, ParserError> {
  let mut lhs = atomize(stream)?;
  while let Some(Token::Operator(op)) = stream.current() {
    let op = *op;
    if op.precedence() < min_precedence {
      break;
    }
    let rhs = compute_expr(stream.advance(), op.right_precedence())?;
    lhs = calculate(lhs, op, rhs)?;
  }
  Ok(lhs)
}

fn atomize(stream: &mut TokenStream<'_>) -> Result<Term, ParserError> {
  match stream.current() {
    None => Err(ParserError::UnexpectedEOF),
    Some(Token::Quantity(q)) => {
      let term = Term::Quantity(q.clone());
      stream.advance();
      Ok(term)
    }
    Some(Token::LeftParen) => {
      let term = compute_expr(stream.advance(), Precedence::MIN)?;
      match stream.current() {
        Some(Token::RightParen) => {
          stream.advance();
          Ok(term)
        }
        Some(token) => Err(ParserError::UnexpectedToken(token.clone())),
        None => Err(ParserError::UnexpectedEOF),
      }
    }
    Some(token) => Err(ParserError::UnexpectedToken(token.clone())),
  }
}
