//! Checks that each token can legally follow the one before it.

use super::token::{Token, TokenKind};

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SequenceError {
  #[error("Invalid sequence: equation is empty")]
  Empty,
  #[error("Invalid sequence: equation begins with \"{0}\"")]
  BeginsWith(String),
  #[error("Invalid sequence: equation ends with \"{0}\"")]
  EndsWith(String),
  #[error("Invalid sequence: empty parentheses")]
  EmptyParentheses,
  #[error("Invalid sequence: {0} followed by {1}")]
  FollowedBy(String, String),
}

/// Whether a token of kind `next` may directly follow one of kind
/// `prev`.
pub fn is_valid_sequence(prev: TokenKind, next: TokenKind) -> bool {
  use TokenKind::*;
  match prev {
    Start | Operator | LeftParen => matches!(next, Operand | LeftParen),
    Operand | RightParen => matches!(next, Operator | RightParen | End),
    End => false,
  }
}

/// Checks the transition from `prev` to `next`, where `None` stands
/// for the start of input (as `prev`) or the end of input (as
/// `next`).
pub fn check_sequence(prev: Option<&Token>, next: Option<&Token>) -> Result<(), SequenceError> {
  let prev_kind = prev.map_or(TokenKind::Start, Token::kind);
  let next_kind = next.map_or(TokenKind::End, Token::kind);
  if is_valid_sequence(prev_kind, next_kind) {
    return Ok(());
  }
  let a = prev.map(Token::to_string).unwrap_or_default();
  let b = next.map(Token::to_string).unwrap_or_default();
  Err(if prev.is_none() && next.is_none() {
    SequenceError::Empty
  } else if a.is_empty() {
    SequenceError::BeginsWith(b)
  } else if b.is_empty() {
    SequenceError::EndsWith(a)
  } else if prev_kind == TokenKind::LeftParen && next_kind == TokenKind::RightParen {
    SequenceError::EmptyParentheses
  } else {
    SequenceError::FollowedBy(a, b)
  })
}
