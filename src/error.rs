use crate::algebra::AlgebraError;
use crate::parsing::lexer::TokenizerError;
use crate::parsing::parser::ParserError;

use thiserror::Error;

/// Any failure while reducing an expression.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  TokenizerError(#[from] TokenizerError),
  #[error("{0}")]
  ParserError(ParserError),
  #[error("{0}")]
  AlgebraError(#[from] AlgebraError),
}

// Algebra failures surface from inside the parser, but callers
// shouldn't have to look through the parser to find them.
impl From<ParserError> for Error {
  fn from(err: ParserError) -> Self {
    match err {
      ParserError::AlgebraError(err) => Self::AlgebraError(err),
      err => Self::ParserError(err),
    }
  }
}
