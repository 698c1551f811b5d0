//! Turns normalized input text into a validated token sequence.

use super::sequence::{check_sequence, SequenceError};
use super::token::Token;
use super::tokenizer::{TokenizerState, SourceOffset};
use crate::term::Quantity;
use crate::util::regexes::{QUANTITY_RE, BARE_UNIT_RE};

use itertools::Itertools;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct ExprTokenizer<'a> {
  units: Option<&'a [String]>,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum TokenizerError {
  #[error("Expected token, but found EOF at {0}")]
  UnexpectedEOF(SourceOffset),
  #[error("Invalid input: unexpected '{0}' at {1}")]
  UnexpectedChar(char, SourceOffset),
  #[error("Letters and/or % with no preceding number: \"{0}\" at {1}")]
  UnitWithoutNumber(String, SourceOffset),
  #[error("\"{0}\" is not a valid operand!")]
  InvalidOperand(String),
  #[error("\"{unit}\" is not a supported unit type! Expected one of: {supported}")]
  UnsupportedUnit { unit: String, supported: String },
  #[error("Parentheses do not match!")]
  MismatchedParentheses,
  #[error("{0}")]
  SequenceError(#[from] SequenceError),
}

impl<'a> ExprTokenizer<'a> {
  /// A tokenizer which accepts only the given units (plus the empty
  /// unit). If `units` is `None`, any unit is accepted.
  pub fn new(units: Option<&'a [String]>) -> Self {
    Self { units }
  }

  /// Reads the whole input. Each token is checked against the one
  /// before it as soon as it is read, and parentheses must balance.
  pub fn read_tokens(&self, state: &mut TokenizerState<'_>) -> Result<Vec<Token>, TokenizerError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut depth: usize = 0;
    loop {
      state.consume_spaces();
      if state.is_eof() {
        check_sequence(tokens.last(), None)?;
        break;
      }
      let token = self.read_one_token(state)?;
      check_sequence(tokens.last(), Some(&token))?;
      match token {
        Token::LeftParen => {
          depth += 1;
        }
        Token::RightParen => {
          depth = depth.checked_sub(1).ok_or(TokenizerError::MismatchedParentheses)?;
        }
        _ => {}
      }
      tokens.push(token);
    }
    if depth != 0 {
      return Err(TokenizerError::MismatchedParentheses);
    }
    Ok(tokens)
  }

  pub fn read_one_token(&self, state: &mut TokenizerState<'_>) -> Result<Token, TokenizerError> {
    if let Some(res) = self.read_quantity(state) {
      res.map(Token::Quantity)
    } else if let Some(unit) = state.read_lexeme(&BARE_UNIT_RE) {
      Err(TokenizerError::UnitWithoutNumber(unit.text().to_owned(), unit.offset()))
    } else {
      let pos = state.current_pos();
      match state.next_char() {
        Some(ch) => Token::from_reserved_char(ch).ok_or(TokenizerError::UnexpectedChar(ch, pos)),
        None => Err(TokenizerError::UnexpectedEOF(pos)),
      }
    }
  }

  fn read_quantity(&self, state: &mut TokenizerState<'_>) -> Option<Result<Quantity, TokenizerError>> {
    let lexeme = state.read_lexeme(&QUANTITY_RE)?;
    let number = lexeme.group(1).unwrap_or_default();
    let unit = lexeme.group(2).unwrap_or_default();
    Some(self.parse_quantity(lexeme.text(), number, unit))
  }

  fn parse_quantity(&self, text: &str, number: &str, unit: &str) -> Result<Quantity, TokenizerError> {
    if number.matches('.').count() > 1 {
      return Err(TokenizerError::InvalidOperand(text.to_owned()));
    }
    let value: f64 = number.parse().map_err(|_| TokenizerError::InvalidOperand(text.to_owned()))?;
    if !self.is_valid_unit(unit) {
      return Err(TokenizerError::UnsupportedUnit {
        unit: unit.to_owned(),
        supported: self.units.unwrap_or_default().iter().join(", "),
      });
    }
    Ok(Quantity::new(value, unit))
  }

  pub fn is_valid_unit(&self, unit: &str) -> bool {
    match self.units {
      None => true,
      Some(units) => unit.is_empty() || units.iter().any(|u| u == unit),
    }
  }
}
