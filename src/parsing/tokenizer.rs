//! Position tracking for the lexer.
//!
//! [`TokenizerState`] owns no text; it's a window onto the unread
//! suffix of the input plus the byte offset at which that suffix
//! starts, so errors can say where they happened.

use regex::{Regex, Captures};

use std::fmt::{self, Display, Formatter};

/// Byte offset into the (normalized) input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceOffset(pub usize);

#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  rest: &'a str,
  offset: SourceOffset,
}

/// A piece of input matched by a regex, along with its capture
/// groups and where it began.
#[derive(Debug)]
pub struct Lexeme<'a> {
  captures: Captures<'a>,
  offset: SourceOffset,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self { rest: input, offset: SourceOffset::default() }
  }

  pub fn is_eof(&self) -> bool {
    self.rest.is_empty()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.offset
  }

  fn skip(&mut self, len: usize) {
    let len = len.min(self.rest.len());
    self.rest = &self.rest[len..];
    self.offset.0 += len;
  }

  pub fn next_char(&mut self) -> Option<char> {
    let ch = self.rest.chars().next()?;
    self.skip(ch.len_utf8());
    Some(ch)
  }

  pub fn consume_spaces(&mut self) {
    let trimmed = self.rest.trim_start();
    self.skip(self.rest.len() - trimmed.len());
  }

  /// Matches `regex` against the unread input and, on success,
  /// consumes the match. Only matches starting at the current
  /// position count, so `regex` should begin with `^`.
  pub fn read_lexeme(&mut self, regex: &Regex) -> Option<Lexeme<'a>> {
    let captures = regex.captures(self.rest)?;
    let whole = captures.get(0)?;
    if whole.start() != 0 {
      return None;
    }
    let offset = self.offset;
    self.skip(whole.end());
    Some(Lexeme { captures, offset })
  }
}

impl<'a> Lexeme<'a> {
  pub fn text(&self) -> &'a str {
    self.group(0).unwrap_or_default()
  }

  /// The text of capture group `i`, if it participated in the match.
  pub fn group(&self, i: usize) -> Option<&'a str> {
    self.captures.get(i).map(|m| m.as_str())
  }

  pub fn offset(&self) -> SourceOffset {
    self.offset
  }
}

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
