//! Textual clean-up performed before tokenizing.
//!
//! The lexer reads `+5` and `-5` as signed numbers, which is wrong
//! when the sign is really a binary operator (`2 -2` is `2 - 2`), and
//! it can't read a sign in front of a parenthesis at all. This pass
//! rewrites those sequences so the lexer sees what was meant. It never
//! validates anything; malformed input passes through and is rejected
//! by the tokenizer.

use super::operator::Operator;
use crate::util::regexes::SIGN_SEQUENCE_RE;

use regex::Captures;

pub fn normalize_input(input: &str) -> String {
  let lowered = input.to_lowercase();
  SIGN_SEQUENCE_RE.replace_all(&lowered, |caps: &Captures| {
    let preceding = &caps[1];
    let whitespace = &caps[2];
    let sign = &caps[3];
    let target = &caps[4];
    if is_operator(preceding) {
      let whitespace = if whitespace.is_empty() { " " } else { whitespace };
      if sign == "+" {
        // A unary plus after an operator is redundant: 2 ++2 -> 2 + 2
        format!("{preceding}{whitespace}{target}")
      } else if target == "(" {
        // 2 +-(2) -> 2 + -1 * (2)
        format!("{preceding}{whitespace}-1 * {target}")
      } else {
        format!("{preceding}{whitespace}{sign}{target}")
      }
    } else {
      // 2 +2 -> 2 + 2, so the sign isn't read as part of the number.
      format!("{preceding}{whitespace}{sign} {target}")
    }
  }).into_owned()
}

fn is_operator(s: &str) -> bool {
  let mut chars = s.chars();
  match (chars.next(), chars.next()) {
    (Some(ch), None) => Operator::from_char(ch).is_some(),
    _ => false,
  }
}
