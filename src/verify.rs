//! An independent numeric evaluator, used to check that a reduced
//! expression still means the same thing as its input.
//!
//! Units are stripped before evaluation, so the check is only sound
//! for inputs built from addition and subtraction.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use std::iter::Peekable;
use std::str::Chars;

static UNIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)[a-z%]+").unwrap());

#[derive(Debug, Clone, Error, PartialEq)]
pub enum VerifyError {
  #[error("Unable to evaluate the input equation \"{0}\".")]
  BadInput(String),
  #[error("Unable to evaluate the reduced equation \"{0}\".")]
  BadReduction(String),
  #[error("The reduced equation \"{reduction}\" is not correct.\n - It should evaluate to {expected} instead of {actual}.")]
  Mismatch { reduction: String, expected: f64, actual: f64 },
}

/// Evaluates `input` with all units removed, or `None` if the
/// remaining text isn't a well-formed arithmetic expression.
pub fn evaluate(input: &str) -> Option<f64> {
  let stripped = UNIT_RE.replace_all(input, "");
  let mut chars = stripped.chars().peekable();
  let value = eval_sum(&mut chars)?;
  skip_spaces(&mut chars);
  chars.peek().is_none().then_some(value)
}

/// Evaluates both expressions and returns their common value.
pub fn verify_reduced_equation(original: &str, reduction: &str) -> Result<f64, VerifyError> {
  let expected = evaluate(original).ok_or_else(|| VerifyError::BadInput(original.to_owned()))?;
  let actual = evaluate(reduction).ok_or_else(|| VerifyError::BadReduction(reduction.to_owned()))?;
  if approx::abs_diff_eq!(expected, actual, epsilon = 1e-9) {
    Ok(expected)
  } else {
    Err(VerifyError::Mismatch { reduction: reduction.to_owned(), expected, actual })
  }
}

fn skip_spaces(chars: &mut Peekable<Chars<'_>>) {
  while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn next_op(chars: &mut Peekable<Chars<'_>>, ops: &[char]) -> Option<char> {
  skip_spaces(chars);
  chars.next_if(|c| ops.contains(c))
}

fn eval_sum(chars: &mut Peekable<Chars<'_>>) -> Option<f64> {
  let mut acc = eval_product(chars)?;
  while let Some(op) = next_op(chars, &['+', '-']) {
    let rhs = eval_product(chars)?;
    acc = if op == '+' { acc + rhs } else { acc - rhs };
  }
  Some(acc)
}

fn eval_product(chars: &mut Peekable<Chars<'_>>) -> Option<f64> {
  let mut acc = eval_unary(chars)?;
  while let Some(op) = next_op(chars, &['*', '/']) {
    let rhs = eval_unary(chars)?;
    acc = if op == '*' { acc * rhs } else { acc / rhs };
  }
  Some(acc)
}

fn eval_unary(chars: &mut Peekable<Chars<'_>>) -> Option<f64> {
  match next_op(chars, &['+', '-']) {
    Some('-') => eval_unary(chars).map(|v| -v),
    Some(_) => eval_unary(chars),
    None => eval_atom(chars),
  }
}

fn eval_atom(chars: &mut Peekable<Chars<'_>>) -> Option<f64> {
  skip_spaces(chars);
  if chars.next_if_eq(&'(').is_some() {
    let value = eval_sum(chars)?;
    skip_spaces(chars);
    return chars.next_if_eq(&')').map(|_| value);
  }
  let mut digits = String::new();
  while let Some(c) = chars.next_if(|c| c.is_ascii_digit() || *c == '.') {
    digits.push(c);
  }
  digits.parse().ok()
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  #[test]
  fn test_evaluate_strips_units() {
    assert_abs_diff_eq!(evaluate("5px + 5vh").unwrap(), 10.0);
    assert_abs_diff_eq!(evaluate("20% - 5PX").unwrap(), 15.0);
  }

  #[test]
  fn test_evaluate_precedence_and_signs() {
    assert_abs_diff_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
    assert_abs_diff_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
    assert_abs_diff_eq!(evaluate("5 - -5 - +2").unwrap(), 8.0);
    assert_abs_diff_eq!(evaluate("-(1 + 1) / 4").unwrap(), -0.5);
  }

  #[test]
  fn test_evaluate_rejects_garbage() {
    assert_eq!(evaluate("5 +"), None);
    assert_eq!(evaluate("(5"), None);
    assert_eq!(evaluate("5 5"), None);
    assert_eq!(evaluate(""), None);
  }

  #[test]
  fn test_verify() {
    assert_eq!(verify_reduced_equation("5px + 5px", "10px"), Ok(10.0));
    assert_eq!(verify_reduced_equation("5px +", "10px"), Err(VerifyError::BadInput("5px +".to_owned())));
    assert_eq!(verify_reduced_equation("5px", "10px +"), Err(VerifyError::BadReduction("10px +".to_owned())));
    assert!(matches!(verify_reduced_equation("5px + 5px", "11px"), Err(VerifyError::Mismatch { .. })));
  }
}
