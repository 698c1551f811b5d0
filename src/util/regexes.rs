//! Module containing generally useful regular expressions.

use regex::Regex;
use once_cell::sync::Lazy;

/// A number, optionally signed, followed by a (possibly empty) unit.
/// Capture 1 is the numeric part and capture 2 is the unit.
pub static QUANTITY_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^([+-]?[0-9.]+)(%|[a-z]*)").unwrap());

/// Letters or `%` that aren't preceded by a number.
pub static BARE_UNIT_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[a-z%]+").unwrap());

/// A `+` or `-` directly in front of a digit or `(`, together with the
/// character (and whitespace) preceding it.
pub static SIGN_SEQUENCE_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"([^\s(])(\s*)([+-])([0-9(])").unwrap());

/// Matches any text that consists of more than a single operand.
pub static EQUATION_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[()]|\S\s*[+\-*/]").unwrap());
