//! Entry points tying normalization, tokenization, parsing and
//! stringification together.

use crate::error::Error;
use crate::options::Options;
use crate::parsing::lexer::ExprTokenizer;
use crate::parsing::normalize::normalize_input;
use crate::parsing::parser::parse;
use crate::parsing::tokenizer::TokenizerState;
use crate::term::stringify;
use crate::util::regexes::EQUATION_RE;

use log::debug;

/// Reduces `input` to the simplest equivalent expression.
///
/// Returns `Ok(None)` only when reduction fails and `options.throws`
/// is false; the failure is logged instead of returned. Empty input
/// reduces to the empty string.
pub fn reduce_equation(options: &Options, input: &str) -> Result<Option<String>, Error> {
  debug!("Reducing {input:?}");
  if input.is_empty() {
    return Ok(Some(String::new()));
  }
  match try_reduce(options, input) {
    Ok(output) => {
      debug!("Reduced {input:?} to {output:?}");
      Ok(Some(output))
    }
    Err(err) if options.throws => Err(err),
    Err(err) => {
      debug!("Suppressed error while reducing {input:?}: {err}");
      Ok(None)
    }
  }
}

fn try_reduce(options: &Options, input: &str) -> Result<String, Error> {
  let normalized = normalize_input(input);
  let tokenizer = ExprTokenizer::new(options.unit_list());
  let tokens = tokenizer.read_tokens(&mut TokenizerState::new(&normalized))?;
  let term = parse(&tokens)?;
  Ok(stringify(term.as_ref()))
}

/// Reduces `input` with the default options.
pub fn eq(input: &str) -> Result<String, Error> {
  // Default options always throw, so a result is always present.
  let output = reduce_equation(&Options::default(), input)?;
  Ok(output.unwrap_or_default())
}

/// Reduces `input` and wraps the result in `calc(...)` if it didn't
/// reduce to a single value.
pub fn calc(options: &Options, input: &str) -> Result<Option<String>, Error> {
  let output = reduce_equation(options, input)?;
  Ok(output.map(|output| wrap_in_calc(&output)))
}

/// A reduction function with the given options baked in.
pub fn reducer(options: Options) -> impl Fn(&str) -> Result<Option<String>, Error> {
  move |input| reduce_equation(&options, input)
}

pub fn wrap_in_calc(input: &str) -> String {
  if string_is_equation(input) {
    format!("calc({input})")
  } else {
    input.to_owned()
  }
}

/// Whether `input` consists of more than a single (possibly signed)
/// operand. Only looks at the text; `input` need not be valid.
pub fn string_is_equation(input: &str) -> bool {
  EQUATION_RE.is_match(input)
}
