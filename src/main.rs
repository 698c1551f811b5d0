use precalc::{calc, eq, Options};

use std::env;
use std::io::{self, Write};

/// Splits off a leading `true`/`false` argument, which decides whether
/// the result is wrapped in `calc(...)`.
fn parse_args(args: &[String]) -> (bool, String) {
  match args.first().map(String::as_str) {
    Some("true") => (true, args[1..].join(" ")),
    Some("false") => (false, args[1..].join(" ")),
    _ => (false, args.join(" ")),
  }
}

fn main() -> anyhow::Result<()> {
  env_logger::init();
  let args: Vec<String> = env::args().skip(1).collect();
  let mut stdout = io::stdout().lock();
  if args.is_empty() {
    writeln!(stdout, "No input provided!")?;
    return Ok(());
  }

  let (wrap_in_calc, input) = parse_args(&args);
  log::debug!("Input {input:?}, wrap in calc: {wrap_in_calc}");
  let result = if wrap_in_calc {
    calc(&Options::default(), &input).map(Option::unwrap_or_default)
  } else {
    eq(&input)
  };
  match result {
    Ok(output) => writeln!(stdout, "{output}")?,
    Err(err) => writeln!(stdout, "{err}")?,
  }
  Ok(())
}
