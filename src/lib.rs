//! Reduces CSS-style arithmetic over dimensioned quantities, such as
//! `20px + 20vh - 5px`, to the simplest equivalent expression.

pub mod algebra;
pub mod error;
pub mod options;
pub mod parsing;
pub mod reduce;
pub mod term;
pub mod util;

#[cfg(test)]
mod verify;

pub use error::Error;
pub use options::{Options, UnitsOption};
pub use reduce::{reduce_equation, eq, calc, reducer, wrap_in_calc, string_is_equation};
