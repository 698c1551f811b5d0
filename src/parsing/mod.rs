//! Turning raw expression text into a reduced term.
//!
//! Input goes through [`normalize::normalize_input`] first, then
//! [`lexer::ExprTokenizer`] splits it into validated tokens, and
//! finally [`parser::parse`] folds the tokens into a term.

pub mod lexer;
pub mod normalize;
pub mod operator;
pub mod parser;
pub mod sequence;
pub mod token;
pub mod tokenizer;
