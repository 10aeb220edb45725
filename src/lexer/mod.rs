//! Lexical analysis.
//!
//! The core parser only depends on the [`source::TokenSource`] contract; this
//! module also ships the regex-driven reference scanner behind it:
//!
//! - Recognition of keywords, identifiers, literals and operators
//! - Line and column tracking for every token
//! - Comments and whitespace handling
//! - `Illegal` tokens instead of scan failures

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
