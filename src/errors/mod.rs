//! Parse errors and the reporter that accumulates them.
//!
//! - Error structures carrying the offending token kind and span
//! - The error taxonomy of the parser
//! - Names and suggestions for rendering

pub mod errors;
pub mod reporter;

#[cfg(test)]
mod tests;
