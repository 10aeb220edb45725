//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! Statements are parsed by recursive descent; expressions by a Pratt parser
//! with NUD (null denotation) and LED (left denotation) handlers looked up by
//! token kind, and binding powers taken from a static precedence table.
//!
//! Failures are values: every production returns a `Result`, and the public
//! entry points record failures in a `Reporter` instead of aborting the parse.

pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
