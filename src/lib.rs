#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod tracing_config;

extern crate regex;

/// A source range attached to every token and AST node.
///
/// `line` and the columns are 1-based; `column_end` and `byte_end` are
/// exclusive, so a zero-width span (such as `EOF`) has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub line: u32,
    pub column_start: u32,
    pub column_end: u32,
    pub byte_start: usize,
    pub byte_end: usize,
}

impl Span {
    pub fn new(line: u32, column_start: u32, column_end: u32, byte_start: usize, byte_end: usize) -> Self {
        Span {
            line,
            column_start,
            column_end: column_end.max(column_start),
            byte_start,
            byte_end: byte_end.max(byte_start),
        }
    }

    /// Joins `self` with a later span.
    ///
    /// Columns only describe the first line, so when `end` sits on a later line
    /// the column range stops at the end of `self`.
    pub fn to(&self, end: &Span) -> Span {
        let column_end = if end.line == self.line {
            end.column_end
        } else {
            self.column_end
        };

        Span::new(
            self.line,
            self.column_start,
            column_end,
            self.byte_start,
            end.byte_end,
        )
    }
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the line text and the offset of `position`
/// inside that line.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    // EOF diagnostics point one past the last character, which is on an
    // empty line of its own when the content ends with a newline
    if position == content.len() {
        return match content.split_inclusive('\n').last() {
            Some(last) if !last.ends_with('\n') => Some((line_number - 1, last.to_string(), last.len())),
            _ => Some((line_number, String::new(), 0)),
        };
    }

    None
}

/// Renders an error as a caret-underlined snippet.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `5`, ...)
/// -> input.js
///    |
/// 20 | let a = #;
///    | --------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    output.push_str(&format!("-> {}:{}:{}\n", file, error.get_span().line, error.get_span().column_start));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_span().byte_start) else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // `line_pos` is a byte offset; the caret is placed by characters
    let char_pos = line_text.get(..line_pos).map_or(line_pos, |prefix| prefix.chars().count());
    let arrows = char_pos.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}
