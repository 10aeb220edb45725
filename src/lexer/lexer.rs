use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{
    source::TokenSource,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Handles a pattern match at the lexer position. Returns `None` for input
/// that produces no token (whitespace, comments).
pub type RegexHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("token patterns are valid regular expressions"),
        handler,
    }
}

lazy_static! {
    // Every pattern is anchored; longer operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern("^(?:0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+|[0-9]+(?:\\.[0-9]+)?)", number_handler),
        pattern("^\\s+", skip_handler),
        pattern("^\"(?:[^\"\\\\\\n]|\\\\.)*\"", string_handler),
        pattern("^'(?:[^'\\\\\\n]|\\\\.)*'", string_handler),
        pattern("^//[^\\n]*", skip_handler),
        pattern("^\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        pattern("^\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        pattern("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern("^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        pattern("^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        pattern("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern("^\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        pattern("^&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        pattern("^\\.\\.\\.", MK_DEFAULT_HANDLER!(TokenKind::Ellipsis, "...")),
        pattern("^\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        pattern("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern("^\\?", MK_DEFAULT_HANDLER!(TokenKind::Question, "?")),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern("^\\$", MK_DEFAULT_HANDLER!(TokenKind::Dollar, "$")),
        pattern("^\\+\\+", MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++")),
        pattern("^--", MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--")),
        pattern("^\\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=")),
        pattern("^-=", MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=")),
        pattern("^\\*\\*=", MK_DEFAULT_HANDLER!(TokenKind::StarStarEquals, "**=")),
        pattern("^\\*=", MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=")),
        pattern("^/=", MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=")),
        pattern("^%=", MK_DEFAULT_HANDLER!(TokenKind::PercentEquals, "%=")),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern("^\\*\\*", MK_DEFAULT_HANDLER!(TokenKind::StarStar, "**")),
        pattern("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        pattern("^%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
    ];
}

/// Regex-driven scanner over an in-memory source.
///
/// `next_token` is total: characters no pattern accepts become `Illegal`
/// tokens, and once the input is exhausted every call yields `EOF`.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    /// Column of `pos`, counted in characters
    column: u32,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Moves past `n` bytes, keeping line and column bookkeeping in step.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());

        for byte in &self.source.as_bytes()[self.pos..end] {
            if *byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else if !is_continuation_byte(*byte) {
                self.column += 1;
            }
        }

        self.pos = end;
    }

    /// Builds a token spanning the next `len` source bytes and moves past them.
    ///
    /// `value` is the token's semantic text, which differs from the raw source
    /// for string literals.
    pub fn emit(&mut self, kind: TokenKind, value: String, len: usize) -> Token {
        let byte_end = (self.pos + len).min(self.source.len());
        let column_start = self.column;
        let column_end = column_start + char_count(&self.source.as_bytes()[self.pos..byte_end]);
        let span = Span::new(self.line, column_start, column_end, self.pos, byte_end);

        self.advance_n(len);

        MK_TOKEN!(kind, value, span)
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn eof_token(&self) -> Token {
        let column = self.column;
        MK_TOKEN!(
            TokenKind::EOF,
            String::from("EOF"),
            Span::new(self.line, column, column, self.pos, self.pos)
        )
    }

    fn illegal_token(&mut self) -> Token {
        let illegal = self.remainder().chars().next().unwrap_or('\0');
        self.emit(TokenKind::Illegal, illegal.to_string(), illegal.len_utf8())
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return self.eof_token();
            }

            let remainder = self.remainder();
            let Some(pattern) = PATTERNS.iter().find(|pattern| pattern.regex.is_match(remainder)) else {
                let token = self.illegal_token();
                trace!(%token, "illegal character");
                return token;
            };

            if let Some(token) = (pattern.handler)(self, &pattern.regex) {
                trace!(%token, "scanned");
                return token;
            }
        }
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }
}

fn is_continuation_byte(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

fn char_count(bytes: &[u8]) -> u32 {
    bytes.iter().filter(|byte| !is_continuation_byte(**byte)).count() as u32
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex);
    let len = matched.len();

    Some(lexer.emit(TokenKind::Number, matched, len))
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let len = lexer.matched(regex).len();
    lexer.advance_n(len);

    None
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex);
    let len = matched.len();
    let string_literal = &matched[1..len - 1];

    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some(escaped @ ('\\' | '"' | '\'')) => result.push(*escaped),
            Some(other) => {
                // Unknown escapes keep the backslash
                result.push(ch);
                result.push(*other);
            }
            None => {
                result.push(ch);
                continue;
            }
        }
        chars.next();
    }

    Some(lexer.emit(TokenKind::String, result, len))
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let value = lexer.matched(regex);
    let len = value.len();
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(lexer.emit(kind, value, len))
}

/// Scans the whole source, including the terminating `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
