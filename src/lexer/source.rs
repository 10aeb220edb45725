use crate::Span;

use super::tokens::{Token, TokenKind};

/// A synchronous, total supplier of tokens.
///
/// Implementations must never fail: unrecognised input is reported as an
/// `Illegal` token and, once the input is exhausted, every further call
/// returns an `EOF` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Replays an already scanned token sequence.
///
/// Anything after the first `EOF` is ignored. If the sequence carries no
/// `EOF`, one is synthesised just past the last token.
#[derive(Debug, Clone)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
}

impl TokenBuffer {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if let Some(end) = tokens.iter().position(|token| token.kind == TokenKind::EOF) {
            tokens.truncate(end + 1);
        }

        let eof = match tokens.last() {
            Some(last) if last.kind == TokenKind::EOF => last.clone(),
            Some(last) => Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span::new(
                    last.span.line,
                    last.span.column_end,
                    last.span.column_end,
                    last.span.byte_end,
                    last.span.byte_end,
                ),
            },
            None => Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span::new(1, 1, 1, 0, 0),
            },
        };

        TokenBuffer { tokens, pos: 0, eof }
    }
}

impl TokenSource for TokenBuffer {
    fn next_token(&mut self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token.clone()
            }
            None => self.eof.clone(),
        }
    }
}
