use std::mem;

use crate::lexer::{
    source::TokenSource,
    tokens::{Token, TokenKind},
};

/// Two-token window over a [`TokenSource`].
///
/// `current` is the next unconsumed token and `peek` the one after it.
/// Consumption is strictly forward; there is no way back to a token once
/// `advance` has moved past it.
pub struct Cursor {
    source: Box<dyn TokenSource>,
    current: Token,
    peek: Token,
}

impl Cursor {
    /// Creates a cursor and fills the window from `source`.
    ///
    /// # Arguments
    ///
    /// * `source` - Token source the cursor takes ownership of
    ///
    /// # Returns
    ///
    /// A cursor whose `current` is the first token of `source`.
    pub fn new(source: impl TokenSource + 'static) -> Self {
        let mut source: Box<dyn TokenSource> = Box::new(source);
        let current = source.next_token();
        let peek = source.next_token();

        Cursor { source, current, peek }
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn peek(&self) -> &Token {
        &self.peek
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts `peek` into `current` and pulls a fresh `peek` from the source.
    ///
    /// # Returns
    ///
    /// The token that was moved past. At `EOF` this is another `EOF`.
    pub fn advance(&mut self) -> Token {
        let next = self.source.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    /// Whether `current` is `EOF`.
    pub fn at_eof(&self) -> bool {
        self.current.kind == TokenKind::EOF
    }
}
