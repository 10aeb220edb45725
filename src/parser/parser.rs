//! Parser state and entry points.
//!
//! The parser owns the token cursor, the handler lookup tables and the
//! reporter for one parse invocation. Productions return `Result` and
//! propagate with `?`; the public entry points turn a failure into exactly one
//! reported diagnostic and an absent node.

use std::collections::HashMap;

use tracing::{debug, instrument, trace};

use crate::{
    ast::ast::{Expression, Program, Statement},
    config::ParserConfig,
    errors::{
        errors::{Error, ErrorImpl},
        reporter::Reporter,
    },
    lexer::{
        lexer::Lexer,
        source::{TokenBuffer, TokenSource},
        tokens::{Token, TokenKind},
    },
};

use super::{
    cursor::Cursor,
    expr::parse_expr,
    lookups::{
        create_token_lookups, LEDHandler, LEDLookup, NUDHandler, NUDLookup, StmtHandler,
        StmtLookup,
    },
    stmt::parse_stmt,
};

/// How many expressions may be open inside one another before the parser
/// gives up with `NestingTooDeep`.
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser {
    cursor: Cursor,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix and postfix) expression handlers
    led_lookup: LEDLookup,
    reporter: Reporter,
    config: ParserConfig,
    /// Number of `parse_expr` calls currently open
    depth: usize,
}

impl Parser {
    /// Creates a parser with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `source` - Scanner or token buffer to pull tokens from
    ///
    /// # Returns
    ///
    /// A parser positioned on the first token of `source`.
    pub fn new(source: impl TokenSource + 'static) -> Self {
        Parser::with_config(source, ParserConfig::default())
    }

    /// Creates a parser with an explicit configuration.
    ///
    /// # Arguments
    ///
    /// * `source` - Scanner or token buffer to pull tokens from
    /// * `config` - Recovery and error-limit settings for `parse_program`
    pub fn with_config(source: impl TokenSource + 'static, config: ParserConfig) -> Self {
        let mut parser = Parser {
            cursor: Cursor::new(source),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            reporter: Reporter::new(),
            config,
            depth: 0,
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the next unconsumed token.
    pub fn current_token(&self) -> &Token {
        self.cursor.current()
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        self.cursor.peek()
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    /// Consumes a token of the expected kind.
    ///
    /// Any other token is consumed as well, so a failing production always
    /// makes progress.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The kind the current token must have
    /// * `error` - Builds the failure from the offending token's spelling
    ///
    /// # Returns
    ///
    /// The consumed token, or the error built by `error`.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: impl FnOnce(String) -> ErrorImpl,
    ) -> Result<Token, Error> {
        let token = self.advance();

        if token.kind == expected_kind {
            Ok(token)
        } else {
            Err(Error::new(error(token.value.clone()), &token))
        }
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, |token| ErrorImpl::UnexpectedToken { token })
    }

    pub fn has_tokens(&self) -> bool {
        !self.cursor.at_eof()
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix or postfix) handler for a token.
    ///
    /// Its binding power comes from [`super::lookups::precedence`].
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Every diagnostic reported so far, in order.
    pub fn diagnostics(&self) -> &Reporter {
        &self.reporter
    }

    pub fn into_diagnostics(self) -> Reporter {
        self.reporter
    }

    fn report(&mut self, error: Error) {
        self.reporter.report(error);
    }

    /// Opens one level of expression nesting.
    ///
    /// At [`MAX_NESTING_DEPTH`] the current token is consumed and
    /// `NestingTooDeep` returned instead; the caller must not call
    /// [`Parser::leave_nesting`] in that case.
    pub(crate) fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            let token = self.advance();
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { token: token.value.clone(), limit: MAX_NESTING_DEPTH },
                &token,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Parses one expression whose operators all bind at least `min_power`.
    ///
    /// # Arguments
    ///
    /// * `min_power` - Lowest binding power allowed to continue the expression;
    ///   `0` parses a full expression
    ///
    /// # Returns
    ///
    /// The expression, or `None` after reporting the failure. The offending
    /// token has been consumed either way.
    pub fn parse_expression(&mut self, min_power: u8) -> Option<Expression> {
        match parse_expr(self, min_power) {
            Ok(expression) => Some(expression),
            Err(error) => {
                self.report(error);
                None
            }
        }
    }

    /// Parses one statement. On failure the error is reported and `None`
    /// returned; the caller decides whether to resynchronise.
    pub fn parse_statement(&mut self) -> Option<Statement> {
        match parse_stmt(self) {
            Ok(statement) => Some(statement),
            Err(error) => {
                self.report(error);
                None
            }
        }
    }

    /// Parses statements until `EOF`.
    ///
    /// Failed statements are reported and skipped, unless the configuration
    /// disables recovery or the error limit is reached.
    ///
    /// # Returns
    ///
    /// The statements that parsed, spanning from the first token to `EOF`
    /// (or to where parsing stopped).
    #[instrument(level = "debug", skip(self))]
    pub fn parse_program(&mut self) -> Program {
        let start = self.current_token().span;
        let mut body = vec![];

        while self.has_tokens() {
            trace!(token = %self.current_token(), "statement");

            if let Some(statement) = self.parse_statement() {
                body.push(statement);
                continue;
            }

            if !self.config.recover || self.config.error_limit_reached(self.reporter.len()) {
                debug!(errors = self.reporter.len(), "stopping after failed statement");
                break;
            }

            self.synchronize();
        }

        Program {
            body,
            span: start.to(&self.current_token().span),
        }
    }

    /// Skips to the next statement boundary: just past a `;`, or onto a
    /// declaration keyword or `EOF`.
    fn synchronize(&mut self) {
        let mut skipped = 0;

        while self.has_tokens() {
            match self.current_token_kind() {
                TokenKind::Semicolon => {
                    self.advance();
                    skipped += 1;
                    break;
                }
                kind if kind.is_declaration_keyword() => break,
                _ => {
                    self.advance();
                    skipped += 1;
                }
            }
        }

        debug!(skipped, next = %self.current_token(), "resynchronised");
    }
}

/// Parses an already scanned token sequence.
///
/// Returns the program together with every diagnostic reported on the way.
pub fn parse(tokens: Vec<Token>) -> (Program, Reporter) {
    parse_with_config(tokens, ParserConfig::default())
}

pub fn parse_with_config(tokens: Vec<Token>, config: ParserConfig) -> (Program, Reporter) {
    let mut parser = Parser::with_config(TokenBuffer::new(tokens), config);
    let program = parser.parse_program();

    (program, parser.into_diagnostics())
}

/// Scans and parses `source` in one pass.
pub fn parse_source(source: &str) -> (Program, Reporter) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.into_diagnostics())
}
