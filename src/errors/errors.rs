use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::{Token, TokenKind}, Span};

/// A parse failure correlated to the token that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    token: TokenKind,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, token: &Token) -> Self {
        Error::at(error_impl, token.kind, token.span)
    }

    pub fn at(error_impl: ErrorImpl, token: TokenKind, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            token,
            span,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_token_kind(&self) -> TokenKind {
        self.token
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    /// Flattens the error into the record handed to diagnostic sinks.
    pub fn record(&self) -> DiagnosticRecord {
        DiagnosticRecord {
            line: self.span.line,
            column_start: self.span.column_start,
            column_end: self.span.column_end,
            message: self.message(),
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::NoPrefixHandler { .. } => "NoPrefixHandler",
            ErrorImpl::MalformedLiteral { .. } => "MalformedLiteral",
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::ExpectedSeparatorOrTerminator { .. } => "ExpectedSeparatorOrTerminator",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnterminatedExpression { .. } => "UnterminatedExpression",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NoPrefixHandler { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                token
            )),
            ErrorImpl::MalformedLiteral { token } => ErrorTip::Suggestion(format!(
                "Invalid literal: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::ExpectedIdentifier { token } => ErrorTip::Suggestion(format!(
                "Expected a variable name but found `{}`",
                token
            )),
            ErrorImpl::ExpectedSeparatorOrTerminator { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected one of `,` `;` `=`",
                token
            )),
            ErrorImpl::UnterminatedExpression { token, expected } => ErrorTip::Suggestion(format!(
                "Expected `{}` but found `{}`",
                expected, token
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column_start, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("no prefix parse function for {token:?}")]
    NoPrefixHandler { token: String },
    #[error("could not parse literal {token:?}")]
    MalformedLiteral { token: String },
    #[error("expected identifier, found {token:?}")]
    ExpectedIdentifier { token: String },
    #[error("expected `;`, found {token:?}")]
    ExpectedSeparatorOrTerminator { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected `{expected}` to close expression, found {token:?}")]
    UnterminatedExpression { token: String, expected: &'static str },
    #[error("expression nested deeper than {limit} levels at {token:?}")]
    NestingTooDeep { token: String, limit: usize },
}

/// The plain record a diagnostic sink receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub line: u32,
    pub column_start: u32,
    pub column_end: u32,
    pub message: String,
}
