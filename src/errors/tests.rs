//! Unit tests for error handling.

use crate::{
    errors::{
        errors::{DiagnosticRecord, Error, ErrorImpl, ErrorTip},
        reporter::Reporter,
    },
    lexer::tokens::TokenKind,
    Span,
};

fn error(error_impl: ErrorImpl) -> Error {
    Error::at(error_impl, TokenKind::Identifier, Span::new(3, 7, 9, 20, 22))
}

#[test]
fn test_error_creation() {
    let error = error(ErrorImpl::NoPrefixHandler { token: ")".to_string() });

    assert_eq!(error.get_error_name(), "NoPrefixHandler");
    assert_eq!(error.get_token_kind(), TokenKind::Identifier);
}

#[test]
fn test_error_span() {
    let error = error(ErrorImpl::UnexpectedToken { token: "b".to_string() });

    assert_eq!(error.get_span().line, 3);
    assert_eq!(error.get_span().column_start, 7);
    assert_eq!(error.get_span().byte_end, 22);
}

#[test]
fn test_error_names() {
    let cases = [
        (ErrorImpl::MalformedLiteral { token: "1".to_string() }, "MalformedLiteral"),
        (ErrorImpl::ExpectedIdentifier { token: "1".to_string() }, "ExpectedIdentifier"),
        (ErrorImpl::ExpectedSeparatorOrTerminator { token: "1".to_string() }, "ExpectedSeparatorOrTerminator"),
        (ErrorImpl::UnexpectedToken { token: "1".to_string() }, "UnexpectedToken"),
        (ErrorImpl::UnterminatedExpression { token: "1".to_string(), expected: ")" }, "UnterminatedExpression"),
        (ErrorImpl::NestingTooDeep { token: "(".to_string(), limit: 256 }, "NestingTooDeep"),
    ];

    for (error_impl, name) in cases {
        assert_eq!(error(error_impl).get_error_name(), name);
    }
}

#[test]
fn test_error_tip() {
    let error = error(ErrorImpl::MalformedLiteral { token: "99999999999999999999".to_string() });

    match error.get_tip() {
        ErrorTip::Suggestion(message) => assert!(message.contains("99999999999999999999")),
        ErrorTip::None => panic!("Expected a suggestion"),
    }
}

#[test]
fn test_nesting_error_has_no_tip() {
    let error = error(ErrorImpl::NestingTooDeep { token: "(".to_string(), limit: 256 });

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
    assert_eq!(error.message(), "expression nested deeper than 256 levels at \"(\"");
}

#[test]
fn test_error_message_and_display() {
    let error = error(ErrorImpl::UnterminatedExpression { token: "EOF".to_string(), expected: "]" });

    assert_eq!(error.message(), "expected `]` to close expression, found \"EOF\"");
    assert_eq!(error.to_string(), "3:7: expected `]` to close expression, found \"EOF\"");
}

#[test]
fn test_error_record() {
    let error = error(ErrorImpl::ExpectedIdentifier { token: "=".to_string() });

    assert_eq!(
        error.record(),
        DiagnosticRecord {
            line: 3,
            column_start: 7,
            column_end: 9,
            message: "expected identifier, found \"=\"".to_string(),
        }
    );
}

#[test]
fn test_reporter_keeps_order() {
    let mut reporter = Reporter::new();
    assert!(!reporter.has_errors());

    reporter.report(error(ErrorImpl::UnexpectedToken { token: "a".to_string() }));
    reporter.report(error(ErrorImpl::UnexpectedToken { token: "b".to_string() }));

    assert!(reporter.has_errors());
    assert_eq!(reporter.len(), 2);

    let tokens: Vec<String> = reporter
        .iter()
        .map(|error| match error.get_error_impl() {
            ErrorImpl::UnexpectedToken { token } => token.clone(),
            other => panic!("unexpected {:?}", other),
        })
        .collect();
    assert_eq!(tokens, vec!["a", "b"]);

    assert_eq!(reporter.records().len(), 2);
    assert_eq!(reporter.into_errors().len(), 2);
}
