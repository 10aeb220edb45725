use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{DeclarationKind, EmptyStmt, ExpressionStmt, VariableDeclaration, VariableDeclarator},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return handler(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default.power())?;
    let terminator = parser.expect_error(TokenKind::Semicolon, |token| ErrorImpl::ExpectedSeparatorOrTerminator { token })?;

    Ok(Statement::Expression(ExpressionStmt {
        span: expression.span().to(&terminator.span),
        expression,
    }))
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let span = parser.advance().span;

    Ok(Statement::Empty(EmptyStmt { span }))
}

/// States of the declarator-list machine. Failure leaves the machine through
/// `Err`, so it has no state of its own.
enum DeclaratorState {
    ExpectIdentifier,
    ExpectSeparatorOrInit(Identifier),
    ExpectTerminatorAfterInit,
    Done(Span),
}

/// `var|let|const ident (, ident)* ;` or `var|let|const ident (, ident)* = expr ;`
///
/// An initialized declarator always ends the statement; a `,` after an
/// initializer is rejected.
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let keyword = parser.advance();
    let kind = DeclarationKind::from_token(keyword.kind).ok_or_else(|| {
        Error::new(ErrorImpl::UnexpectedToken { token: keyword.value.clone() }, &keyword)
    })?;

    let mut declarators = vec![];
    let mut state = DeclaratorState::ExpectIdentifier;

    let end = loop {
        state = match state {
            DeclaratorState::ExpectIdentifier => {
                let name = parser.expect_error(TokenKind::Identifier, |token| ErrorImpl::ExpectedIdentifier { token })?;
                DeclaratorState::ExpectSeparatorOrInit(Identifier { name: name.value, span: name.span })
            }
            DeclaratorState::ExpectSeparatorOrInit(identifier) => match parser.current_token_kind() {
                TokenKind::Comma => {
                    parser.advance();
                    declarators.push(VariableDeclarator { span: identifier.span, identifier, initializer: None });
                    DeclaratorState::ExpectIdentifier
                }
                TokenKind::Semicolon => {
                    let terminator = parser.advance();
                    declarators.push(VariableDeclarator { span: identifier.span, identifier, initializer: None });
                    DeclaratorState::Done(terminator.span)
                }
                TokenKind::Assignment => {
                    parser.advance();
                    let initializer = parse_expr(parser, BindingPower::Default.power())?;
                    declarators.push(VariableDeclarator {
                        span: identifier.span.to(initializer.span()),
                        identifier,
                        initializer: Some(initializer),
                    });
                    DeclaratorState::ExpectTerminatorAfterInit
                }
                _ => {
                    let token = parser.advance();
                    return Err(Error::new(ErrorImpl::UnexpectedToken { token: token.value.clone() }, &token));
                }
            },
            DeclaratorState::ExpectTerminatorAfterInit => {
                let terminator = parser.expect_error(TokenKind::Semicolon, |token| ErrorImpl::ExpectedSeparatorOrTerminator { token })?;
                DeclaratorState::Done(terminator.span)
            }
            DeclaratorState::Done(end) => break end,
        };
    };

    Ok(Statement::VariableDeclaration(VariableDeclaration {
        kind,
        declarators,
        span: keyword.span.to(&end),
    }))
}
