use tracing::trace;

use crate::{
    ast::{
        ast::Expression,
        expressions::{
            AssignmentExpr, AssignmentOperator, BinaryExpr, BinaryOperator, BooleanLiteral,
            CallExpr, ConditionalExpr, Identifier, IndexExpr, IntegerLiteral, MemberExpr,
            StringLiteral, UnaryExpr, UnaryOperator, UpdateExpr, UpdateOperator,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{continuation_power, precedence, Associativity, BindingPower},
    parser::Parser,
};

/// Pratt loop: one prefix handler, then infix/postfix handlers for as long as
/// the next operator binds at least `min_power`.
///
/// Every nested operand comes back through here, so this is where nesting
/// depth is bounded.
pub fn parse_expr(parser: &mut Parser, min_power: u8) -> Result<Expression, Error> {
    parser.enter_nesting()?;
    let result = parse_nested_expr(parser, min_power);
    parser.leave_nesting();

    result
}

fn parse_nested_expr(parser: &mut Parser, min_power: u8) -> Result<Expression, Error> {
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        let token = parser.advance();
        return Err(Error::new(ErrorImpl::NoPrefixHandler { token: token.value.clone() }, &token));
    };

    let mut left = nud(parser)?;

    loop {
        let token_kind = parser.current_token_kind();
        let Some((binding_power, associativity)) = precedence(token_kind) else {
            break;
        };
        if binding_power.power() < min_power {
            break;
        }
        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        trace!(operator = %token_kind, power = binding_power.power(), min_power, "continuing expression");
        left = led(parser, left, continuation_power(binding_power, associativity))?;
    }

    Ok(left)
}

/// Converts integer literal text, accepting `0x`, `0o`, `0b` and legacy
/// leading-zero octal spellings.
pub fn parse_integer(text: &str) -> Option<i64> {
    let (digits, radix) = match text.get(..2) {
        Some("0x" | "0X") => (&text[2..], 16),
        Some("0o" | "0O") => (&text[2..], 8),
        Some("0b" | "0B") => (&text[2..], 2),
        _ if text.len() > 1 && text.starts_with('0') => (&text[1..], 8),
        _ => (text, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    i64::from_str_radix(digits, radix).ok()
}

fn unsupported_operator(token: &Token) -> Error {
    Error::new(ErrorImpl::UnexpectedToken { token: token.value.clone() }, token)
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.advance();

    match parse_integer(&token.value) {
        Some(value) => Ok(Expression::IntegerLiteral(IntegerLiteral { value, span: token.span })),
        None => Err(Error::new(ErrorImpl::MalformedLiteral { token: token.value.clone() }, &token)),
    }
}

pub fn parse_boolean_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.advance();

    let value = match token.value.as_str() {
        "true" => true,
        "false" => false,
        _ => return Err(Error::new(ErrorImpl::MalformedLiteral { token: token.value.clone() }, &token)),
    };

    Ok(Expression::BooleanLiteral(BooleanLiteral { value, span: token.span }))
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.advance();

    Ok(Expression::Identifier(Identifier { name: token.value, span: token.span }))
}

pub fn parse_string_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.advance();

    Ok(Expression::StringLiteral(StringLiteral { value: token.value, span: token.span }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default.power())?;
    parser.expect_error(TokenKind::CloseParen, |token| ErrorImpl::UnterminatedExpression { token, expected: ")" })?;

    Ok(expr)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let operator = UnaryOperator::from_token(operator_token.kind).ok_or_else(|| unsupported_operator(&operator_token))?;
    let argument = parse_expr(parser, continuation_power(BindingPower::Unary, Associativity::Right))?;

    Ok(Expression::Unary(UnaryExpr {
        span: operator_token.span.to(argument.span()),
        operator,
        argument: Box::new(argument),
    }))
}

pub fn parse_prefix_update_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let operator = UpdateOperator::from_token(operator_token.kind).ok_or_else(|| unsupported_operator(&operator_token))?;
    let argument = parse_expr(parser, continuation_power(BindingPower::Unary, Associativity::Right))?;

    Ok(Expression::Update(UpdateExpr {
        span: operator_token.span.to(argument.span()),
        operator,
        prefix: true,
        argument: Box::new(argument),
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expression, power: u8) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let operator = BinaryOperator::from_token(operator_token.kind).ok_or_else(|| unsupported_operator(&operator_token))?;
    let right = parse_expr(parser, power)?;

    Ok(Expression::Binary(BinaryExpr {
        span: left.span().to(right.span()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_assignment_expr(parser: &mut Parser, left: Expression, power: u8) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let operator = AssignmentOperator::from_token(operator_token.kind).ok_or_else(|| unsupported_operator(&operator_token))?;
    let value = parse_expr(parser, power)?;

    Ok(Expression::Assignment(AssignmentExpr {
        span: left.span().to(value.span()),
        target: Box::new(left),
        operator,
        value: Box::new(value),
    }))
}

pub fn parse_conditional_expr(parser: &mut Parser, left: Expression, power: u8) -> Result<Expression, Error> {
    parser.advance();
    let consequent = parse_expr(parser, BindingPower::Default.power())?;
    parser.expect_error(TokenKind::Colon, |token| ErrorImpl::UnterminatedExpression { token, expected: ":" })?;
    let alternate = parse_expr(parser, power)?;

    Ok(Expression::Conditional(ConditionalExpr {
        span: left.span().to(alternate.span()),
        test: Box::new(left),
        consequent: Box::new(consequent),
        alternate: Box::new(alternate),
    }))
}

pub fn parse_postfix_update_expr(parser: &mut Parser, left: Expression, _power: u8) -> Result<Expression, Error> {
    let operator_token = parser.advance();
    let operator = UpdateOperator::from_token(operator_token.kind).ok_or_else(|| unsupported_operator(&operator_token))?;

    Ok(Expression::Update(UpdateExpr {
        span: left.span().to(&operator_token.span),
        operator,
        prefix: false,
        argument: Box::new(left),
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expression, _power: u8) -> Result<Expression, Error> {
    parser.advance();

    let mut arguments = vec![];

    while parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser, BindingPower::Default.power())?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    let close = parser.expect_error(TokenKind::CloseParen, |token| ErrorImpl::UnterminatedExpression { token, expected: ")" })?;

    Ok(Expression::Call(CallExpr {
        span: left.span().to(&close.span),
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expression, _power: u8) -> Result<Expression, Error> {
    parser.advance();
    let index = parse_expr(parser, BindingPower::Default.power())?;
    let close = parser.expect_error(TokenKind::CloseBracket, |token| ErrorImpl::UnterminatedExpression { token, expected: "]" })?;

    Ok(Expression::Index(IndexExpr {
        span: left.span().to(&close.span),
        object: Box::new(left),
        index: Box::new(index),
    }))
}

pub fn parse_member_expr(parser: &mut Parser, left: Expression, _power: u8) -> Result<Expression, Error> {
    parser.advance();
    let property = parser.expect_error(TokenKind::Identifier, |token| ErrorImpl::ExpectedIdentifier { token })?;

    Ok(Expression::Member(MemberExpr {
        span: left.span().to(&property.span),
        object: Box::new(left),
        property: Identifier { name: property.value, span: property.span },
    }))
}
