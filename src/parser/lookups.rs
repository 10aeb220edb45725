use std::collections::HashMap;

use crate::{ast::ast::{Expression, Statement}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator tightness; a higher power binds more tightly.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
#[repr(u8)]
pub enum BindingPower {
    Default = 0,
    Assignment = 10,
    Conditional = 20,
    LogicalOr = 30,
    LogicalAnd = 40,
    Equality = 50,
    Relational = 60,
    Additive = 70,
    Multiplicative = 80,
    Exponent = 90,
    Unary = 100,
    Postfix = 110,
    Call = 120,
}

impl BindingPower {
    pub fn power(self) -> u8 {
        self as u8
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

/// The operator precedence table.
///
/// `typeof` has an entry so prefix handlers can bind their operand with it,
/// even though it never continues an expression.
pub fn precedence(kind: TokenKind) -> Option<(BindingPower, Associativity)> {
    use Associativity::*;
    use BindingPower::*;

    Some(match kind {
        TokenKind::Assignment
        | TokenKind::PlusEquals
        | TokenKind::MinusEquals
        | TokenKind::StarEquals
        | TokenKind::SlashEquals
        | TokenKind::PercentEquals
        | TokenKind::StarStarEquals => (Assignment, Right),
        TokenKind::Question => (Conditional, Right),
        TokenKind::Or => (LogicalOr, Left),
        TokenKind::And => (LogicalAnd, Left),
        TokenKind::Equals | TokenKind::NotEquals => (Equality, Left),
        TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals
        | TokenKind::In => (Relational, Left),
        TokenKind::Plus | TokenKind::Dash => (Additive, Left),
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => (Multiplicative, Left),
        TokenKind::StarStar => (Exponent, Right),
        TokenKind::Typeof => (Unary, Right),
        TokenKind::PlusPlus | TokenKind::MinusMinus => (Postfix, Left),
        TokenKind::OpenParen | TokenKind::OpenBracket | TokenKind::Dot => (Call, Left),
        _ => return None,
    })
}

/// Minimum power the right-hand operand of an operator may continue at.
///
/// A right-associative operator lets an equal-power operator into its right
/// operand; a left-associative one does not.
pub fn continuation_power(binding_power: BindingPower, associativity: Associativity) -> u8 {
    match associativity {
        Associativity::Right => binding_power.power(),
        Associativity::Left => binding_power.power() + 1,
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type LEDHandler = fn(&mut Parser, Expression, u8) -> Result<Expression, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Assignment
    parser.led(TokenKind::Assignment, parse_assignment_expr);
    parser.led(TokenKind::PlusEquals, parse_assignment_expr);
    parser.led(TokenKind::MinusEquals, parse_assignment_expr);
    parser.led(TokenKind::StarEquals, parse_assignment_expr);
    parser.led(TokenKind::SlashEquals, parse_assignment_expr);
    parser.led(TokenKind::PercentEquals, parse_assignment_expr);
    parser.led(TokenKind::StarStarEquals, parse_assignment_expr);

    parser.led(TokenKind::Question, parse_conditional_expr);

    // Logical
    parser.led(TokenKind::Or, parse_binary_expr);
    parser.led(TokenKind::And, parse_binary_expr);

    // Equality and relational
    parser.led(TokenKind::Equals, parse_binary_expr);
    parser.led(TokenKind::NotEquals, parse_binary_expr);
    parser.led(TokenKind::Less, parse_binary_expr);
    parser.led(TokenKind::LessEquals, parse_binary_expr);
    parser.led(TokenKind::Greater, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, parse_binary_expr);
    parser.led(TokenKind::In, parse_binary_expr);

    // Additive, multiplicative and exponent
    parser.led(TokenKind::Plus, parse_binary_expr);
    parser.led(TokenKind::Dash, parse_binary_expr);
    parser.led(TokenKind::Star, parse_binary_expr);
    parser.led(TokenKind::Slash, parse_binary_expr);
    parser.led(TokenKind::Percent, parse_binary_expr);
    parser.led(TokenKind::StarStar, parse_binary_expr);

    // Postfix
    parser.led(TokenKind::PlusPlus, parse_postfix_update_expr);
    parser.led(TokenKind::MinusMinus, parse_postfix_update_expr);

    // Call and member
    parser.led(TokenKind::OpenParen, parse_call_expr);
    parser.led(TokenKind::OpenBracket, parse_index_expr);
    parser.led(TokenKind::Dot, parse_member_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_integer_literal);
    parser.nud(TokenKind::Identifier, parse_identifier);
    parser.nud(TokenKind::True, parse_boolean_literal);
    parser.nud(TokenKind::False, parse_boolean_literal);
    parser.nud(TokenKind::String, parse_string_literal);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Prefix operators
    parser.nud(TokenKind::Typeof, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::PlusPlus, parse_prefix_update_expr);
    parser.nud(TokenKind::MinusMinus, parse_prefix_update_expr);

    // Statements
    parser.stmt(TokenKind::Var, parse_var_decl_stmt);
    parser.stmt(TokenKind::Let, parse_var_decl_stmt);
    parser.stmt(TokenKind::Const, parse_var_decl_stmt);
    parser.stmt(TokenKind::Semicolon, parse_empty_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
