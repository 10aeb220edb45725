use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

use super::{ast::Expression, expressions::Identifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
}

impl DeclarationKind {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Var => Some(DeclarationKind::Var),
            TokenKind::Let => Some(DeclarationKind::Let),
            TokenKind::Const => Some(DeclarationKind::Const),
            _ => None,
        }
    }
}

impl Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclarationKind::Var => write!(f, "var"),
            DeclarationKind::Let => write!(f, "let"),
            DeclarationKind::Const => write!(f, "const"),
        }
    }
}

/// One `identifier [= initializer]` unit of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub identifier: Identifier,
    pub initializer: Option<Expression>,
    pub span: Span,
}

/// `var`/`let`/`const` followed by at least one declarator.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub kind: DeclarationKind,
    pub declarators: Vec<VariableDeclarator>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expression,
    pub span: Span,
}

/// A lone `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyStmt {
    pub span: Span,
}
