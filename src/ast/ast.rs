use std::{fmt::Display, mem};

use crate::Span;

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, BooleanLiteral, CallExpr, ConditionalExpr, Identifier,
        IndexExpr, IntegerLiteral, MemberExpr, StringLiteral, UnaryExpr, UpdateExpr,
    },
    statements::{EmptyStmt, ExpressionStmt, VariableDeclaration},
};

/// Every expression form the parser produces.
///
/// Children are owned through `Box`/`Vec`, so a tree can never share or
/// cycle back to a node. Dropping a tree does not recurse (see the `Drop`
/// impl below), so arbitrarily long operator chains can be released.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    StringLiteral(StringLiteral),
    Identifier(Identifier),
    Binary(BinaryExpr),
    Assignment(AssignmentExpr),
    Conditional(ConditionalExpr),
    Unary(UnaryExpr),
    Update(UpdateExpr),
    Call(CallExpr),
    Index(IndexExpr),
    Member(MemberExpr),
}

impl Expression {
    pub fn span(&self) -> &Span {
        match self {
            Expression::IntegerLiteral(expr) => &expr.span,
            Expression::BooleanLiteral(expr) => &expr.span,
            Expression::StringLiteral(expr) => &expr.span,
            Expression::Identifier(expr) => &expr.span,
            Expression::Binary(expr) => &expr.span,
            Expression::Assignment(expr) => &expr.span,
            Expression::Conditional(expr) => &expr.span,
            Expression::Unary(expr) => &expr.span,
            Expression::Update(expr) => &expr.span,
            Expression::Call(expr) => &expr.span,
            Expression::Index(expr) => &expr.span,
            Expression::Member(expr) => &expr.span,
        }
    }

    /// A childless stand-in left behind when a child is detached.
    fn hollow() -> Expression {
        Expression::BooleanLiteral(BooleanLiteral { value: false, span: Span::default() })
    }

    /// Moves every direct child of `self` into `pending`.
    fn detach_children(&mut self, pending: &mut Vec<Expression>) {
        let detach = |child: &mut Box<Expression>| mem::replace(child.as_mut(), Expression::hollow());

        match self {
            Expression::IntegerLiteral(_)
            | Expression::BooleanLiteral(_)
            | Expression::StringLiteral(_)
            | Expression::Identifier(_) => {}
            Expression::Binary(expr) => {
                pending.push(detach(&mut expr.left));
                pending.push(detach(&mut expr.right));
            }
            Expression::Assignment(expr) => {
                pending.push(detach(&mut expr.target));
                pending.push(detach(&mut expr.value));
            }
            Expression::Conditional(expr) => {
                pending.push(detach(&mut expr.test));
                pending.push(detach(&mut expr.consequent));
                pending.push(detach(&mut expr.alternate));
            }
            Expression::Unary(expr) => pending.push(detach(&mut expr.argument)),
            Expression::Update(expr) => pending.push(detach(&mut expr.argument)),
            Expression::Call(expr) => {
                pending.push(detach(&mut expr.callee));
                pending.append(&mut expr.arguments);
            }
            Expression::Index(expr) => {
                pending.push(detach(&mut expr.object));
                pending.push(detach(&mut expr.index));
            }
            Expression::Member(expr) => pending.push(detach(&mut expr.object)),
        }
    }
}

/// Releases the tree with an explicit work list instead of the call stack.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = vec![];
        self.detach_children(&mut pending);

        while let Some(mut expression) = pending.pop() {
            expression.detach_children(&mut pending);
        }
    }
}

/// Renders the expression fully parenthesised, e.g. `(a + (b * c))`.
impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::IntegerLiteral(expr) => write!(f, "{}", expr.value),
            Expression::BooleanLiteral(expr) => write!(f, "{}", expr.value),
            Expression::StringLiteral(expr) => write!(f, "{:?}", expr.value),
            Expression::Identifier(expr) => write!(f, "{}", expr.name),
            Expression::Binary(expr) => {
                write!(f, "({} {} {})", expr.left, expr.operator, expr.right)
            }
            Expression::Assignment(expr) => {
                write!(f, "({} {} {})", expr.target, expr.operator, expr.value)
            }
            Expression::Conditional(expr) => write!(
                f,
                "({} ? {} : {})",
                expr.test, expr.consequent, expr.alternate
            ),
            Expression::Unary(expr) => write!(f, "({}{})", expr.operator, expr.argument),
            Expression::Update(expr) if expr.prefix => {
                write!(f, "({}{})", expr.operator, expr.argument)
            }
            Expression::Update(expr) => write!(f, "({}{})", expr.argument, expr.operator),
            Expression::Call(expr) => {
                write!(f, "{}(", expr.callee)?;
                for (i, argument) in expr.arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
            Expression::Index(expr) => write!(f, "{}[{}]", expr.object, expr.index),
            Expression::Member(expr) => write!(f, "{}.{}", expr.object, expr.property.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    Expression(ExpressionStmt),
    Empty(EmptyStmt),
}

impl Statement {
    pub fn span(&self) -> &Span {
        match self {
            Statement::VariableDeclaration(stmt) => &stmt.span,
            Statement::Expression(stmt) => &stmt.span,
            Statement::Empty(stmt) => &stmt.span,
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::VariableDeclaration(stmt) => {
                write!(f, "{} ", stmt.kind)?;
                for (i, declarator) in stmt.declarators.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", declarator.identifier.name)?;
                    if let Some(initializer) = &declarator.initializer {
                        write!(f, " = {}", initializer)?;
                    }
                }
                write!(f, ";")
            }
            Statement::Expression(stmt) => write!(f, "{};", stmt.expression),
            Statement::Empty(_) => write!(f, ";"),
        }
    }
}

/// The statements of one source text, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Statement>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.body.iter()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.body {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
