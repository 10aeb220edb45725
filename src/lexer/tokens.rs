use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("var", TokenKind::Var);
        map.insert("const", TokenKind::Const);
        map.insert("undefined", TokenKind::Undefined);
        map.insert("typeof", TokenKind::Typeof);
        map.insert("do", TokenKind::Do);
        map.insert("while", TokenKind::While);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map.insert("default", TokenKind::Default);
        map.insert("return", TokenKind::Return);
        map.insert("function", TokenKind::Function);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("of", TokenKind::Of);
        map.insert("in", TokenKind::In);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,
    Number,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    Ellipsis,
    Semicolon,
    Colon,
    Question,
    Comma,
    Dollar,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    StarStarEquals,

    Plus,
    Dash,
    Slash,
    Star,
    StarStar,
    Percent,

    // Reserved
    Let,
    Var,
    Const,
    Undefined,
    Typeof,
    Do,
    While,
    If,
    Else,
    Switch,
    Case,
    Default,
    Return,
    Function,
    True,
    False,
    Of,
    In,
}

impl TokenKind {
    /// Keywords that open a declaration; used as statement boundaries when
    /// recovering from a failed statement.
    pub fn is_declaration_keyword(&self) -> bool {
        matches!(self, TokenKind::Var | TokenKind::Let | TokenKind::Const)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} [{}:{}] -> <{}:'{}'>",
            self.span.line, self.span.column_start, self.span.column_end, self.kind, self.value
        )
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Illegal,
        ]) {
            println!("{}", self);
        } else {
            println!("#{} [{}:{}] -> <{}>", self.span.line, self.span.column_start, self.span.column_end, self.kind);
        }
    }
}
