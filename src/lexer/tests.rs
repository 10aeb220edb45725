//! Unit tests for the lexer module.

use crate::Span;

use super::{
    lexer::{tokenize, Lexer},
    source::{TokenBuffer, TokenSource},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("let var const typeof in true false function return undefined");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Var);
    assert_eq!(tokens[2].kind, TokenKind::Const);
    assert_eq!(tokens[3].kind, TokenKind::Typeof);
    assert_eq!(tokens[4].kind, TokenKind::In);
    assert_eq!(tokens[5].kind, TokenKind::True);
    assert_eq!(tokens[6].kind, TokenKind::False);
    assert_eq!(tokens[7].kind, TokenKind::Function);
    assert_eq!(tokens[8].kind, TokenKind::Return);
    assert_eq!(tokens[9].kind, TokenKind::Undefined);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore letter");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_underscore");
    // A keyword prefix does not make a keyword
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "letter");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0x1F 0b101 0o17 3.14 99999999999999999999");

    assert!(tokens[..6].iter().all(|token| token.kind == TokenKind::Number));
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0x1F");
    assert_eq!(tokens[2].value, "0b101");
    assert_eq!(tokens[3].value, "0o17");
    assert_eq!(tokens[4].value, "3.14");
    // The scanner never interprets the value
    assert_eq!(tokens[5].value, "99999999999999999999");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" 'single' "tab\there" "quote\"test" 'it\'s'"#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "single");
    assert_eq!(tokens[2].value, "tab\there");
    assert_eq!(tokens[3].value, "quote\"test");
    assert_eq!(tokens[4].value, "it's");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_string_span_covers_quotes() {
    let tokens = tokenize(r#"  "a\nb""#);

    assert_eq!(tokens[0].value, "a\nb");
    assert_eq!(tokens[0].span, Span::new(1, 3, 9, 2, 8));
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * ** / % == != < > <= >= = && || ! ++ --"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::StarStar,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_compound_assignment() {
    assert_eq!(
        kinds("+= -= *= /= %= **="),
        vec![
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::PercentEquals,
            TokenKind::StarStarEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] . , ; : ? ... $"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Question,
            TokenKind::Ellipsis,
            TokenKind::Dollar,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_operators_without_whitespace() {
    assert_eq!(
        kinds("a**=b++"),
        vec![
            TokenKind::Identifier,
            TokenKind::StarStarEquals,
            TokenKind::Identifier,
            TokenKind::PlusPlus,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    let tokens = tokenize("let x; // trailing comment\n// whole line\nx");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].span.line, 3);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans_track_lines_and_columns() {
    let tokens = tokenize("let x\n  = 5;");

    assert_eq!(tokens[0].span, Span::new(1, 1, 4, 0, 3));
    assert_eq!(tokens[1].span, Span::new(1, 5, 6, 4, 5));
    assert_eq!(tokens[2].span, Span::new(2, 3, 4, 8, 9));
    assert_eq!(tokens[3].span, Span::new(2, 5, 6, 10, 11));
    assert_eq!(tokens[4].span, Span::new(2, 6, 7, 11, 12));
    assert_eq!(tokens[5].kind, TokenKind::EOF);
    assert_eq!(tokens[5].span, Span::new(2, 7, 7, 12, 12));
}

#[test]
fn test_unrecognised_character_is_illegal_token() {
    let tokens = tokenize("let @ = 1;");

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[1].span, Span::new(1, 5, 6, 4, 5));
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
}

#[test]
fn test_unterminated_string_is_illegal_quote() {
    let tokens = tokenize("\"abc");

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "\"");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "abc");
}

#[test]
fn test_lexer_yields_eof_forever() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].span, Span::new(1, 1, 1, 0, 0));
}

#[test]
fn test_token_buffer_replays_then_repeats_eof() {
    let mut buffer = TokenBuffer::new(tokenize("a b"));

    assert_eq!(buffer.next_token().value, "a");
    assert_eq!(buffer.next_token().value, "b");
    let eof = buffer.next_token();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(buffer.next_token(), eof);
    assert_eq!(buffer.next_token(), eof);
}

#[test]
fn test_token_buffer_synthesises_missing_eof() {
    let mut tokens = tokenize("ab");
    tokens.pop();
    let mut buffer = TokenBuffer::new(tokens);

    assert_eq!(buffer.next_token().value, "ab");
    let eof = buffer.next_token();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.span, Span::new(1, 3, 3, 2, 2));
}

#[test]
fn test_columns_on_one_long_line() {
    let count = 100_000;
    let tokens = tokenize(&"a ".repeat(count));

    assert_eq!(tokens.len(), count + 1);
    assert_eq!(tokens[count - 1].span, Span::new(1, 2 * count as u32 - 1, 2 * count as u32, 2 * count - 2, 2 * count - 1));
    assert_eq!(tokens[count].span.column_start, 2 * count as u32 + 1);
}

#[test]
fn test_columns_count_characters_not_bytes() {
    let tokens = tokenize("'é' x\n é");

    assert_eq!(tokens[0].span, Span::new(1, 1, 4, 0, 4));
    assert_eq!(tokens[1].span, Span::new(1, 5, 6, 5, 6));
    // Non-ASCII outside a string is a single illegal character
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].span, Span::new(2, 2, 3, 8, 10));
}
