//! End-to-end tests: source text through the scanner and parser, down to the
//! rendered diagnostics.

use jsparse::{
    ast::{
        ast::{Expression, Statement},
        statements::DeclarationKind,
    },
    config::ParserConfig,
    lexer::{
        lexer::{tokenize, Lexer},
        source::TokenBuffer,
        tokens::TokenKind,
    },
    parser::parser::{parse, parse_source, Parser},
    render_error,
};

#[test]
fn test_parse_multiple_statements() {
    let source = "let x = 10;\nconst y = x * 2;\nvar a, b;\nx += y ** 2;";
    let (program, diagnostics) = parse_source(source);

    assert!(!diagnostics.has_errors());
    assert_eq!(program.body.len(), 4);
    assert!(program.iter().all(|statement| statement.span().line >= 1));
    assert!(matches!(program.iter().last(), Some(Statement::Expression(_))));
    assert_eq!(
        program.to_string(),
        "let x = 10;\nconst y = (x * 2);\nvar a, b;\n(x += (y ** 2));\n"
    );
}

#[test]
fn test_declaration_shapes() {
    let (program, _) = parse_source("let x = 5; let a, b;");

    let Statement::VariableDeclaration(first) = &program.body[0] else {
        panic!("expected a declaration");
    };
    assert_eq!(first.kind, DeclarationKind::Let);
    assert_eq!(first.declarators.len(), 1);
    assert_eq!(first.declarators[0].identifier.name, "x");
    assert!(matches!(
        first.declarators[0].initializer,
        Some(Expression::IntegerLiteral(ref literal)) if literal.value == 5
    ));

    let Statement::VariableDeclaration(second) = &program.body[1] else {
        panic!("expected a declaration");
    };
    assert_eq!(second.declarators.len(), 2);
    assert!(second.declarators.iter().all(|d| d.initializer.is_none()));
}

#[test]
fn test_lexer_and_buffer_sources_agree() {
    let source = "let r = typeof a.b[c](d) == 'object' ? x++ : --y;";

    let mut from_lexer = Parser::new(Lexer::new(source));
    let mut from_buffer = Parser::new(TokenBuffer::new(tokenize(source)));

    assert_eq!(from_lexer.parse_program(), from_buffer.parse_program());
    assert!(from_lexer.diagnostics().is_empty());
}

#[test]
fn test_reparse_is_structurally_identical() {
    let tokens = tokenize("let a = (1 + 2) * 3;\nlet b = a - 1 - 2;\nlet = ;");

    let (first_program, first_diagnostics) = parse(tokens.clone());
    let (second_program, second_diagnostics) = parse(tokens);

    assert_eq!(first_program, second_program);
    assert_eq!(first_diagnostics, second_diagnostics);
    assert_eq!(first_diagnostics.len(), 1);
}

#[test]
fn test_diagnostics_carry_locations() {
    let source = "let a = 1;\nlet b = 99999999999999999999;\nlet c;";
    let (program, diagnostics) = parse_source(source);

    assert_eq!(program.body.len(), 2);
    let records = diagnostics.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].line, 2);
    assert_eq!(records[0].column_start, 9);
    assert_eq!(records[0].column_end, 29);
    assert!(records[0].message.contains("99999999999999999999"));
}

#[test]
fn test_rendered_diagnostic() {
    let source = "let x = 1;\n  let 5 = 2;\n";
    let (_, diagnostics) = parse_source(source);
    let error = diagnostics.iter().next().expect("one diagnostic");

    let rendered = render_error(error, source, "input.js");
    assert!(rendered.starts_with("Error: ExpectedIdentifier"));
    assert!(rendered.contains("-> input.js:2:7"));
    assert!(rendered.contains("2 | let 5 = 2;"));
}

#[test]
fn test_legacy_stop_on_first_error() {
    let source = "let = 1; let y = 2;";
    let mut parser = Parser::with_config(Lexer::new(source), ParserConfig::default().with_recover(false));
    let program = parser.parse_program();

    assert!(program.body.is_empty());
    assert_eq!(parser.diagnostics().len(), 1);
}

#[test]
fn test_statement_at_a_time_parsing() {
    let mut parser = Parser::new(Lexer::new("let a; let = 2; let c;"));

    assert!(parser.parse_statement().is_some());
    assert!(parser.parse_statement().is_none());
    // `let =` consumed the `=`; the caller skips the rest of the statement
    assert_eq!(parser.current_token().value, "2");
    assert_eq!(parser.peek_token().kind, TokenKind::Semicolon);
    parser.advance();
    assert!(parser.expect(TokenKind::Semicolon).is_ok());
    assert!(parser.parse_statement().is_some());
    assert!(!parser.has_tokens());
}
