use tally::{
    ast::Span,
    interpreter::lexer::{Token, TokenKind, tokenize},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).map(|token| token.kind).collect()
}

fn lexemes(source: &str) -> Vec<&str> {
    tokenize(source).map(|token| token.lexeme).collect()
}

#[test]
fn empty_string_yields_only_the_terminator() {
    let tokens: Vec<Token<'_>> = tokenize("").collect();

    assert_eq!(tokens,
               [Token { kind:   TokenKind::Semicolon,
                        lexeme: "",
                        span:   Span::new(0, 0), }]);
    assert!(tokens[0].is_synthetic());
}

#[test]
fn numeric_literal() {
    let tokens: Vec<Token<'_>> = tokenize("42").collect();

    assert_eq!(tokens,
               [Token { kind:   TokenKind::Number,
                        lexeme: "42",
                        span:   Span::new(0, 2), },
                Token { kind:   TokenKind::Semicolon,
                        lexeme: "",
                        span:   Span::new(2, 2), }]);
}

#[test]
fn leading_zeros_are_kept_in_the_lexeme() {
    assert_eq!(lexemes("007"), ["007", ""]);
}

#[test]
fn unknown_input_ends_the_stream_without_a_terminator() {
    assert!(kinds("[").is_empty());
    assert!(kinds("a").is_empty());
    assert!(kinds("abc123").is_empty());
    assert_eq!(kinds("123abc"), [TokenKind::Number]);
    assert_eq!(kinds("1 + t"), [TokenKind::Number, TokenKind::AddOp]);
}

#[test]
fn whitespace_does_not_change_the_token_kinds() {
    let expected = [TokenKind::Number, TokenKind::AddOp, TokenKind::Number, TokenKind::Semicolon];

    assert_eq!(kinds("2+2"), expected);
    assert_eq!(kinds("2+ 2"), expected);
    assert_eq!(kinds("2 + 2"), expected);
    assert_eq!(kinds("\t2\n+\r\n2  "), expected);
}

#[test]
fn expression_with_parentheses() {
    assert_eq!(lexemes("1 + 2*(3 - 4)"),
               ["1", "+", "2", "*", "(", "3", "-", "4", ")", ""]);
    assert_eq!(kinds("1 + 2*(3 - 4)"),
               [TokenKind::Number,
                TokenKind::AddOp,
                TokenKind::Number,
                TokenKind::MulOp,
                TokenKind::OpeningParen,
                TokenKind::Number,
                TokenKind::AddOp,
                TokenKind::Number,
                TokenKind::ClosingParen,
                TokenKind::Semicolon]);
}

#[test]
fn just_a_semicolon() {
    let tokens: Vec<Token<'_>> = tokenize(";").collect();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme, ";");
    assert_eq!(tokens[0].span, Span::new(0, 1));
    assert!(!tokens[0].is_synthetic());
}

#[test]
fn semicolon_only_in_the_middle() {
    assert_eq!(lexemes("1;2"), ["1", ";", "2", ""]);
}

#[test]
fn explicit_trailing_semicolon_suppresses_the_terminator() {
    assert_eq!(lexemes("1;2;"), ["1", ";", "2", ";"]);
    assert!(!tokenize("1;").last().unwrap().is_synthetic());
}

#[test]
fn anything_after_the_final_semicolon_brings_the_terminator_back() {
    assert_eq!(lexemes("1;2; "), ["1", ";", "2", ";", ""]);
    assert_eq!(lexemes("1;\n"), ["1", ";", ""]);
    assert_eq!(lexemes("1;2; // done"), ["1", ";", "2", ";", ""]);

    let last = tokenize("1; ").last().unwrap();
    assert!(last.is_synthetic());
    assert_eq!(last.span, Span::new(3, 3));
}

#[test]
fn terminator_sits_at_the_end_of_the_text() {
    let last = tokenize("1 + 2   ").last().unwrap();

    assert!(last.is_synthetic());
    assert_eq!(last.span, Span::new(8, 8));
}

#[test]
fn line_comments_are_skipped() {
    assert_eq!(lexemes("1 // one\n+ 2 // two"), ["1", "+", "2", ""]);
    assert_eq!(kinds("// nothing but a comment"), [TokenKind::Semicolon]);
}

#[test]
fn slash_is_division_unless_doubled() {
    assert_eq!(kinds("6/3"),
               [TokenKind::Number, TokenKind::MulOp, TokenKind::Number, TokenKind::Semicolon]);
    assert_eq!(kinds("6//3"), [TokenKind::Number, TokenKind::Semicolon]);
}

#[test]
fn spans_count_characters_not_bytes() {
    let tokens: Vec<Token<'_>> = tokenize("// é\n12").collect();

    assert_eq!(tokens[0].lexeme, "12");
    assert_eq!(tokens[0].span, Span::new(5, 7));
    assert_eq!(tokens[1].span, Span::new(7, 7));
}

#[test]
fn spans_are_ordered_and_disjoint() {
    let tokens: Vec<Token<'_>> = tokenize("(10 + 2) * 3 ;; 4 / 5").collect();

    for pair in tokens.windows(2) {
        assert!(pair[0].span.start <= pair[0].span.end);
        assert!(pair[0].span.end <= pair[1].span.start,
                "{:?} overlaps {:?}",
                pair[0],
                pair[1]);
    }
}

#[test]
fn tokenizing_twice_gives_the_same_stream() {
    let source = "1 + 2 * (3 - 4); 5";

    assert_eq!(tokenize(source).collect::<Vec<_>>(), tokenize(source).collect::<Vec<_>>());
}

#[test]
fn stream_is_fused() {
    let mut lexer = tokenize("1");

    assert_eq!(lexer.next().map(|token| token.kind), Some(TokenKind::Number));
    assert_eq!(lexer.next().map(|token| token.kind), Some(TokenKind::Semicolon));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
}

#[test]
fn tokens_serialize_with_flat_spans() {
    let tokens: Vec<Token<'_>> = tokenize("1+2").collect();

    insta::assert_snapshot!(serde_json::to_string(&tokens).unwrap(), @r#"[{"kind":"Number","lexeme":"1","start":0,"end":1},{"kind":"AddOp","lexeme":"+","start":1,"end":2},{"kind":"Number","lexeme":"2","start":2,"end":3},{"kind":"Semicolon","lexeme":"","start":3,"end":3}]"#);
}
