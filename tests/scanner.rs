use letlang::interpreter::lexer::{END_OF_INPUT_TEXT, Scanner, Token, TokenKind, scan};

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).into_iter().map(|t| t.kind).collect()
}

fn texts(source: &str) -> Vec<String> {
    scan(source).into_iter().map(|t| t.text).collect()
}

#[test]
fn scans_every_token_kind() {
    use TokenKind::{
        Comma, Else, EndOfInput, Equals, Identifier, If, In, Integer, IsZero, LParen, Let, Minus,
        RParen, Then, Unknown,
    };

    assert_eq!(kinds("let x = minus ( 1 , y ) in if iszero(x) then 0 else x %"),
               vec![Let, Identifier, Equals, Minus, LParen, Integer, Comma, Identifier, RParen, In,
                    If, IsZero, LParen, Identifier, RParen, Then, Integer, Else, Identifier,
                    Unknown, EndOfInput]);
}

#[test]
fn integers_are_maximal_digit_runs() {
    assert_eq!(texts("123 45"), vec!["123", "45", END_OF_INPUT_TEXT]);
    assert_eq!(kinds("12x"),
               vec![TokenKind::Integer, TokenKind::Identifier, TokenKind::EndOfInput]);
}

#[test]
fn keywords_end_a_word_as_soon_as_they_are_spelled() {
    assert_eq!(kinds("letx"),
               vec![TokenKind::Let, TokenKind::Identifier, TokenKind::EndOfInput]);
    assert_eq!(texts("letx"), vec!["let", "x", END_OF_INPUT_TEXT]);
    assert_eq!(kinds("inside"),
               vec![TokenKind::In, TokenKind::Identifier, TokenKind::EndOfInput]);
    assert_eq!(kinds("letlet"), vec![TokenKind::Let, TokenKind::Let, TokenKind::EndOfInput]);
}

#[test]
fn keywords_inside_a_word_are_not_split_out() {
    assert_eq!(texts("xlet"), vec!["xlet", END_OF_INPUT_TEXT]);
    assert_eq!(texts("i"), vec!["i", END_OF_INPUT_TEXT]);
    assert_eq!(texts("the"), vec!["the", END_OF_INPUT_TEXT]);
}

#[test]
fn no_token_spans_whitespace() {
    assert_eq!(texts("le t"), vec!["le", "t", END_OF_INPUT_TEXT]);
    assert_eq!(texts("1 2"), vec!["1", "2", END_OF_INPUT_TEXT]);
}

#[test]
fn token_at_end_of_input_is_emitted() {
    assert_eq!(texts("abc"), vec!["abc", END_OF_INPUT_TEXT]);
    assert_eq!(texts("  7"), vec!["7", END_OF_INPUT_TEXT]);
}

#[test]
fn blank_input_is_just_end_of_input() {
    assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
    assert_eq!(kinds(" \n\t "), vec![TokenKind::EndOfInput]);
}

#[test]
fn unknown_characters_carry_the_raw_character() {
    let tokens = scan("x+y");

    assert_eq!(tokens[1], Token::new(TokenKind::Unknown, "+", 1));
}

#[test]
fn end_of_input_repeats_after_exhaustion() {
    let mut scanner = Scanner::new("x");

    assert_eq!(scanner.next_token().kind, TokenKind::Identifier);
    assert_eq!(scanner.next_token().kind, TokenKind::EndOfInput);
    assert_eq!(scanner.next_token().kind, TokenKind::EndOfInput);
}

#[test]
fn tracks_source_lines() {
    let lines: Vec<usize> = scan("let x = 1\nin\n\nx").into_iter().map(|t| t.line).collect();

    assert_eq!(lines, vec![1, 1, 1, 1, 2, 4, 4]);
}

#[test]
fn token_display_lists_kind_and_lexeme() {
    let token = Token::new(TokenKind::IsZero, "iszero", 1);

    assert_eq!(token.to_string(), "Token: IsZero    Lexeme: iszero");
}

#[test]
fn counts_lines_across_carriage_returns_and_tabs() {
    let lines: Vec<usize> = scan("minus(\r\n\t1,\r\n\r\n 2)").into_iter().map(|t| t.line).collect();

    assert_eq!(lines, vec![1, 1, 2, 2, 4, 4, 4]);
}
