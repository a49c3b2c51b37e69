use letlang::{
    ast::{Ast, ExprKind, NodeId},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, scan},
        parser::core::parse,
    },
};

fn parse_source(source: &str) -> Result<Ast, ParseError> {
    parse(&scan(source))
}

fn kind_of(tree: &Ast, id: NodeId) -> ExprKind {
    tree.node(id).kind().clone()
}

#[test]
fn builds_children_in_surface_order() {
    let tree = parse_source("let x = 5 in minus(x, 3)").unwrap();
    let root = tree.node(tree.root());

    assert_eq!(root.kind(), &ExprKind::Let);
    let [name, bound, body] = root.children() else {
        panic!("let node should have three children");
    };
    assert_eq!(kind_of(&tree, *name), ExprKind::Identifier("x".to_string()));
    assert_eq!(kind_of(&tree, *bound), ExprKind::Integer(5));
    assert_eq!(kind_of(&tree, *body), ExprKind::Minus);

    let operands: Vec<ExprKind> = tree.node(*body)
                                      .children()
                                      .iter()
                                      .map(|id| kind_of(&tree, *id))
                                      .collect();
    assert_eq!(operands,
               vec![ExprKind::Identifier("x".to_string()), ExprKind::Integer(3)]);
}

#[test]
fn every_node_has_the_arity_of_its_kind() {
    let tree = parse_source("let y = iszero(0) in if iszero(minus(1, y)) then 1 else let z = 2 in z")
        .unwrap();

    for (_, node) in tree.iter() {
        assert_eq!(node.children().len(), node.kind().arity());
        assert_eq!(node.is_leaf(), node.children().is_empty());
    }
}

#[test]
fn parents_point_back_to_their_owner() {
    let tree = parse_source("iszero(minus(4, 4))").unwrap();

    assert_eq!(tree.node(tree.root()).parent(), None);
    for (id, node) in tree.iter() {
        for child in node.children() {
            assert_eq!(tree.node(*child).parent(), Some(id));
        }
    }
    assert_eq!(tree.len(), 4);
}

#[test]
fn nodes_start_without_environments() {
    let tree = parse_source("let x = 1 in x").unwrap();

    assert!(tree.iter().all(|(_, node)| node.environment().is_none()));
}

#[test]
fn nodes_remember_their_line() {
    let tree = parse_source("minus(\n1,\n\n2)").unwrap();
    let lines: Vec<usize> = tree.iter().map(|(_, node)| node.line()).collect();

    assert_eq!(lines, vec![1, 2, 4]);
}

#[test]
fn if_requires_an_iszero_predicate() {
    let e = parse_source("if minus(1,1) then 1 else 2").unwrap_err();

    assert_eq!(e,
               ParseError::UnexpectedToken { expected:   TokenKind::IsZero,
                                             found:      "minus".to_string(),
                                             production: "if expression",
                                             line:       1, });

    assert!(parse_source("if x then 1 else 2").is_err());
    assert!(parse_source("if iszero(x) then 1 else 2").is_ok());
}

#[test]
fn reports_the_missing_token_and_production() {
    let e = parse_source("minus(1 2)").unwrap_err();

    assert!(matches!(e,
                     ParseError::UnexpectedToken { expected: TokenKind::Comma,
                                                   production: "minus expression",
                                                   .. }));
    assert_eq!(e.to_string(),
               "Error on line 1: Expected ',' in minus expression, found '2'.");
}

#[test]
fn let_requires_identifier_equals_and_in() {
    assert!(matches!(parse_source("let 1 = 2 in 3"),
                     Err(ParseError::UnexpectedToken { expected: TokenKind::Identifier,
                                                       .. })));
    assert!(matches!(parse_source("let x 2 in 3"),
                     Err(ParseError::UnexpectedToken { expected: TokenKind::Equals,
                                                       .. })));
    assert!(matches!(parse_source("let x = 2 3"),
                     Err(ParseError::UnexpectedToken { expected: TokenKind::In,
                                                       .. })));
}

#[test]
fn punctuation_cannot_start_an_expression() {
    assert!(matches!(parse_source(")"),
                     Err(ParseError::ExpectedExpression { .. })));
    assert!(matches!(parse_source(""),
                     Err(ParseError::ExpectedExpression { .. })));
}

#[test]
fn unknown_tokens_are_lexical_errors() {
    assert_eq!(parse_source("minus(1, 2) ; ").unwrap_err(),
               ParseError::LexicalError { character: ";".to_string(),
                                          line:      1, });
    assert!(matches!(parse_source("iszero(#)"),
                     Err(ParseError::LexicalError { .. })));
}

#[test]
fn whole_token_queue_must_be_consumed() {
    assert!(matches!(parse_source("x y"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));

    let tokens = vec![Token::new(TokenKind::Integer, "1", 1),
                      Token::new(TokenKind::EndOfInput, "EOF", 1),
                      Token::new(TokenKind::Integer, "2", 1)];
    assert!(matches!(parse(&tokens),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn queue_without_end_marker_is_unexpected_end() {
    let tokens = vec![Token::new(TokenKind::Minus, "minus", 3)];

    assert_eq!(parse(&tokens).unwrap_err(),
               ParseError::UnexpectedEndOfInput { line: 3 });
}
