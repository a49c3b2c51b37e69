use crate::{
    ast::{ExprKind, NodeId},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses one expression.
    ///
    /// The leading token alone selects the production:
    ///
    /// ```text
    ///     expr := integer
    ///           | identifier
    ///           | "minus" "(" expr "," expr ")"
    ///           | "iszero" "(" expr ")"
    ///           | "if" expr "then" expr "else" expr
    ///           | "let" identifier "=" expr "in" expr
    /// ```
    ///
    /// # Parameters
    /// - `production`: The enclosing production, used if no expression can
    ///   start here.
    ///
    /// # Returns
    /// The index of the new subtree's root.
    ///
    /// # Errors
    /// - `LexicalError` for an unrecognized character.
    /// - `ExpectedExpression` for any token that cannot start an expression.
    /// - Anything raised by the selected production.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self,
                                                           production: &'static str)
                                                           -> ParseResult<NodeId> {
        let token = self.peek()?;

        match token.kind {
            TokenKind::Integer => self.parse_integer(),
            TokenKind::Identifier => self.parse_identifier(),
            TokenKind::Minus => self.parse_minus(),
            TokenKind::IsZero => self.parse_iszero(),
            TokenKind::If => self.parse_if(),
            TokenKind::Let => self.parse_let(),
            TokenKind::Unknown => Err(ParseError::LexicalError { character: token.text.clone(),
                                                                 line:      token.line, }),
            _ => Err(ParseError::ExpectedExpression { found: token.text.clone(),
                                                      production,
                                                      line: token.line }),
        }
    }

    /// Parses an integer literal leaf.
    ///
    /// # Errors
    /// `LiteralTooLarge` if the digits do not fit in an `i64`.
    fn parse_integer(&mut self) -> ParseResult<NodeId> {
        let token = self.expected(TokenKind::Integer, true, "integer literal")?;
        let value = token.text
                         .parse::<i64>()
                         .map_err(|_| ParseError::LiteralTooLarge { literal: token.text.clone(),
                                                                    line:    token.line, })?;

        Ok(self.node(ExprKind::Integer(value), token.line))
    }

    /// Parses an identifier leaf.
    fn parse_identifier(&mut self) -> ParseResult<NodeId> {
        let token = self.expected(TokenKind::Identifier, true, "identifier")?;

        Ok(self.node(ExprKind::Identifier(token.text.clone()), token.line))
    }

    /// Parses `minus ( left , right )`.
    fn parse_minus(&mut self) -> ParseResult<NodeId> {
        const PRODUCTION: &str = "minus expression";

        let keyword = self.expected(TokenKind::Minus, true, PRODUCTION)?;
        let node = self.node(ExprKind::Minus, keyword.line);

        self.expected(TokenKind::LParen, true, PRODUCTION)?;
        let left = self.parse_expression(PRODUCTION)?;
        self.expected(TokenKind::Comma, true, PRODUCTION)?;
        let right = self.parse_expression(PRODUCTION)?;
        self.expected(TokenKind::RParen, true, PRODUCTION)?;

        self.attach(node, &[left, right]);
        Ok(node)
    }

    /// Parses `iszero ( operand )`.
    fn parse_iszero(&mut self) -> ParseResult<NodeId> {
        const PRODUCTION: &str = "iszero expression";

        let keyword = self.expected(TokenKind::IsZero, true, PRODUCTION)?;
        let node = self.node(ExprKind::IsZero, keyword.line);

        self.expected(TokenKind::LParen, true, PRODUCTION)?;
        let operand = self.parse_expression(PRODUCTION)?;
        self.expected(TokenKind::RParen, true, PRODUCTION)?;

        self.attach(node, &[operand]);
        Ok(node)
    }

    /// Parses `if predicate then consequent else alternative`.
    ///
    /// The predicate must itself be an `iszero` expression; this is checked
    /// on the leading token before descending, so `if minus(1, 1) then ...`
    /// fails here rather than at evaluation.
    fn parse_if(&mut self) -> ParseResult<NodeId> {
        const PRODUCTION: &str = "if expression";

        let keyword = self.expected(TokenKind::If, true, PRODUCTION)?;
        let node = self.node(ExprKind::If, keyword.line);

        self.expected(TokenKind::IsZero, false, PRODUCTION)?;
        let predicate = self.parse_expression(PRODUCTION)?;
        self.expected(TokenKind::Then, true, PRODUCTION)?;
        let consequent = self.parse_expression(PRODUCTION)?;
        self.expected(TokenKind::Else, true, PRODUCTION)?;
        let alternative = self.parse_expression(PRODUCTION)?;

        self.attach(node, &[predicate, consequent, alternative]);
        Ok(node)
    }

    /// Parses `let name = bound in body`.
    ///
    /// The bound name becomes the first child, an identifier leaf.
    fn parse_let(&mut self) -> ParseResult<NodeId> {
        const PRODUCTION: &str = "let expression";

        let keyword = self.expected(TokenKind::Let, true, PRODUCTION)?;
        let node = self.node(ExprKind::Let, keyword.line);

        let Token { text, line, .. } = self.expected(TokenKind::Identifier, true, PRODUCTION)?;
        let name = self.node(ExprKind::Identifier(text.clone()), *line);
        self.expected(TokenKind::Equals, true, PRODUCTION)?;
        let bound = self.parse_expression(PRODUCTION)?;
        self.expected(TokenKind::In, true, PRODUCTION)?;
        let body = self.parse_expression(PRODUCTION)?;

        self.attach(node, &[name, bound, body]);
        Ok(node)
    }
}
