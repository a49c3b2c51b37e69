use std::{iter::Peekable, slice};

use tracing::debug;

use crate::{
    ast::{Ast, AstBuilder, ExprKind, NodeId},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser state.
///
/// The parser walks the token queue exactly once, left to right, with a
/// single token of lookahead and no backtracking. Nodes are appended to the
/// arena as soon as their leading token is consumed.
pub struct Parser<'t> {
    tokens:    Peekable<slice::Iter<'t, Token>>,
    builder:   AstBuilder,
    last_line: usize,
}

impl<'t> Parser<'t> {
    /// Creates a parser over a token queue as produced by
    /// [`scan`](crate::interpreter::lexer::scan).
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens:    tokens.iter().peekable(),
               builder:   AstBuilder::new(),
               last_line: 1, }
    }

    /// Peeks at the next token without consuming it.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the queue is exhausted. A queue produced
    ///   by the scanner always ends with an end-of-input token, so this only
    ///   happens for hand-built queues.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> ParseResult<&'t Token> {
        self.tokens
            .peek()
            .copied()
            .ok_or(ParseError::UnexpectedEndOfInput { line: self.last_line })
    }

    /// Consumes and returns the next token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<&'t Token> {
        let token = self.tokens
                        .next()
                        .ok_or(ParseError::UnexpectedEndOfInput { line: self.last_line })?;
        self.last_line = token.line;
        Ok(token)
    }

    /// Checks that the next token has kind `kind`.
    ///
    /// The token is consumed only when `advance` is set; otherwise it is left
    /// for the production that follows, which lets a caller assert what the
    /// next production will start with before descending into it.
    ///
    /// # Parameters
    /// - `kind`: The token kind the grammar requires here.
    /// - `advance`: Whether to consume the token on success.
    /// - `production`: Name of the production in progress, for error messages.
    ///
    /// # Returns
    /// The matching token.
    ///
    /// # Errors
    /// - `LexicalError` if the next token is an unrecognized character.
    /// - `UnexpectedToken` if the next token has any other kind.
    pub fn expected(&mut self,
                    kind: TokenKind,
                    advance: bool,
                    production: &'static str)
                    -> ParseResult<&'t Token> {
        let token = self.peek()?;

        if token.kind == TokenKind::Unknown && kind != TokenKind::Unknown {
            return Err(ParseError::LexicalError { character: token.text.clone(),
                                                  line:      token.line, });
        }

        if token.kind != kind {
            return Err(ParseError::UnexpectedToken { expected: kind,
                                                     found: token.text.clone(),
                                                     production,
                                                     line: token.line });
        }

        if advance {
            self.advance()?;
        }

        Ok(token)
    }

    /// Adds a node for `kind` to the tree.
    pub(in crate::interpreter::parser) fn node(&mut self, kind: ExprKind, line: usize) -> NodeId {
        let id = self.builder.push(kind, line);
        debug!(node = id.index(), line, "built node");
        id
    }

    /// Makes `children` the children of `parent`, in order.
    pub(in crate::interpreter::parser) fn attach(&mut self, parent: NodeId, children: &[NodeId]) {
        self.builder.attach(parent, children);
    }

    /// Parses one expression followed by the end of input and returns the
    /// finished tree.
    ///
    /// # Errors
    /// Any [`ParseError`] raised by a production, or
    /// `UnexpectedTrailingTokens` if tokens remain after the expression.
    pub fn parse_program(mut self) -> ParseResult<Ast> {
        let root = self.parse_expression("program")?;

        let token = self.peek()?;
        match token.kind {
            TokenKind::EndOfInput => {
                self.advance()?;
            },
            TokenKind::Unknown => {
                return Err(ParseError::LexicalError { character: token.text.clone(),
                                                      line:      token.line, });
            },
            _ => {
                return Err(ParseError::UnexpectedTrailingTokens { token: token.text.clone(),
                                                                  line:  token.line, });
            },
        }

        if let Some(extra) = self.tokens.next() {
            return Err(ParseError::UnexpectedTrailingTokens { token: extra.text.clone(),
                                                              line:  extra.line, });
        }

        Ok(self.builder.finish(root))
    }
}

/// Parses a complete token queue into an expression tree.
///
/// The queue must hold exactly one expression followed by a single
/// end-of-input token; every token is consumed.
///
/// # Errors
/// Returns a [`ParseError`] describing the first structural mismatch.
///
/// # Example
/// ```
/// use letlang::{
///     ast::ExprKind,
///     interpreter::{lexer::scan, parser::core::parse},
/// };
///
/// let tree = parse(&scan("minus(7, 2)")).unwrap();
/// let root = tree.node(tree.root());
///
/// assert_eq!(root.kind(), &ExprKind::Minus);
/// assert_eq!(root.children().len(), 2);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Ast> {
    Parser::new(tokens).parse_program()
}
