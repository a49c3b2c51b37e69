use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during scanning or parsing.
pub enum ParseError {
    /// A character matched none of letter, digit or known punctuation.
    LexicalError {
        /// The offending character.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The next token did not have the kind the current production requires.
    UnexpectedToken {
        /// The token kind the parser was looking for.
        expected:   TokenKind,
        /// The text of the token actually found.
        found:      String,
        /// The production in progress, e.g. `let expression`.
        production: &'static str,
        /// The source line where the error occurred.
        line:       usize,
    },
    /// A token that cannot start an expression was found where one was
    /// required.
    ExpectedExpression {
        /// The text of the token actually found.
        found:      String,
        /// The production in progress.
        production: &'static str,
        /// The source line where the error occurred.
        line:       usize,
    },
    /// The token stream ran out without an end-of-input marker.
    UnexpectedEndOfInput {
        /// The line of the last token seen.
        line: usize,
    },
    /// Found extra tokens after the expression was complete.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit in a 64 bit signed integer.
    LiteralTooLarge {
        /// The digits of the literal.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::LexicalError { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LexicalError { character, line } => {
                write!(f, "Error on line {line}: Unrecognized character '{character}'.")
            },
            Self::UnexpectedToken { expected,
                                    found,
                                    production,
                                    line, } => write!(f,
                                                      "Error on line {line}: Expected {expected} in {production}, found '{found}'."),
            Self::ExpectedExpression { found,
                                       production,
                                       line, } => write!(f,
                                                         "Error on line {line}: Expected an expression in {production}, found '{found}'."),
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {token}"),
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
