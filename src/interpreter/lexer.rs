use std::collections::VecDeque;

use logos::Logos;
use tracing::trace;

/// Raw lexemes recognized by the underlying Logos automaton.
///
/// Letter runs are not split here; keyword resolution happens in
/// [`Scanner`] because a keyword ends a word as soon as it is spelled out.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum Lexeme {
    /// A maximal run of decimal digits.
    #[regex(r"[0-9]+")]
    Digits,
    /// A maximal run of letters.
    #[regex(r"\p{L}+")]
    Letters,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// Line breaks; counted, never emitted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for tokens and error reporting.
#[derive(Default)]
struct LexerExtras {
    /// The current line number in the source being tokenized.
    line: usize,
}

/// The kind of a lexical token.
///
/// This is the closed set of token categories the parser dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `minus`
    Minus,
    /// `=`
    Equals,
    /// `iszero`
    IsZero,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `let`
    Let,
    /// `in`
    In,
    /// Variable names such as `x` or `count`.
    Identifier,
    /// Integer literals such as `42`.
    Integer,
    /// Marks the end of the token stream.
    EndOfInput,
    /// A character that belongs to no other class.
    Unknown,
}

impl TokenKind {
    /// Resolves a keyword spelling to its token kind.
    ///
    /// # Example
    /// ```
    /// use letlang::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::keyword("iszero"), Some(TokenKind::IsZero));
    /// assert_eq!(TokenKind::keyword("zero"), None);
    /// ```
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        match word {
            "let" => Some(Self::Let),
            "in" => Some(Self::In),
            "if" => Some(Self::If),
            "then" => Some(Self::Then),
            "else" => Some(Self::Else),
            "iszero" => Some(Self::IsZero),
            "minus" => Some(Self::Minus),
            _ => None,
        }
    }

    /// A short human readable description used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Comma => "','",
            Self::Minus => "'minus'",
            Self::Equals => "'='",
            Self::IsZero => "'iszero'",
            Self::If => "'if'",
            Self::Then => "'then'",
            Self::Else => "'else'",
            Self::Let => "'let'",
            Self::In => "'in'",
            Self::Identifier => "identifier",
            Self::Integer => "integer",
            Self::EndOfInput => "end of input",
            Self::Unknown => "unknown character",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// A lexical token: its kind, the exact source text and the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token category.
    pub kind: TokenKind,
    /// The lexeme as it appeared in the source.
    pub text: String,
    /// The source line where the token starts.
    pub line: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token: {:?}    Lexeme: {}", self.kind, self.text)
    }
}

/// Text used for the terminating [`TokenKind::EndOfInput`] token.
pub const END_OF_INPUT_TEXT: &str = "EOF";

/// Converts source text into a stream of [`Token`]s.
///
/// The scanner is pulled one token at a time with [`Scanner::next_token`].
/// Once the input is exhausted every further call yields
/// [`TokenKind::EndOfInput`].
///
/// Words are scanned letter by letter: after each letter the accumulated text
/// is checked against the keyword table and a match is emitted right away, so
/// `letx` scans as `let` followed by the identifier `x`.
pub struct Scanner<'src> {
    lexer:   logos::Lexer<'src, Lexeme>,
    pending: VecDeque<Token>,
    drained: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:   Lexeme::lexer_with_extras(source, LexerExtras { line: 1 }),
               pending: VecDeque::new(),
               drained: false, }
    }

    /// Returns the next token, or an [`TokenKind::EndOfInput`] token once the
    /// source has been fully consumed.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.pending.pop_front() {
            trace!(kind = ?token.kind, text = %token.text, line = token.line, "scanned token");
            return token;
        }

        let Some(lexeme) = self.lexer.next() else {
            return Token::new(TokenKind::EndOfInput, END_OF_INPUT_TEXT, self.lexer.extras.line);
        };

        let text = self.lexer.slice();
        let line = self.lexer.extras.line;

        let kind = match lexeme {
            Ok(Lexeme::Letters) => {
                self.split_word(text, line);
                return self.next_token();
            },
            Ok(Lexeme::Digits) => TokenKind::Integer,
            Ok(Lexeme::LParen) => TokenKind::LParen,
            Ok(Lexeme::RParen) => TokenKind::RParen,
            Ok(Lexeme::Comma) => TokenKind::Comma,
            Ok(Lexeme::Equals) => TokenKind::Equals,
            // Both are skipped by their callbacks and never reach here.
            Ok(Lexeme::NewLine | Lexeme::Ignored) => return self.next_token(),
            Err(()) => TokenKind::Unknown,
        };
        self.pending.push_back(Token::new(kind, text, line));

        self.next_token()
    }

    /// Splits a run of letters into keyword and identifier tokens.
    fn split_word(&mut self, word: &str, line: usize) {
        let mut start = 0;

        for (index, ch) in word.char_indices() {
            let end = index + ch.len_utf8();
            let lexeme = &word[start..end];

            if let Some(kind) = TokenKind::keyword(lexeme) {
                self.pending.push_back(Token::new(kind, lexeme, line));
                start = end;
            }
        }

        if start < word.len() {
            self.pending
                .push_back(Token::new(TokenKind::Identifier, &word[start..], line));
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields tokens up to and including the first
    /// [`TokenKind::EndOfInput`], then stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.drained {
            return None;
        }

        let token = self.next_token();
        self.drained = token.kind == TokenKind::EndOfInput;

        Some(token)
    }
}

/// Scans the whole source into a token queue terminated by exactly one
/// [`TokenKind::EndOfInput`] token.
///
/// # Example
/// ```
/// use letlang::interpreter::lexer::{TokenKind, scan};
///
/// let kinds: Vec<_> = scan("iszero(x)").iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::IsZero,
///                 TokenKind::LParen,
///                 TokenKind::Identifier,
///                 TokenKind::RParen,
///                 TokenKind::EndOfInput]);
/// ```
#[must_use]
pub fn scan(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}
