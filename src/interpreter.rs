/// The evaluator module reduces the AST to a value.
///
/// The evaluator walks the tree recursively, threading an append-only
/// environment of `let` bindings, and produces exactly one value.
///
/// # Responsibilities
/// - Evaluates every expression form, short-circuiting conditionals.
/// - Scopes `let` bindings to their body; inner bindings shadow outer ones.
/// - Records on each visited node the environment it saw.
/// - Reports type mismatches, unbound identifiers and overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The scanner reads the raw source text and produces tokens for integers,
/// identifiers, keywords and punctuation. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   source line.
/// - Resolves keywords letter by letter, ahead of identifiers.
/// - Passes unrecognized characters on as `Unknown` tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token queue produced by the lexer with one token of
/// lookahead and builds the expression tree by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into arena-allocated AST nodes.
/// - Validates the grammar, reporting the production and line of any error.
/// - Requires the whole token queue to be consumed.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum of integers and booleans.
/// - Provides checked conversions that report type mismatches.
pub mod value;
