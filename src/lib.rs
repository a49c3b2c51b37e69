//! # letlang
//!
//! letlang is a tree-walking interpreter for LET, a minimal expression
//! language of integers, identifiers, subtraction, zero tests, conditionals
//! and lexically scoped `let` bindings.
//!
//! A program is a single expression. It is scanned into tokens, parsed into
//! an arena-backed tree and evaluated to one value:
//!
//! ```
//! use letlang::{get_result, interpreter::value::core::Value};
//!
//! let value = get_result("let x = 7 in minus(x, 2)").unwrap();
//! assert_eq!(value, Value::Integer(5));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::info;

use crate::{
    ast::Ast,
    error::Error,
    interpreter::{
        evaluator::core::Evaluator,
        lexer::{Token, scan},
        parser::core::parse,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the expression kinds and the arena that stores the
/// tree. Nodes refer to their children and to their parent by index, and
/// carry the environment they were last evaluated under.
///
/// # Responsibilities
/// - Defines `ExprKind`, `AstNode`, `NodeId` and `Ast`.
/// - Attaches source lines to nodes for error reporting.
/// - Keeps the tree shape fixed after parsing.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning, parsing
/// or evaluating a program, each carrying the source line it refers to.
///
/// # Responsibilities
/// - Defines `ParseError` and `RuntimeError`.
/// - Wraps both in `Error` for the top-level driver.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Runs the scan, parse and evaluate pipeline.
///
/// This module ties together the lexer, parser, evaluator and value types.
/// Each stage completes before the next begins and hands its output on by
/// value.
pub mod interpreter;
/// Renders an expression tree, with or without recorded environments.
pub mod printer;

/// Every intermediate product of one run, for callers that want to display
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The complete token queue, ending with the end-of-input token.
    pub tokens: Vec<Token>,
    /// The parsed tree, with the environment each node was evaluated under.
    pub tree:   Ast,
    /// The value of the program.
    pub value:  Value,
}

/// Scans, parses and evaluates `source`, keeping every intermediate result.
///
/// # Errors
/// Returns the first parse or runtime error.
///
/// # Examples
/// ```
/// use letlang::run;
///
/// let outcome = run("iszero(0)").unwrap();
///
/// assert_eq!(outcome.tokens.len(), 5);
/// assert_eq!(outcome.value.to_string(), "true");
/// ```
pub fn run(source: &str) -> Result<Outcome, Error> {
    let tokens = scan(source);
    let mut tree = parse(&tokens)?;
    let value = Evaluator::new(&mut tree).evaluate()?;

    info!(tokens = tokens.len(), nodes = tree.len(), %value, "program evaluated");

    Ok(Outcome { tokens,
                 tree,
                 value })
}

/// Returns the value of the program in `source`.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use letlang::{error::Error, get_result};
///
/// // The predicate of an `if` must be an `iszero` expression.
/// let res = get_result("if minus(1, 1) then 1 else 2");
/// assert!(matches!(res, Err(Error::Parse(_))));
///
/// // 'y' is not bound anywhere.
/// let res = get_result("let x = 1 in y");
/// assert!(matches!(res, Err(Error::Runtime(_))));
/// ```
pub fn get_result(source: &str) -> Result<Value, Error> {
    run(source).map(|outcome| outcome.value)
}
