/// Core evaluation logic.
///
/// Contains the `Evaluator`, the per-node dispatch, and the `evaluate` entry
/// point.
pub mod core;

/// Bindings and environments.
///
/// The append-only environment threaded through evaluation, with
/// last-binding-wins lookup.
pub mod environment;

/// Evaluation of each expression form.
///
/// Identifier lookup, subtraction, the zero test, the short-circuiting
/// conditional and `let` scoping.
pub mod expression;
