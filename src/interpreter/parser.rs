/// Core parsing machinery.
///
/// Holds the `Parser` state (token cursor and tree under construction), the
/// `expected` token check shared by every production, and the `parse` entry
/// point that insists the whole token stream is consumed.
pub mod core;

/// Expression productions.
///
/// One function per expression form: literals and identifiers, `minus`,
/// `iszero`, `if` and `let`, selected by the current token.
pub mod expression;
