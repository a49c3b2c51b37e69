use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to exactly one of these. Integers come from
/// literals and `minus`; booleans only ever come from `iszero` and are consumed
/// by `if`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A boolean produced by `iszero`.
    Boolean(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// Converts the value to `i64`, or returns an error if not an integer.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value.
    /// - `Err(RuntimeError::TypeMismatch)`: If the value is a boolean.
    ///
    /// # Example
    /// ```
    /// use letlang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(7).as_integer(1), Ok(7));
    /// assert!(Value::Boolean(true).as_integer(1).is_err());
    /// ```
    pub const fn as_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Boolean(_) => Err(RuntimeError::TypeMismatch { expected: "integer",
                                                                 found: *self,
                                                                 line }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for the predicate of `if` expressions.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            Self::Integer(_) => Err(RuntimeError::TypeMismatch { expected: "boolean",
                                                                 found: *self,
                                                                 line }),
        }
    }

    /// The name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
