use crate::interpreter::value::core::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An operand had the wrong type, e.g. `iszero(iszero(0))`.
    TypeMismatch {
        /// The type the operation requires.
        expected: &'static str,
        /// The value actually produced by the operand.
        found:    Value,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No binding for the identifier is visible in the current environment.
    UnboundIdentifier {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Subtraction overflowed a 64 bit signed integer.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A node does not have the number of children its kind requires.
    MalformedTree {
        /// The source line of the node.
        line: usize,
    },
}

impl RuntimeError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::TypeMismatch { line, .. }
            | Self::UnboundIdentifier { line, .. }
            | Self::Overflow { line }
            | Self::MalformedTree { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { expected, found, line } => write!(f,
                                                                   "Error on line {line}: Type mismatch: expected {expected}, found {} '{found}'.",
                                                                   found.type_name()),
            Self::UnboundIdentifier { name, line } => {
                write!(f, "Error on line {line}: Unbound identifier '{name}'.")
            },
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::MalformedTree { line } => {
                write!(f, "Error on line {line}: Malformed expression tree.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
