use crate::interpreter::value::core::Value;

/// One name-to-value association introduced by a `let`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The bound identifier.
    pub name:  String,
    /// The value of the bound expression.
    pub value: Value,
}

impl std::fmt::Display for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.name, self.value)
    }
}

/// The ordered bindings visible at one point of evaluation.
///
/// Environments are never mutated in place. [`Environment::extend`] returns a
/// new environment for the body of a `let`, leaving the caller's untouched, so
/// sibling subtrees can never observe each other's bindings.
///
/// Lookup scans from the most recent binding backwards, so an inner `let`
/// shadows any outer binding of the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: Vec<Binding>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self { bindings: Vec::new() }
    }

    /// Returns a copy of `self` with one more binding appended.
    ///
    /// # Example
    /// ```
    /// use letlang::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let outer = Environment::new().extend("x", Value::Integer(1));
    /// let inner = outer.extend("x", Value::Integer(2));
    ///
    /// assert_eq!(outer.lookup("x"), Some(&Value::Integer(1)));
    /// assert_eq!(inner.lookup("x"), Some(&Value::Integer(2)));
    /// assert_eq!(inner.len(), 2);
    /// ```
    #[must_use]
    pub fn extend(&self, name: &str, value: Value) -> Self {
        let mut bindings = Vec::with_capacity(self.bindings.len() + 1);
        bindings.extend_from_slice(&self.bindings);
        bindings.push(Binding { name: name.to_owned(),
                                value });
        Self { bindings }
    }

    /// Finds the most recently appended binding for `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .rev()
            .find(|binding| binding.name == name)
            .map(|binding| &binding.value)
    }

    /// The bindings in the order they were introduced.
    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;

        for (index, binding) in self.bindings.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{binding}")?;
        }

        write!(f, "]")
    }
}
