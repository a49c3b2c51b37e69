use tracing::trace;

use crate::{
    ast::{Ast, ExprKind, NodeId},
    error::RuntimeError,
    interpreter::{evaluator::environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks an [`Ast`] and reduces it to a [`Value`].
///
/// The evaluator holds the tree mutably only to record, on every node it
/// visits, the environment that node was evaluated under. Nothing else about
/// the tree changes, so evaluating the same tree twice yields the same value
/// and the same recorded environments.
pub struct Evaluator<'t> {
    tree: &'t mut Ast,
}

impl<'t> Evaluator<'t> {
    #[must_use]
    pub const fn new(tree: &'t mut Ast) -> Self {
        Self { tree }
    }

    /// Evaluates the whole tree starting from an empty environment.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised while evaluating a node.
    pub fn evaluate(&mut self) -> EvalResult<Value> {
        let root = self.tree.root();
        self.eval(root, &Environment::new())
    }

    /// Evaluates the subtree rooted at `id` under `environment`.
    ///
    /// Dispatches on the node's kind:
    /// - integer literals evaluate to themselves,
    /// - identifiers are looked up in `environment`,
    /// - `minus`, `iszero`, `if` and `let` evaluate their children as
    ///   described on their helpers.
    ///
    /// # Parameters
    /// - `id`: The node to evaluate.
    /// - `environment`: Bindings visible at this node.
    ///
    /// # Returns
    /// The value of the subtree.
    pub fn eval(&mut self, id: NodeId, environment: &Environment) -> EvalResult<Value> {
        self.tree.record_environment(id, environment);

        let node = self.tree.node(id);
        let line = node.line();
        let kind = node.kind().clone();
        let children = node.children().to_vec();

        trace!(node = id.index(), line, depth = environment.len(), "evaluating node");

        match (kind, children.as_slice()) {
            (ExprKind::Integer(n), []) => Ok(Value::from(n)),
            (ExprKind::Identifier(name), []) => Self::eval_identifier(&name, line, environment),
            (ExprKind::Minus, &[left, right]) => self.eval_minus(left, right, line, environment),
            (ExprKind::IsZero, &[operand]) => self.eval_iszero(operand, line, environment),
            (ExprKind::If, &[predicate, consequent, alternative]) => {
                self.eval_if(predicate, consequent, alternative, line, environment)
            },
            (ExprKind::Let, &[name, bound, body]) => {
                self.eval_let(name, bound, body, line, environment)
            },
            _ => Err(RuntimeError::MalformedTree { line }),
        }
    }

    pub(in crate::interpreter::evaluator) fn tree(&self) -> &Ast {
        self.tree
    }
}

/// Evaluates the subtree rooted at `node` under `environment`.
///
/// # Errors
/// - `TypeMismatch` when `minus` or `iszero` gets a boolean operand, or `if`
///   gets an integer predicate.
/// - `UnboundIdentifier` when a name has no visible binding.
/// - `Overflow` when a subtraction leaves the `i64` range.
///
/// # Example
/// ```
/// use letlang::interpreter::{
///     evaluator::{core::evaluate, environment::Environment},
///     lexer::scan,
///     parser::core::parse,
///     value::core::Value,
/// };
///
/// let mut tree = parse(&scan("let x = 1 in let x = 2 in x")).unwrap();
/// let root = tree.root();
///
/// assert_eq!(evaluate(&mut tree, root, &Environment::new()), Ok(Value::Integer(2)));
/// ```
pub fn evaluate(tree: &mut Ast, node: NodeId, environment: &Environment) -> EvalResult<Value> {
    Evaluator::new(tree).eval(node, environment)
}
