use tracing::debug;

use crate::{
    ast::{ExprKind, NodeId},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            environment::Environment,
        },
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Resolves an identifier to the value of its innermost binding.
    ///
    /// # Errors
    /// `UnboundIdentifier` if no binding for `name` is visible.
    pub(in crate::interpreter::evaluator) fn eval_identifier(name: &str,
                                                             line: usize,
                                                             environment: &Environment)
                                                             -> EvalResult<Value> {
        environment.lookup(name)
                   .copied()
                   .ok_or_else(|| RuntimeError::UnboundIdentifier { name: name.to_owned(),
                                                                    line })
    }

    /// Evaluates `minus(left, right)` as `left - right`.
    ///
    /// Both operands must be integers. The result may be negative.
    ///
    /// # Errors
    /// - `TypeMismatch` if either operand is a boolean.
    /// - `Overflow` if the difference does not fit in an `i64`.
    pub(in crate::interpreter::evaluator) fn eval_minus(&mut self,
                                                        left: NodeId,
                                                        right: NodeId,
                                                        line: usize,
                                                        environment: &Environment)
                                                        -> EvalResult<Value> {
        let lhs = self.eval(left, environment)?.as_integer(line)?;
        let rhs = self.eval(right, environment)?.as_integer(line)?;

        lhs.checked_sub(rhs)
           .map(Value::from)
           .ok_or(RuntimeError::Overflow { line })
    }

    /// Evaluates `iszero(operand)`.
    ///
    /// # Errors
    /// `TypeMismatch` if the operand is a boolean.
    pub(in crate::interpreter::evaluator) fn eval_iszero(&mut self,
                                                         operand: NodeId,
                                                         line: usize,
                                                         environment: &Environment)
                                                         -> EvalResult<Value> {
        let n = self.eval(operand, environment)?.as_integer(line)?;

        Ok(Value::from(n == 0))
    }

    /// Evaluates a conditional.
    ///
    /// Only the branch selected by the predicate is evaluated; the other one
    /// is never visited and so records no environment.
    ///
    /// # Errors
    /// `TypeMismatch` if the predicate is not a boolean.
    pub(in crate::interpreter::evaluator) fn eval_if(&mut self,
                                                     predicate: NodeId,
                                                     consequent: NodeId,
                                                     alternative: NodeId,
                                                     line: usize,
                                                     environment: &Environment)
                                                     -> EvalResult<Value> {
        if self.eval(predicate, environment)?.as_bool(line)? {
            self.eval(consequent, environment)
        } else {
            self.eval(alternative, environment)
        }
    }

    /// Evaluates `let name = bound in body`.
    ///
    /// The bound expression sees the current environment. The body sees a
    /// copy extended with the new binding; the caller's environment is left
    /// as it was, so the binding is invisible outside `body`.
    pub(in crate::interpreter::evaluator) fn eval_let(&mut self,
                                                      name: NodeId,
                                                      bound: NodeId,
                                                      body: NodeId,
                                                      line: usize,
                                                      environment: &Environment)
                                                      -> EvalResult<Value> {
        let ExprKind::Identifier(variable) = self.tree().node(name).kind().clone() else {
            return Err(RuntimeError::MalformedTree { line });
        };

        let value = self.eval(bound, environment)?;
        debug!(name = %variable, %value, depth = environment.len() + 1, "bound variable");

        let extended = environment.extend(&variable, value);
        self.eval(body, &extended)
    }
}
