use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

/// The children of a node after eager reduction.
#[derive(Debug)]
pub(crate) enum Reduction {
    /// Every child reduced to a literal; their values, in order.
    Values(Vec<i64>),
    /// A child reduced to an error node, which the parent becomes.
    Failed(Expr),
    /// At least one child is still non-terminal after the step bound.
    Pending(Vec<Expr>),
}

impl Evaluator<'_> {
    /// Steps `expr` until it is terminal, or until the step bound runs out.
    ///
    /// # Returns
    /// The reduced node. It is terminal unless the bound ran out first.
    pub(crate) fn reduce_to_terminal(&self, expr: &Expr) -> EvalResult<Expr> {
        let mut current = expr.clone();
        for _ in 0..self.max_steps() {
            if current.is_terminal() {
                break;
            }
            current = self.step(&current)?;
        }
        Ok(current)
    }

    /// Reduces every child, left to right, before the parent resolves.
    ///
    /// This is the one place where function calls and binary operations
    /// evaluate their children. A fatal error in any child stops the
    /// reduction of the children after it.
    pub(crate) fn reduce_children<'e>(&self,
                                      children: impl IntoIterator<Item = &'e Expr>)
                                      -> EvalResult<Reduction> {
        let reduced = children.into_iter()
                              .map(|child| self.reduce_to_terminal(child))
                              .collect::<EvalResult<Vec<_>>>()?;

        if reduced.iter().any(|child| !child.is_terminal()) {
            return Ok(Reduction::Pending(reduced));
        }

        if let Some(error) = reduced.iter().find(|child| child.is_error()) {
            return Ok(Reduction::Failed(error.clone()));
        }

        let values = reduced.iter().map(Expr::value).collect::<EvalResult<Vec<_>>>()?;
        Ok(Reduction::Values(values))
    }
}

/// Checks that a builtin received exactly `expected` arguments.
///
/// # Errors
/// `ArgumentCountMismatch` naming the function, the declared arity and the
/// number of arguments supplied.
pub fn check_arity<T>(name: &str, args: &[T], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  expected,
                                                  found: args.len() })
    }
}
