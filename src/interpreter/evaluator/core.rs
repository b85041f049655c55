use log::{trace, warn};

use crate::{
    ast::Expr,
    error::RuntimeError,
    math::{MathPrimitives, StandardMath},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. Every such error aborts the whole
/// evaluation.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default bound on the number of reduction steps in one evaluation.
pub const MAX_EVALUATION_STEPS: usize = 100;

/// How an evaluation ended, short of a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The tree reduced to a literal.
    Value(i64),
    /// The tree reduced to an error node. Holds the node's textual form.
    Rejected(String),
    /// The step bound ran out before a terminal node was reached.
    Stuck {
        /// How many steps were taken.
        steps: usize,
        /// Textual form of the partially reduced tree.
        tree:  String,
    },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Rejected(node) => write!(f, "{node}"),
            Self::Stuck { steps, tree } => write!(f, "Exceeded evaluation steps ({steps}): {tree}"),
        }
    }
}

/// Reduces expression trees one step at a time.
///
/// ## Usage
///
/// An `Evaluator` holds no per-evaluation state, so one instance can run any
/// number of trees. It borrows the math primitives that builtin functions
/// dispatch to.
pub struct Evaluator<'m> {
    pub(crate) math: &'m dyn MathPrimitives,
    max_steps:       usize,
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::new(&StandardMath)
    }
}

impl<'m> Evaluator<'m> {
    /// Creates an evaluator backed by `math`, bounded by
    /// [`MAX_EVALUATION_STEPS`].
    #[must_use]
    pub fn new(math: &'m dyn MathPrimitives) -> Self {
        Self { math,
               max_steps: MAX_EVALUATION_STEPS }
    }

    /// Replaces the step bound.
    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[must_use]
    pub const fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Performs one reduction step.
    ///
    /// Terminal nodes come back unchanged. A function call or binary
    /// operation first reduces every child to a terminal, so one step
    /// normally yields a terminal too. If a child cannot get there within
    /// the step bound, the node comes back rebuilt around its partially
    /// reduced children.
    ///
    /// # Errors
    /// Arity, domain, unsupported function, division by zero and overflow
    /// errors, from this node or any of its descendants.
    pub fn step(&self, expr: &Expr) -> EvalResult<Expr> {
        match expr {
            Expr::Literal { .. } | Expr::Error { .. } => Ok(expr.clone()),
            Expr::FunctionCall { name, arguments } => self.eval_function_call(name, arguments),
            Expr::BinaryOp { left, right, op } => self.eval_binary_op(left, right, *op),
        }
    }

    /// Steps `expr` until it is terminal or the step bound is reached.
    ///
    /// ## Example
    /// ```
    /// use krunch::{
    ///     interpreter::evaluator::core::{Evaluator, Outcome},
    ///     parse,
    /// };
    ///
    /// let evaluator = Evaluator::default();
    /// assert_eq!(evaluator.run(parse("(2+3)*4")).unwrap(), Outcome::Value(20));
    ///
    /// let stuck = Evaluator::default().with_max_steps(0).run(parse("1+2")).unwrap();
    /// assert!(matches!(stuck, Outcome::Stuck { steps: 0, .. }));
    /// ```
    ///
    /// # Errors
    /// The first fatal `RuntimeError` raised by any step.
    pub fn run(&self, expr: Expr) -> EvalResult<Outcome> {
        let mut current = expr;

        for step in 1..=self.max_steps {
            if current.is_terminal() {
                break;
            }
            current = self.step(&current)?;
            trace!("step {step}: {current}");
        }

        if current.is_terminal() {
            return Ok(Self::settle(&current));
        }

        warn!("evaluation exceeded {} steps: {current}", self.max_steps);
        Ok(Outcome::Stuck { steps: self.max_steps,
                            tree:  current.to_string(), })
    }

    /// Turns a terminal node into an outcome.
    ///
    /// An error node refuses to give a value; its textual form is reported
    /// instead.
    fn settle(terminal: &Expr) -> Outcome {
        match terminal.value() {
            Ok(value) => Outcome::Value(value),
            Err(e) => {
                trace!("{e}");
                Outcome::Rejected(terminal.to_string())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::BinaryOperator, parse};

    #[test]
    fn terminal_nodes_step_to_themselves() {
        let evaluator = Evaluator::default();
        for node in [Expr::literal(7), Expr::error("Syntax error: empty expression.")] {
            assert_eq!(evaluator.step(&node), Ok(node.clone()));
            assert_eq!(evaluator.step(&evaluator.step(&node).unwrap()), Ok(node.clone()));
        }
    }

    #[test]
    fn one_step_resolves_a_nested_tree() {
        let evaluator = Evaluator::default();
        let tree = parse("gcf(12,18)*(1+pow(2,3))");
        assert_eq!(evaluator.step(&tree), Ok(Expr::literal(54)));
    }

    #[test]
    fn error_nodes_settle_to_their_text() {
        let outcome = Evaluator::default().run(parse("")).unwrap();
        assert_eq!(outcome, Outcome::Rejected("Error(Syntax error: empty expression.)".to_string()));
    }

    #[test]
    fn error_children_propagate_to_the_parent() {
        let tree = Expr::binary(Expr::literal(1), Expr::error("broken"), BinaryOperator::Add);
        let outcome = Evaluator::default().run(tree).unwrap();
        assert_eq!(outcome, Outcome::Rejected("Error(broken)".to_string()));
    }

    #[test]
    fn stuck_outcome_carries_the_partial_tree() {
        let outcome = Evaluator::default().with_max_steps(0).run(parse("sqrt(16)")).unwrap();
        assert_eq!(outcome,
                   Outcome::Stuck { steps: 0,
                                    tree:  "FunctionCall(sqrt, Literal(16))".to_string(), });
        assert_eq!(outcome.to_string(),
                   "Exceeded evaluation steps (0): FunctionCall(sqrt, Literal(16))");
    }

    #[test]
    fn terminal_input_needs_no_steps() {
        let outcome = Evaluator::default().with_max_steps(0).run(parse("42")).unwrap();
        assert_eq!(outcome, Outcome::Value(42));
    }

    #[test]
    fn fatal_errors_abort_the_run() {
        let result = Evaluator::default().run(parse("1+sqrt(0-1)"));
        assert!(matches!(result, Err(RuntimeError::InvalidArgument { .. })));
    }

    struct Doubling;

    impl MathPrimitives for Doubling {
        fn abs(&self, x: i64) -> Option<i64> {
            x.checked_mul(2)
        }

        fn sqrt(&self, x: i64) -> Option<i64> {
            x.checked_mul(2)
        }

        fn pow(&self, base: i64, _: i64) -> Option<i64> {
            base.checked_mul(2)
        }

        fn sum_to(&self, n: i64) -> Option<i64> {
            n.checked_mul(2)
        }

        fn gcf(&self, a: i64, _: i64) -> Option<i64> {
            a.checked_mul(2)
        }

        fn is_prime(&self, _: i64) -> bool {
            true
        }

        fn hypot(&self, a: i64, _: i64) -> Option<i64> {
            a.checked_mul(2)
        }

        fn to_binary(&self, n: i64) -> Option<i64> {
            n.checked_mul(2)
        }
    }

    #[test]
    fn builtins_dispatch_to_the_supplied_primitives() {
        let evaluator = Evaluator::new(&Doubling);
        assert_eq!(evaluator.run(parse("sqrt(16)")), Ok(Outcome::Value(32)));
        assert_eq!(evaluator.run(parse("isPrime(4)")), Ok(Outcome::Value(1)));
    }
}
