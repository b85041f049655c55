use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::Reduction,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation node.
    ///
    /// Both operands are reduced to terminals, left first, before the
    /// operator is applied.
    ///
    /// # Returns
    /// A literal, the first error node found among the operands, or the
    /// node rebuilt around operands that are still pending.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 right: &Expr,
                                 op: BinaryOperator)
                                 -> EvalResult<Expr> {
        match self.reduce_children([left, right])? {
            Reduction::Values(values) => {
                Ok(Expr::literal(eval_binary(op, values[0], values[1])?))
            },
            Reduction::Failed(error) => Ok(error),
            Reduction::Pending(operands) => match <[Expr; 2]>::try_from(operands) {
                Ok([left, right]) => Ok(Expr::binary(left, right, op)),
                Err(_) => Err(RuntimeError::MissingValue { node: format!("operand of {op}") }),
            },
        }
    }
}

/// Applies `op` to two integers.
///
/// Division truncates toward zero.
///
/// # Errors
/// - `DivisionByZero` for a zero divisor.
/// - `Overflow` if the result does not fit in an `i64`.
///
/// ## Example
/// ```
/// use krunch::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Div, 7, 2), Ok(3));
/// assert!(eval_binary(BinaryOperator::Div, 7, 0).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    let expression = || format!("{left}{op}{right}");

    if op == BinaryOperator::Div && right == 0 {
        return Err(RuntimeError::DivisionByZero { expression: expression() });
    }

    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Sub => left.checked_sub(right),
        BinaryOperator::Mul => left.checked_mul(right),
        BinaryOperator::Div => left.checked_div(right),
    };

    result.ok_or_else(|| RuntimeError::Overflow { operation: expression() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(eval_binary(BinaryOperator::Div, 7, 2), Ok(3));
        assert_eq!(eval_binary(BinaryOperator::Div, -7, 2), Ok(-3));
    }

    #[test]
    fn division_by_zero_names_the_operation() {
        assert_eq!(eval_binary(BinaryOperator::Div, 5, 0),
                   Err(RuntimeError::DivisionByZero { expression: "5/0".to_string() }));
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        assert_eq!(eval_binary(BinaryOperator::Add, i64::MAX, 1),
                   Err(RuntimeError::Overflow { operation: format!("{}+1", i64::MAX) }));
        assert!(eval_binary(BinaryOperator::Mul, i64::MAX, 2).is_err());
        assert!(eval_binary(BinaryOperator::Div, i64::MIN, -1).is_err());
    }

    #[test]
    fn pending_operands_rebuild_the_node() {
        let evaluator = Evaluator::default().with_max_steps(0);
        let inner = Expr::binary(Expr::literal(1), Expr::literal(2), BinaryOperator::Add);
        let rebuilt = evaluator.eval_binary_op(&inner, &Expr::literal(3), BinaryOperator::Mul);
        assert_eq!(rebuilt, Ok(Expr::binary(inner.clone(), Expr::literal(3), BinaryOperator::Mul)));
    }
}
