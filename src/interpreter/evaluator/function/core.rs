use log::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        function::domain::Domain,
        utils::{Reduction, check_arity},
    },
    math::MathPrimitives,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the math primitives and a slice of argument values
/// that already passed the arity and domain checks. It returns `None` when
/// the result does not fit in an `i64`.
type BuiltinFn = fn(&dyn MathPrimitives, &[i64]) -> Option<i64>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the arity,
/// - one [`Domain`] per argument,
/// - a function pointer that forwards to the math primitives.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                domains: [$($domain:expr),* $(,)?],
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:    &'static str,
            arity:   usize,
            domains: &'static [Domain],
            func:    BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, domains: &[$($domain),*], func: $func },
            )*
        ];
        /// Names of every function the evaluator supports.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"      => { arity: 1, domains: [Domain::Any],                           func: |math, args| math.abs(args[0]) },
    "sqrt"     => { arity: 1, domains: [Domain::NonNegative],                   func: |math, args| math.sqrt(args[0]) },
    "pow"      => { arity: 2, domains: [Domain::Any, Domain::NonNegative],      func: |math, args| math.pow(args[0], args[1]) },
    "sumTo"    => { arity: 1, domains: [Domain::NonNegative],                   func: |math, args| math.sum_to(args[0]) },
    "gcf"      => { arity: 2, domains: [Domain::NonNegative, Domain::NonNegative], func: |math, args| math.gcf(args[0], args[1]) },
    "isPrime"  => { arity: 1, domains: [Domain::GreaterThanOne],                func: |math, args| Some(i64::from(math.is_prime(args[0]))) },
    "hypot"    => { arity: 2, domains: [Domain::Positive, Domain::Positive],    func: |math, args| math.hypot(args[0], args[1]) },
    "toBinary" => { arity: 1, domains: [Domain::NonNegative],                   func: |math, args| math.to_binary(args[0]) },
}

impl BuiltinDef {
    /// Validates arity first, then every argument against its domain, left
    /// to right.
    fn check(&self, args: &[i64]) -> EvalResult<()> {
        check_arity(self.name, args, self.arity)?;

        for (index, (domain, value)) in self.domains.iter().zip(args).enumerate() {
            if !domain.admits(*value) {
                return Err(RuntimeError::InvalidArgument { name:       self.name.to_string(),
                                                           index:      index + 1,
                                                           constraint: domain.describe(),
                                                           found:      *value, });
            }
        }
        Ok(())
    }
}

impl Evaluator<'_> {
    /// Evaluates a function call node.
    ///
    /// Arguments are reduced eagerly, left to right, before the name is
    /// looked up. An error in an argument therefore wins over an unknown
    /// function name.
    ///
    /// # Returns
    /// A literal, the first error node found among the arguments, or the
    /// call rebuilt around arguments that are still pending.
    pub(crate) fn eval_function_call(&self, name: &str, arguments: &[Expr]) -> EvalResult<Expr> {
        match self.reduce_children(arguments)? {
            Reduction::Values(values) => Ok(Expr::literal(self.eval_function(name, &values)?)),
            Reduction::Failed(error) => Ok(error),
            Reduction::Pending(arguments) => Ok(Expr::call(name, arguments)),
        }
    }

    /// Calls a builtin on fully evaluated arguments.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Argument values.
    ///
    /// # Errors
    /// - `UnsupportedFunction` if `name` is not in the table.
    /// - `ArgumentCountMismatch` if the arity does not match.
    /// - `InvalidArgument` if an argument is outside its domain.
    /// - `Overflow` if the result does not fit in an `i64`.
    pub(crate) fn eval_function(&self, name: &str, args: &[i64]) -> EvalResult<i64> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| RuntimeError::UnsupportedFunction { name:
                                                                                          name.to_string() })?;
        builtin.check(args)?;

        let result = (builtin.func)(self.math, args).ok_or_else(|| {
                         let rendered = args.iter().map(i64::to_string).collect::<Vec<_>>();
                         RuntimeError::Overflow { operation: format!("{name}({})",
                                                                     rendered.join(",")) }
                     })?;

        trace!("{name}{args:?} = {result}");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_is_listed() {
        assert_eq!(BUILTIN_FUNCTIONS,
                   &["abs", "sqrt", "pow", "sumTo", "gcf", "isPrime", "hypot", "toBinary"]);
    }

    #[test]
    fn domains_cover_every_argument() {
        for builtin in BUILTIN_TABLE {
            assert_eq!(builtin.domains.len(), builtin.arity, "{}", builtin.name);
        }
    }

    #[test]
    fn arity_is_checked_before_domains() {
        let evaluator = Evaluator::default();
        assert_eq!(evaluator.eval_function("sqrt", &[-1, -1]),
                   Err(RuntimeError::ArgumentCountMismatch { name:     "sqrt".to_string(),
                                                             expected: 1,
                                                             found:    2, }));
    }

    #[test]
    fn first_domain_violation_is_reported() {
        let evaluator = Evaluator::default();
        assert_eq!(evaluator.eval_function("hypot", &[3, 0]),
                   Err(RuntimeError::InvalidArgument { name:       "hypot".to_string(),
                                                       index:      2,
                                                       constraint: "positive",
                                                       found:      0, }));
    }

    #[test]
    fn unknown_names_are_unsupported() {
        let evaluator = Evaluator::default();
        assert_eq!(evaluator.eval_function("foo", &[1]),
                   Err(RuntimeError::UnsupportedFunction { name: "foo".to_string() }));
    }

    #[test]
    fn names_are_case_sensitive() {
        let evaluator = Evaluator::default();
        assert!(evaluator.eval_function("SQRT", &[4]).is_err());
        assert_eq!(evaluator.eval_function("sumTo", &[4]), Ok(10));
    }

    #[test]
    fn primitive_overflow_names_the_call() {
        let evaluator = Evaluator::default();
        assert_eq!(evaluator.eval_function("pow", &[2, 64]),
                   Err(RuntimeError::Overflow { operation: "pow(2,64)".to_string() }));
    }
}
