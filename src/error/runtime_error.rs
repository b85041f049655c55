use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while reducing an expression tree.
pub enum RuntimeError {
    /// The wrong number of arguments was supplied to a function.
    #[error("Arity error: {name}() expects {expected} argument(s), got {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The arity declared in the function table.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// An argument was outside the function's declared domain.
    #[error("Domain error: {name}() expects argument {index} to be {constraint}, got {found}.")]
    InvalidArgument {
        /// The name of the function.
        name:       String,
        /// One-based position of the offending argument.
        index:      usize,
        /// Human readable form of the violated constraint.
        constraint: &'static str,
        /// The value that was rejected.
        found:      i64,
    },
    /// Called a function that is not in the function table.
    #[error("Unsupported function: '{name}' is not a known function.")]
    UnsupportedFunction {
        /// The name of the function.
        name: String,
    },
    /// Attempted division by zero.
    #[error("Domain error: division by zero in {expression}.")]
    DivisionByZero {
        /// Textual form of the division that failed.
        expression: String,
    },
    /// Arithmetic left the 64-bit signed integer range.
    #[error("Overflow error: integer overflow while computing {operation}.")]
    Overflow {
        /// What was being computed.
        operation: String,
    },
    /// A value was requested from a node that does not carry one.
    #[error("Value error: {node} does not yield a value.")]
    MissingValue {
        /// Textual form of the node.
        node: String,
    },
}
