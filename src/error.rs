/// Parsing errors.
///
/// Defines all error types that can occur while scanning and parsing an
/// expression. Every parse error is a syntax error and ends up as an
/// `Expr::Error` node when parsing through [`crate::interpreter::parser::core::Parser::parse`].
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing an expression
/// tree: arity and domain violations, unsupported functions, division by zero
/// and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
