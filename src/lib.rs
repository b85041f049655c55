//! # krunch
//!
//! krunch is an integer calculator. It parses one line of arithmetic with a
//! backtracking recursive-descent parser and reduces the resulting tree with
//! a bounded, stepwise evaluator.
//!
//! The language has non-negative integer literals, `+ - * /` with the usual
//! precedence, parentheses, and calls to a fixed set of builtin functions
//! such as `sqrt(16)` or `gcf(12,18)`. Whitespace is not allowed.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator, MAX_EVALUATION_STEPS, Outcome},
    parser::core::Parser,
};

/// Defines the expression tree.
///
/// This module declares the `Expr` enum: literals, error nodes, function
/// calls and binary operations. The tree is built by the parser and reduced
/// by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of node kinds.
/// - Tells terminal from non-terminal nodes and extracts values.
/// - Renders nodes in their textual form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines syntax errors (`ParseError`) and evaluation errors
///   (`RuntimeError`).
/// - Carries the prefixed, user-facing message for every failure.
pub mod error;
/// Orchestrates parsing and evaluation.
///
/// This module ties together the cursor engine, the scanners, the grammar
/// and the stepwise evaluator.
pub mod interpreter;
/// Integer math primitives behind the builtin functions.
///
/// The evaluator validates arguments and then calls into a
/// [`math::MathPrimitives`] implementation for the actual arithmetic.
pub mod math;

/// Parses `source` into an expression tree.
///
/// Syntax errors come back as an `Expr::Error` node.
#[must_use]
pub fn parse(source: &str) -> ast::Expr {
    Parser::new(source).parse()
}

/// Parses and evaluates `source`, allowing at most `max_steps` reduction
/// steps.
///
/// A syntax error is not an `Err` here: it yields `Outcome::Rejected` with
/// the error node's text, since the error node is itself a terminal.
///
/// # Errors
/// Returns the fatal `RuntimeError` that aborted the evaluation: arity,
/// domain, unsupported function, division by zero or overflow.
///
/// # Examples
/// ```
/// use krunch::{get_result, interpreter::evaluator::core::Outcome};
///
/// assert_eq!(get_result("10-3-2", 100), Ok(Outcome::Value(5)));
///
/// // 'foo' is not a builtin
/// assert!(get_result("foo(1)", 100).is_err());
/// ```
pub fn get_result(source: &str, max_steps: usize) -> EvalResult<Outcome> {
    let tree = parse(source);
    Evaluator::default().with_max_steps(max_steps).run(tree)
}

/// Evaluates `source` and renders the result the way a calculator display
/// shows it: either the integer, or a diagnostic.
///
/// # Examples
/// ```
/// use krunch::calculate;
///
/// assert_eq!(calculate("2+3*4"), "14");
/// assert_eq!(calculate("pow(2)"), "Arity error: pow() expects 2 argument(s), got 1.");
/// assert_eq!(calculate(""), "Error(Syntax error: empty expression.)");
/// ```
#[must_use]
pub fn calculate(source: &str) -> String {
    match get_result(source, MAX_EVALUATION_STEPS) {
        Ok(outcome) => outcome.to_string(),
        Err(e) => e.to_string(),
    }
}
