/// Core evaluation logic: the evaluator, its step and its driving loop.
///
/// Contains the `Evaluator`, the `Outcome` of a run, and the dispatch from
/// node kinds to their reduction rules.
pub mod core;

/// Binary operator evaluation logic.
///
/// Checked integer arithmetic for `+`, `-`, `*` and `/`.
pub mod binary;

/// Function evaluation.
///
/// Handles builtin function calls: the function table, arity and domain
/// checking, and dispatch to the math primitives.
pub mod function;

/// Utility functions for evaluation.
///
/// Provides the shared child reduction used by every non-terminal node.
pub mod utils;
