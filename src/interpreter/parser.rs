/// Parser entry points.
///
/// Declares the `Parser` that owns the cursor stack, and the top-level parse
/// that insists on consuming the whole input.
pub mod core;

/// Operand and function call parsing.
///
/// Implements the highest precedence tier: parenthesized statements, numeric
/// literals and function calls, tried in that order.
pub mod base;

/// Binary operator parsing.
///
/// Implements the two left-associative tiers, `+`/`-` and `*`/`/`.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides comma-separated list parsing and operator recognition shared by
/// the grammar rules.
pub mod utils;
