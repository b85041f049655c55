/// The cursor module tracks scan positions and rollback points.
///
/// Every speculative parse runs inside its own cursor scope, so a failed
/// attempt leaves the surrounding rule exactly where it started.
///
/// # Responsibilities
/// - Reads the source one character at a time, saturating at the end.
/// - Records markers and backtracks to them.
/// - Provides the `Scope` guard that rolls back unless committed.
pub mod cursor;
/// The evaluator module reduces expression trees to values.
///
/// The evaluator steps a tree towards a terminal node, reducing children
/// before their parents, and stops after a bounded number of steps.
///
/// # Responsibilities
/// - Evaluates binary operations and builtin function calls.
/// - Checks arity and argument domains of builtins.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module scans the raw lexical units of an expression.
///
/// There is no separate token stream. The grammar asks the scanners for
/// maximal runs of digits or letters, or a single expected character,
/// directly at the current cursor position.
pub mod lexer;
/// The parser module builds the expression tree from source text.
///
/// The parser is a recursive descent over the cursor engine. Rules try
/// alternatives speculatively and backtrack on failure.
///
/// # Responsibilities
/// - Implements the three precedence tiers and function call syntax.
/// - Insists that the whole input is consumed.
/// - Reports syntax errors as error nodes.
pub mod parser;
