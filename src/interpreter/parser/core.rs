use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::cursor::{Backtrack, CursorStack},
};

/// Result type used by the parser.
///
/// Grammar rules return `Ok(None)` when they do not match, which lets the
/// caller try something else. `Err` is reserved for input that can never
/// parse, such as a literal that does not fit in an `i64`.
pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts, counted both as open parentheses or
/// argument lists and as the depth of the resulting tree.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A recursive-descent parser over a single line of source text.
///
/// Grammar:
/// ```text
/// statement     := term (("+" | "-") term)*
/// term          := base (("*" | "/") base)*
/// base          := "(" statement ")" | number | function_call
/// function_call := identifier "(" statement ("," statement)* ")"
/// ```
///
/// There is no whitespace rule. Every character of the input must be
/// matched by the grammar.
#[derive(Debug)]
pub struct Parser {
    pub(crate) cursors: CursorStack,
    /// Open parentheses and argument lists around the current position.
    pub(crate) nesting: usize,
}

impl Backtrack for Parser {
    fn cursors_mut(&mut self) -> &mut CursorStack {
        &mut self.cursors
    }
}

impl Parser {
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { cursors: CursorStack::new(source),
               nesting: 0, }
    }

    /// Parses the whole source into an expression tree.
    ///
    /// Syntax errors are not returned separately. They come back as an
    /// `Expr::Error` node, which evaluates to itself.
    ///
    /// The parser is consumed, so one instance never serves two parses.
    ///
    /// ## Example
    /// ```
    /// use krunch::{ast::Expr, interpreter::parser::core::Parser};
    ///
    /// let tree = Parser::new("2+3*4").parse();
    /// assert_eq!(tree.to_string(),
    ///            "BinaryOp(Literal(2), BinaryOp(Literal(3), Literal(4), Mul), Add)");
    ///
    /// assert!(Parser::new("3+4x").parse().is_error());
    /// ```
    #[must_use]
    pub fn parse(self) -> Expr {
        match self.try_parse() {
            Ok(expr) => expr,
            Err(e) => Expr::error(e.to_string()),
        }
    }

    /// Parses the whole source, reporting syntax errors as `ParseError`.
    ///
    /// # Errors
    /// - `EmptyExpression` for an empty source.
    /// - `Unparseable` if no statement matches at the start.
    /// - `TrailingInput` if a statement matched but characters are left.
    /// - `LiteralTooLarge` for a digit run outside the `i64` range.
    /// - `TooDeeplyNested` past [`MAX_NESTING_DEPTH`].
    pub fn try_parse(mut self) -> ParseResult<Expr> {
        if self.cursors.is_empty() {
            debug!("refusing to parse empty input");
            return Err(ParseError::EmptyExpression);
        }

        let parsed = self.parse_statement()?;
        let position = self.cursors.position();

        match parsed {
            None => {
                debug!("no statement matched at position {position}");
                Err(ParseError::Unparseable { position })
            },
            Some(expr) if !self.cursors.is_exhausted() => {
                let remaining = self.cursors.remaining();
                debug!("parsed {expr} but '{remaining}' is left at position {position}");
                Err(ParseError::TrailingInput { remaining,
                                                position })
            },
            Some(expr) => {
                debug!("parsed {expr}");
                Ok(expr)
            },
        }
    }
}
