use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        cursor::Scope,
        parser::{
            core::{ParseResult, Parser},
            utils::deepen,
        },
    },
};

impl Parser {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`, so `10-3-2`
    /// becomes `(10-3)-2`.
    ///
    /// The rule is: `statement := term (("+" | "-") term)*`
    ///
    /// An operator whose right operand does not parse is handed back to the
    /// caller unconsumed. A chain that would make the tree deeper than
    /// `MAX_NESTING_DEPTH` is a fatal `TooDeeplyNested`.
    ///
    /// # Returns
    /// `Some` tree of `Add`/`Sub` nodes, or `None` if not even the first term
    /// matched.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Option<Expr>> {
        let mut scope = Scope::open(self);
        let Some(mut left) = scope.parse_term()? else {
            return Ok(None);
        };
        let mut depth = left.depth();

        loop {
            scope.cursors.set_marker();
            let position = scope.cursors.position();
            let Some(op) = scope.next_operator(BinaryOperator::is_additive) else {
                break;
            };
            let Some(right) = scope.parse_term()? else {
                scope.cursors.backtrack();
                break;
            };
            depth = deepen(depth, &right, position)?;
            left = Expr::binary(left, right, op);
        }

        scope.commit();
        Ok(Some(left))
    }

    /// Parses multiplication and division expressions.
    ///
    /// Handles left-associative binary operators: `*` and `/`.
    ///
    /// The rule is: `term := base (("*" | "/") base)*`
    ///
    /// # Returns
    /// `Some` tree of `Mul`/`Div` nodes, or `None` if not even the first
    /// base matched.
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<Option<Expr>> {
        let mut scope = Scope::open(self);
        let Some(mut left) = scope.parse_base()? else {
            return Ok(None);
        };
        let mut depth = left.depth();

        loop {
            scope.cursors.set_marker();
            let position = scope.cursors.position();
            let Some(op) = scope.next_operator(|op| !op.is_additive()) else {
                break;
            };
            let Some(right) = scope.parse_base()? else {
                scope.cursors.backtrack();
                break;
            };
            depth = deepen(depth, &right, position)?;
            left = Expr::binary(left, right, op);
        }

        scope.commit();
        Ok(Some(left))
    }
}
