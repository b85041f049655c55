use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        cursor::Scope,
        lexer::{eat, scan_digits, scan_identifier},
        parser::{
            core::{ParseResult, Parser},
            utils::deepen,
        },
    },
};

/// A grammar rule that may or may not match at the current position.
type Alternative = fn(&mut Parser) -> ParseResult<Option<Expr>>;

impl Parser {
    /// Parses an operand: the highest precedence tier.
    ///
    /// The alternatives are tried in order. After each miss the cursor is
    /// returned to the marker set before the attempt, so every alternative
    /// starts from the same place.
    ///
    /// Grammar:
    /// ```text
    ///     base := "(" statement ")"
    ///           | number
    ///           | function_call
    /// ```
    pub(in crate::interpreter::parser) fn parse_base(&mut self) -> ParseResult<Option<Expr>> {
        const ALTERNATIVES: [Alternative; 3] =
            [Parser::parse_parenthesized, Parser::parse_number, Parser::parse_function_call];

        let mut scope = Scope::open(self);
        scope.cursors.set_marker();

        for alternative in ALTERNATIVES {
            if let Some(expr) = alternative(&mut *scope)? {
                scope.commit();
                return Ok(Some(expr));
            }
            scope.cursors.backtrack();
        }

        Ok(None)
    }

    /// Parses a parenthesized statement, e.g. `(2+3)`.
    ///
    /// The parentheses only group; the inner tree is returned as is.
    fn parse_parenthesized(&mut self) -> ParseResult<Option<Expr>> {
        let mut scope = Scope::open(self);
        if !eat(&mut scope.cursors, '(') {
            return Ok(None);
        }

        let Some(inner) = scope.nested(Self::parse_statement)? else {
            return Ok(None);
        };

        if !eat(&mut scope.cursors, ')') {
            return Ok(None);
        }

        scope.commit();
        Ok(Some(inner))
    }

    /// Parses a numeric literal: a maximal run of digits.
    ///
    /// # Errors
    /// `LiteralTooLarge` if the run does not fit in an `i64`. Such input can
    /// never parse, so this is fatal rather than a miss.
    fn parse_number(&mut self) -> ParseResult<Option<Expr>> {
        let position = self.cursors.position();
        let Some(digits) = scan_digits(&mut self.cursors) else {
            return Ok(None);
        };

        let value = digits.parse::<i64>()
                          .map_err(|_| ParseError::LiteralTooLarge { literal: digits.clone(),
                                                                     position })?;

        Ok(Some(Expr::literal(value)))
    }

    /// Parses a function call such as `gcf(12,18)`.
    ///
    /// Any alphabetic name followed by `(` is accepted here, known or not.
    /// Whether the function exists is decided by the evaluator.
    ///
    /// Grammar: `function_call := identifier "(" statement ("," statement)* ")"`
    ///
    /// # Errors
    /// `TooDeeplyNested` if the arguments nest too deep, pointing at the
    /// start of the name.
    fn parse_function_call(&mut self) -> ParseResult<Option<Expr>> {
        let mut scope = Scope::open(self);
        let position = scope.cursors.position();
        let Some(name) = scan_identifier(&mut scope.cursors) else {
            return Ok(None);
        };

        if !eat(&mut scope.cursors, '(') {
            return Ok(None);
        }

        let Some(arguments) =
            scope.nested(|parser| parser.parse_comma_separated(Self::parse_statement, ')'))?
        else {
            return Ok(None);
        };

        arguments.iter()
                 .try_fold(1, |depth, argument| deepen(depth, argument, position))?;

        scope.commit();
        Ok(Some(Expr::call(name, arguments)))
    }
}
