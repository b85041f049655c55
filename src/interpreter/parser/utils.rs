use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        cursor::Scope,
        lexer::eat,
        parser::core::{MAX_NESTING_DEPTH, ParseResult, Parser},
    },
};

impl Parser {
    /// Parses a comma-separated list of items up to a closing character.
    ///
    /// This is used for function argument lists. It repeatedly calls
    /// `parse_item` to parse one element and then expects either:
    ///
    /// - a comma, to continue the list, or
    /// - the `closing` character, to end it.
    ///
    /// The list must hold at least one item. The list ends only on
    /// `closing`, never because two items happen to be equal.
    ///
    /// Grammar (simplified): `list := item ("," item)* closing`
    ///
    /// # Parameters
    /// - `parse_item`: Function used to parse each list element.
    /// - `closing`: The character that terminates the list (e.g. `)`).
    ///
    /// # Returns
    /// The parsed items, or `None` (with nothing consumed) if the list is
    /// malformed.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: impl Fn(&mut Self) -> ParseResult<Option<T>>,
        closing: char)
        -> ParseResult<Option<Vec<T>>> {
        let mut scope = Scope::open(self);
        let mut items = Vec::new();

        loop {
            let Some(item) = parse_item(&mut *scope)? else {
                return Ok(None);
            };
            items.push(item);

            if eat(&mut scope.cursors, ',') {
                continue;
            }
            if eat(&mut scope.cursors, closing) {
                break;
            }
            return Ok(None);
        }

        scope.commit();
        Ok(Some(items))
    }

    /// Consumes the next character if it is an operator accepted by `tier`.
    ///
    /// Anything else, including end of input, is handed back by returning to
    /// the current marker. Callers set the marker right before asking.
    pub(in crate::interpreter::parser) fn next_operator(&mut self,
                                                        tier: impl Fn(BinaryOperator) -> bool)
                                                        -> Option<BinaryOperator> {
        let op = self.cursors
                     .next_char()
                     .and_then(BinaryOperator::from_char)
                     .filter(|op| tier(*op));

        if op.is_none() {
            self.cursors.backtrack();
        }
        op
    }

    /// Runs `parse` one nesting level deeper, for the inside of parentheses
    /// and argument lists.
    ///
    /// # Errors
    /// `TooDeeplyNested` if [`MAX_NESTING_DEPTH`] levels are already open,
    /// or whatever `parse` fails with.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.nesting >= MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeeplyNested { limit:    MAX_NESTING_DEPTH,
                                                     position: self.cursors.position(), });
        }

        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;
        result
    }
}

/// Depth of a tree that puts a new node over a subtree of depth `depth` and
/// `child`.
///
/// # Errors
/// `TooDeeplyNested`, pointing at `position`, if the new tree would be
/// deeper than [`MAX_NESTING_DEPTH`].
pub(in crate::interpreter::parser) fn deepen(depth: usize,
                                             child: &Expr,
                                             position: usize)
                                             -> ParseResult<usize> {
    let deeper = depth.max(child.depth()) + 1;
    if deeper > MAX_NESTING_DEPTH {
        return Err(ParseError::TooDeeplyNested { limit: MAX_NESTING_DEPTH,
                                                 position });
    }
    Ok(deeper)
}
