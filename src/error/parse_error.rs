use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during scanning or parsing.
///
/// Positions are zero-based character offsets into the source text.
pub enum ParseError {
    /// The source text contained no characters at all.
    #[error("Syntax error: empty expression.")]
    EmptyExpression,
    /// No statement could be recognised at the start of the input.
    #[error("Syntax error: could not parse expression at position {position}.")]
    Unparseable {
        /// Where parsing gave up.
        position: usize,
    },
    /// A statement was recognised but characters were left over.
    #[error("Syntax error: unexpected '{remaining}' at position {position}.")]
    TrailingInput {
        /// The unconsumed tail of the input.
        remaining: String,
        /// Where the unconsumed tail starts.
        position:  usize,
    },
    /// A digit run does not fit in a 64-bit signed integer.
    #[error("Syntax error: literal {literal} at position {position} is too large.")]
    LiteralTooLarge {
        /// The offending digit run.
        literal:  String,
        /// Where the digit run starts.
        position: usize,
    },
    /// Parentheses, calls or operator chains nest deeper than the parser
    /// accepts.
    #[error("Syntax error: expression nests deeper than {limit} levels at position {position}.")]
    TooDeeplyNested {
        /// The nesting limit that was exceeded.
        limit:    usize,
        /// Where the level that went too deep starts.
        position: usize,
    },
}
