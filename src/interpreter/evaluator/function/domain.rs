/// The set of integers a builtin accepts for one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Every integer.
    Any,
    /// `x >= 0`
    NonNegative,
    /// `x > 0`
    Positive,
    /// `x > 1`
    GreaterThanOne,
}

impl Domain {
    /// Tests whether `value` lies in this domain.
    ///
    /// ## Example
    /// ```
    /// use krunch::interpreter::evaluator::function::domain::Domain;
    ///
    /// assert!(Domain::NonNegative.admits(0));
    /// assert!(!Domain::Positive.admits(0));
    /// assert!(!Domain::GreaterThanOne.admits(1));
    /// ```
    #[must_use]
    pub const fn admits(self, value: i64) -> bool {
        match self {
            Self::Any => true,
            Self::NonNegative => value >= 0,
            Self::Positive => value > 0,
            Self::GreaterThanOne => value > 1,
        }
    }

    /// The constraint as it appears in domain error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Any => "an integer",
            Self::NonNegative => "non-negative",
            Self::Positive => "positive",
            Self::GreaterThanOne => "greater than 1",
        }
    }
}
