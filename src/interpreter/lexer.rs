use crate::interpreter::cursor::{CursorStack, Scope};

/// Returns whether `c` may appear in a numeric literal.
///
/// Only ASCII digits count; there are no signs, exponents or decimal points.
#[must_use]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns whether `c` may appear in a function name.
#[must_use]
pub fn is_alpha(c: char) -> bool {
    c.is_alphabetic()
}

/// Consumes the longest run of characters accepted by `accept`.
///
/// Each character is read speculatively and the first rejected one is
/// handed back, so the cursor ends up directly after the run. An empty run
/// consumes nothing and yields `None`.
///
/// # Parameters
/// - `cursors`: Cursor stack positioned at the start of the run.
/// - `accept`: Predicate deciding which characters belong to the run.
///
/// # Returns
/// The run as a string, or `None` if it is empty.
pub fn scan_while(cursors: &mut CursorStack, accept: impl Fn(char) -> bool) -> Option<String> {
    let mut scope = Scope::open(cursors);
    let mut run = String::new();

    loop {
        scope.set_marker();
        match scope.next_char() {
            Some(c) if accept(c) => run.push(c),
            _ => {
                scope.backtrack();
                break;
            },
        }
    }

    if run.is_empty() {
        return None;
    }

    scope.commit();
    Some(run)
}

/// Scans a maximal run of digits, e.g. the `120` in `120*3`.
///
/// ## Example
/// ```
/// use krunch::interpreter::{cursor::CursorStack, lexer::scan_digits};
///
/// let mut cursors = CursorStack::new("120*3");
/// assert_eq!(scan_digits(&mut cursors).as_deref(), Some("120"));
/// assert_eq!(cursors.remaining(), "*3");
/// ```
pub fn scan_digits(cursors: &mut CursorStack) -> Option<String> {
    scan_while(cursors, is_digit)
}

/// Scans a maximal run of alphabetic characters, e.g. the `sumTo` in
/// `sumTo(4)`.
pub fn scan_identifier(cursors: &mut CursorStack) -> Option<String> {
    scan_while(cursors, is_alpha)
}

/// Consumes `expected` if it is the next character.
///
/// Returns `false` and consumes nothing otherwise.
pub fn eat(cursors: &mut CursorStack, expected: char) -> bool {
    let mut scope = Scope::open(cursors);
    if scope.next_char() == Some(expected) {
        scope.commit();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_stop_at_first_non_digit() {
        let mut cursors = CursorStack::new("0042x");
        assert_eq!(scan_digits(&mut cursors).as_deref(), Some("0042"));
        assert_eq!(cursors.position(), 4);
        assert_eq!(cursors.depth(), 0);
    }

    #[test]
    fn empty_run_consumes_nothing() {
        let mut cursors = CursorStack::new("(1)");
        assert_eq!(scan_digits(&mut cursors), None);
        assert_eq!(scan_identifier(&mut cursors), None);
        assert_eq!(cursors.position(), 0);
    }

    #[test]
    fn identifier_runs_to_end_of_input() {
        let mut cursors = CursorStack::new("isPrime");
        assert_eq!(scan_identifier(&mut cursors).as_deref(), Some("isPrime"));
        assert!(cursors.is_exhausted());
    }

    #[test]
    fn identifiers_do_not_contain_digits() {
        let mut cursors = CursorStack::new("log2(8)");
        assert_eq!(scan_identifier(&mut cursors).as_deref(), Some("log"));
        assert_eq!(cursors.remaining(), "2(8)");
    }

    #[test]
    fn eat_only_consumes_a_match() {
        let mut cursors = CursorStack::new("(,");
        assert!(!eat(&mut cursors, ','));
        assert!(eat(&mut cursors, '('));
        assert!(eat(&mut cursors, ','));
        assert!(!eat(&mut cursors, ')'));
        assert_eq!(cursors.position(), 2);
    }
}
