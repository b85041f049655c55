use std::ops::{Deref, DerefMut};

/// A scan position together with its rollback point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Index of the next character to be read.
    pub position: usize,
    /// Position that [`CursorStack::backtrack`] returns to.
    pub marker:   usize,
}

/// A stack of cursors over a single source text.
///
/// The bottom (root) cursor always exists. Every speculative parse pushes a
/// child cursor that starts where its parent currently stands, consumes
/// characters on its own, and is then either committed (the parent jumps to
/// where the child stopped) or discarded (the parent never moved).
///
/// Positions count characters, not bytes.
#[derive(Debug)]
pub struct CursorStack {
    source: Vec<char>,
    root:   Cursor,
    scopes: Vec<Cursor>,
}

impl CursorStack {
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { source: source.chars().collect(),
               root:   Cursor::default(),
               scopes: Vec::new(), }
    }

    fn top(&self) -> &Cursor {
        self.scopes.last().unwrap_or(&self.root)
    }

    fn top_mut(&mut self) -> &mut Cursor {
        self.scopes.last_mut().unwrap_or(&mut self.root)
    }

    /// Number of characters in the source.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.source.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Number of open scopes above the root cursor.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.top().position
    }

    #[must_use]
    pub fn marker(&self) -> usize {
        self.top().marker
    }

    /// Returns whether the innermost cursor has read every character.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position() >= self.source.len()
    }

    /// The unread tail of the source, as seen by the innermost cursor.
    #[must_use]
    pub fn remaining(&self) -> String {
        self.source.iter().skip(self.position()).collect()
    }

    /// Returns the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.position()).copied()
    }

    /// Consumes and returns the next character.
    ///
    /// At the end of input this returns `None` and leaves the position where
    /// it is, no matter how often it is called.
    ///
    /// ## Example
    /// ```
    /// use krunch::interpreter::cursor::CursorStack;
    ///
    /// let mut cursors = CursorStack::new("7");
    /// assert_eq!(cursors.next_char(), Some('7'));
    /// assert_eq!(cursors.next_char(), None);
    /// assert_eq!(cursors.next_char(), None);
    /// assert_eq!(cursors.position(), 1);
    /// ```
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.top_mut().position += 1;
        Some(c)
    }

    /// Makes everything consumed so far in this scope permanent for
    /// [`Self::backtrack`].
    pub fn set_marker(&mut self) {
        let cursor = self.top_mut();
        cursor.marker = cursor.position;
    }

    /// Returns to the last marker, discarding speculative consumption.
    pub fn backtrack(&mut self) {
        let cursor = self.top_mut();
        cursor.position = cursor.marker;
    }

    /// Pushes a cursor that starts at the current position.
    pub fn create_scope(&mut self) {
        let position = self.position();
        self.scopes.push(Cursor { position,
                                  marker: position });
    }

    /// Discards the innermost scope. The parent keeps its own position.
    ///
    /// The root cursor is never popped.
    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Discards the innermost scope and moves the parent to where it stopped.
    pub fn commit_scope(&mut self) {
        if let Some(child) = self.scopes.pop() {
            self.top_mut().position = child.position;
        }
    }
}

/// Anything that owns a [`CursorStack`] and can therefore open scopes on it.
pub trait Backtrack {
    fn cursors_mut(&mut self) -> &mut CursorStack;
}

impl Backtrack for CursorStack {
    fn cursors_mut(&mut self) -> &mut CursorStack {
        self
    }
}

/// A speculative scan.
///
/// Opening a `Scope` pushes a cursor. Unless [`Scope::commit`] is called,
/// dropping the scope pops that cursor again, so the owner is back exactly
/// where it was before the attempt. Early returns and `?` therefore always
/// roll back.
///
/// The scope dereferences to its owner, so grammar rules keep calling the
/// owner's methods through it.
///
/// ## Example
/// ```
/// use krunch::interpreter::cursor::{CursorStack, Scope};
///
/// let mut cursors = CursorStack::new("ab");
/// {
///     let mut scope = Scope::open(&mut cursors);
///     scope.next_char();
/// }
/// assert_eq!(cursors.position(), 0);
///
/// let mut scope = Scope::open(&mut cursors);
/// scope.next_char();
/// scope.commit();
/// assert_eq!(cursors.position(), 1);
/// ```
pub struct Scope<'a, P: Backtrack> {
    owner:     &'a mut P,
    committed: bool,
}

impl<'a, P: Backtrack> Scope<'a, P> {
    pub fn open(owner: &'a mut P) -> Self {
        owner.cursors_mut().create_scope();
        Self { owner,
               committed: false }
    }

    /// Keeps everything this scope consumed.
    pub fn commit(mut self) {
        self.owner.cursors_mut().commit_scope();
        self.committed = true;
    }
}

impl<P: Backtrack> Drop for Scope<'_, P> {
    fn drop(&mut self) {
        if !self.committed {
            self.owner.cursors_mut().pop_scope();
        }
    }
}

impl<P: Backtrack> Deref for Scope<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        &*self.owner
    }
}

impl<P: Backtrack> DerefMut for Scope<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut *self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_char_saturates_at_end() {
        let mut cursors = CursorStack::new("ab");
        assert_eq!(cursors.next_char(), Some('a'));
        assert_eq!(cursors.next_char(), Some('b'));
        for _ in 0..5 {
            assert_eq!(cursors.next_char(), None);
        }
        assert_eq!(cursors.position(), 2);
        assert!(cursors.is_exhausted());
    }

    #[test]
    fn backtrack_returns_to_marker() {
        let mut cursors = CursorStack::new("12345");
        cursors.next_char();
        cursors.set_marker();
        cursors.next_char();
        cursors.next_char();
        assert_eq!(cursors.position(), 3);

        cursors.backtrack();
        assert_eq!(cursors.position(), 1);
        assert_eq!(cursors.remaining(), "2345");
    }

    #[test]
    fn new_scope_inherits_parent_position() {
        let mut cursors = CursorStack::new("xyz");
        cursors.next_char();
        cursors.create_scope();

        assert_eq!(cursors.depth(), 1);
        assert_eq!(cursors.position(), 1);
        assert_eq!(cursors.marker(), 1);
    }

    #[test]
    fn pop_scope_leaves_parent_untouched() {
        let mut cursors = CursorStack::new("xyz");
        cursors.create_scope();
        cursors.next_char();
        cursors.next_char();
        cursors.pop_scope();

        assert_eq!(cursors.depth(), 0);
        assert_eq!(cursors.position(), 0);
    }

    #[test]
    fn root_cursor_is_never_popped() {
        let mut cursors = CursorStack::new("xyz");
        cursors.next_char();
        cursors.pop_scope();
        cursors.commit_scope();

        assert_eq!(cursors.position(), 1);
    }

    #[test]
    fn nested_scopes_commit_outward_only_when_asked() {
        let mut cursors = CursorStack::new("abcd");
        {
            let mut outer = Scope::open(&mut cursors);
            outer.next_char();
            {
                let mut inner = Scope::open(&mut *outer);
                inner.next_char();
                inner.next_char();
                inner.commit();
            }
            assert_eq!(outer.position(), 3);
            {
                let mut abandoned = Scope::open(&mut *outer);
                abandoned.next_char();
            }
            assert_eq!(outer.position(), 3);
        }
        assert_eq!(cursors.position(), 0);
        assert_eq!(cursors.depth(), 0);
    }

    #[test]
    fn commit_does_not_move_parent_marker() {
        let mut cursors = CursorStack::new("abcd");
        let mut scope = Scope::open(&mut cursors);
        scope.next_char();
        scope.next_char();
        scope.commit();

        assert_eq!(cursors.position(), 2);
        cursors.backtrack();
        assert_eq!(cursors.position(), 0);
    }

    #[test]
    fn positions_count_characters() {
        let mut cursors = CursorStack::new("é1");
        assert_eq!(cursors.next_char(), Some('é'));
        assert_eq!(cursors.position(), 1);
        assert_eq!(cursors.remaining(), "1");
    }
}
