//! Traversal control values.

/// What the traversal should do after a visit.
///
/// These are the three control constants exposed to visitors; [`VisitResult`]
/// wraps them together with sibling-index steering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Continue the walk normally.
    Continue,
    /// Do not descend into the visited node's children.
    Skip,
    /// Abort the entire walk immediately.
    Exit,
}

/// The value a visitor returns to steer the walk.
///
/// Historical dynamic implementations of this traversal accepted plain
/// numbers, bare actions, or `[action, index]` tuples and had to define a
/// policy for malformed returns. Here the result is a closed enum, so a
/// malformed return is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Continue the walk normally. The default, for visitors with nothing to
    /// say.
    #[default]
    Continue,
    /// Do not descend into the visited node's children; its next sibling is
    /// still visited.
    Skip,
    /// Abort the entire walk; no further visitor calls occur.
    Exit,
    /// Continue, then resume the parent's child loop at this absolute index.
    ///
    /// The visited node's own subtree is still descended first. Returning the
    /// current index revisits the current slot, `0` restarts the sibling
    /// sequence, and an index at or past `children.len()` ends it. From a
    /// root visit there is no sibling loop and the index is ignored.
    ContinueAt(usize),
}

impl VisitResult {
    /// Splits the result into its action and optional next sibling index.
    #[inline]
    pub const fn decode(self) -> (Action, Option<usize>) {
        match self {
            Self::Continue => (Action::Continue, None),
            Self::Skip => (Action::Skip, None),
            Self::Exit => (Action::Exit, None),
            Self::ContinueAt(index) => (Action::Continue, Some(index)),
        }
    }
}

impl From<Action> for VisitResult {
    #[inline]
    fn from(action: Action) -> Self {
        match action {
            Action::Continue => Self::Continue,
            Action::Skip => Self::Skip,
            Action::Exit => Self::Exit,
        }
    }
}

impl From<usize> for VisitResult {
    #[inline]
    fn from(index: usize) -> Self {
        Self::ContinueAt(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        assert_eq!(VisitResult::Continue.decode(), (Action::Continue, None));
        assert_eq!(VisitResult::Skip.decode(), (Action::Skip, None));
        assert_eq!(VisitResult::Exit.decode(), (Action::Exit, None));
        assert_eq!(
            VisitResult::ContinueAt(4).decode(),
            (Action::Continue, Some(4))
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(VisitResult::from(Action::Skip), VisitResult::Skip);
        assert_eq!(VisitResult::from(2usize), VisitResult::ContinueAt(2));
        assert_eq!(VisitResult::default(), VisitResult::Continue);
    }
}
