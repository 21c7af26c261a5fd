//! LIFO stacks of state names.
//!
//! The engine keeps two of these: states it has left (for undo) and states
//! it has undone (for redo).

/// Ordered stack of previously active state names.
///
/// The oldest entry sits at the bottom, the most recent push at the top.
/// An optional limit bounds the stack. Only [`record`](Self::record) enforces
/// it, by dropping the oldest entries; [`push`](Self::push) never discards.
///
/// # Example
///
/// ```rust
/// use backtrack::core::HistoryStack;
///
/// let mut stack = HistoryStack::new();
/// stack.push("green");
/// stack.push("yellow");
///
/// assert_eq!(stack.peek(), Some("yellow"));
/// assert_eq!(stack.pop().as_deref(), Some("yellow"));
/// assert_eq!(stack.as_slice(), ["green".to_string()]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<String>,
    limit: Option<usize>,
}

impl HistoryStack {
    /// Create an unbounded empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stack whose `record` keeps at most `limit` entries.
    ///
    /// A limit of zero makes `record` keep nothing.
    pub fn bounded(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: Some(limit),
        }
    }

    /// The configured limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Push a state name onto the top, ignoring the limit.
    pub fn push(&mut self, state: impl Into<String>) {
        self.entries.push(state.into());
    }

    /// Push a state name onto the top, then trim the oldest entries down to the limit.
    pub fn record(&mut self, state: impl Into<String>) {
        self.push(state);

        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                let excess = self.entries.len() - limit;
                self.entries.drain(..excess);
            }
        }
    }

    /// Remove and return the top entry.
    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// Look at the top entry without removing it.
    pub fn peek(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. The limit is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries from oldest to most recent.
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_is_empty() {
        let stack = HistoryStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.limit(), None);
    }

    #[test]
    fn pop_returns_most_recent_first() {
        let mut stack = HistoryStack::new();
        stack.push("a");
        stack.push("b");
        stack.push("c");

        assert_eq!(stack.pop().as_deref(), Some("c"));
        assert_eq!(stack.pop().as_deref(), Some("b"));
        assert_eq!(stack.pop().as_deref(), Some("a"));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn as_slice_is_oldest_first() {
        let mut stack = HistoryStack::new();
        stack.push("a");
        stack.push("b");

        assert_eq!(stack.as_slice(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn clear_empties_stack() {
        let mut stack = HistoryStack::bounded(4);
        stack.push("a");
        stack.push("b");
        stack.clear();

        assert!(stack.is_empty());
        assert_eq!(stack.limit(), Some(4));
    }

    #[test]
    fn bounded_stack_drops_oldest_on_record() {
        let mut stack = HistoryStack::bounded(2);
        stack.record("a");
        stack.record("b");
        stack.record("c");

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.as_slice(), ["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut stack = HistoryStack::bounded(0);
        stack.record("a");

        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn push_ignores_limit() {
        let mut stack = HistoryStack::bounded(1);
        stack.record("a");
        stack.push("b");

        assert_eq!(stack.as_slice(), ["a".to_string(), "b".to_string()]);

        stack.record("c");
        assert_eq!(stack.as_slice(), ["c".to_string()]);
    }

    #[test]
    fn duplicate_entries_are_kept() {
        let mut stack = HistoryStack::new();
        stack.push("a");
        stack.push("a");

        assert_eq!(stack.len(), 2);
    }
}
