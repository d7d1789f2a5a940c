//! Recently submitted queries, newest first, with previous/next navigation
//! like a shell prompt.

use std::collections::VecDeque;

/// How many queries are remembered.
pub const MAX_HISTORY_SIZE: usize = 1000;

#[derive(Debug, Clone, Default)]
pub struct QueryHistory {
    entries: VecDeque<String>,
    current: usize,
    updating: bool,
}

impl QueryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, [`QueryHistory::add`] is ignored. Used when the query box is
    /// being filled from the history itself.
    pub fn set_updating(&mut self, updating: bool) {
        self.updating = updating;
    }

    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Records `query` as the newest entry.
    ///
    /// Entries newer than the current position are dropped first, so adding
    /// after navigating back branches the history from there.
    pub fn add(&mut self, query: impl Into<String>) {
        if self.updating {
            return;
        }
        self.entries.drain(..self.current);
        self.entries.push_front(query.into());
        self.entries.truncate(MAX_HISTORY_SIZE);
        self.current = 0;
    }

    /// Steps to the next older query; `""` once past the oldest.
    pub fn previous(&mut self) -> &str {
        if self.current + 1 >= self.entries.len() {
            return "";
        }
        self.current += 1;
        &self.entries[self.current]
    }

    /// Steps to the next newer query, staying on the newest.
    pub fn next(&mut self) -> &str {
        if self.current > 0 {
            self.current -= 1;
        }
        self.entries.get(self.current).map_or("", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation() {
        let mut history = QueryHistory::new();
        history.add("a = '1'");
        history.add("a = '2'");
        history.add("a = '3'");

        assert_eq!(history.previous(), "a = '2'");
        assert_eq!(history.previous(), "a = '1'");
        assert_eq!(history.previous(), "");
        assert_eq!(history.next(), "a = '2'");
        assert_eq!(history.next(), "a = '3'");
        assert_eq!(history.next(), "a = '3'");
    }

    #[test]
    fn test_add_after_going_back_drops_newer() {
        let mut history = QueryHistory::new();
        history.add("one");
        history.add("two");
        history.add("three");
        history.previous();
        history.add("four");

        assert_eq!(history.len(), 3);
        assert_eq!(history.next(), "four");
        assert_eq!(history.previous(), "two");
        assert_eq!(history.previous(), "one");
    }

    #[test]
    fn test_updating_ignores_add() {
        let mut history = QueryHistory::new();
        history.set_updating(true);
        history.add("ignored");
        assert!(history.is_empty());
        history.set_updating(false);
        history.add("kept");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_capacity() {
        let mut history = QueryHistory::new();
        for i in 0..MAX_HISTORY_SIZE + 5 {
            history.add(i.to_string());
        }
        assert_eq!(history.len(), MAX_HISTORY_SIZE);
        assert_eq!(history.next(), (MAX_HISTORY_SIZE + 4).to_string());
    }

    #[test]
    fn test_empty_history() {
        let mut history = QueryHistory::new();
        assert_eq!(history.previous(), "");
        assert_eq!(history.next(), "");
    }
}
