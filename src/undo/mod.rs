use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of undo steps kept
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Snapshot-based undo/redo history
///
/// Every edit stores the whole previous state. Chord states are a handful of
/// bytes, so there is no command log to replay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History<T> {
    /// Older states, oldest first
    past: VecDeque<T>,
    present: T,
    /// Undone states, most recently undone last
    future: Vec<T>,
    /// Maximum number of states kept in `past`
    max_history: usize,
}

impl<T: Clone + PartialEq> History<T> {
    pub fn new(initial: T) -> Self {
        Self::with_max_history(initial, DEFAULT_MAX_HISTORY)
    }

    pub fn with_max_history(initial: T, max_history: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: Vec::new(),
            max_history,
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    /// Record a new state
    ///
    /// A state equal to the present is ignored. Otherwise the present moves
    /// to the past, redo history is dropped, and the oldest state goes once
    /// the limit is reached. Returns whether anything was recorded.
    pub fn set(&mut self, state: T) -> bool {
        if state == self.present {
            return false;
        }

        let previous = std::mem::replace(&mut self.present, state);
        self.past.push_back(previous);
        while self.past.len() > self.max_history {
            self.past.pop_front();
        }
        self.future.clear();
        true
    }

    /// Step back one state; returns false if there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.past.pop_back() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.present, previous);
                self.future.push(current);
                true
            }
            None => false,
        }
    }

    /// Step forward one state; returns false if there is nothing to redo
    pub fn redo(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.present, next);
                self.past.push_back(current);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Replace the present and forget all history
    pub fn reset(&mut self, state: T) {
        self.past.clear();
        self.future.clear();
        self.present = state;
    }

    /// Get the number of available undo steps
    pub fn undo_count(&self) -> usize {
        self.past.len()
    }

    /// Get the number of available redo steps
    pub fn redo_count(&self) -> usize {
        self.future.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_basic() {
        let mut history = History::new(0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());

        assert!(history.set(1));
        assert!(history.set(2));
        assert_eq!(*history.present(), 2);

        assert!(history.undo());
        assert_eq!(*history.present(), 1);
        assert!(history.can_redo());

        assert!(history.redo());
        assert_eq!(*history.present(), 2);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_equal_state_is_ignored() {
        let mut history = History::new("a".to_string());
        assert!(!history.set("a".to_string()));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_set_clears_redo() {
        let mut history = History::new(0);
        history.set(1);
        history.set(2);
        history.undo();
        history.set(5);

        assert!(!history.can_redo());
        assert!(history.undo());
        assert_eq!(*history.present(), 1);
    }

    #[test]
    fn test_undo_redo_on_empty() {
        let mut history = History::new(7);
        assert!(!history.undo());
        assert!(!history.redo());
        assert_eq!(*history.present(), 7);
    }

    #[test]
    fn test_max_size_enforcement() {
        let mut history = History::with_max_history(0, 3);
        for i in 1..=5 {
            history.set(i);
        }
        assert_eq!(history.undo_count(), 3);

        while history.undo() {}
        // 0 and 1 fell off the front
        assert_eq!(*history.present(), 2);
        assert_eq!(history.redo_count(), 3);
    }

    #[test]
    fn test_default_limit() {
        let mut history = History::new(0);
        for i in 1..=60 {
            history.set(i);
        }
        assert_eq!(history.undo_count(), DEFAULT_MAX_HISTORY);
    }

    #[test]
    fn test_reset() {
        let mut history = History::new(0);
        history.set(1);
        history.set(2);
        history.undo();
        history.reset(9);

        assert_eq!(*history.present(), 9);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
