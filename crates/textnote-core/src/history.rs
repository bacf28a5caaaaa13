//! Snapshot undo/redo for whole-document edits
//!
//! The host records the text as it was *before* each edit. Undo hands
//! that text back and moves the current text to the redo stack; redo is
//! the mirror image. Any new edit invalidates the redo stack.

use std::collections::VecDeque;

/// Bounded undo/redo stacks of full-text snapshots.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    undo: VecDeque<String>,
    redo: Vec<String>,
    limit: usize,
}

impl UndoHistory {
    /// Create a history keeping at most `limit` undo steps (0 = unbounded).
    pub fn new(limit: u32) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: limit as usize,
        }
    }

    /// Record the text as it was before an edit.
    ///
    /// Recording the same text as the latest snapshot is ignored, so
    /// notifications that did not change anything do not add undo steps.
    pub fn record(&mut self, previous: impl Into<String>) {
        let previous = previous.into();
        if self.undo.back() == Some(&previous) {
            return;
        }
        self.undo.push_back(previous);
        if self.limit > 0 && self.undo.len() > self.limit {
            self.undo.pop_front();
        }
        self.redo.clear();
    }

    /// Step back: returns the text to restore, given the current text.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current.to_string());
        tracing::debug!(remaining = self.undo.len(), "undo");
        Some(previous)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let next = self.redo.pop()?;
        self.undo.push_back(current.to_string());
        if self.limit > 0 && self.undo.len() > self.limit {
            self.undo.pop_front();
        }
        tracing::debug!(remaining = self.redo.len(), "redo");
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Forget every snapshot, e.g. after loading a different document.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_restores_text_before_edit() {
        let mut history = UndoHistory::new(0);
        history.record("hello");
        // the document now reads "hello world"
        assert_eq!(history.undo("hello world").as_deref(), Some("hello"));
        assert!(!history.can_undo());
    }

    #[test]
    fn redo_reapplies_undone_edit() {
        let mut history = UndoHistory::new(0);
        history.record("a");
        let restored = history.undo("ab").unwrap();
        assert_eq!(restored, "a");
        assert_eq!(history.redo(&restored).as_deref(), Some("ab"));
        assert_eq!(history.undo("ab").as_deref(), Some("a"));
    }

    #[test]
    fn new_edit_clears_redo() {
        let mut history = UndoHistory::new(0);
        history.record("a");
        history.undo("ab");
        assert!(history.can_redo());
        history.record("a");
        assert!(!history.can_redo());
    }

    #[test]
    fn duplicate_snapshots_are_ignored() {
        let mut history = UndoHistory::new(0);
        history.record("same");
        history.record("same");
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn limit_drops_oldest() {
        let mut history = UndoHistory::new(2);
        history.record("1");
        history.record("2");
        history.record("3");
        assert_eq!(history.undo_depth(), 2);
        assert_eq!(history.undo("4").as_deref(), Some("3"));
        assert_eq!(history.undo("3").as_deref(), Some("2"));
        assert_eq!(history.undo("2"), None);
    }

    #[test]
    fn empty_history() {
        let mut history = UndoHistory::default();
        assert_eq!(history.undo("x"), None);
        assert_eq!(history.redo("x"), None);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut history = UndoHistory::new(0);
        history.record("a");
        history.undo("b");
        history.record("c");
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
