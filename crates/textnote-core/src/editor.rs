//! One open document: search session plus undo history

use crate::highlight::{HighlightSnapshot, StyledSpan};
use crate::history::UndoHistory;
use crate::session::{EditorEvent, SearchSession, SearchState};
use crate::settings::EngineConfig;

/// Editor state the host keeps per open document.
///
/// Every text change that actually alters the document is recorded in
/// the undo history before the session recomputes highlights.
#[derive(Debug, Clone)]
pub struct TextEditor {
    session: SearchSession,
    history: UndoHistory,
}

impl TextEditor {
    pub fn new(config: EngineConfig, text: impl Into<String>) -> Self {
        Self {
            history: UndoHistory::new(config.undo_limit),
            session: SearchSession::new(config, text),
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn state(&self) -> SearchState {
        self.session.state()
    }

    pub fn text(&self) -> &str {
        self.session.text()
    }

    pub fn snapshot(&self) -> &HighlightSnapshot {
        self.session.snapshot()
    }

    pub fn styled_spans(&self) -> Vec<StyledSpan> {
        self.session.styled_spans()
    }

    /// Apply a host event, recording document edits for undo.
    pub fn handle_event(&mut self, event: EditorEvent) -> &HighlightSnapshot {
        if let EditorEvent::TextChanged { text } = &event {
            if text != self.session.text() {
                self.history.record(self.session.text());
            }
        }
        self.session.apply(event)
    }

    /// Restore the text before the last edit.
    ///
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&HighlightSnapshot> {
        let previous = self.history.undo(self.session.text())?;
        Some(self.session.apply(EditorEvent::TextChanged { text: previous }))
    }

    /// Re-apply the last undone edit.
    pub fn redo(&mut self) -> Option<&HighlightSnapshot> {
        let next = self.history.redo(self.session.text())?;
        Some(self.session.apply(EditorEvent::TextChanged { text: next }))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new(EngineConfig::default(), String::new())
    }
}
