//! Search session: the idle/searching state machine behind the editor
//!
//! The host forwards every edit of the document and of the search box as
//! an [`EditorEvent`]; the session recomputes only what that event can
//! have changed and hands back the updated [`HighlightSnapshot`].
//!
//! | event          | idle                        | searching                          |
//! |----------------|-----------------------------|------------------------------------|
//! | `TextChanged`  | words + URLs                | words + URLs + matches             |
//! | `QueryChanged` | query stored only           | matches                            |
//! | `BeginSearch`  | -> searching, matches       | no-op                              |
//! | `CancelSearch` | no-op                       | -> idle, query and matches cleared |

use serde::{Deserialize, Serialize};

use crate::highlight::{HighlightSnapshot, SearchHighlightEngine, StyledSpan};
use crate::occurrences::SearchQuery;
use crate::settings::EngineConfig;

/// Whether the search bar is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum SearchState {
    #[default]
    Idle,
    Searching,
}

/// An edit notification from the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum EditorEvent {
    /// The document text changed; carries the full new text
    TextChanged { text: String },
    /// The search box changed; carries the raw query
    QueryChanged { query: String },
    /// The search bar was opened
    BeginSearch,
    /// The search bar was dismissed
    CancelSearch,
}

/// Current document, query and highlight state of one editor.
#[derive(Debug, Clone)]
pub struct SearchSession {
    engine: SearchHighlightEngine,
    state: SearchState,
    text: String,
    raw_query: String,
    query: SearchQuery,
    snapshot: HighlightSnapshot,
}

impl SearchSession {
    /// Start an idle session over an existing document.
    pub fn new(config: EngineConfig, text: impl Into<String>) -> Self {
        let engine = SearchHighlightEngine::new(config);
        let text = text.into();
        let snapshot = engine.analyze(&text, None);
        Self {
            engine,
            state: SearchState::Idle,
            text,
            raw_query: String::new(),
            query: SearchQuery::default(),
            snapshot,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn is_searching(&self) -> bool {
        self.state == SearchState::Searching
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The query exactly as typed.
    pub fn query(&self) -> &str {
        &self.raw_query
    }

    pub fn snapshot(&self) -> &HighlightSnapshot {
        &self.snapshot
    }

    pub fn engine(&self) -> &SearchHighlightEngine {
        &self.engine
    }

    /// Styled spans for the current snapshot.
    pub fn styled_spans(&self) -> Vec<StyledSpan> {
        self.engine.styled_spans(&self.snapshot)
    }

    /// Apply one event and return the refreshed snapshot.
    pub fn apply(&mut self, event: EditorEvent) -> &HighlightSnapshot {
        match event {
            EditorEvent::TextChanged { text } => self.on_text_changed(text),
            EditorEvent::QueryChanged { query } => self.on_query_changed(query),
            EditorEvent::BeginSearch => self.begin_search(),
            EditorEvent::CancelSearch => self.cancel_search(),
        }
        self.snapshot.is_searching = self.is_searching();
        self.snapshot.refresh_status();
        &self.snapshot
    }

    fn on_text_changed(&mut self, text: String) {
        self.text = text;
        self.snapshot.word_count = self.engine.word_count(&self.text);
        self.snapshot.url_spans = self.engine.urls(&self.text);
        if self.is_searching() {
            self.search();
        }
        tracing::debug!(
            words = self.snapshot.word_count,
            urls = self.snapshot.url_spans.len(),
            "document text changed"
        );
    }

    fn on_query_changed(&mut self, query: String) {
        self.query = SearchQuery::new(&query);
        self.raw_query = query;
        if self.is_searching() {
            self.search();
        }
    }

    fn begin_search(&mut self) {
        if self.is_searching() {
            return;
        }
        tracing::debug!("search started");
        self.state = SearchState::Searching;
        self.search();
    }

    fn cancel_search(&mut self) {
        if !self.is_searching() {
            return;
        }
        tracing::debug!("search cancelled");
        self.state = SearchState::Idle;
        self.raw_query.clear();
        self.query = SearchQuery::default();
        self.snapshot.clear_occurrences();
    }

    fn search(&mut self) {
        let occurrences = self.engine.occurrences(&self.text, &self.query);
        tracing::debug!(matches = occurrences.count, "search recomputed");
        self.snapshot.set_occurrences(occurrences);
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(EngineConfig::default(), String::new())
    }
}
