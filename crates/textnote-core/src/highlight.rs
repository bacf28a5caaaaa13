//! Search/highlight engine
//!
//! Combines the word counter, the occurrence finder and the URL detector
//! into one [`HighlightSnapshot`] per document state. Search matches and
//! URLs are kept in separate lists and styled differently (foreground
//! color vs. underline), so a URL that also contains the query gets both
//! treatments instead of one swallowing the other.

use serde::{Deserialize, Serialize};

use crate::describe::describe_results;
use crate::occurrences::{find_occurrences_limited, Occurrences, SearchQuery};
use crate::settings::{EngineConfig, HighlightColor};
use crate::span::{MatchSpan, SpanKind};
use crate::urls::find_urls_in;
use crate::words::count_words;

/// Everything the host needs to redraw after one recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct HighlightSnapshot {
    pub is_searching: bool,
    pub word_count: u32,
    pub occurrence_count: u32,
    pub search_spans: Vec<MatchSpan>,
    pub url_spans: Vec<MatchSpan>,
    /// Status line text, see [`describe_results`]
    pub status: String,
}

impl HighlightSnapshot {
    /// Recompute the status line from the current counts.
    pub fn refresh_status(&mut self) {
        self.status = describe_results(self.is_searching, self.occurrence_count, self.word_count);
    }

    /// Replace the search result.
    pub fn set_occurrences(&mut self, occurrences: Occurrences) {
        self.occurrence_count = occurrences.count;
        self.search_spans = occurrences.spans;
    }

    /// Drop the search result, keeping word count and URLs.
    pub fn clear_occurrences(&mut self) {
        self.set_occurrences(Occurrences::none());
    }

    /// All spans of both kinds, ordered by start position.
    pub fn all_spans(&self) -> Vec<MatchSpan> {
        let mut spans: Vec<MatchSpan> = self
            .search_spans
            .iter()
            .chain(self.url_spans.iter())
            .copied()
            .collect();
        spans.sort_by_key(|s| (s.start, s.end));
        spans
    }
}

/// Visual treatment for a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "style")]
pub enum HighlightStyle {
    /// Recolor the text (search matches)
    Foreground { color: HighlightColor },
    /// Underline the text (URLs)
    Underline,
}

/// A span paired with the style the rendering surface should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSpan {
    pub span: MatchSpan,
    pub style: HighlightStyle,
}

/// Stateless engine computing counts and highlight spans for a text.
///
/// Holds only its configuration; every method is a pure function of its
/// arguments, so one engine can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct SearchHighlightEngine {
    config: EngineConfig,
}

impl SearchHighlightEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn word_count(&self, text: &str) -> u32 {
        count_words(text)
    }

    pub fn occurrences(&self, text: &str, query: &SearchQuery) -> Occurrences {
        find_occurrences_limited(
            text,
            query,
            self.config.coordinate_space,
            self.config.pattern_size_limit,
        )
    }

    pub fn urls(&self, text: &str) -> Vec<MatchSpan> {
        find_urls_in(text, self.config.coordinate_space)
    }

    /// Full recomputation for a document.
    ///
    /// `query` is `Some` while the search bar is open; an open search bar
    /// with an empty query yields no matches.
    pub fn analyze(&self, text: &str, query: Option<&SearchQuery>) -> HighlightSnapshot {
        let mut snapshot = HighlightSnapshot {
            is_searching: query.is_some(),
            word_count: self.word_count(text),
            url_spans: self.urls(text),
            ..HighlightSnapshot::default()
        };
        if let Some(query) = query {
            snapshot.set_occurrences(self.occurrences(text, query));
        }
        snapshot.refresh_status();
        tracing::trace!(
            words = snapshot.word_count,
            matches = snapshot.occurrence_count,
            urls = snapshot.url_spans.len(),
            "analyzed document"
        );
        snapshot
    }

    /// Spans paired with their styles, ordered by start position.
    pub fn styled_spans(&self, snapshot: &HighlightSnapshot) -> Vec<StyledSpan> {
        snapshot
            .all_spans()
            .into_iter()
            .map(|span| StyledSpan {
                span,
                style: self.style_for(span.kind),
            })
            .collect()
    }

    pub fn style_for(&self, kind: SpanKind) -> HighlightStyle {
        match kind {
            SpanKind::SearchMatch => HighlightStyle::Foreground {
                color: self.config.highlight_color,
            },
            SpanKind::Url => HighlightStyle::Underline,
        }
    }
}

/// One-shot analysis with the default configuration.
///
/// An empty query is treated as "not searching".
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn highlight(text: &str, query: &str) -> HighlightSnapshot {
    let query = SearchQuery::new(query);
    let active = (!query.is_empty()).then_some(&query);
    SearchHighlightEngine::default().analyze(text, active)
}
