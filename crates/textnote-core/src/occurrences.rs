//! Case-insensitive occurrence search
//!
//! The query is always matched literally: it is escaped before being
//! compiled, so `a.b` only matches the three characters `a`, `.`, `b`.
//! Matches are found leftmost-first and never overlap; after a match the
//! scan resumes at its end, so `"AA"` occurs twice in `"AAAA"`.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::span::{CoordinateSpace, MatchSpan, OffsetMapper, SpanKind};

/// Compiled-size ceiling for a search pattern (the regex crate default).
pub const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A user-typed search string, trimmed and ready to match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Build a query from raw search-box input.
    ///
    /// Leading and trailing whitespace is dropped, so a query of only
    /// spaces behaves like no query at all.
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.trim().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when there is nothing to search for.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Compile the literal, case-insensitive matcher for this query.
    ///
    /// Returns `None` for an empty query or when the pattern cannot be
    /// built; both mean "no matches" to callers.
    pub fn matcher(&self) -> Option<Regex> {
        self.matcher_with_limit(PATTERN_SIZE_LIMIT)
    }

    /// Like [`SearchQuery::matcher`] with an explicit compiled-size ceiling.
    pub fn matcher_with_limit(&self, size_limit: usize) -> Option<Regex> {
        compile_literal(&self.text, size_limit)
    }
}

fn compile_literal(query: &str, size_limit: usize) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .size_limit(size_limit)
        .build()
    {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::warn!(
                "Search pattern of {} chars could not be built, showing no matches: {}",
                query.chars().count(),
                e
            );
            None
        }
    }
}

/// Occurrences of a query: the count and the span of each match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Occurrences {
    pub count: u32,
    pub spans: Vec<MatchSpan>,
}

impl Occurrences {
    pub fn none() -> Self {
        Self::default()
    }

    fn from_spans(spans: Vec<MatchSpan>) -> Self {
        Self {
            count: u32::try_from(spans.len()).unwrap_or(u32::MAX),
            spans,
        }
    }
}

/// Find every non-overlapping, case-insensitive occurrence of `query`.
///
/// Spans are reported in UTF-16 code units. An empty (or whitespace-only)
/// query matches nothing.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn find_occurrences(text: &str, query: &str) -> Occurrences {
    find_occurrences_in(text, &SearchQuery::new(query), CoordinateSpace::Utf16)
}

/// Find occurrences of an already-built query, reporting spans in `space`.
pub fn find_occurrences_in(text: &str, query: &SearchQuery, space: CoordinateSpace) -> Occurrences {
    find_occurrences_limited(text, query, space, PATTERN_SIZE_LIMIT)
}

pub(crate) fn find_occurrences_limited(
    text: &str,
    query: &SearchQuery,
    space: CoordinateSpace,
    size_limit: usize,
) -> Occurrences {
    match query.matcher_with_limit(size_limit) {
        Some(regex) => collect_spans(text, &regex, space),
        None => Occurrences::none(),
    }
}

fn collect_spans(text: &str, regex: &Regex, space: CoordinateSpace) -> Occurrences {
    let mut mapper = OffsetMapper::new(text, space);
    let spans = regex
        .find_iter(text)
        .map(|m| mapper.span(m.range(), SpanKind::SearchMatch))
        .collect();
    Occurrences::from_spans(spans)
}

/// Count occurrences without keeping their spans.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn count_occurrences(text: &str, query: &str) -> u32 {
    match SearchQuery::new(query).matcher() {
        Some(regex) => u32::try_from(regex.find_iter(text).count()).unwrap_or(u32::MAX),
        None => 0,
    }
}
