//! Highlight spans and the coordinate spaces they are reported in
//!
//! Matching always runs over UTF-8 byte offsets of a `&str`. The host
//! renders with `NSRange`, which counts UTF-16 code units, so spans are
//! mapped into the configured [`CoordinateSpace`] before they leave the
//! engine. Every span of one result uses the same space.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// What produced a highlight span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    /// An occurrence of the search query
    SearchMatch,
    /// An auto-detected URL
    Url,
}

/// Unit in which span offsets are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSpace {
    /// UTF-16 code units (`NSString` / `NSRange` indexing)
    #[default]
    Utf16,
    /// Unicode scalar values
    CodePoints,
    /// UTF-8 bytes (Rust `str` indexing)
    Utf8Bytes,
}

impl CoordinateSpace {
    /// Stable name used in persisted settings.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateSpace::Utf16 => "utf16",
            CoordinateSpace::CodePoints => "code_points",
            CoordinateSpace::Utf8Bytes => "utf8_bytes",
        }
    }

    /// Parse a persisted name back into a coordinate space.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "utf16" => Some(CoordinateSpace::Utf16),
            "code_points" => Some(CoordinateSpace::CodePoints),
            "utf8_bytes" => Some(CoordinateSpace::Utf8Bytes),
            _ => None,
        }
    }

    fn width(&self, c: char) -> usize {
        match self {
            CoordinateSpace::Utf16 => c.len_utf16(),
            CoordinateSpace::CodePoints => 1,
            CoordinateSpace::Utf8Bytes => c.len_utf8(),
        }
    }
}

/// A half-open `[start, end)` highlight range tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct MatchSpan {
    pub start: u32,
    pub end: u32,
    pub kind: SpanKind,
}

impl MatchSpan {
    pub fn new(start: u32, end: u32, kind: SpanKind) -> Self {
        Self { start, end, kind }
    }

    /// Length of the span in its coordinate space.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether two spans share at least one position.
    pub fn overlaps(&self, other: &MatchSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// Converts ascending UTF-8 byte offsets of one text into another
/// coordinate space in a single forward pass.
///
/// Offsets must lie on `char` boundaries. Asking for an offset smaller
/// than the previous one restarts the walk from the beginning.
pub(crate) struct OffsetMapper<'a> {
    text: &'a str,
    space: CoordinateSpace,
    byte: usize,
    unit: usize,
}

impl<'a> OffsetMapper<'a> {
    pub(crate) fn new(text: &'a str, space: CoordinateSpace) -> Self {
        Self {
            text,
            space,
            byte: 0,
            unit: 0,
        }
    }

    pub(crate) fn map(&mut self, byte_offset: usize) -> usize {
        if self.space == CoordinateSpace::Utf8Bytes {
            return byte_offset;
        }
        if byte_offset < self.byte {
            self.byte = 0;
            self.unit = 0;
        }
        let target = byte_offset.min(self.text.len());
        for c in self.text[self.byte..target].chars() {
            self.unit += self.space.width(c);
        }
        self.byte = target;
        self.unit
    }

    /// Map a byte range into a span of the given kind.
    pub(crate) fn span(&mut self, range: Range<usize>, kind: SpanKind) -> MatchSpan {
        let start = self.map(range.start);
        let end = self.map(range.end);
        MatchSpan::new(to_u32(start), to_u32(end), kind)
    }
}

// Offsets past u32::MAX only occur in documents far beyond what the host
// can display; clamp instead of wrapping.
fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
