//! URL detection for underline highlighting

use lazy_static::lazy_static;
use regex::Regex;

use crate::span::{CoordinateSpace, MatchSpan, OffsetMapper, SpanKind};

lazy_static! {
    // [(http|https)://][www.]host.tld[.tld2][/path[?query][#fragment]]
    // Host labels are word characters, '-' and '_'. The TLD is 2-3 letters
    // with an optional 2-letter second level, and must end on a word
    // boundary so "hello.world" is not cut to "hello.wor". The path never
    // ends on '.' or '?' so sentence punctuation stays outside the link.
    static ref URL_REGEX: Regex = Regex::new(
        r"(?i)\b(?:https?://)?(?:www\.)?[\w\-]+(?:\.[\w\-]+)*?\.[a-z]{2,3}(?:\.[a-z]{2})?\b(?:/(?:[\w\-./?=&#%~+]*[\w\-/=&#%~+])?)?"
    )
    .expect("URL pattern is valid");
}

/// Find the URLs in `text`, in UTF-16 code units.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn find_urls(text: &str) -> Vec<MatchSpan> {
    find_urls_in(text, CoordinateSpace::Utf16)
}

/// Find the URLs in `text`, reporting spans in `space`.
pub fn find_urls_in(text: &str, space: CoordinateSpace) -> Vec<MatchSpan> {
    let mut mapper = OffsetMapper::new(text, space);
    URL_REGEX
        .find_iter(text)
        .map(|m| mapper.span(m.range(), SpanKind::Url))
        .collect()
}

/// Extract the URL strings themselves (for "open link" actions).
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn extract_urls(text: &str) -> Vec<String> {
    URL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
