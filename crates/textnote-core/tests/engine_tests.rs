//! Search/highlight engine integration tests

use rstest::rstest;
use textnote_core::{
    count_occurrences, count_words, describe_results, extract_urls, find_occurrences,
    find_occurrences_in, find_urls, find_urls_in, highlight, CoordinateSpace, EngineConfig,
    MatchSpan, SearchHighlightEngine, SearchQuery, SpanKind,
};

fn ranges(spans: &[MatchSpan]) -> Vec<(u32, u32)> {
    spans.iter().map(|s| (s.start, s.end)).collect()
}

// === Word count ===

#[rstest]
#[case("", 0)]
#[case("   \n\t ", 0)]
#[case("a b  c", 3)]
#[case(" a ", 1)]
#[case("line one\nline two\n\nline three\n", 6)]
fn test_word_count(#[case] text: &str, #[case] expected: u32) {
    assert_eq!(count_words(text), expected);
}

// === Occurrences ===

#[test]
fn test_empty_query_never_matches() {
    for text in ["", "abc", "   ", "Hello hello"] {
        let found = find_occurrences(text, "");
        assert_eq!(found.count, 0);
        assert!(found.spans.is_empty());
    }
}

#[test]
fn test_non_overlapping_left_to_right() {
    let found = find_occurrences("AAAA", "AA");
    assert_eq!(found.count, 2);
    assert_eq!(ranges(&found.spans), vec![(0, 2), (2, 4)]);
}

#[test]
fn test_case_insensitive() {
    let found = find_occurrences("Hello hello HELLO", "hello");
    assert_eq!(found.count, 3);
    assert!(found.spans.iter().all(|s| s.kind == SpanKind::SearchMatch));
}

#[test]
fn test_find_is_idempotent() {
    let text = "Some text with some repeated SOME words";
    assert_eq!(find_occurrences(text, "some"), find_occurrences(text, "some"));
}

#[rstest]
#[case("price is $5.00 or $5x00", "$5.00", 1)]
#[case("a|b a|b ab", "a|b", 2)]
#[case("^start ^start", "^start", 2)]
#[case("back\\slash", "\\", 1)]
fn test_query_is_literal(#[case] text: &str, #[case] query: &str, #[case] expected: u32) {
    assert_eq!(count_occurrences(text, query), expected);
}

#[test]
fn test_utf16_and_code_point_spans_differ_by_surrogates() {
    let text = "🎉🎉 party";
    let query = SearchQuery::new("party");
    let utf16 = find_occurrences_in(text, &query, CoordinateSpace::Utf16);
    let points = find_occurrences_in(text, &query, CoordinateSpace::CodePoints);
    let bytes = find_occurrences_in(text, &query, CoordinateSpace::Utf8Bytes);

    assert_eq!(ranges(&utf16.spans), vec![(5, 10)]);
    assert_eq!(ranges(&points.spans), vec![(3, 8)]);
    assert_eq!(&text[bytes.spans[0].range()], "party");
}

// === URLs ===

#[test]
fn test_single_url_span() {
    let text = "visit https://example.com/path now";
    let spans = find_urls(text);
    assert_eq!(spans.len(), 1);
    assert_eq!(ranges(&spans), vec![(6, 30)]);
}

#[rstest]
#[case("http://example.com")]
#[case("https://www.example.org/a/b_c-d.html")]
#[case("www.example.net")]
#[case("example.co.uk")]
#[case("https://example.com/search?q=rust&lang=en#results")]
#[case("example.com/~user/a+b%20c")]
fn test_url_shapes(#[case] url: &str) {
    let text = format!("before {} after", url);
    let spans = find_urls(&text);
    assert_eq!(spans.len(), 1, "expected one URL in {text:?}");
    assert_eq!(&text[spans[0].range()], url);
}

#[rstest]
#[case("Read https://example.com/docs.", "https://example.com/docs")]
#[case("Docs: www.rust-lang.org/learn.", "www.rust-lang.org/learn")]
#[case("Is it on example.org/faq?", "example.org/faq")]
#[case("Home is example.com/.", "example.com/")]
fn test_url_sentence_punctuation_is_excluded(#[case] text: &str, #[case] url: &str) {
    assert_eq!(extract_urls(text), vec![url.to_string()]);
    let spans = find_urls_in(text, CoordinateSpace::Utf8Bytes);
    assert_eq!(&text[spans[0].range()], url);
}

// === Result text ===

#[rstest]
#[case(true, 1, 5, "Found 1 repeat")]
#[case(true, 3, 5, "Found 3 repeats")]
#[case(false, 0, 5, "Words count: 5")]
#[case(true, 0, 0, "Words count: 0")]
fn test_describe_results(
    #[case] searching: bool,
    #[case] occurrences: u32,
    #[case] words: u32,
    #[case] expected: &str,
) {
    assert_eq!(describe_results(searching, occurrences, words), expected);
}

// === Union of detectors ===

#[test]
fn test_search_match_and_url_both_reported() {
    let text = "meeting notes: see https://example.com for the agenda";
    let snapshot = highlight(text, "agenda");

    assert_eq!(snapshot.occurrence_count, 1);
    assert_eq!(snapshot.search_spans.len(), 1);
    assert_eq!(snapshot.url_spans.len(), 1);
    assert!(!snapshot.search_spans[0].overlaps(&snapshot.url_spans[0]));
    assert_eq!(snapshot.all_spans().len(), 2);
}

#[test]
fn test_engine_reports_in_configured_space() {
    let engine = SearchHighlightEngine::new(EngineConfig {
        coordinate_space: CoordinateSpace::CodePoints,
        ..EngineConfig::default()
    });
    let query = SearchQuery::new("x.io");
    let snapshot = engine.analyze("ü x.io", Some(&query));
    assert_eq!(ranges(&snapshot.search_spans), vec![(2, 6)]);
    assert_eq!(ranges(&snapshot.url_spans), vec![(2, 6)]);
}
