//! Property-based tests for the search/highlight engine

use proptest::prelude::*;
use textnote_core::{
    count_occurrences, count_words, find_occurrences, find_occurrences_in, find_urls,
    CoordinateSpace, SearchQuery,
};

proptest! {
    #[test]
    fn word_count_matches_whitespace_split(text in "[a-z \\n\\t]{0,64}") {
        let expected = text.split(|c: char| c.is_whitespace()).filter(|s| !s.is_empty()).count();
        prop_assert_eq!(count_words(&text) as usize, expected);
    }

    #[test]
    fn spans_are_sorted_and_disjoint(text in "[aAbB ]{0,64}", query in "[ab]{1,3}") {
        let found = find_occurrences(&text, &query);
        prop_assert_eq!(found.count as usize, found.spans.len());
        for pair in found.spans.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
        for span in &found.spans {
            prop_assert_eq!(span.len() as usize, query.len());
        }
    }

    #[test]
    fn every_span_matches_query_ignoring_case(text in "[a-cA-C]{0,48}", query in "[a-c]{1,2}") {
        let found = find_occurrences_in(&text, &SearchQuery::new(&query), CoordinateSpace::Utf8Bytes);
        for span in &found.spans {
            prop_assert_eq!(text[span.range()].to_lowercase(), query.clone());
        }
    }

    #[test]
    fn search_is_idempotent(text in "\\PC{0,48}", query in "\\PC{0,4}") {
        prop_assert_eq!(find_occurrences(&text, &query), find_occurrences(&text, &query));
        prop_assert_eq!(find_urls(&text), find_urls(&text));
    }

    #[test]
    fn count_agrees_with_find(text in "\\PC{0,48}", query in "\\PC{0,4}") {
        prop_assert_eq!(count_occurrences(&text, &query), find_occurrences(&text, &query).count);
    }

    #[test]
    fn utf16_spans_stay_within_text(text in "\\PC{0,48}", query in "\\PC{1,3}") {
        let units = text.encode_utf16().count() as u32;
        for span in find_occurrences(&text, &query).spans.iter().chain(find_urls(&text).iter()) {
            prop_assert!(span.start <= span.end);
            prop_assert!(span.end <= units);
        }
    }
}
