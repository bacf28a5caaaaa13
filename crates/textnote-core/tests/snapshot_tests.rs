//! Snapshot tests for highlight output
//!
//! Uses insta to detect unexpected changes in what the host is told to draw

use insta::assert_snapshot;
use textnote_core::{
    EngineConfig, HighlightColor, HighlightStyle, SearchHighlightEngine, SearchQuery, StyledSpan,
};

fn render(text: &str, styled: &[StyledSpan]) -> String {
    styled
        .iter()
        .map(|s| {
            let style = match s.style {
                HighlightStyle::Foreground { color } => format!("foreground {}", color),
                HighlightStyle::Underline => "underline".to_string(),
            };
            let range = format!("{}..{}", s.span.start, s.span.end);
            format!("{:<8} {:<20} {:?}", range, style, &text[s.span.range()])
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_note_with_links_and_matches() {
    let engine = SearchHighlightEngine::new(EngineConfig {
        highlight_color: HighlightColor::rgb(0xFF, 0x3B, 0x30),
        ..EngineConfig::default()
    });
    let text = "Read www.rust-lang.org then RUST docs at https://docs.rs/regex";
    let query = SearchQuery::new("rust");
    let snapshot = engine.analyze(text, Some(&query));

    assert_eq!(snapshot.status, "Found 2 repeats");
    assert_snapshot!(render(text, &engine.styled_spans(&snapshot)), @r#"
    5..22    underline            "www.rust-lang.org"
    9..13    foreground #FF3B30   "rust"
    28..32   foreground #FF3B30   "RUST"
    41..62   underline            "https://docs.rs/regex"
    "#);
}

#[test]
fn test_status_lines() {
    let engine = SearchHighlightEngine::default();
    let text = "one two three two one";
    let lines = [None, Some(""), Some("two"), Some("three"), Some("four")]
        .into_iter()
        .map(|q| {
            let query = q.map(SearchQuery::new);
            let label = match q {
                Some(q) => format!("{:?}", q),
                None => "<idle>".to_string(),
            };
            format!("{:<8} {}", label, engine.analyze(text, query.as_ref()).status)
        })
        .collect::<Vec<_>>()
        .join("\n");

    assert_snapshot!(lines, @r#"
    <idle>   Words count: 5
    ""       Words count: 5
    "two"    Found 2 repeats
    "three"  Found 1 repeat
    "four"   Words count: 5
    "#);
}
