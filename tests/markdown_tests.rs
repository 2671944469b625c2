use jaen::core::models::{Span, SpanKind};
use jaen::markdown::tokenize;

// Tokenizer round-trip: rendering every span with its normalized wrapper
// must reproduce the original line exactly.
#[test]
fn round_trip_reproduces_the_line() {
    let lines = [
        "plain text only",
        "こんにちは **世界** and more",
        "start `code` middle ~~gone~~ end",
        "__下線__ then tail",
        "日本語と*強調*が混ざる行",
        "**全部** *の* `種類` ~~を~~ __含む__",
    ];

    for line in lines {
        let rebuilt: String = tokenize(line).iter().map(Span::render).collect();
        assert_eq!(rebuilt, line, "round trip failed for {line:?}");
    }
}

#[test]
fn empty_line_yields_empty_sequence() {
    assert!(tokenize("").is_empty());
}

#[test]
fn gaps_become_plain_text_spans() {
    let spans = tokenize("a **b** c");
    assert_eq!(
        spans,
        vec![
            Span::plain("a "),
            Span {
                kind: SpanKind::Bold,
                content: "b".to_string(),
            },
            Span::plain(" c"),
        ]
    );
}

#[test]
fn leading_marker_has_no_empty_gap_span() {
    let spans = tokenize("**太字**のあと");
    assert_eq!(
        spans,
        vec![
            Span {
                kind: SpanKind::Bold,
                content: "太字".to_string(),
            },
            Span::plain("のあと"),
        ]
    );
}

#[test]
fn all_five_marker_kinds_are_recognized() {
    for (kind, line, inner) in [
        (SpanKind::Bold, "**x**", "x"),
        (SpanKind::Italic, "*x*", "x"),
        (SpanKind::Code, "`x`", "x"),
        (SpanKind::Strikethrough, "~~x~~", "x"),
        (SpanKind::Underline, "__x__", "x"),
    ] {
        let spans = tokenize(line);
        assert_eq!(
            spans,
            vec![Span {
                kind,
                content: inner.to_string(),
            }],
            "for line {line:?}"
        );
    }
}

// Regression test pinning the overlap tie-break: the italic pattern also
// matches inside a bold run, but bold comes first in the pattern table, so
// at the same start offset bold wins and the italic candidate is dropped.
#[test]
fn bold_wins_over_overlapping_italic_candidate() {
    let spans = tokenize("**x**");
    assert_eq!(
        spans,
        vec![Span {
            kind: SpanKind::Bold,
            content: "x".to_string(),
        }]
    );
}

#[test]
fn matching_is_leftmost_and_non_nested_per_pattern() {
    let spans = tokenize("`a` and `b`");
    assert_eq!(
        spans,
        vec![
            Span {
                kind: SpanKind::Code,
                content: "a".to_string(),
            },
            Span::plain(" and "),
            Span {
                kind: SpanKind::Code,
                content: "b".to_string(),
            },
        ]
    );
}
