//! Markdown span tokenizer.
//!
//! Splits one line of message text into plain-text spans and emphasis spans
//! so the translator can work on content without disturbing markers.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::models::{Span, SpanKind};

/// Ordered marker pattern table. The order matters twice: every pattern
/// scans the whole line independently, and matches that start at the same
/// offset keep table order after the stable sort in `tokenize`.
static MARKER_PATTERNS: LazyLock<Vec<(SpanKind, Regex)>> = LazyLock::new(|| {
    [
        (SpanKind::Bold, r"\*\*(.+?)\*\*"),
        (SpanKind::Italic, r"\*(.+?)\*"),
        (SpanKind::Code, r"`(.+?)`"),
        (SpanKind::Strikethrough, r"~~(.+?)~~"),
        (SpanKind::Underline, r"__(.+?)__"),
    ]
    .into_iter()
    .map(|(kind, pattern)| {
        (
            kind,
            Regex::new(pattern).expect("marker pattern compiles"),
        )
    })
    .collect()
});

/// Split a single line into an ordered span sequence.
///
/// Matching is leftmost-first and non-nested per pattern. Candidate matches
/// from all patterns are sorted by start offset (stable, so ties keep
/// pattern-table order) and any candidate overlapping an already-emitted
/// span is dropped. A `**bold**` run is also picked up by the italic
/// pattern, for example; the bold match wins and the italic candidate is
/// suppressed. The resulting spans form a non-overlapping, gap-filling
/// partition of the line: concatenating each rendered span in order
/// reproduces the line exactly.
///
/// An empty line yields an empty sequence.
#[must_use]
pub fn tokenize(line: &str) -> Vec<Span> {
    let mut matches: Vec<(usize, usize, SpanKind, String)> = Vec::new();
    for (kind, pattern) in MARKER_PATTERNS.iter() {
        for caps in pattern.captures_iter(line) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            matches.push((whole.start(), whole.end(), *kind, inner.as_str().to_string()));
        }
    }

    // Stable: ties at the same start offset keep pattern-table order.
    matches.sort_by_key(|m| m.0);

    let mut spans = Vec::new();
    let mut cursor = 0usize;
    for (start, end, kind, content) in matches {
        if start < cursor {
            // Overlaps a span already emitted by an earlier pattern.
            continue;
        }
        if start > cursor {
            spans.push(Span::plain(&line[cursor..start]));
        }
        spans.push(Span { kind, content });
        cursor = end;
    }
    if cursor < line.len() {
        spans.push(Span::plain(&line[cursor..]));
    }
    spans
}
