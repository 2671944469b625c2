//! Japanese-dominant text classifier.
//!
//! A ratio heuristic with an English-sentence-shape exclusion list, not a
//! linguistic parser. Mixed-script text that reads like English syntax is
//! deliberately left untranslated.

use regex::Regex;
use std::sync::LazyLock;

/// Messages matching any of these subject-verb openers are treated as
/// English sentences regardless of their character ratio. The list is
/// intentionally conservative and pattern-based.
static ENGLISH_SENTENCE_SHAPES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^[A-Z][a-z]+ (is|are|was|were|has|have|will|can|could|should|would)",
        r"^(I|You|He|She|It|We|They) [a-z]",
        r"^(This|That|These|Those) (is|are)",
        r"^(What|How|When|Where|Why|Who) [a-z]",
        r"^[A-Z][a-z]+ [a-z]+ [a-z]+ [a-z]+.*[.!?]$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("english shape pattern compiles"))
    .collect()
});

/// Hiragana, Katakana, CJK Unified Ideographs (plus extension A), Katakana
/// phonetic extensions, and half-width Katakana.
static JAPANESE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\u{3040}-\u{30FF}\u{3400}-\u{4DBF}\u{4E00}-\u{9FAF}\u{31F0}-\u{31FF}\u{FF66}-\u{FF9F}]")
        .expect("japanese character class compiles")
});

const JAPANESE_RATIO_THRESHOLD: f64 = 0.4;

/// Decide whether `text` should be translated to English.
///
/// English word mixing is fine; at least 40% of the non-whitespace
/// characters must be Japanese script and the sentence must not open with a
/// known English subject-verb shape.
#[must_use]
pub fn is_japanese_dominant(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let trimmed = text.trim();
    if ENGLISH_SENTENCE_SHAPES.iter().any(|re| re.is_match(trimmed)) {
        return false;
    }

    let japanese = JAPANESE_CHARS.find_iter(text).count();
    let total = text.chars().filter(|c| !c.is_whitespace()).count().max(1);

    (japanese as f64) / (total as f64) >= JAPANESE_RATIO_THRESHOLD
}
