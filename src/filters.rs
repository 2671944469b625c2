//! Noise filter: decides which inbound messages are dropped before any
//! classification or translation work happens.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::core::models::ChatMessage;

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*```").expect("fenced block pattern compiles"));

static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://\S+$").expect("bare url pattern compiles"));

/// True when the message must be ignored outright: authored by a bot,
/// attachment-only with no text, or containing a triple-backtick fenced
/// block. Single-backtick inline code does not count as a fence.
///
/// Bare URLs are not skipped here; they are routed to the page-summary flow
/// via [`bare_url`].
#[must_use]
pub fn should_skip(msg: &ChatMessage) -> bool {
    if msg.author_is_bot {
        return true;
    }
    let trimmed = msg.text.trim();
    if trimmed.is_empty() && msg.attachment_count > 0 {
        return true;
    }
    FENCED_BLOCK.is_match(trimmed)
}

/// When the entire trimmed message is one well-formed `http(s)://` URL,
/// return it for the page-summary flow.
#[must_use]
pub fn bare_url(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if BARE_URL.is_match(trimmed) && Url::parse(trimmed).is_ok() {
        Some(trimmed)
    } else {
        None
    }
}
