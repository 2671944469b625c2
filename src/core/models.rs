use serde::{Deserialize, Serialize};

/// One inbound chat message, as handed over by the chat-platform
/// collaborator. Immutable for the duration of a dispatch cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub author_is_bot: bool,
    pub channel_id: String,
    pub attachment_count: usize,
}

/// Markdown emphasis classes recognized by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    PlainText,
    Bold,
    Italic,
    Code,
    Strikethrough,
    Underline,
}

impl SpanKind {
    /// Marker pair used when re-rendering a span of this kind. Wrappers come
    /// from this fixed table, never from the input text, so asymmetric or
    /// malformed input markers get normalized on the way out.
    #[must_use]
    pub fn wrapper(self) -> &'static str {
        match self {
            SpanKind::PlainText => "",
            SpanKind::Bold => "**",
            SpanKind::Italic => "*",
            SpanKind::Code => "`",
            SpanKind::Strikethrough => "~~",
            SpanKind::Underline => "__",
        }
    }
}

/// A typed slice of one message line: either plain text or the inner content
/// of an emphasis marker pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub content: String,
}

impl Span {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::PlainText,
            content: content.into(),
        }
    }

    /// Render the span back to markdown with its normalized wrapper.
    #[must_use]
    pub fn render(&self) -> String {
        let wrapper = self.kind.wrapper();
        format!("{wrapper}{content}{wrapper}", content = self.content)
    }
}

/// Head metadata scraped from a linked page. Fields missing from the
/// document stay `None` and are omitted from the summary card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub keywords: Option<String>,
    pub site_name: Option<String>,
}
