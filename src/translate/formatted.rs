//! Structure-preserving translation.
//!
//! Line breaks and markdown emphasis markers survive translation: each line
//! is tokenized into spans, only span content goes to the provider, and
//! emphasis spans are re-wrapped with their normalized markers.

use tracing::warn;

use crate::clients::translate_client::Translator;
use crate::core::models::SpanKind;
use crate::errors::ProviderError;
use crate::markdown;

/// Translate a whole message while keeping its shape.
///
/// Unlike the raw [`Translator`] contract this degrades gracefully: when any
/// per-span call fails, the whole text is retried as a single translation
/// call (losing formatting but keeping the reply). Only a failure of that
/// fallback propagates.
pub async fn translate_formatted(
    translator: &dyn Translator,
    original: &str,
) -> Result<String, ProviderError> {
    match translate_spans(translator, original).await {
        Ok(out) => Ok(out),
        Err(e) => {
            warn!(
                "Structured translation failed ({}), falling back to whole-text translation",
                e
            );
            translator.translate_to_english(original).await
        }
    }
}

/// Per-span translation pass. Output line count always equals input line
/// count; blank lines pass through without an API call. Per-span calls are
/// issued sequentially.
async fn translate_spans(
    translator: &dyn Translator,
    original: &str,
) -> Result<String, ProviderError> {
    let mut lines_out: Vec<String> = Vec::new();

    for line in original.split('\n') {
        if line.trim().is_empty() {
            lines_out.push(String::new());
            continue;
        }

        let mut pieces: Vec<String> = Vec::new();
        for span in markdown::tokenize(line) {
            match span.kind {
                SpanKind::PlainText => {
                    // Whitespace-only plain spans are dropped, matching the
                    // joined-with-no-separator output contract.
                    if span.content.trim().is_empty() {
                        continue;
                    }
                    pieces.push(translator.translate_to_english(&span.content).await?);
                }
                kind => {
                    let translated = translator.translate_to_english(&span.content).await?;
                    let wrapper = kind.wrapper();
                    pieces.push(format!("{wrapper}{translated}{wrapper}"));
                }
            }
        }
        lines_out.push(pieces.join(""));
    }

    Ok(lines_out.join("\n"))
}
