//! Bilingual page-summary card.

use crate::clients::translate_client::Translator;
use crate::core::models::PageMetadata;
use crate::errors::ProviderError;

/// Build the two-section summary card for a fetched page: the raw metadata
/// under a Japanese heading, then each field translated independently under
/// an English heading. Fields absent from the page are omitted from both
/// sections. Metadata values are short unstructured strings, so they go
/// straight to the provider rather than through the span tokenizer.
pub async fn build_summary_card(
    translator: &dyn Translator,
    metadata: &PageMetadata,
) -> Result<String, ProviderError> {
    let mut card = String::from("📌 ページ要約\n\n🇯🇵 日本語:\n");
    if let Some(title) = &metadata.title {
        card.push_str(&format!("📄 タイトル: {title}\n"));
    }
    if let Some(description) = &metadata.description {
        card.push_str(&format!("📝 概要: {description}\n"));
    }
    if let Some(author) = &metadata.author {
        card.push_str(&format!("👤 著者: {author}\n"));
    }
    if let Some(keywords) = &metadata.keywords {
        card.push_str(&format!("🏷️ キーワード: {keywords}\n"));
    }

    card.push_str("\n🇺🇸 English:\n");
    if let Some(title) = &metadata.title {
        let translated = translator.translate_to_english(title).await?;
        card.push_str(&format!("📄 Title: {translated}\n"));
    }
    if let Some(description) = &metadata.description {
        let translated = translator.translate_to_english(description).await?;
        card.push_str(&format!("📝 Overview: {translated}\n"));
    }
    if let Some(author) = &metadata.author {
        let translated = translator.translate_to_english(author).await?;
        card.push_str(&format!("👤 Author: {translated}\n"));
    }
    if let Some(keywords) = &metadata.keywords {
        let translated = translator.translate_to_english(keywords).await?;
        card.push_str(&format!("🏷️ Keywords: {translated}\n"));
    }

    Ok(card)
}
