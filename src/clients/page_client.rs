//! Linked-page fetcher and head-metadata extractor.

use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;

use crate::core::models::PageMetadata;
use crate::errors::FetchError;

const PAGE_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; JAEN-Bot/",
    env!("CARGO_PKG_VERSION"),
    ")"
);
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Stateless page fetcher, reentrant across concurrent dispatches.
pub struct PageClient {
    http: Client,
}

impl Default for PageClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PageClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    /// Build a client with a different request timeout (used by tests).
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(PAGE_USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { http }
    }

    /// GET the page and extract head metadata. Non-2xx responses and the
    /// 10 second timeout both surface as [`FetchError`].
    pub async fn fetch_metadata(&self, url: &str) -> Result<PageMetadata, FetchError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let html = response.text().await?;
        Ok(extract_metadata(&html))
    }
}

/// Pull the summary fields out of a parsed document. Each field has a
/// primary selector and at most one fallback; empty values collapse to
/// `None`.
#[must_use]
pub fn extract_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    PageMetadata {
        title: select_text(&document, "title")
            .or_else(|| select_meta(&document, r#"meta[property="og:title"]"#)),
        description: select_meta(&document, r#"meta[name="description"]"#)
            .or_else(|| select_meta(&document, r#"meta[property="og:description"]"#)),
        author: select_meta(&document, r#"meta[name="author"]"#)
            .or_else(|| select_meta(&document, r#"meta[property="article:author"]"#)),
        keywords: select_meta(&document, r#"meta[name="keywords"]"#),
        site_name: select_meta(&document, r#"meta[property="og:site_name"]"#),
    }
}

fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let text = document
        .select(&selector)
        .next()?
        .text()
        .collect::<Vec<_>>()
        .join(" ");
    non_empty(text.trim())
}

fn select_meta(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let content = document.select(&selector).next()?.value().attr("content")?;
    non_empty(content.trim())
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
