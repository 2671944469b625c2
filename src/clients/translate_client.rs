//! Translation provider client.
//!
//! Stateless adapter around the Google Cloud Translation v2 REST endpoint.
//! No retries and no caller-side timeout; retry policy belongs to the
//! dispatcher and the structured translator's fallback.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::errors::ProviderError;

const TRANSLATE_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

/// Seam between the pipeline and the external translation service. The
/// structured translator, summary builder, and dispatcher only see this
/// trait, so tests can swap in a canned implementation.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` verbatim from `source` to `target` language code.
    async fn translate(&self, text: &str, source: &str, target: &str)
    -> Result<String, ProviderError>;

    async fn translate_to_english(&self, text: &str) -> Result<String, ProviderError> {
        self.translate(text, "ja", "en").await
    }
}

pub struct GoogleTranslator {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl GoogleTranslator {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, TRANSLATE_ENDPOINT.to_string())
    }

    /// Point the client at a different endpoint (used by tests).
    #[must_use]
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            endpoint,
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "q": text,
                "source": source,
                "target": target,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        body.get("data")
            .and_then(|d| d.get("translations"))
            .and_then(|t| t.as_array())
            .and_then(|t| t.first())
            .and_then(|t| t.get("translatedText"))
            .and_then(|t| t.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                ProviderError::MalformedResponse("no translatedText in response".to_string())
            })
    }
}
