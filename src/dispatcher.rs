//! Message dispatcher: the single entry point driven by the chat-platform
//! event source. Composes noise filter, scope check, classifier, and the
//! translation flows; every per-message failure is logged and swallowed
//! here so the event source never sees an error.

use async_trait::async_trait;
use tracing::{error, info};

use crate::classifier;
use crate::clients::page_client::PageClient;
use crate::clients::translate_client::Translator;
use crate::core::config::ScopeConfig;
use crate::core::models::ChatMessage;
use crate::errors::DispatchError;
use crate::filters;
use crate::summary;
use crate::translate::formatted;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-message reply handle supplied by the chat-platform collaborator.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_reply(&self, text: &str) -> Result<(), String>;
}

pub struct Dispatcher<T: Translator> {
    scope: ScopeConfig,
    translator: T,
    pages: PageClient,
}

impl<T: Translator> Dispatcher<T> {
    pub fn new(scope: ScopeConfig, translator: T) -> Self {
        Self {
            scope,
            translator,
            pages: PageClient::new(),
        }
    }

    /// Run one message through the pipeline. `Ok(None)` means the message
    /// was filtered out; `Ok(Some(_))` carries the formatted reply text.
    pub async fn dispatch(&self, msg: &ChatMessage) -> Result<Option<String>, DispatchError> {
        if filters::should_skip(msg) {
            info!("Skipping message: bot author, attachment-only, or code block");
            return Ok(None);
        }

        if !self.scope.allows(&msg.channel_id) {
            info!("Skipping message: channel {} out of scope", msg.channel_id);
            return Ok(None);
        }

        if let Some(url) = filters::bare_url(&msg.text) {
            info!("Summarizing linked page: {}", url);
            let metadata = self.pages.fetch_metadata(url).await?;
            let card = summary::build_summary_card(&self.translator, &metadata).await?;
            return Ok(Some(card));
        }

        if !classifier::is_japanese_dominant(&msg.text) {
            info!("Skipping message: not Japanese-dominant");
            return Ok(None);
        }

        let translated = formatted::translate_formatted(&self.translator, &msg.text).await?;
        info!("Translation complete for channel {}", msg.channel_id);
        Ok(Some(format!("**英訳 (Auto v{VERSION}):**\n{translated}")))
    }

    /// Entry point for the event source: dispatch, then send the reply if
    /// there is one. Failures are logged and the message dropped; this never
    /// returns an error and never panics the event loop.
    pub async fn process(&self, msg: &ChatMessage, sink: &dyn ReplySink) {
        match self.dispatch(msg).await {
            Ok(Some(reply)) => {
                if let Err(e) = sink.send_reply(&reply).await {
                    error!("Failed to send reply: {}", e);
                }
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to process message: {}", e);
            }
        }
    }
}
