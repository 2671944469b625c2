//! JAEN - a chat bot pipeline that detects Japanese-dominant messages and
//! replies with an English rendition, preserving markdown emphasis and line
//! breaks.
//!
//! The chat-platform connection itself lives outside this crate: the
//! collaborator feeds [`ChatMessage`] values into [`Dispatcher::process`]
//! and supplies a [`ReplySink`] for the answer. Everything in between is
//! here:
//!
//! - noise filtering (bot authors, attachment-only posts, fenced code)
//! - channel scoping from `ALLOWED_CHANNEL_IDS`
//! - the Japanese-dominant classifier (ratio heuristic with an
//!   English-sentence-shape exclusion list)
//! - structure-preserving translation through the Google Translate API
//! - bilingual summary cards for bare-URL messages
//!
//! # Example
//!
//! ```no_run
//! use jaen::core::config::AppConfig;
//! use jaen::{Dispatcher, GoogleTranslator};
//!
//! # async fn run() -> Result<(), String> {
//! jaen::setup_logging();
//!
//! let config = AppConfig::from_env()?;
//! let translator = GoogleTranslator::new(config.translate_api_key.clone());
//! let dispatcher = Dispatcher::new(config.scope.clone(), translator);
//!
//! // The chat collaborator calls dispatcher.process(&msg, &sink) for each
//! // inbound message event.
//! # let _ = dispatcher;
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod clients;
pub mod core;
pub mod dispatcher;
pub mod errors;
pub mod filters;
pub mod markdown;
pub mod summary;
pub mod translate;

pub use crate::clients::page_client::PageClient;
pub use crate::clients::translate_client::{GoogleTranslator, Translator};
pub use crate::core::models::ChatMessage;
pub use crate::dispatcher::{Dispatcher, ReplySink};
pub use crate::errors::{DispatchError, FetchError, ProviderError};

/// Configure human-readable structured logging for the process.
///
/// Call once at startup, before subscribing to chat events.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
