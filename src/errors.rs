use thiserror::Error;

/// Failures raised by the external translation provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Translation API returned status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Malformed translation response: {0}")]
    MalformedResponse(String),

    #[error("Translation request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ProviderError {
    /// Upstream HTTP status, when the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Status { code, .. } => Some(*code),
            ProviderError::Http(e) => e.status().map(|s| s.as_u16()),
            ProviderError::MalformedResponse(_) => None,
        }
    }
}

/// Failures raised while fetching and parsing a linked page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Page fetch returned HTTP {0}")]
    Status(u16),

    #[error("Page fetch timed out")]
    Timeout,

    #[error("Page fetch failed: {0}")]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Http(error)
        }
    }
}

/// Anything that can go wrong while handling one message. The dispatcher is
/// the only place these are caught; they never reach the event source.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
