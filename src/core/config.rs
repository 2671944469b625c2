use std::env;

/// Channel allow-list. Empty means every channel is in scope.
///
/// Loaded once at startup and read-only afterwards; this is the only state
/// shared across message dispatches.
#[derive(Debug, Clone, Default)]
pub struct ScopeConfig {
    allowed: Vec<String>,
}

impl ScopeConfig {
    /// Parse the comma-separated `ALLOWED_CHANNEL_IDS` format. Entries are
    /// trimmed and empty entries dropped, so `""` and `" , "` both mean
    /// unrestricted.
    #[must_use]
    pub fn from_csv(raw: &str) -> Self {
        let allowed = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { allowed }
    }

    #[must_use]
    pub fn unrestricted() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn allows(&self, channel_id: &str) -> bool {
        self.allowed.is_empty() || self.allowed.iter().any(|id| id == channel_id)
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.allowed.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the chat-platform collaborator. A missing or invalid
    /// token is the one fatal startup path; the caller exits non-zero.
    pub bot_token: String,
    pub translate_api_key: String,
    pub scope: ScopeConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            bot_token: env::var("BOT_TOKEN_VALUE").map_err(|e| format!("BOT_TOKEN_VALUE: {}", e))?,
            translate_api_key: env::var("TRANSLATE_API_KEY")
                .map_err(|e| format!("TRANSLATE_API_KEY: {}", e))?,
            scope: ScopeConfig::from_csv(&env::var("ALLOWED_CHANNEL_IDS").unwrap_or_default()),
        })
    }
}
