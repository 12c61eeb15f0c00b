//! Relay configuration with sensible defaults.
//!
//! [`RelayConfig`] carries every external-facing setting: the WakaTime API
//! key, the GitHub token and gist id, the two API base URLs, the retry
//! budget, and the HTTP timeout. Components receive a config at construction
//! and never read process environment state themselves; the environment is
//! read exactly once, in [`RelayConfig::from_env`].

use crate::error::{RelayError, Result};

/// Default WakaTime API base URL.
pub const WAKATIME_BASE_URL: &str = "https://api.wakatime.com/api/v1";

/// Default GitHub REST API base URL.
pub const GITHUB_BASE_URL: &str = "https://api.github.com";

/// Total pipeline attempts per invocation (fetch + publish counted as one).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default per-request HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for one relay invocation.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// WakaTime API key, sent as the HTTP basic-auth username.
    pub api_key: String,
    /// GitHub token with gist scope.
    pub gh_token: String,
    /// Id of the gist that receives the snapshot file.
    pub gist_id: String,
    /// Base URL for the WakaTime API.
    pub wakatime_base_url: String,
    /// Base URL for the GitHub REST API.
    pub github_base_url: String,
    /// Total pipeline attempts before giving up.
    pub max_attempts: u32,
    /// Per-request HTTP timeout in seconds, applied to both clients.
    pub timeout_seconds: u64,
}

impl RelayConfig {
    /// Create a config with default endpoints, retry budget, and timeout.
    pub fn new(
        api_key: impl Into<String>,
        gh_token: impl Into<String>,
        gist_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            gh_token: gh_token.into(),
            gist_id: gist_id.into(),
            wakatime_base_url: WAKATIME_BASE_URL.to_string(),
            github_base_url: GITHUB_BASE_URL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Load configuration from `WAKATIME_API_KEY`, `GH_TOKEN`, and `GIST_ID`.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Config`] naming the variable when one is
    /// missing or blank.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            require_env("WAKATIME_API_KEY")?,
            require_env("GH_TOKEN")?,
            require_env("GIST_ID")?,
        ))
    }

    /// Set the WakaTime base URL (useful for testing with mock servers).
    pub fn with_wakatime_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.wakatime_base_url = base_url.into();
        self
    }

    /// Set the GitHub base URL (useful for testing with mock servers).
    pub fn with_github_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.github_base_url = base_url.into();
        self
    }

    /// Set the retry budget.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - credentials and gist id must not be blank
    /// - `max_attempts` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(RelayError::Config("WakaTime API key is empty".into()));
        }
        if self.gh_token.trim().is_empty() {
            return Err(RelayError::Config("GitHub token is empty".into()));
        }
        if self.gist_id.trim().is_empty() {
            return Err(RelayError::Config("gist id is empty".into()));
        }
        if self.max_attempts == 0 {
            return Err(RelayError::Config(
                "max_attempts must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(RelayError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

fn require_env(var: &str) -> Result<String> {
    let value = std::env::var(var)
        .map_err(|_| RelayError::Config(format!("required env var is missing: {var}")))?;
    if value.trim().is_empty() {
        return Err(RelayError::Config(format!(
            "required env var is empty: {var}"
        )));
    }
    Ok(value)
}
