//! Shared HTTP client construction.

use crate::error::{RelayError, Result};
use std::time::Duration;

/// User-Agent sent on every request (GitHub rejects requests without one).
const USER_AGENT: &str = concat!("waka-relay/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] with the relay's timeout and User-Agent.
///
/// # Errors
///
/// Returns [`RelayError::Config`] if the client cannot be constructed.
pub(crate) fn build_client(timeout_seconds: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| RelayError::Config(format!("failed to build HTTP client: {e}")))
}
