//! WakaTime summary fetcher.
//!
//! Issues the authenticated range request for a single day and parses the
//! response envelope. Transport errors and non-success statuses surface as
//! [`RelayError::Fetch`]; nothing is swallowed here.

use crate::config::RelayConfig;
use crate::error::{RelayError, Result};
use crate::http::build_client;
use crate::summary::SummaryResponse;

/// Client for `GET /users/current/summaries`.
///
/// Authenticates with HTTP basic auth, API key as the username and an
/// empty password, which is the scheme the WakaTime API documents.
#[derive(Debug)]
pub struct SummaryFetcher {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl SummaryFetcher {
    /// Create a fetcher from the relay configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &RelayConfig) -> Result<Self> {
        Ok(Self {
            base_url: config.wakatime_base_url.clone(),
            api_key: config.api_key.clone(),
            client: build_client(config.timeout_seconds)?,
        })
    }

    /// Fetch the summary for a single day (`start == end == date`).
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Fetch`] on connection failure, timeout,
    /// non-success status, or an unparseable payload.
    pub async fn fetch_day(&self, date: &str) -> Result<SummaryResponse> {
        let url = format!("{}/users/current/summaries", self.base_url);

        tracing::debug!(%date, "requesting WakaTime day summary");

        let response = self
            .client
            .get(&url)
            .query(&[("start", date), ("end", date)])
            .basic_auth(&self.api_key, Some(""))
            .send()
            .await
            .map_err(|e| RelayError::Fetch(format!("connection error: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read body".into());
            tracing::error!(status = %status, body = %body, "WakaTime request returned error");
            return Err(map_fetch_status(status, &body));
        }

        response
            .json::<SummaryResponse>()
            .await
            .map_err(|e| RelayError::Fetch(format!("invalid summary payload: {e}")))
    }
}

/// Map WakaTime HTTP error responses to fetch errors.
fn map_fetch_status(status: reqwest::StatusCode, body: &str) -> RelayError {
    let detail = error_detail(body);
    match status.as_u16() {
        401 | 403 => RelayError::Fetch(format!("authentication rejected ({status}): {detail}")),
        429 => RelayError::Fetch(format!("rate limit exceeded: {detail}")),
        s if s >= 500 => RelayError::Fetch(format!("server error ({status}): {detail}")),
        _ => RelayError::Fetch(format!("HTTP {status}: {detail}")),
    }
}

/// Extract a human-readable message from a WakaTime error response.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error")
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| {
            if body.is_empty() {
                "no response body".to_string()
            } else {
                body.chars().take(500).collect()
            }
        })
}
