//! Gist snapshot publisher.
//!
//! Serializes the day's summaries to pretty-printed JSON and writes them
//! into a fixed file slot of an existing gist. Re-publishing the same date
//! overwrites the prior snapshot, so the relay is idempotent per day.

use crate::config::RelayConfig;
use crate::error::{RelayError, Result};
use crate::http::build_client;
use crate::summary::DailySummary;

/// Snapshot filename for a target date. Pure function of the date.
pub fn snapshot_filename(date: &str) -> String {
    format!("summaries_{date}.json")
}

/// Client for `PATCH /gists/{gist_id}`.
#[derive(Debug)]
pub struct GistPublisher {
    base_url: String,
    gh_token: String,
    gist_id: String,
    client: reqwest::Client,
}

impl GistPublisher {
    /// Create a publisher from the relay configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &RelayConfig) -> Result<Self> {
        Ok(Self {
            base_url: config.github_base_url.clone(),
            gh_token: config.gh_token.clone(),
            gist_id: config.gist_id.clone(),
            client: build_client(config.timeout_seconds)?,
        })
    }

    /// Write the day's snapshot into the gist, overwriting any prior
    /// content under the same filename. Never creates a new gist.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Publish`] on connection failure, timeout, or
    /// non-success status (bad token, unknown gist id, server error). The
    /// error propagates so the caller's retry budget covers the write.
    pub async fn publish(&self, date: &str, days: &[DailySummary]) -> Result<()> {
        let filename = snapshot_filename(date);
        let content = serde_json::to_string_pretty(days)
            .map_err(|e| RelayError::Publish(format!("failed to encode snapshot: {e}")))?;

        let mut files = serde_json::Map::new();
        files.insert(filename.clone(), serde_json::json!({ "content": content }));
        let body = serde_json::json!({ "files": files });

        let url = format!("{}/gists/{}", self.base_url, self.gist_id);
        let response = self
            .client
            .patch(&url)
            .header("Authorization", format!("token {}", self.gh_token))
            .header("Accept", "application/vnd.github+json")
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Publish(format!("connection error: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read body".into());
            tracing::error!(status = %status, body = %body, "gist update returned error");
            return Err(RelayError::Publish(format!(
                "gist update failed ({status}): {}",
                error_detail(&body)
            )));
        }

        tracing::info!(file = %filename, "gist snapshot updated");
        Ok(())
    }
}

/// Extract a human-readable message from a GitHub error response.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/message")
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
