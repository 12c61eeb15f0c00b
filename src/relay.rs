//! Retry orchestration for the fetch-then-publish pipeline.
//!
//! One relay pass runs up to `max_attempts` full attempts. Each attempt
//! recomputes the target date, fetches that day's summary, renders the
//! Markdown report for the log, and publishes the snapshot. A failure
//! anywhere in the sequence restarts the whole sequence; retries are
//! immediate, with no backoff.

use crate::config::RelayConfig;
use crate::date;
use crate::error::Result;
use crate::fetch::SummaryFetcher;
use crate::publish::GistPublisher;
use crate::report;

/// Terminal state of one relay invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The snapshot for `date` was written.
    Published { date: String },
    /// Every attempt failed; the retry budget is spent.
    Exhausted { attempts: u32 },
}

/// The fetch-then-publish pipeline with its retry budget.
#[derive(Debug)]
pub struct Relay {
    fetcher: SummaryFetcher,
    publisher: GistPublisher,
    max_attempts: u32,
}

impl Relay {
    /// Build the pipeline from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RelayError::Config`] if the configuration is
    /// invalid or an HTTP client cannot be built.
    pub fn new(config: &RelayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fetcher: SummaryFetcher::new(config)?,
            publisher: GistPublisher::new(config)?,
            max_attempts: config.max_attempts,
        })
    }

    /// Run the pipeline to a terminal outcome.
    ///
    /// Both outcomes are normal returns; callers decide how to surface
    /// exhaustion. All attempt-level detail goes to the log.
    pub async fn run(&self) -> RelayOutcome {
        for attempt in 1..=self.max_attempts {
            let date = date::yesterday();
            match self.attempt(&date).await {
                Ok(()) => {
                    return RelayOutcome::Published { date };
                }
                Err(e) => {
                    let remaining = self.max_attempts - attempt;
                    if remaining == 0 || !e.is_retryable() {
                        tracing::error!(error = %e, attempts = attempt, "daily summary relay failed");
                        return RelayOutcome::Exhausted { attempts: attempt };
                    }
                    tracing::warn!(error = %e, remaining, "relay attempt failed, retrying");
                }
            }
        }
        // max_attempts == 0 is rejected by validation; this only runs if a
        // caller bypassed it.
        RelayOutcome::Exhausted { attempts: 0 }
    }

    async fn attempt(&self, date: &str) -> Result<()> {
        let summary = self.fetcher.fetch_day(date).await?;
        if let Some(rendered) = report::daily_report(date, &summary.data) {
            tracing::debug!(%date, report = %rendered, "rendered daily report");
        } else {
            tracing::info!(%date, "no tracked activity for the day");
        }
        self.publisher.publish(date, &summary.data).await
    }
}
