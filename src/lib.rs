//! # waka-relay
//!
//! Single-shot relay of a day's WakaTime summary into a GitHub Gist.
//!
//! An external scheduler runs the binary once per period. Each invocation
//! fetches yesterday's summary from the WakaTime API and writes it as a
//! pretty-printed JSON snapshot file (`summaries_<date>.json`) into a fixed
//! gist, retrying the whole fetch-then-publish sequence on failure.
//!
//! ## Design
//!
//! - Stateless: no local persistence, no state shared between runs
//! - Idempotent per day: re-running overwrites the same snapshot slot
//! - Bounded immediate retries around the full pipeline, no backoff
//! - Configuration is read from the environment exactly once and handed to
//!   components as an explicit [`RelayConfig`]
//!
//! ## Security
//!
//! - Credentials come from the environment and never appear in logs or
//!   error messages
//! - No network listeners; two outbound HTTPS calls per attempt

pub mod config;
pub mod date;
pub mod error;
pub mod fetch;
mod http;
pub mod publish;
pub mod relay;
pub mod report;
pub mod summary;

pub use config::RelayConfig;
pub use error::{RelayError, Result};
pub use relay::{Relay, RelayOutcome};
pub use summary::{DailySummary, GrandTotal, SummaryResponse, UsageItem};

/// Run one relay pass with the given configuration.
///
/// Validates the configuration, builds the pipeline, and drives it to a
/// terminal [`RelayOutcome`]. Exhaustion is an outcome, not an error; only
/// configuration problems error out before the pipeline starts.
///
/// # Errors
///
/// Returns [`RelayError::Config`] if the configuration is invalid.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> waka_relay::Result<()> {
/// let config = waka_relay::RelayConfig::from_env()?;
/// match waka_relay::relay_once(&config).await? {
///     waka_relay::RelayOutcome::Published { date } => println!("published {date}"),
///     waka_relay::RelayOutcome::Exhausted { attempts } => println!("gave up after {attempts}"),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn relay_once(config: &RelayConfig) -> Result<RelayOutcome> {
    let relay = Relay::new(config)?;
    Ok(relay.run().await)
}
