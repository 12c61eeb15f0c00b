//! Scheduled relay entrypoint: one fetch-then-publish pass per invocation.
//!
//! Outcomes are reported on the log only; exhausting the retry budget still
//! terminates normally so the scheduler treats every run the same way. Only
//! a missing or invalid configuration fails the process.

use waka_relay::{relay_once, RelayConfig, RelayOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = RelayConfig::from_env().map_err(|e| anyhow::anyhow!("waka-relay startup: {e}"))?;

    match relay_once(&config).await? {
        RelayOutcome::Published { date } => {
            tracing::info!(%date, "daily summary snapshot published");
        }
        RelayOutcome::Exhausted { attempts } => {
            tracing::error!(attempts, "daily summary relay gave up");
        }
    }
    Ok(())
}
