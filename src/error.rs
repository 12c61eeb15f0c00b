//! Error types for the waka-relay crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Credentials never appear in error messages.

/// Errors that can occur during a relay pass.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Invalid or missing configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The WakaTime summary request failed (transport, auth, or remote status).
    #[error("fetch error: {0}")]
    Fetch(String),

    /// The gist snapshot write failed (transport, auth, or remote status).
    #[error("publish error: {0}")]
    Publish(String),
}

impl RelayError {
    /// Returns true if this error represents a transient failure that can
    /// be retried within the same invocation.
    ///
    /// Both network surfaces are retryable; configuration problems are not
    /// (another attempt would read the same configuration).
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Config(_) => false,
            Self::Fetch(_) | Self::Publish(_) => true,
        }
    }
}

/// Convenience type alias for waka-relay results.
pub type Result<T> = std::result::Result<T, RelayError>;
