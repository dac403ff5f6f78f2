//! Error types for pr-discovery

use thiserror::Error;

/// Errors surfaced by pull request discovery
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid service configuration (base URL, owner, repository slug)
    #[error("configuration error: {0}")]
    Config(String),

    /// The provider request failed or returned a non-success status
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider response did not have the expected shape
    #[error("decode error: {0}")]
    Decode(String),

    /// The operation context was cancelled before the request finished
    #[error("operation cancelled")]
    Cancelled,

    /// The operation context deadline elapsed before the request finished
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// Credentials in the environment are incomplete
    #[error("authentication error: {0}")]
    Auth(String),

    /// A remote URL could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// A remote URL points at a host no adapter serves
    #[error("unsupported remote: {0}")]
    UnsupportedRemote(String),
}

/// Result type alias for pr-discovery
pub type Result<T> = std::result::Result<T, Error>;
