//! Authentication modes and credential discovery
//!
//! Credentials are read from environment variables; the resulting [`Auth`]
//! is bound to a service at construction.

mod bitbucket;

pub use bitbucket::{BitbucketAuthConfig, get_bitbucket_auth};

use std::fmt;

/// How requests to the provider are authenticated
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// Username and password (Bitbucket app password)
    Basic {
        /// Account username
        username: String,
        /// Password or app password
        password: String,
    },
    /// OAuth or repository access token
    Bearer {
        /// Token value
        token: String,
    },
    /// No credentials; only public repositories are visible
    Anonymous,
}

impl Auth {
    /// Short name of the variant, safe to print
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "basic",
            Self::Bearer { .. } => "bearer",
            Self::Anonymous => "anonymous",
        }
    }
}

// Secrets never reach logs through `{:?}`.
impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
            Self::Anonymous => f.write_str("Anonymous"),
        }
    }
}

/// Source of authentication credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Credentials from environment variables
    EnvVar,
    /// No credentials found; anonymous access
    None,
}
