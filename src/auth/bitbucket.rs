//! Bitbucket authentication

use crate::auth::{Auth, AuthSource};
use crate::error::{Error, Result};
use std::env;

/// Bitbucket authentication configuration
#[derive(Debug, Clone)]
pub struct BitbucketAuthConfig {
    /// Resolved authentication mode
    pub auth: Auth,
    /// Where the credentials were obtained from
    pub source: AuthSource,
}

/// Get Bitbucket authentication
///
/// Priority:
/// 1. `BITBUCKET_TOKEN` (bearer token)
/// 2. `BITBUCKET_USERNAME` + `BITBUCKET_APP_PASSWORD` (basic auth)
/// 3. anonymous
pub fn get_bitbucket_auth() -> Result<BitbucketAuthConfig> {
    resolve_auth(|key| env::var(key).ok())
}

/// Resolve credentials through `lookup`; empty values count as unset.
fn resolve_auth<F>(lookup: F) -> Result<BitbucketAuthConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(token) = var("BITBUCKET_TOKEN") {
        return Ok(BitbucketAuthConfig {
            auth: Auth::Bearer { token },
            source: AuthSource::EnvVar,
        });
    }

    match (var("BITBUCKET_USERNAME"), var("BITBUCKET_APP_PASSWORD")) {
        (Some(username), Some(password)) => Ok(BitbucketAuthConfig {
            auth: Auth::Basic { username, password },
            source: AuthSource::EnvVar,
        }),
        (Some(_), None) => Err(Error::Auth(
            "BITBUCKET_USERNAME is set but BITBUCKET_APP_PASSWORD is not".to_string(),
        )),
        (None, Some(_)) => Err(Error::Auth(
            "BITBUCKET_APP_PASSWORD is set but BITBUCKET_USERNAME is not".to_string(),
        )),
        (None, None) => Ok(BitbucketAuthConfig {
            auth: Auth::Anonymous,
            source: AuthSource::None,
        }),
    }
}
