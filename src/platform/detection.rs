//! Provider detection from remote URLs

use crate::error::{Error, Result};
use crate::types::Provider;
use regex::Regex;
use std::sync::LazyLock;

static RE_SSH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:ssh://)?[^@/]+@[^:/]+[:/](.+?)(?:\.git)?/?$").expect("valid regex")
});
static RE_HTTPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/]+/(.+?)(?:\.git)?/?$").expect("valid regex"));

/// Owner and repository slug parsed from a remote URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    /// Hosting provider serving the remote
    pub provider: Provider,
    /// Repository owner (workspace)
    pub owner: String,
    /// Repository slug
    pub repo_slug: String,
}

/// Detect the hosting provider from a remote URL
pub fn detect_provider(url: &str) -> Option<Provider> {
    let hostname = extract_hostname(url)?;

    if hostname == "bitbucket.org" || hostname.ends_with(".bitbucket.org") {
        return Some(Provider::BitbucketCloud);
    }

    None
}

/// Parse repository info (owner/repo) from a remote URL
pub fn parse_repo_info(url: &str) -> Result<RepoInfo> {
    let provider =
        detect_provider(url).ok_or_else(|| Error::UnsupportedRemote(url.to_string()))?;

    // SSH format: git@host:owner/repo.git
    // HTTPS format: https://[user@]host/owner/repo.git
    let path = if url.starts_with("http://") || url.starts_with("https://") {
        RE_HTTPS.captures(url)
    } else {
        RE_SSH.captures(url)
    }
    .and_then(|c| c.get(1))
    .map(|m| m.as_str())
    .ok_or_else(|| Error::Parse(format!("cannot parse remote URL: {url}")))?;

    // Bitbucket Cloud paths are exactly workspace/repo
    let (owner, repo_slug) = path
        .split_once('/')
        .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty() && !repo.contains('/'))
        .ok_or_else(|| Error::Parse(format!("invalid repo path: {path}")))?;

    Ok(RepoInfo {
        provider,
        owner: owner.to_string(),
        repo_slug: repo_slug.to_string(),
    })
}

fn extract_hostname(url: &str) -> Option<String> {
    // scp-like SSH format
    if !url.contains("://") {
        return url
            .split_once('@')
            .and_then(|(_, rest)| rest.split(':').next())
            .map(ToString::to_string);
    }

    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}
