//! Core types for pr-discovery

use crate::auth::Auth;
use serde::{Deserialize, Serialize};

/// An open pull request, normalized across providers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Provider-assigned number, unique within a repository
    pub number: u64,
    /// Source branch name
    pub branch: String,
    /// Commit hash at the tip of the source branch
    pub head_sha: String,
}

/// Supported hosting providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    /// bitbucket.org
    BitbucketCloud,
}

/// Service configuration, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Hosting provider
    pub provider: Provider,
    /// Repository owner (workspace, user or organization)
    pub owner: String,
    /// Repository slug
    pub repo_slug: String,
    /// API base URL (None for the provider's public API root)
    pub base_url: Option<String>,
    /// Authentication mode
    pub auth: Auth,
}

impl ServiceConfig {
    /// `owner/repo_slug`, as used in messages
    pub fn repo_path(&self) -> String {
        format!("{}/{}", self.owner, self.repo_slug)
    }
}
