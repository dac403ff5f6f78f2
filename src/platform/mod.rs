//! Pull request services for hosting providers
//!
//! Provides a unified interface for listing open pull requests across providers.

mod bitbucket_cloud;
mod detection;
mod factory;

pub use bitbucket_cloud::{BitbucketCloudService, DEFAULT_BASE_URL};
pub use detection::{RepoInfo, detect_provider, parse_repo_info};
pub use factory::create_pull_request_service;

use crate::context::Context;
use crate::error::Result;
use crate::types::{PullRequest, ServiceConfig};
use async_trait::async_trait;

/// Pull request discovery for one configured repository
///
/// Each hosting provider gets an adapter implementing this trait, so
/// consumers can stay provider-agnostic. Repository identity is bound when
/// the service is constructed.
#[async_trait]
pub trait PullRequestService: Send + Sync {
    /// List the currently open pull requests, in provider order
    ///
    /// Fails as a whole: either every record is returned or an error is.
    async fn list(&self, ctx: &Context) -> Result<Vec<PullRequest>>;

    /// Get the service configuration
    fn config(&self) -> &ServiceConfig;
}
