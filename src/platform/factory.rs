//! Pull request service factory
//!
//! Creates pull request services based on configuration.

use crate::error::Result;
use crate::platform::{BitbucketCloudService, PullRequestService};
use crate::types::{Provider, ServiceConfig};

/// Create a pull request service from configuration
///
/// Validation happens here; no request is sent until `list` is called.
pub fn create_pull_request_service(config: &ServiceConfig) -> Result<Box<dyn PullRequestService>> {
    match config.provider {
        Provider::BitbucketCloud => Ok(Box::new(BitbucketCloudService::new(config.clone())?)),
    }
}
