//! Mock pull request service for testing consumers
//!
//! These are test utilities - not every test binary uses all of them.

#![allow(dead_code)]

use async_trait::async_trait;
use pr_discovery::context::Context;
use pr_discovery::error::{Error, Result};
use pr_discovery::platform::PullRequestService;
use pr_discovery::types::{PullRequest, ServiceConfig};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Simple mock pull request service
///
/// This manually implements `PullRequestService` rather than using mockall,
/// because mockall has issues with methods returning references.
///
/// Features:
/// - Configurable open pull request set
/// - Call counting for verification
/// - Error injection for failure path testing
/// - Honors context cancellation like a real adapter
pub struct MockPullRequestService {
    config: ServiceConfig,
    pulls: Mutex<Vec<PullRequest>>,
    list_calls: AtomicUsize,
    error_on_list: Mutex<Option<String>>,
}

impl MockPullRequestService {
    /// Create a new mock with the given config and no open pull requests
    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            config,
            pulls: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
            error_on_list: Mutex::new(None),
        }
    }

    /// Replace the open pull request set
    pub fn set_pulls(&self, pulls: Vec<PullRequest>) {
        *self.pulls.lock().unwrap() = pulls;
    }

    /// Make `list` return a transport error
    pub fn fail_list(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    /// Number of `list` calls so far
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PullRequestService for MockPullRequestService {
    async fn list(&self, ctx: &Context) -> Result<Vec<PullRequest>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        ctx.run(async {
            if let Some(msg) = self.error_on_list.lock().unwrap().as_ref() {
                return Err(Error::Transport(msg.clone()));
            }
            Ok(self.pulls.lock().unwrap().clone())
        })
        .await?
    }

    fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
