//! pr-discovery - open pull requests from any hosting provider
//!
//! Lists the open pull requests of a repository and normalizes them into
//! [`types::PullRequest`] records, independent of the hosting provider.
//! Consumers work against the [`platform::PullRequestService`] trait.

pub mod auth;
pub mod context;
pub mod error;
pub mod platform;
pub mod types;
