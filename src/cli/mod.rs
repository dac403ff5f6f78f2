//! CLI commands
//!
//! Command implementations for the `prd` binary.

mod auth;
mod list;
pub mod style;

pub use auth::{run_auth_setup, run_auth_status};
pub use list::{ListOptions, RepoTarget, run_list};
