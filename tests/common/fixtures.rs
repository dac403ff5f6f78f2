//! Test data factories for pr-discovery types and Bitbucket responses
//!
//! These are test utilities - not every test binary uses all of them.

#![allow(dead_code)]

use pr_discovery::auth::Auth;
use pr_discovery::types::{Provider, PullRequest, ServiceConfig};
use serde_json::{Value, json};

/// Create a normalized pull request
pub fn make_pr(number: u64, branch: &str, head_sha: &str) -> PullRequest {
    PullRequest {
        number,
        branch: branch.to_string(),
        head_sha: head_sha.to_string(),
    }
}

/// Create a Bitbucket Cloud config for acme/widgets
pub fn bitbucket_config(base_url: Option<&str>, auth: Auth) -> ServiceConfig {
    ServiceConfig {
        provider: Provider::BitbucketCloud,
        owner: "acme".to_string(),
        repo_slug: "widgets".to_string(),
        base_url: base_url.map(String::from),
        auth,
    }
}

/// One entry of a Bitbucket pull request page, with the extra fields the API sends
pub fn bitbucket_pr(id: u64, branch: &str, hash: &str) -> Value {
    json!({
        "id": id,
        "type": "pullrequest",
        "title": format!("Change on {branch}"),
        "state": "OPEN",
        "source": {
            "branch": { "name": branch },
            "commit": { "hash": hash, "type": "commit" },
            "repository": { "full_name": "acme/widgets" }
        },
        "destination": {
            "branch": { "name": "main" },
            "commit": { "hash": "0000000" }
        }
    })
}

/// A page envelope around `values`
pub fn bitbucket_page(values: Vec<Value>, next: Option<&str>) -> String {
    let mut page = json!({
        "page": 1,
        "pagelen": 10,
        "size": values.len(),
        "values": values,
    });
    if let Some(next) = next {
        page["next"] = json!(next);
    }
    page.to_string()
}

/// Path the adapter requests for acme/widgets
pub const PULLS_PATH: &str = "/repositories/acme/widgets/pullrequests";
