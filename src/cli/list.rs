//! List command - print the open pull requests of a repository

use crate::cli::style::{Stylize, bullet, spinner_style};
use anstream::println;
use indicatif::ProgressBar;
use pr_discovery::auth::get_bitbucket_auth;
use pr_discovery::context::Context;
use pr_discovery::error::{Error, Result};
use pr_discovery::platform::{create_pull_request_service, parse_repo_info};
use pr_discovery::types::{Provider, PullRequest, ServiceConfig};
use std::env;
use std::time::Duration;

/// Which repository to list
pub enum RepoTarget {
    /// Owner and slug given on the command line
    Explicit {
        /// Repository owner (workspace)
        owner: String,
        /// Repository slug
        repo: String,
    },
    /// Derive owner and slug from a remote URL
    Remote(String),
}

/// Options for the list command
pub struct ListOptions {
    /// API base URL override
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout_secs: Option<u64>,
    /// Print JSON instead of text
    pub json: bool,
}

/// Run the list command
pub async fn run_list(target: RepoTarget, options: &ListOptions) -> Result<()> {
    let (provider, owner, repo_slug) = match target {
        RepoTarget::Explicit { owner, repo } => (Provider::BitbucketCloud, owner, repo),
        RepoTarget::Remote(url) => {
            let info = parse_repo_info(&url)?;
            (info.provider, info.owner, info.repo_slug)
        }
    };

    let auth = get_bitbucket_auth()?;
    let config = ServiceConfig {
        provider,
        owner,
        repo_slug,
        base_url: options
            .base_url
            .clone()
            .or_else(|| env::var("BITBUCKET_API_URL").ok()),
        auth: auth.auth,
    };
    let service = create_pull_request_service(&config)?;

    let (mut ctx, cancel) = Context::cancellable();
    if let Some(secs) = options.timeout_secs {
        ctx = ctx.with_timeout(Duration::from_secs(secs));
    }
    // Ctrl-C aborts the in-flight request
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let spinner = (!options.json).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(spinner_style());
        pb.set_message(format!("Fetching pull requests for {}...", config.repo_path()));
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    });

    let result = service.list(&ctx).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    // Errors, including cancellation, are reported once by `main`
    let pulls = result?;

    if options.json {
        let rendered = serde_json::to_string_pretty(&pulls)
            .map_err(|e| Error::Decode(format!("cannot render pull requests: {e}")))?;
        println!("{rendered}");
    } else {
        print_pulls(&config.repo_path(), &pulls);
    }

    Ok(())
}

fn print_pulls(repo: &str, pulls: &[PullRequest]) {
    if pulls.is_empty() {
        println!("{}", format!("No open pull requests in {repo}").muted());
        return;
    }

    println!("{} {}", "Open pull requests in".emphasis(), repo.accent());
    println!();
    for pr in pulls {
        let sha_short = pr.head_sha.get(..12).unwrap_or(pr.head_sha.as_str());
        println!(
            "  {} {} {} {}",
            bullet(),
            format!("#{}", pr.number).accent(),
            pr.branch,
            sha_short.muted()
        );
    }
}
