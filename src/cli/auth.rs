//! Auth commands - inspect and set up credentials

use crate::cli::style::{Stylize, check};
use anstream::println;
use pr_discovery::auth::{Auth, AuthSource, get_bitbucket_auth};
use pr_discovery::error::Result;

/// Show which credentials `prd list` would use
pub fn run_auth_status() -> Result<()> {
    let config = get_bitbucket_auth()?;

    match (&config.auth, config.source) {
        (Auth::Anonymous, _) | (_, AuthSource::None) => {
            println!("{}", "No Bitbucket credentials found".warn().for_stdout());
            println!(
                "{}",
                "Requests are anonymous; only public repositories are visible.".muted()
            );
        }
        (Auth::Basic { username, .. }, AuthSource::EnvVar) => {
            println!("{} Basic auth as {}", check(), username.accent());
            println!("{}", "Source: BITBUCKET_USERNAME / BITBUCKET_APP_PASSWORD".muted());
        }
        (Auth::Bearer { .. }, AuthSource::EnvVar) => {
            println!("{} Bearer token", check());
            println!("{}", "Source: BITBUCKET_TOKEN".muted());
        }
    }
    Ok(())
}

/// Show authentication setup instructions
pub fn run_auth_setup() {
    println!("Bitbucket Authentication Setup");
    println!("==============================");
    println!();
    println!("Option 1: Access token");
    println!("  Create a repository or workspace access token");
    println!("  Set BITBUCKET_TOKEN");
    println!();
    println!("Option 2: App password");
    println!("  Create an app password with pull request read scope");
    println!("  Set BITBUCKET_USERNAME and BITBUCKET_APP_PASSWORD");
    println!();
    println!("Without credentials only public repositories can be listed.");
    println!();
    println!("For a different API endpoint:");
    println!("  Set BITBUCKET_API_URL or pass --base-url");
}
