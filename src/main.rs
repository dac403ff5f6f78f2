//! prd - open pull request discovery
//!
//! CLI binary for listing the open pull requests of a hosted repository.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "prd")]
#[command(about = "List open pull requests - Bitbucket Cloud")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List open pull requests of a repository
    List {
        /// Repository owner (workspace)
        #[arg(long, requires = "repo", conflicts_with = "remote")]
        owner: Option<String>,

        /// Repository slug
        #[arg(long, requires = "owner")]
        repo: Option<String>,

        /// Remote URL to take owner and repository from
        #[arg(long, required_unless_present = "owner")]
        remote: Option<String>,

        /// API base URL (defaults to $BITBUCKET_API_URL, then the public API)
        #[arg(long)]
        base_url: Option<String>,

        /// Abort the request after this many seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Show which credentials would be used
    Status,
    /// Show authentication setup instructions
    Setup,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pr_discovery=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::List {
            owner,
            repo,
            remote,
            base_url,
            timeout,
            json,
        } => {
            let target = match (owner, repo, remote) {
                (Some(owner), Some(repo), _) => cli::RepoTarget::Explicit { owner, repo },
                (_, _, Some(remote)) => cli::RepoTarget::Remote(remote),
                _ => anyhow::bail!("either --owner/--repo or --remote is required"),
            };
            let options = cli::ListOptions {
                base_url,
                timeout_secs: timeout,
                json,
            };
            cli::run_list(target, &options).await?;
        }
        Commands::Auth { action } => match action {
            AuthAction::Status => cli::run_auth_status()?,
            AuthAction::Setup => cli::run_auth_setup(),
        },
    }

    Ok(())
}
