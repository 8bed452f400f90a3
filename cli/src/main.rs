//! CLI for the projects page builder.
//!
//! Builds a static "Projects" page from GitHub repository metadata, either
//! once or on a fixed revalidation cadence.

use clap::Parser;
use projects_page::{Mode, RunSummary, Runner, RunnerConfig, DEFAULT_REVALIDATE_SECS};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Projects Page - Build a static portfolio page from GitHub repository metadata.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the site config file.
    #[arg(long, default_value = "site.toml")]
    config: PathBuf,

    /// Path the rendered HTML is written to.
    #[arg(long, default_value = "dist/projects.html")]
    output: PathBuf,

    /// GitHub Personal Access Token (optional, raises the rate limit).
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,

    /// Use the built-in sample records instead of fetching from GitHub.
    #[arg(long)]
    development: bool,

    /// Maximum concurrent API requests.
    #[arg(long, default_value_t = 4)]
    concurrency: usize,

    /// Keep running and rebuild the page on the revalidation interval.
    #[arg(long)]
    watch: bool,

    /// Revalidation interval in seconds.
    #[arg(long, default_value_t = DEFAULT_REVALIDATE_SECS)]
    revalidate_secs: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    if args.watch {
        return match watch(args).await {
            Ok(()) => ExitCode::from(0),
            Err(e) => {
                error!(error = %e, "Critical failure");
                ExitCode::from(2)
            }
        };
    }

    // Run a single build
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.all_success() {
                ExitCode::from(0)
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

fn runner_from_args(args: &Args) -> Result<Runner, projects_page::RunnerError> {
    let mode = if args.development {
        Mode::Development
    } else {
        Mode::Production
    };
    let config = RunnerConfig::new(
        args.config.clone(),
        args.output.clone(),
        args.token.clone(),
        mode,
        args.concurrency,
    );
    Runner::new(config)
}

/// Single-build execution.
async fn run(args: Args) -> Result<RunSummary, projects_page::RunnerError> {
    let runner = runner_from_args(&args)?;
    runner.run().await
}

/// Revalidation-loop execution.
async fn watch(args: Args) -> Result<(), projects_page::RunnerError> {
    let interval = Duration::from_secs(args.revalidate_secs);
    let runner = runner_from_args(&args)?;
    runner.run_with_revalidation(interval).await
}

/// Prints the final build summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.development {
            "Development"
        } else {
            "Production"
        }
    );
    println!("  Repositories configured: {}", summary.repos_configured);
    println!("  Repositories validated: {}", summary.repos_validated);
    println!("  Repositories skipped: {}", summary.repos_skipped);
    println!("  Cards rendered: {}", summary.cards_rendered);
}
