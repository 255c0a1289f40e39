//! Bayou CLI binary.
//!
//! Composes prompts and talks to a text-to-video provider:
//! - Generate, cycle and remix prompts
//! - Submit jobs and poll their status
//! - Export prompts with metadata
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() {
    use cli::{Cli, execute, render_error};

    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match execute(cli.command).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            println!("{}", render_error(&e));
            std::process::exit(1);
        }
    }
}
