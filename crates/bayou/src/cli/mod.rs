//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the bayou binary.

mod commands;
mod jobs;
mod prompts;

pub use commands::{Cli, Commands};

use bayou::{BayouError, BayouResult, ErrorBody};

/// Run a command and return its JSON output.
pub async fn execute(command: Commands) -> BayouResult<String> {
    match command {
        Commands::Generate { count, seed } => prompts::generate(count, seed),
        Commands::Cycle { count, seed } => prompts::cycle(count, seed),
        Commands::Remix(args) => prompts::remix_video(&args),
        Commands::Submit(args) => jobs::submit(&args).await,
        Commands::Poll { task_id, provider } => jobs::poll(&task_id, &provider).await,
        Commands::Export {
            input,
            creator,
            notes,
            output,
        } => prompts::export(&input, &creator, &notes, output.as_deref()),
    }
}

/// Render a failure as an `ErrorBody` JSON document.
pub fn render_error(error: &BayouError) -> String {
    let body = ErrorBody::from(error);
    serde_json::to_string_pretty(&body)
        .unwrap_or_else(|_| format!("{}: {}", body.kind, body.message))
}
