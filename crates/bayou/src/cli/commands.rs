//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bayou - randomized cinematic prompts and text-to-video job submission
#[derive(Parser, Debug)]
#[command(name = "bayou")]
#[command(about = "Randomized cinematic prompts and text-to-video job submission", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose independent random prompts
    Generate {
        /// Number of prompts
        #[arg(long, default_value = "2")]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compose variants of one story beat
    Cycle {
        /// Number of variants
        #[arg(long, default_value = "5")]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Build a remix directive for an existing video
    Remix(RemixArgs),

    /// Submit a video generation job
    Submit(SubmitArgs),

    /// Poll the status of a submitted job
    Poll {
        /// Task id returned by submit
        task_id: String,

        #[command(flatten)]
        provider: ProviderArgs,
    },

    /// Wrap prompts in an export envelope
    Export {
        /// JSON file with the prompts to export ("-" for stdin)
        input: PathBuf,

        /// Name recorded as the creator
        #[arg(long, default_value = "bayou")]
        creator: String,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,

        /// Write the envelope here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Arguments for the remix command
#[derive(clap::Args, Debug)]
pub struct RemixArgs {
    /// Link to the video being remixed
    pub video_link: String,

    /// The prompt that produced the video
    pub original_prompt: String,

    /// Comma-separated character handles
    #[arg(long, default_value = "")]
    pub characters: String,

    /// Replacement style
    #[arg(long, default_value = "")]
    pub style: String,

    /// Replacement lighting
    #[arg(long, default_value = "")]
    pub lighting: String,

    /// Replacement camera treatment
    #[arg(long, default_value = "")]
    pub camera: String,

    /// Replacement music
    #[arg(long, default_value = "")]
    pub music: String,

    /// Replacement mood
    #[arg(long, default_value = "")]
    pub mood: String,
}

/// Arguments for the submit command
#[derive(clap::Args, Debug)]
pub struct SubmitArgs {
    /// Rendered prompt text
    #[arg(long, conflicts_with = "prompt_file", required_unless_present = "prompt_file")]
    pub prompt: Option<String>,

    /// JSON file holding one composed prompt (as printed by generate)
    #[arg(long)]
    pub prompt_file: Option<PathBuf>,

    /// Clip length in seconds (10, 11 or 12); ignored with --prompt-file
    #[arg(long, default_value = "10")]
    pub duration: u32,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Provider selection shared by submit and poll
#[derive(clap::Args, Debug)]
pub struct ProviderArgs {
    /// Provider profile from bayou.toml (defaults.provider if omitted)
    #[arg(long)]
    pub provider: Option<String>,

    /// API key overriding the profile's environment variable
    #[arg(long)]
    pub api_key: Option<String>,

    /// Give up after this many seconds
    #[arg(long)]
    pub deadline_secs: Option<u64>,
}
