//! Bayou: randomized cinematic prompts and text-to-video job submission.
//!
//! Bayou composes short-form video prompts from a fixed bank of scenes,
//! cameos and cinematic treatments, and submits them to an external
//! text-to-video provider through a small job client.
//!
//! # Quick Start
//!
//! ```no_run
//! use bayou::{BayouConfig, JobClient, PromptComposer, ProviderAdapter, SubmitRequest};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut composer = PromptComposer::new(StdRng::seed_from_u64(7));
//!     let batch = composer.cycle(5)?;
//!
//!     let config = BayouConfig::load()?.provider_config(Some("sora"))?;
//!     let client = JobClient::new(ProviderAdapter::connect(config.endpoint_shape())?);
//!
//!     let job = client
//!         .submit(&SubmitRequest::from(&batch.variants()[0]), &config)
//!         .await?;
//!     println!("{}", job.external_task_id());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `bayou_error` - Error types
//! - `bayou_core` - Prompt, job and configuration value types
//! - `bayou_interface` - The `VideoProvider` trait
//! - `bayou_prompt` - Option bank, composer, remix and export
//! - `bayou_providers` - Provider adapters, job client, configuration
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use bayou_core::*;
pub use bayou_error::*;
pub use bayou_interface::*;
pub use bayou_prompt::*;
pub use bayou_providers::*;
