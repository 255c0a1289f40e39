//! Core data types for the Bayou prompt and video-job library.
//!
//! This crate provides the value objects shared by the composer, the provider
//! adapters and the job client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod export;
mod job;
mod prompt;
mod provider_config;
mod remix;

pub use export::{ExportEnvelope, ExportMeta};
pub use job::{Job, JobErrorDetail, JobState, JobStatus};
pub use prompt::{
    ClipDuration, CycleBatch, Prompt, PromptBuilder, PromptBuilderError, Resolution,
    SubmitRequest,
};
pub use provider_config::{DEFAULT_TIMEOUT, EndpointShape, ProviderConfig};
pub use remix::{RemixConfig, RemixOverride, RemixResult, RemixSource};
