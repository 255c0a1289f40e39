//! The sora dialect.

mod client;
mod dto;

pub use client::SoraClient;
pub use dto::{SORA_MODEL, SoraAccepted, SoraJobStatus, SoraRequest, SoraRequestBuilder};
