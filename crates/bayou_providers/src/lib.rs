//! Text-to-video provider adapters and job client for Bayou.
//!
//! Two provider dialects sit behind the [`VideoProvider`] trait:
//!
//! - **video_generations**: `POST video/generations` returns a `task_id`,
//!   polled at `video/generations/{task_id}`
//! - **sora**: `POST sora/generations` returns either the finished
//!   `video_url` or a `job_id`, polled at `sora/jobs/{job_id}`
//!
//! [`ProviderAdapter`] picks one from an [`EndpointShape`]; [`JobClient`]
//! validates inputs, resolves the API key and makes exactly one call.
//!
//! [`VideoProvider`]: bayou_interface::VideoProvider
//! [`EndpointShape`]: bayou_core::EndpointShape

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod adapter;
mod config;
mod error_body;
mod job_client;
mod metrics;
pub mod sora;
pub mod status;
mod transport;
pub mod video_generations;

pub use adapter::ProviderAdapter;
pub use config::{BayouConfig, DefaultsConfig, ProviderProfile};
pub use error_body::ErrorBody;
pub use job_client::{DEFAULT_API_KEY_ENV, JobClient};
pub use metrics::VideoMetrics;
pub use sora::SoraClient;
pub use transport::{HttpTransport, RawResponse, ReqwestTransport, endpoint_url};
pub use video_generations::VideoGenerationsClient;
