//! Wire types for the sora dialect.

use crate::status::lenient_id;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Model used when the provider profile names none.
pub const SORA_MODEL: &str = "sora-2";

/// Body of `POST {base}/sora/generations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct SoraRequest {
    /// Model identifier
    model: String,
    /// Rendered prompt text
    prompt: String,
    /// Clip length in whole seconds
    seconds: u32,
    /// Frame size, e.g. "1280x720"
    size: String,
    /// Ask the provider to strip its watermark
    #[builder(default = "true")]
    remove_watermark: bool,
}

impl SoraRequest {
    /// Creates a new builder for `SoraRequest`.
    pub fn builder() -> SoraRequestBuilder {
        SoraRequestBuilder::default()
    }
}

/// Answer to a submission: a finished video, a job to poll, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct SoraAccepted {
    #[serde(default)]
    #[getter(skip)]
    job_id: Option<Value>,
    #[serde(default)]
    #[getter(skip)]
    id: Option<Value>,
    /// Finished video
    #[serde(default)]
    video_url: Option<String>,
    /// Initial status, if reported
    #[serde(default)]
    status: Option<Value>,
}

impl SoraAccepted {
    /// Job to poll: `job_id`, else `id`, as text or number.
    pub fn job_id(&self) -> Option<String> {
        lenient_id(self.job_id.as_ref()).or_else(|| lenient_id(self.id.as_ref()))
    }
}

/// Answer to `GET {base}/sora/jobs/{job_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct SoraJobStatus {
    #[serde(default)]
    #[getter(skip)]
    job_id: Option<Value>,
    #[serde(default)]
    #[getter(skip)]
    id: Option<Value>,
    /// Provider status, normally a string
    #[serde(default)]
    status: Option<Value>,
    /// Finished video
    #[serde(default)]
    video_url: Option<String>,
    /// Error string or `{code, message}` object
    #[serde(default)]
    error: Option<Value>,
    /// Rendering time, number or text
    #[serde(default)]
    processing_time: Option<Value>,
    /// Credits charged, number or text
    #[serde(default)]
    credits_used: Option<Value>,
}

impl SoraJobStatus {
    /// Echoed job id: `job_id`, else `id`, as text or number.
    pub fn job_id(&self) -> Option<String> {
        lenient_id(self.job_id.as_ref()).or_else(|| lenient_id(self.id.as_ref()))
    }
}
