//! Wire types for the `video/generations` dialect.

use crate::status::lenient_id;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aspect ratio sent with every request.
pub const ASPECT_RATIO: &str = "16:9";

/// Model used when the provider profile names none.
pub const DEFAULT_MODEL: &str = "sora-2";

/// Body of `POST {base}/video/generations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct VideoGenerationRequest {
    /// Model identifier
    model: String,
    /// Rendered prompt text
    prompt: String,
    /// Clip length in whole seconds
    duration: u32,
    /// Resolution tier, e.g. "720p"
    resolution: String,
    /// Aspect ratio
    #[builder(default = "ASPECT_RATIO.to_string()")]
    aspect_ratio: String,
}

impl VideoGenerationRequest {
    /// Creates a new builder for `VideoGenerationRequest`.
    pub fn builder() -> VideoGenerationRequestBuilder {
        VideoGenerationRequestBuilder::default()
    }
}

/// Answer to a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct VideoGenerationAccepted {
    #[serde(default)]
    #[getter(skip)]
    task_id: Option<Value>,
    #[serde(default)]
    #[getter(skip)]
    id: Option<Value>,
    /// Initial status, if the provider reports one
    #[serde(default)]
    status: Option<Value>,
}

impl VideoGenerationAccepted {
    /// Provider task id: `task_id`, else `id`, as text or number.
    pub fn task_id(&self) -> Option<String> {
        lenient_id(self.task_id.as_ref()).or_else(|| lenient_id(self.id.as_ref()))
    }
}

/// Answer to `GET {base}/video/generations/{task_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct VideoGenerationStatus {
    #[serde(default)]
    #[getter(skip)]
    task_id: Option<Value>,
    #[serde(default)]
    #[getter(skip)]
    id: Option<Value>,
    /// Provider status, normally a string
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    #[getter(skip)]
    video_url: Option<String>,
    #[serde(default)]
    #[getter(skip)]
    result_url: Option<String>,
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

impl VideoGenerationStatus {
    /// Echoed task id: `task_id`, else `id`, as text or number.
    pub fn task_id(&self) -> Option<String> {
        lenient_id(self.task_id.as_ref()).or_else(|| lenient_id(self.id.as_ref()))
    }

    /// Result location, under whichever key the provider used.
    pub fn output_url(&self) -> Option<&str> {
        self.video_url
            .as_deref()
            .or(self.result_url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }
}
