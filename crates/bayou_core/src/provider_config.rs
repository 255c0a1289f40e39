//! Per-call provider settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-request budget for a provider round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which request/response dialect a provider speaks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EndpointShape {
    /// Generic `video/generations` endpoint answering with a `task_id`
    #[default]
    VideoGenerations,
    /// Sora-style endpoint answering with a direct `video_url` or a `job_id`
    Sora,
}

/// Credentials and location of one video-generation provider.
///
/// Passed into every submit and poll; never stored globally. The `Debug`
/// output redacts the API key.
///
/// # Examples
///
/// ```
/// use bayou_core::{EndpointShape, ProviderConfig};
///
/// let config = ProviderConfig::new(EndpointShape::Sora, "https://api.example.com/v1")
///     .with_api_key("sk-secret");
///
/// assert!(config.has_api_key());
/// assert!(!format!("{:?}", config).contains("sk-secret"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    api_key: String,
    base_url: String,
    endpoint_shape: EndpointShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(default = "default_timeout", with = "timeout_secs")]
    timeout: Duration,
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl ProviderConfig {
    /// Creates a config without an API key, using the default timeout.
    pub fn new(endpoint_shape: EndpointShape, base_url: impl Into<String>) -> Self {
        Self {
            api_key: String::new(),
            base_url: base_url.into(),
            endpoint_shape,
            model: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Overrides the adapter's default model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The API key, possibly empty.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Whether a non-blank API key is present.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Dialect this provider speaks.
    pub fn endpoint_shape(&self) -> EndpointShape {
        self.endpoint_shape
    }

    /// Model override, if any.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.has_api_key() { "<redacted>" } else { "<unset>" };
        f.debug_struct("ProviderConfig")
            .field("api_key", &api_key)
            .field("base_url", &self.base_url)
            .field("endpoint_shape", &self.endpoint_shape)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

mod timeout_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(timeout: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(timeout.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
