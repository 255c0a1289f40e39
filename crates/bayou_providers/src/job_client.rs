//! Validated submit and poll on top of a provider adapter.

use crate::VideoMetrics;
use bayou_core::{Job, JobStatus, ProviderConfig, SubmitRequest};
use bayou_error::{ProviderError, ProviderErrorKind, ProviderResult};
use bayou_interface::VideoProvider;
use std::borrow::Cow;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Environment variable consulted when a config carries no API key.
pub const DEFAULT_API_KEY_ENV: &str = "BAYOU_VIDEO_API_KEY";

/// Checks inputs locally, then makes exactly one provider call.
///
/// The client keeps no job registry and never retries: every status it
/// returns is whatever the provider said on that call.
///
/// # Examples
///
/// ```no_run
/// use bayou_core::{ClipDuration, EndpointShape, ProviderConfig, Resolution, SubmitRequest};
/// use bayou_providers::{JobClient, ProviderAdapter};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ProviderConfig::new(EndpointShape::Sora, "https://api.example.com/v1")
///     .with_api_key("sk-...");
/// let client = JobClient::new(ProviderAdapter::connect(config.endpoint_shape())?);
///
/// let request = SubmitRequest::new(
///     "Scene: A foggy bayou shack glowing with neon lights.",
///     ClipDuration::TEN,
///     Resolution::default(),
/// );
/// let job = client.submit(&request, &config).await?;
/// let status = client.poll(job.external_task_id(), &config).await?;
/// println!("{}", status.state());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JobClient<P> {
    provider: P,
    api_key_env: String,
}

impl<P: VideoProvider> JobClient<P> {
    /// Wraps an adapter, falling back to [`DEFAULT_API_KEY_ENV`] for keys.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }

    /// Changes the fallback environment variable for API keys.
    pub fn with_api_key_env(mut self, name: impl Into<String>) -> Self {
        self.api_key_env = name.into();
        self
    }

    /// The wrapped adapter.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Submits a job.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` without contacting the provider when the
    /// prompt is blank or no API key is available. Otherwise returns the
    /// adapter's error unchanged.
    #[instrument(skip_all, fields(provider = self.provider.provider_name()))]
    pub async fn submit(
        &self,
        request: &SubmitRequest,
        config: &ProviderConfig,
    ) -> ProviderResult<Job> {
        if request.prompt().trim().is_empty() {
            return Err(ProviderError::invalid_request("Prompt text is empty"));
        }
        let config = self.with_key(config)?;

        let start = Instant::now();
        let result = self.provider.submit(request, &config).await;
        let elapsed = start.elapsed().as_secs_f64();

        let metrics = VideoMetrics::get();
        match &result {
            Ok(job) => {
                debug!(task_id = %job.external_task_id(), state = %job.state(), "Job submitted");
                metrics.record_submit(self.provider.provider_name(), job.state().as_ref(), elapsed);
            }
            Err(e) => self.record_failure("submit", e),
        }
        result
    }

    /// Polls a job once.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` without contacting the provider when the task
    /// id is blank or no API key is available. Otherwise returns the
    /// adapter's error unchanged.
    #[instrument(skip(self, config), fields(provider = self.provider.provider_name()))]
    pub async fn poll(&self, task_id: &str, config: &ProviderConfig) -> ProviderResult<JobStatus> {
        if task_id.trim().is_empty() {
            return Err(ProviderError::invalid_request("Task id is empty"));
        }
        let config = self.with_key(config)?;

        let start = Instant::now();
        let result = self.provider.poll(task_id, &config).await;
        let elapsed = start.elapsed().as_secs_f64();

        let metrics = VideoMetrics::get();
        match &result {
            Ok(status) => {
                debug!(state = %status.state(), "Job polled");
                metrics.record_poll(self.provider.provider_name(), status.state().as_ref(), elapsed);
            }
            Err(e) => self.record_failure("poll", e),
        }
        result
    }

    /// Submits a job, giving up once `deadline` passes.
    ///
    /// # Errors
    ///
    /// As [`JobClient::submit`], plus `Timeout` when the deadline elapses.
    pub async fn submit_within(
        &self,
        request: &SubmitRequest,
        config: &ProviderConfig,
        deadline: Duration,
    ) -> ProviderResult<Job> {
        match tokio::time::timeout(deadline, self.submit(request, config)).await {
            Ok(result) => result,
            Err(_) => Err(self.deadline_exceeded("submit", deadline)),
        }
    }

    /// Polls a job, giving up once `deadline` passes.
    ///
    /// # Errors
    ///
    /// As [`JobClient::poll`], plus `Timeout` when the deadline elapses.
    pub async fn poll_within(
        &self,
        task_id: &str,
        config: &ProviderConfig,
        deadline: Duration,
    ) -> ProviderResult<JobStatus> {
        match tokio::time::timeout(deadline, self.poll(task_id, config)).await {
            Ok(result) => result,
            Err(_) => Err(self.deadline_exceeded("poll", deadline)),
        }
    }

    fn with_key<'a>(&self, config: &'a ProviderConfig) -> ProviderResult<Cow<'a, ProviderConfig>> {
        if config.has_api_key() {
            return Ok(Cow::Borrowed(config));
        }
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => {
                debug!(env = %self.api_key_env, "Using API key from environment");
                Ok(Cow::Owned(config.clone().with_api_key(key)))
            }
            _ => Err(ProviderError::invalid_request(format!(
                "No API key configured and {} is not set",
                self.api_key_env
            ))),
        }
    }

    fn record_failure(&self, operation: &str, error: &ProviderError) {
        warn!(operation, error = %error, "Provider call failed");
        VideoMetrics::get().record_error(
            self.provider.provider_name(),
            operation,
            error.kind().name(),
        );
    }

    #[track_caller]
    fn deadline_exceeded(&self, operation: &str, deadline: Duration) -> ProviderError {
        let error = ProviderError::new(ProviderErrorKind::Timeout(format!(
            "{} did not finish within {:?}",
            operation, deadline
        )));
        self.record_failure(operation, &error);
        error
    }
}
