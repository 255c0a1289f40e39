//! Adapter for providers exposing `video/generations`.

use crate::status::{self, error_detail, lenient_number, normalize_status, parse_success};
use crate::video_generations::{
    DEFAULT_MODEL, VideoGenerationAccepted, VideoGenerationRequest, VideoGenerationStatus,
};
use crate::{HttpTransport, endpoint_url};
use async_trait::async_trait;
use bayou_core::{Job, JobStatus, ProviderConfig, SubmitRequest};
use bayou_error::{ProviderError, ProviderErrorKind, ProviderResult};
use bayou_interface::VideoProvider;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for the `video/generations` dialect.
///
/// Submission answers with a `task_id` and the job starts `Queued`; the
/// result is fetched by polling `video/generations/{task_id}`.
#[derive(Clone)]
pub struct VideoGenerationsClient {
    transport: Arc<dyn HttpTransport>,
}

impl VideoGenerationsClient {
    /// Creates a client over the given transport.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Builds the outbound request body.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the body cannot be assembled.
    pub fn request_body(
        request: &SubmitRequest,
        config: &ProviderConfig,
    ) -> ProviderResult<VideoGenerationRequest> {
        VideoGenerationRequest::builder()
            .model(config.model().unwrap_or(DEFAULT_MODEL))
            .prompt(request.prompt().as_str())
            .duration(request.duration_seconds().seconds())
            .resolution(request.resolution().tier_label())
            .build()
            .map_err(|e| ProviderError::invalid_request(format!("Failed to build request: {}", e)))
    }
}

impl std::fmt::Debug for VideoGenerationsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoGenerationsClient").finish_non_exhaustive()
    }
}

#[async_trait]
impl VideoProvider for VideoGenerationsClient {
    #[instrument(skip_all, fields(base_url = config.base_url()))]
    async fn submit(&self, request: &SubmitRequest, config: &ProviderConfig) -> ProviderResult<Job> {
        let body = Self::request_body(request, config)?;
        let body = serde_json::to_value(&body).map_err(|e| {
            ProviderError::invalid_request(format!("Failed to serialize request: {}", e))
        })?;
        let url = endpoint_url(config.base_url(), &["video", "generations"])?;
        debug!(url = %url, "Submitting video generation");

        let response = self
            .transport
            .post_json(&url, config.api_key(), &body, config.timeout())
            .await?;
        let accepted: VideoGenerationAccepted = parse_success(&response)?;

        match accepted.task_id() {
            Some(task_id) => {
                debug!(task_id = %task_id, "Video generation queued");
                Ok(Job::queued(task_id))
            }
            None => Err(ProviderError::new(ProviderErrorKind::Unknown(format!(
                "Submission answer carried no task id: {}",
                status::truncate(&response.body, status::MAX_ERROR_BODY_CHARS)
            )))),
        }
    }

    #[instrument(skip(self, config), fields(base_url = config.base_url()))]
    async fn poll(&self, task_id: &str, config: &ProviderConfig) -> ProviderResult<JobStatus> {
        let url = endpoint_url(config.base_url(), &["video", "generations", task_id])?;
        debug!(url = %url, "Polling video generation");

        let response = self
            .transport
            .get(&url, config.api_key(), config.timeout())
            .await?;
        let polled: VideoGenerationStatus = parse_success(&response)?;

        let job = normalize_status(
            task_id,
            polled.status().as_ref(),
            polled.output_url().map(str::to_string),
            error_detail(polled.error().as_ref()),
        );
        debug!(state = %job.state(), "Polled video generation");

        Ok(JobStatus::new(
            job,
            lenient_number(polled.processing_time().as_ref()),
            lenient_number(polled.credits_used().as_ref()),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "video_generations"
    }
}
