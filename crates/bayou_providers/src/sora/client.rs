//! Adapter for sora-style providers.

use crate::{HttpTransport, endpoint_url};
use crate::sora::{SORA_MODEL, SoraAccepted, SoraJobStatus, SoraRequest};
use crate::status::{self, error_detail, lenient_number, normalize_status, parse_success};
use async_trait::async_trait;
use bayou_core::{Job, JobStatus, ProviderConfig, SubmitRequest};
use bayou_error::{ProviderError, ProviderErrorKind, ProviderResult};
use bayou_interface::VideoProvider;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for the sora dialect.
///
/// A submission may be answered with the finished `video_url` straight
/// away, in which case the job is already `Completed`. Otherwise the
/// `job_id` is polled at `sora/jobs/{job_id}`.
#[derive(Clone)]
pub struct SoraClient {
    transport: Arc<dyn HttpTransport>,
}

impl SoraClient {
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
    ) -> ProviderResult<SoraRequest> {
        SoraRequest::builder()
            .model(config.model().unwrap_or(SORA_MODEL))
            .prompt(request.prompt().as_str())
            .seconds(request.duration_seconds().seconds())
            .size(request.resolution().frame_size())
            .build()
            .map_err(|e| ProviderError::invalid_request(format!("Failed to build request: {}", e)))
    }
}

impl std::fmt::Debug for SoraClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoraClient").finish_non_exhaustive()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[async_trait]
impl VideoProvider for SoraClient {
    #[instrument(skip_all, fields(base_url = config.base_url()))]
    async fn submit(&self, request: &SubmitRequest, config: &ProviderConfig) -> ProviderResult<Job> {
        let body = Self::request_body(request, config)?;
        let body = serde_json::to_value(&body).map_err(|e| {
            ProviderError::invalid_request(format!("Failed to serialize request: {}", e))
        })?;
        let url = endpoint_url(config.base_url(), &["sora", "generations"])?;
        debug!(url = %url, "Submitting sora generation");

        let response = self
            .transport
            .post_json(&url, config.api_key(), &body, config.timeout())
            .await?;
        let accepted: SoraAccepted = parse_success(&response)?;

        match (non_blank(accepted.video_url()), accepted.job_id()) {
            (Some(video_url), job_id) => {
                debug!(video_url, "Sora answered with a finished video");
                Ok(Job::completed(job_id.unwrap_or_default(), video_url))
            }
            (None, Some(job_id)) => {
                debug!(job_id = %job_id, "Sora job queued");
                Ok(Job::queued(job_id))
            }
            (None, None) => Err(ProviderError::new(ProviderErrorKind::Unknown(format!(
                "Submission answer carried neither job id nor video URL: {}",
                status::truncate(&response.body, status::MAX_ERROR_BODY_CHARS)
            )))),
        }
    }

    #[instrument(skip(self, config), fields(base_url = config.base_url()))]
    async fn poll(&self, task_id: &str, config: &ProviderConfig) -> ProviderResult<JobStatus> {
        let url = endpoint_url(config.base_url(), &["sora", "jobs", task_id])?;
        debug!(url = %url, "Polling sora job");

        let response = self
            .transport
            .get(&url, config.api_key(), config.timeout())
            .await?;
        let polled: SoraJobStatus = parse_success(&response)?;

        let job = normalize_status(
            task_id,
            polled.status().as_ref(),
            non_blank(polled.video_url()).map(str::to_string),
            error_detail(polled.error().as_ref()),
        );
        debug!(state = %job.state(), "Polled sora job");

        Ok(JobStatus::new(
            job,
            lenient_number(polled.processing_time().as_ref()),
            lenient_number(polled.credits_used().as_ref()),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "sora"
    }
}
