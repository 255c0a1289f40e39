//! Selection of a provider dialect from configuration.

use crate::{HttpTransport, ReqwestTransport, SoraClient, VideoGenerationsClient};
use async_trait::async_trait;
use bayou_core::{EndpointShape, Job, JobStatus, ProviderConfig, SubmitRequest};
use bayou_error::ProviderResult;
use bayou_interface::VideoProvider;
use std::sync::Arc;

/// The closed set of provider dialects.
///
/// # Examples
///
/// ```
/// use bayou_core::EndpointShape;
/// use bayou_interface::VideoProvider;
/// use bayou_providers::ProviderAdapter;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let adapter = ProviderAdapter::connect(EndpointShape::Sora)?;
/// assert_eq!(adapter.provider_name(), "sora");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub enum ProviderAdapter {
    /// `video/generations` answering with a task id
    VideoGenerations(VideoGenerationsClient),
    /// `sora/generations` answering with a video URL or a job id
    Sora(SoraClient),
}

impl ProviderAdapter {
    /// Builds the adapter for `shape` over the given transport.
    pub fn for_shape(shape: EndpointShape, transport: Arc<dyn HttpTransport>) -> Self {
        match shape {
            EndpointShape::VideoGenerations => {
                ProviderAdapter::VideoGenerations(VideoGenerationsClient::new(transport))
            }
            EndpointShape::Sora => ProviderAdapter::Sora(SoraClient::new(transport)),
        }
    }

    /// Builds the adapter for `shape` over a fresh `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError` if the HTTP client cannot be initialized.
    pub fn connect(shape: EndpointShape) -> ProviderResult<Self> {
        Ok(Self::for_shape(shape, Arc::new(ReqwestTransport::new()?)))
    }

    fn inner(&self) -> &dyn VideoProvider {
        match self {
            ProviderAdapter::VideoGenerations(client) => client,
            ProviderAdapter::Sora(client) => client,
        }
    }
}

#[async_trait]
impl VideoProvider for ProviderAdapter {
    async fn submit(&self, request: &SubmitRequest, config: &ProviderConfig) -> ProviderResult<Job> {
        self.inner().submit(request, config).await
    }

    async fn poll(&self, task_id: &str, config: &ProviderConfig) -> ProviderResult<JobStatus> {
        self.inner().poll(task_id, config).await
    }

    fn provider_name(&self) -> &'static str {
        self.inner().provider_name()
    }
}
