//! Trait definitions for video-generation providers.

use async_trait::async_trait;
use bayou_core::{Job, JobStatus, ProviderConfig, SubmitRequest};
use bayou_error::ProviderResult;

/// Submit/poll capability shared by every provider dialect.
///
/// Each call is one network round trip. Implementations hold no job state
/// and never retry; the returned values are normalized from the provider's
/// own response shape.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Submit a generation job.
    ///
    /// Returns the provider-assigned task id with the initial state, which is
    /// `Queued` for asynchronous providers or `Completed` when the provider
    /// answers with the result directly.
    async fn submit(&self, request: &SubmitRequest, config: &ProviderConfig)
    -> ProviderResult<Job>;

    /// Fetch the current status of a previously submitted job.
    async fn poll(&self, task_id: &str, config: &ProviderConfig) -> ProviderResult<JobStatus>;

    /// Provider dialect name (e.g., "sora", "video_generations").
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<P: VideoProvider + ?Sized> VideoProvider for std::sync::Arc<P> {
    async fn submit(
        &self,
        request: &SubmitRequest,
        config: &ProviderConfig,
    ) -> ProviderResult<Job> {
        (**self).submit(request, config).await
    }

    async fn poll(&self, task_id: &str, config: &ProviderConfig) -> ProviderResult<JobStatus> {
        (**self).poll(task_id, config).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
