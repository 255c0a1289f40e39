//! Mock video provider for job client tests.

use async_trait::async_trait;
use bayou_core::{Job, JobStatus, ProviderConfig, SubmitRequest};
use bayou_error::{ProviderError, ProviderErrorKind, ProviderResult};
use bayou_interface::VideoProvider;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A single mock answer.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Answer submit with this job
    Submitted(Job),
    /// Answer poll with this status
    Polled(JobStatus),
    /// Fail with this error
    Error(ProviderErrorKind),
}

/// Provider that replays answers and counts calls.
pub struct MockProvider {
    responses: Vec<MockResponse>,
    call_count: Arc<Mutex<usize>>,
    seen_keys: Arc<Mutex<Vec<String>>>,
    delay: Duration,
}

impl MockProvider {
    /// Replays the given answers in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses,
            call_count: Arc::new(Mutex::new(0)),
            seen_keys: Arc::new(Mutex::new(Vec::new())),
            delay: Duration::from_millis(1),
        }
    }

    /// Always answers submit with a queued job.
    pub fn new_queued(task_id: &str) -> Self {
        Self::new_sequence(vec![MockResponse::Submitted(Job::queued(task_id))])
    }

    /// Waits this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of submit and poll calls.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// API keys the provider was called with.
    pub fn seen_keys(&self) -> Vec<String> {
        self.seen_keys.lock().unwrap().clone()
    }

    fn next_response(&self, config: &ProviderConfig) -> MockResponse {
        self.seen_keys.lock().unwrap().push(config.api_key().to_string());
        let mut count = self.call_count.lock().unwrap();
        let current = *count;
        *count += 1;
        self.responses.get(current).cloned().unwrap_or_else(|| {
            MockResponse::Error(ProviderErrorKind::Unknown(format!(
                "Mock sequence exhausted (call {} beyond {} responses)",
                current + 1,
                self.responses.len()
            )))
        })
    }
}

#[async_trait]
impl VideoProvider for MockProvider {
    async fn submit(&self, _request: &SubmitRequest, config: &ProviderConfig) -> ProviderResult<Job> {
        tokio::time::sleep(self.delay).await;
        match self.next_response(config) {
            MockResponse::Submitted(job) => Ok(job),
            MockResponse::Polled(status) => Ok(status.job().clone()),
            MockResponse::Error(kind) => Err(ProviderError::new(kind)),
        }
    }

    async fn poll(&self, _task_id: &str, config: &ProviderConfig) -> ProviderResult<JobStatus> {
        tokio::time::sleep(self.delay).await;
        match self.next_response(config) {
            MockResponse::Submitted(job) => Ok(JobStatus::from(job)),
            MockResponse::Polled(status) => Ok(status),
            MockResponse::Error(kind) => Err(ProviderError::new(kind)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
