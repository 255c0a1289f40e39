//! Mock HTTP transport for adapter tests.

use async_trait::async_trait;
use bayou_error::{ProviderError, ProviderErrorKind, ProviderResult};
use bayou_providers::{HttpTransport, RawResponse};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One call the adapter made.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// "POST" or "GET"
    pub method: &'static str,
    pub url: String,
    pub api_key: String,
    pub body: Option<serde_json::Value>,
    pub timeout: Duration,
}

/// Replays canned answers in order and records every request.
#[derive(Clone)]
pub struct MockTransport {
    responses: Arc<Mutex<Vec<ProviderResult<RawResponse>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Answers with the given responses, one per call.
    pub fn new_sequence(responses: Vec<ProviderResult<RawResponse>>) -> Self {
        let mut responses = responses;
        responses.reverse();
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answers once with `status` and `body`.
    pub fn respond(status: u16, body: impl Into<String>) -> Self {
        Self::new_sequence(vec![Ok(RawResponse::new(status, body))])
    }

    /// Fails once with the given error kind.
    pub fn fail(kind: ProviderErrorKind) -> Self {
        Self::new_sequence(vec![Err(ProviderError::new(kind))])
    }

    /// Number of requests made.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request made so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self, request: RecordedRequest) -> ProviderResult<RawResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses.lock().unwrap().pop().unwrap_or_else(|| {
            Err(ProviderError::new(ProviderErrorKind::ConnectionError(
                "Mock sequence exhausted".to_string(),
            )))
        })
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post_json(
        &self,
        url: &str,
        api_key: &str,
        body: &serde_json::Value,
        timeout: Duration,
    ) -> ProviderResult<RawResponse> {
        self.next_response(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            api_key: api_key.to_string(),
            body: Some(body.clone()),
            timeout,
        })
    }

    async fn get(
        &self,
        url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> ProviderResult<RawResponse> {
        self.next_response(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            api_key: api_key.to_string(),
            body: None,
            timeout,
        })
    }
}
