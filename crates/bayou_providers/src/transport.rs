//! HTTP seam between the provider adapters and the network.

use async_trait::async_trait;
use bayou_core::DEFAULT_TIMEOUT;
use bayou_error::{ProviderError, ProviderErrorKind, ProviderResult};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// An HTTP answer before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl RawResponse {
    /// Creates a raw response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Appends path segments to a base URL, percent-encoding each one.
///
/// A segment containing `/`, `?` or `#` stays a single segment.
///
/// # Errors
///
/// Returns `InvalidRequest` if the base URL does not parse or cannot carry a
/// path.
pub fn endpoint_url(base_url: &str, segments: &[&str]) -> ProviderResult<String> {
    let mut url = reqwest::Url::parse(base_url).map_err(|e| {
        ProviderError::invalid_request(format!("Invalid base URL '{}': {}", base_url, e))
    })?;
    url.path_segments_mut()
        .map_err(|_| {
            ProviderError::invalid_request(format!("Base URL '{}' cannot carry a path", base_url))
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url.into())
}

/// Minimal HTTP capability the adapters need.
///
/// Implementations map transport failures to `Timeout` or `ConnectionError`
/// and return every HTTP answer, successful or not, as a [`RawResponse`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST a JSON body with bearer authentication.
    async fn post_json(
        &self,
        url: &str,
        api_key: &str,
        body: &serde_json::Value,
        timeout: Duration,
    ) -> ProviderResult<RawResponse>;

    /// GET with bearer authentication.
    async fn get(&self, url: &str, api_key: &str, timeout: Duration)
    -> ProviderResult<RawResponse>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport whose client gives up after the default timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError` if the HTTP client cannot be initialized.
    #[instrument]
    pub fn new() -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| {
                ProviderError::new(ProviderErrorKind::ConnectionError(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn read(
        result: Result<reqwest::Response, reqwest::Error>,
    ) -> ProviderResult<RawResponse> {
        let response = result.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        debug!(status, bytes = body.len(), "Received provider response");
        Ok(RawResponse { status, body })
    }
}

fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::new(ProviderErrorKind::Timeout(format!("Request timed out: {}", e)))
    } else {
        ProviderError::new(ProviderErrorKind::ConnectionError(format!(
            "Request failed: {}",
            e
        )))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, api_key, body))]
    async fn post_json(
        &self,
        url: &str,
        api_key: &str,
        body: &serde_json::Value,
        timeout: Duration,
    ) -> ProviderResult<RawResponse> {
        let result = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .timeout(timeout)
            .json(body)
            .send()
            .await;
        Self::read(result).await
    }

    #[instrument(skip(self, api_key))]
    async fn get(
        &self,
        url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> ProviderResult<RawResponse> {
        let result = self
            .client
            .get(url)
            .bearer_auth(api_key)
            .timeout(timeout)
            .send()
            .await;
        Self::read(result).await
    }
}
