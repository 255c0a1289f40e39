//! Test utilities for provider tests.
//!
//! Mock transports and providers that record their calls.

#![allow(dead_code)]

pub mod mock_provider;
pub mod mock_transport;

#[allow(unused_imports)]
pub use mock_provider::{MockProvider, MockResponse};
#[allow(unused_imports)]
pub use mock_transport::{MockTransport, RecordedRequest};

use bayou_core::{ClipDuration, EndpointShape, ProviderConfig, Resolution, SubmitRequest};

/// Base URL used by every test config.
pub const BASE_URL: &str = "https://video.test/v1";

/// A config with a key, for the given dialect.
pub fn test_config(shape: EndpointShape) -> ProviderConfig {
    ProviderConfig::new(shape, BASE_URL).with_api_key("test-key")
}

/// A submit request with non-blank text.
pub fn test_request() -> SubmitRequest {
    SubmitRequest::new(
        "Scene: Inside a Waffle House at 3AM after a failed heist.",
        ClipDuration::ELEVEN,
        Resolution::default(),
    )
}
