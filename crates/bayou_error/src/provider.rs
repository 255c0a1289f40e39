//! Video provider errors.

/// Failure modes of a submit or poll against a video-generation provider.
///
/// None of these are retried by the library; callers decide what to do with
/// `RateLimited` or `Timeout`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Missing prompt, missing API key or malformed input. Never reaches the network.
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),

    /// Provider rejected the credentials (HTTP 401)
    #[display("Unauthorized: {}", _0)]
    Unauthorized(String),

    /// Provider backpressure (HTTP 429)
    #[display("Rate limited: {}", _0)]
    RateLimited(String),

    /// Transport or caller deadline exceeded
    #[display("Timed out: {}", _0)]
    Timeout(String),

    /// Transport-level failure before a response arrived
    #[display("Connection error: {}", _0)]
    ConnectionError(String),

    /// Any other non-2xx answer
    #[display("Provider failure (HTTP {}): {}", status, message)]
    ProviderFailure {
        /// HTTP status code
        status: u16,
        /// Provider body, verbatim when structured, truncated otherwise
        message: String,
    },

    /// Response did not match any recognized shape
    #[display("Unrecognized provider response: {}", _0)]
    Unknown(String),
}

impl ProviderErrorKind {
    /// Stable snake_case name used at the service boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use bayou_error::ProviderErrorKind;
    ///
    /// let kind = ProviderErrorKind::RateLimited("slow down".to_string());
    /// assert_eq!(kind.name(), "rate_limited");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            ProviderErrorKind::InvalidRequest(_) => "invalid_request",
            ProviderErrorKind::Unauthorized(_) => "unauthorized",
            ProviderErrorKind::RateLimited(_) => "rate_limited",
            ProviderErrorKind::Timeout(_) => "timeout",
            ProviderErrorKind::ConnectionError(_) => "connection_error",
            ProviderErrorKind::ProviderFailure { .. } => "provider_failure",
            ProviderErrorKind::Unknown(_) => "unknown",
        }
    }

    /// The human-readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            ProviderErrorKind::InvalidRequest(msg)
            | ProviderErrorKind::Unauthorized(msg)
            | ProviderErrorKind::RateLimited(msg)
            | ProviderErrorKind::Timeout(msg)
            | ProviderErrorKind::ConnectionError(msg)
            | ProviderErrorKind::Unknown(msg) => msg,
            ProviderErrorKind::ProviderFailure { message, .. } => message,
        }
    }
}

/// Video provider error with location tracking.
///
/// # Examples
///
/// ```
/// use bayou_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::Timeout("30s elapsed".to_string()));
/// assert_eq!(err.kind().name(), "timeout");
/// assert!(format!("{}", err).contains("30s elapsed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at {}:{}", kind, file, line)]
pub struct ProviderError {
    /// The specific error kind
    pub kind: ProviderErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new provider error.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for a locally detected `InvalidRequest`.
    #[track_caller]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidRequest(message.into()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProviderErrorKind {
        &self.kind
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
