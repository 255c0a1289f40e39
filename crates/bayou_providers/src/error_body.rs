//! Error shape returned across the service boundary.

use bayou_error::{BayouError, BayouErrorKind, ProviderError};
use serde::{Deserialize, Serialize};

/// `{kind, message}` with a stable snake_case kind.
///
/// # Examples
///
/// ```
/// use bayou_error::{ProviderError, ProviderErrorKind};
/// use bayou_providers::ErrorBody;
///
/// let err = ProviderError::new(ProviderErrorKind::Unauthorized("bad key".to_string()));
/// let body = ErrorBody::from(&err);
///
/// assert_eq!(body.kind, "unauthorized");
/// assert_eq!(body.message, "bad key");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error category, e.g. `rate_limited`
    pub kind: String,
    /// Human-readable detail
    pub message: String,
}

impl From<&ProviderError> for ErrorBody {
    fn from(error: &ProviderError) -> Self {
        Self {
            kind: error.kind().name().to_string(),
            message: error.kind().message().to_string(),
        }
    }
}

impl From<&BayouError> for ErrorBody {
    fn from(error: &BayouError) -> Self {
        match error.kind() {
            BayouErrorKind::Provider(e) => Self::from(e),
            BayouErrorKind::Prompt(e) => Self {
                kind: "invalid_request".to_string(),
                message: e.kind().to_string(),
            },
            BayouErrorKind::Config(e) => Self {
                kind: "invalid_request".to_string(),
                message: e.message.clone(),
            },
            BayouErrorKind::Io(e) => Self {
                kind: "invalid_request".to_string(),
                message: e.message.clone(),
            },
            BayouErrorKind::Json(e) => Self {
                kind: "unknown".to_string(),
                message: e.message.clone(),
            },
        }
    }
}
