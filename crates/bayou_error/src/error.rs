//! Top-level error wrapper types.

use crate::{ConfigError, IoError, JsonError, PromptError, ProviderError};

/// Every error a Bayou operation can produce.
///
/// # Examples
///
/// ```
/// use bayou_error::{BayouError, ConfigError};
///
/// let err: BayouError = ConfigError::new("missing base_url").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BayouErrorKind {
    /// Video provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Prompt composition error
    #[from(PromptError)]
    Prompt(PromptError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Local file error
    #[from(IoError)]
    Io(IoError),
}

/// Bayou error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Bayou Error: {}", _0)]
pub struct BayouError(Box<BayouErrorKind>);

impl BayouError {
    /// Create a new error from a kind.
    pub fn new(kind: BayouErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BayouErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to BayouErrorKind
impl<T> From<T> for BayouError
where
    T: Into<BayouErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Bayou operations.
pub type BayouResult<T> = std::result::Result<T, BayouError>;
