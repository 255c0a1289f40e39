//! Prompt composition errors.

/// Prompt composition error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PromptErrorKind {
    /// Caller input was missing or malformed
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),

    /// An option bank pool cannot be drawn from
    #[display("Invalid option bank: {}", _0)]
    InvalidBank(String),

    /// A value fell outside the provider-accepted set
    #[display("Invalid value for '{}': {}", field, reason)]
    InvalidValue {
        /// The field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Prompt composition error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Prompt Error: {} at {}:{}", kind, file, line)]
pub struct PromptError {
    /// The specific error kind
    pub kind: PromptErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl PromptError {
    /// Create a new prompt error.
    #[track_caller]
    pub fn new(kind: PromptErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PromptErrorKind {
        &self.kind
    }
}

/// Result type for prompt composition.
pub type PromptResult<T> = Result<T, PromptError>;
