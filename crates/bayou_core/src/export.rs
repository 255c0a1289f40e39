//! Export envelope for generated prompts.

use bayou_error::JsonError;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Who exported what, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ExportMeta {
    /// Name of the exporting user or tool
    creator: String,
    /// Export timestamp (UTC)
    generated_at: DateTime<Utc>,
    /// Free-form notes
    notes: String,
}

/// Exported prompts wrapped with metadata.
///
/// `prompts` is opaque: whatever JSON was supplied comes back unchanged.
///
/// # Examples
///
/// ```
/// use bayou_core::ExportEnvelope;
/// use serde_json::json;
///
/// let envelope = ExportEnvelope::new("bayou", "first batch", json!({"a": 1}));
/// let text = envelope.to_json().unwrap();
/// let back = ExportEnvelope::from_json(&text).unwrap();
///
/// assert_eq!(back.prompts(), &json!({"a": 1}));
/// assert_eq!(back.meta().notes(), "first batch");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ExportEnvelope {
    /// Export metadata
    meta: ExportMeta,
    /// Exported content, untouched
    prompts: serde_json::Value,
}

impl ExportEnvelope {
    /// Wraps content, stamping the current time.
    pub fn new(
        creator: impl Into<String>,
        notes: impl Into<String>,
        prompts: serde_json::Value,
    ) -> Self {
        Self::at(creator, notes, prompts, Utc::now())
    }

    /// Wraps content with an explicit timestamp.
    pub fn at(
        creator: impl Into<String>,
        notes: impl Into<String>,
        prompts: serde_json::Value,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            meta: ExportMeta {
                creator: creator.into(),
                generated_at,
                notes: notes.into(),
            },
            prompts,
        }
    }

    /// Serializes the envelope as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be serialized.
    #[track_caller]
    pub fn to_json(&self) -> Result<String, JsonError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JsonError::new(format!("Failed to serialize export: {}", e)))
    }

    /// Parses an envelope produced by [`ExportEnvelope::to_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid envelope.
    #[track_caller]
    pub fn from_json(text: &str) -> Result<Self, JsonError> {
        serde_json::from_str(text)
            .map_err(|e| JsonError::new(format!("Failed to parse export: {}", e)))
    }
}
