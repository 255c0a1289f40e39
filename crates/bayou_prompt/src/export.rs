//! Export of generated prompts.

use bayou_core::ExportEnvelope;
use bayou_error::JsonError;
use serde::Serialize;

/// Wraps any serializable content in an export envelope stamped with the
/// current time.
///
/// # Errors
///
/// Returns an error if the content cannot be represented as JSON.
///
/// # Examples
///
/// ```
/// use bayou_prompt::export_prompts;
/// use serde_json::json;
///
/// let envelope = export_prompts("bayou", "n", &json!({"a": 1})).unwrap();
/// assert_eq!(envelope.meta().notes(), "n");
/// assert_eq!(envelope.prompts(), &json!({"a": 1}));
/// ```
pub fn export_prompts<T: Serialize + ?Sized>(
    creator: &str,
    notes: &str,
    content: &T,
) -> Result<ExportEnvelope, JsonError> {
    let prompts = serde_json::to_value(content)
        .map_err(|e| JsonError::new(format!("Failed to convert prompts to JSON: {}", e)))?;
    Ok(ExportEnvelope::new(creator, notes, prompts))
}
