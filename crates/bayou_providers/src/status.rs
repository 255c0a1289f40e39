//! Interpretation of provider answers shared by every dialect.

use crate::RawResponse;
use bayou_core::{Job, JobErrorDetail, JobState};
use bayou_error::{ProviderError, ProviderErrorKind, ProviderResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Longest unstructured error body carried into an error message.
pub const MAX_ERROR_BODY_CHARS: usize = 512;

/// Maps a non-2xx answer to the error taxonomy.
///
/// JSON bodies are kept verbatim; anything else is cut to
/// [`MAX_ERROR_BODY_CHARS`] characters.
#[track_caller]
pub fn classify_failure(response: &RawResponse) -> ProviderError {
    let message = error_message(&response.body);
    let kind = match response.status {
        400 => ProviderErrorKind::InvalidRequest(message),
        401 => ProviderErrorKind::Unauthorized(message),
        429 => ProviderErrorKind::RateLimited(message),
        status => ProviderErrorKind::ProviderFailure { status, message },
    };
    ProviderError::new(kind)
}

fn error_message(body: &str) -> String {
    if serde_json::from_str::<Value>(body).is_ok() {
        body.to_string()
    } else {
        truncate(body, MAX_ERROR_BODY_CHARS)
    }
}

/// Keeps at most `max` characters of `text`.
pub fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Checks the status, then parses a 2xx body.
///
/// # Errors
///
/// Non-2xx answers are classified with [`classify_failure`]; a 2xx body that
/// does not parse fails with `Unknown`.
pub fn parse_success<T: DeserializeOwned>(response: &RawResponse) -> ProviderResult<T> {
    if !response.is_success() {
        return Err(classify_failure(response));
    }
    serde_json::from_str(&response.body).map_err(|e| {
        ProviderError::new(ProviderErrorKind::Unknown(format!(
            "Response body is not a recognized shape ({}): {}",
            e,
            truncate(&response.body, MAX_ERROR_BODY_CHARS)
        )))
    })
}

/// Reads a provider error field, which may be a string or an object.
pub fn error_detail(value: Option<&Value>) -> Option<JobErrorDetail> {
    match value? {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(JobErrorDetail::new(text.clone())),
        Value::Object(map) => {
            let message = map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| Value::Object(map.clone()).to_string());
            match map.get("code") {
                Some(Value::String(code)) => Some(JobErrorDetail::with_code(code.clone(), message)),
                Some(Value::Number(code)) => {
                    Some(JobErrorDetail::with_code(code.to_string(), message))
                }
                _ => Some(JobErrorDetail::new(message)),
            }
        }
        other => Some(JobErrorDetail::new(other.to_string())),
    }
}

/// Reads a number that providers send either as JSON number or as text.
pub fn lenient_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => text.trim().trim_end_matches('s').parse().ok(),
        _ => None,
    }
}

/// Reads an id that providers send either as text or as a number.
///
/// Blank text counts as absent.
pub fn lenient_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Builds a job from a polled status field.
///
/// A missing, unrecognized or non-text status yields an `Unknown` job with
/// an error detail explaining why.
pub fn normalize_status(
    task_id: &str,
    status: Option<&Value>,
    result_url: Option<String>,
    error: Option<JobErrorDetail>,
) -> Job {
    let raw = match status {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.as_str()).filter(|s| !s.trim().is_empty()),
        Some(other) => {
            warn!(task_id, status = %other, "Provider status is not text");
            let error = error.unwrap_or_else(|| {
                JobErrorDetail::new(format!("unrecognized provider status {}", other))
            });
            return Job::unknown(task_id, error);
        }
    };
    let Some(raw) = raw else {
        warn!(task_id, "Provider response carried no status");
        let error =
            error.unwrap_or_else(|| JobErrorDetail::new("provider response carried no status"));
        return Job::unknown(task_id, error);
    };

    let state = JobState::from_provider(raw);
    let error = match state {
        JobState::Unknown => {
            warn!(task_id, status = raw, "Unrecognized provider status");
            Some(error.unwrap_or_else(|| {
                JobErrorDetail::new(format!("unrecognized provider status '{}'", raw))
            }))
        }
        _ => error,
    };
    if state == JobState::Completed && result_url.is_none() {
        warn!(task_id, "Provider reports completion without a result URL");
    }

    Job::from_parts(task_id, state, result_url, error)
}
