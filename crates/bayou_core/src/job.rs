//! Job and job status types.
//!
//! A [`Job`] is a snapshot of what the provider last said about a submission.
//! Nothing here advances state locally: every [`JobStatus`] comes from a
//! fresh provider response.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Provider-authoritative job state.
///
/// `Queued → Processing → {Completed, Failed}`, with `Unknown` reachable from
/// any state when a response cannot be classified.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JobState {
    /// Accepted, waiting for capacity
    Queued,
    /// Rendering
    Processing,
    /// Finished with a result
    Completed,
    /// Finished without a result
    Failed,
    /// Provider answer could not be classified
    Unknown,
}

impl JobState {
    /// Classifies a provider status string.
    ///
    /// Matching is case-insensitive and accepts the synonyms providers use in
    /// practice. Anything else is `Unknown`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bayou_core::JobState;
    ///
    /// assert_eq!(JobState::from_provider("IN_PROGRESS"), JobState::Processing);
    /// assert_eq!(JobState::from_provider("succeeded"), JobState::Completed);
    /// assert_eq!(JobState::from_provider("???"), JobState::Unknown);
    /// ```
    pub fn from_provider(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "queued" | "pending" | "submitted" => JobState::Queued,
            "processing" | "running" | "in_progress" | "generating" => JobState::Processing,
            "completed" | "succeeded" | "success" | "done" => JobState::Completed,
            "failed" | "error" | "cancelled" | "canceled" => JobState::Failed,
            _ => JobState::Unknown,
        }
    }

    /// Whether the provider will not report any further progress.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobState::Completed | JobState::Failed)
    }
}

/// Structured reason attached to a failed or unclassifiable job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct JobErrorDetail {
    /// Provider error code, if one was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    /// Human-readable explanation
    message: String,
}

impl JobErrorDetail {
    /// Creates a detail with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// Creates a detail carrying a provider error code.
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// One submission to the provider.
///
/// `result_url` is only ever present when the state is `Completed`, and
/// `error` only when the state is `Failed` or `Unknown`.
///
/// # Examples
///
/// ```
/// use bayou_core::{Job, JobState};
///
/// let job = Job::queued("task-42");
/// assert_eq!(*job.state(), JobState::Queued);
/// assert!(job.result_url().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Job {
    /// Opaque identifier assigned by the provider
    #[serde(rename = "taskId")]
    external_task_id: String,
    /// Current state as last reported
    #[serde(rename = "status")]
    state: JobState,
    /// Location of the finished video
    #[serde(rename = "resultUrl", default, skip_serializing_if = "Option::is_none")]
    result_url: Option<String>,
    /// Why the job failed or could not be classified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<JobErrorDetail>,
}

impl Job {
    /// A job the provider has accepted but not started.
    pub fn queued(task_id: impl Into<String>) -> Self {
        Self::from_parts(task_id, JobState::Queued, None, None)
    }

    /// A job the provider is rendering.
    pub fn processing(task_id: impl Into<String>) -> Self {
        Self::from_parts(task_id, JobState::Processing, None, None)
    }

    /// A finished job with its result location.
    pub fn completed(task_id: impl Into<String>, result_url: impl Into<String>) -> Self {
        Self::from_parts(task_id, JobState::Completed, Some(result_url.into()), None)
    }

    /// A job the provider reports as failed.
    pub fn failed(task_id: impl Into<String>, error: JobErrorDetail) -> Self {
        Self::from_parts(task_id, JobState::Failed, None, Some(error))
    }

    /// A job whose provider answer could not be classified.
    pub fn unknown(task_id: impl Into<String>, error: JobErrorDetail) -> Self {
        Self::from_parts(task_id, JobState::Unknown, None, Some(error))
    }

    /// Assembles a job, dropping any part the state does not allow.
    ///
    /// A failed or unknown job without a supplied reason receives a generic
    /// one so that the error detail is always present for those states.
    pub fn from_parts(
        task_id: impl Into<String>,
        state: JobState,
        result_url: Option<String>,
        error: Option<JobErrorDetail>,
    ) -> Self {
        let result_url = match state {
            JobState::Completed => result_url,
            _ => None,
        };
        let error = match state {
            JobState::Failed => {
                Some(error.unwrap_or_else(|| JobErrorDetail::new("provider reported failure")))
            }
            JobState::Unknown => Some(
                error.unwrap_or_else(|| JobErrorDetail::new("provider status not recognized")),
            ),
            _ => None,
        };

        Self {
            external_task_id: task_id.into(),
            state,
            result_url,
            error,
        }
    }
}

/// A job re-derived from a fresh poll, plus provider accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    /// The job as the provider now describes it
    #[serde(flatten)]
    job: Job,
    /// Seconds the provider spent rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    processing_time: Option<f64>,
    /// Credits charged for the job
    #[serde(default, skip_serializing_if = "Option::is_none")]
    credits_used: Option<f64>,
}

impl JobStatus {
    /// Wraps a job with optional accounting figures.
    pub fn new(job: Job, processing_time: Option<f64>, credits_used: Option<f64>) -> Self {
        Self {
            job,
            processing_time,
            credits_used,
        }
    }

    /// Shorthand for the job's state.
    pub fn state(&self) -> JobState {
        self.job.state
    }

    /// Shorthand for the job's task id.
    pub fn task_id(&self) -> &str {
        &self.job.external_task_id
    }
}

impl From<Job> for JobStatus {
    fn from(job: Job) -> Self {
        Self::new(job, None, None)
    }
}
