//! Tests for job state and provider config types.

use bayou_core::{EndpointShape, Job, JobErrorDetail, JobState, JobStatus, ProviderConfig};
use std::time::Duration;

#[test]
fn state_classification_covers_synonyms() {
    assert_eq!(JobState::from_provider("pending"), JobState::Queued);
    assert_eq!(JobState::from_provider("Running"), JobState::Processing);
    assert_eq!(JobState::from_provider("done"), JobState::Completed);
    assert_eq!(JobState::from_provider("CANCELLED"), JobState::Failed);
    assert_eq!(JobState::from_provider(""), JobState::Unknown);
}

#[test]
fn result_url_only_survives_on_completed() {
    let job = Job::from_parts(
        "t1",
        JobState::Processing,
        Some("https://cdn.example.com/v.mp4".to_string()),
        None,
    );
    assert!(job.result_url().is_none());

    let done = Job::completed("t1", "https://cdn.example.com/v.mp4");
    assert_eq!(done.result_url().as_deref(), Some("https://cdn.example.com/v.mp4"));
    assert!(done.error().is_none());
}

#[test]
fn failed_and_unknown_always_carry_error_detail() {
    let failed = Job::from_parts("t2", JobState::Failed, None, None);
    assert!(failed.error().is_some());

    let unknown = Job::unknown("t3", JobErrorDetail::new("missing status field"));
    assert_eq!(
        unknown.error().as_ref().map(|e| e.message().as_str()),
        Some("missing status field")
    );

    let queued = Job::from_parts("t4", JobState::Queued, None, Some(JobErrorDetail::new("x")));
    assert!(queued.error().is_none());
}

#[test]
fn job_status_serializes_boundary_shape() -> anyhow::Result<()> {
    let status = JobStatus::new(Job::completed("abc", "https://v/1.mp4"), Some(42.5), None);
    let value = serde_json::to_value(&status)?;
    assert_eq!(value["taskId"], "abc");
    assert_eq!(value["status"], "completed");
    assert_eq!(value["resultUrl"], "https://v/1.mp4");
    assert_eq!(value["processingTime"], 42.5);
    assert!(value.get("creditsUsed").is_none());
    Ok(())
}

#[test]
fn provider_config_redacts_key_and_trims_base_url() {
    let config = ProviderConfig::new(EndpointShape::VideoGenerations, "https://api.example.com/v1/")
        .with_api_key("sk-live-123")
        .with_timeout(Duration::from_secs(5));

    assert_eq!(config.base_url(), "https://api.example.com/v1");
    assert_eq!(config.timeout(), Duration::from_secs(5));
    let debug = format!("{:?}", config);
    assert!(!debug.contains("sk-live-123"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn endpoint_shape_round_trips_through_strings() -> anyhow::Result<()> {
    assert_eq!("sora".parse::<EndpointShape>()?, EndpointShape::Sora);
    assert_eq!(EndpointShape::VideoGenerations.to_string(), "video_generations");
    Ok(())
}
