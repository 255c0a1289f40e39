//! Tests for the sora adapter.

mod test_utils;

use bayou_core::{EndpointShape, JobState};
use bayou_error::ProviderErrorKind;
use bayou_interface::VideoProvider;
use bayou_providers::ProviderAdapter;
use serde_json::json;
use std::sync::Arc;
use test_utils::{BASE_URL, MockTransport, test_config, test_request};

fn adapter(transport: &MockTransport) -> ProviderAdapter {
    ProviderAdapter::for_shape(EndpointShape::Sora, Arc::new(transport.clone()))
}

#[tokio::test]
async fn submit_posts_sora_body() -> anyhow::Result<()> {
    let transport = MockTransport::respond(200, r#"{"job_id": "sj-1"}"#);
    let adapter = adapter(&transport);

    let job = adapter.submit(&test_request(), &test_config(EndpointShape::Sora)).await?;

    assert_eq!(adapter.provider_name(), "sora");
    assert_eq!(job.external_task_id(), "sj-1");
    assert_eq!(*job.state(), JobState::Queued);

    let requests = transport.requests();
    assert_eq!(requests[0].url, format!("{}/sora/generations", BASE_URL));
    assert_eq!(
        requests[0].body,
        Some(json!({
            "model": "sora-2",
            "prompt": "Scene: Inside a Waffle House at 3AM after a failed heist.",
            "seconds": 11,
            "size": "1280x720",
            "remove_watermark": true,
        }))
    );
    Ok(())
}

#[tokio::test]
async fn direct_video_url_completes_immediately() -> anyhow::Result<()> {
    let transport = MockTransport::respond(200, r#"{"video_url": "https://cdn.test/s.mp4"}"#);
    let job = adapter(&transport)
        .submit(&test_request(), &test_config(EndpointShape::Sora))
        .await?;

    assert_eq!(*job.state(), JobState::Completed);
    assert_eq!(job.external_task_id(), "");
    assert_eq!(job.result_url().as_deref(), Some("https://cdn.test/s.mp4"));
    Ok(())
}

#[tokio::test]
async fn video_url_with_job_id_keeps_the_id() -> anyhow::Result<()> {
    let transport = MockTransport::respond(
        200,
        r#"{"job_id": "sj-2", "video_url": "https://cdn.test/s2.mp4"}"#,
    );
    let job = adapter(&transport)
        .submit(&test_request(), &test_config(EndpointShape::Sora))
        .await?;

    assert_eq!(*job.state(), JobState::Completed);
    assert_eq!(job.external_task_id(), "sj-2");
    Ok(())
}

#[tokio::test]
async fn neither_id_nor_url_is_unknown() {
    let transport = MockTransport::respond(200, r#"{"video_url": "", "job_id": null}"#);
    let err = adapter(&transport)
        .submit(&test_request(), &test_config(EndpointShape::Sora))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), ProviderErrorKind::Unknown(_)));
}

#[tokio::test]
async fn poll_uses_jobs_path() -> anyhow::Result<()> {
    let transport = MockTransport::respond(200, r#"{"job_id": "sj-1", "status": "in_progress"}"#);
    let status = adapter(&transport)
        .poll("sj-1", &test_config(EndpointShape::Sora))
        .await?;

    assert_eq!(status.state(), JobState::Processing);
    assert_eq!(transport.requests()[0].url, format!("{}/sora/jobs/sj-1", BASE_URL));
    assert_eq!(transport.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn poll_failure_with_text_error() -> anyhow::Result<()> {
    let transport = MockTransport::respond(200, r#"{"status": "error", "error": "GPU melted"}"#);
    let status = adapter(&transport)
        .poll("sj-1", &test_config(EndpointShape::Sora))
        .await?;

    assert_eq!(status.state(), JobState::Failed);
    assert_eq!(
        status.job().error().as_ref().map(|e| e.message().as_str()),
        Some("GPU melted")
    );
    Ok(())
}

#[tokio::test]
async fn poll_honours_config_timeout() -> anyhow::Result<()> {
    let transport = MockTransport::respond(200, r#"{"status": "queued"}"#);
    let config = test_config(EndpointShape::Sora).with_timeout(std::time::Duration::from_secs(7));

    adapter(&transport).poll("sj-1", &config).await?;

    assert_eq!(transport.requests()[0].timeout, std::time::Duration::from_secs(7));
    Ok(())
}

#[tokio::test]
async fn echoed_id_and_job_id_are_accepted() -> anyhow::Result<()> {
    let transport = MockTransport::respond(200, r#"{"id": "req-9", "job_id": "sj-9"}"#);
    let job = adapter(&transport)
        .submit(&test_request(), &test_config(EndpointShape::Sora))
        .await?;

    assert_eq!(*job.state(), JobState::Queued);
    assert_eq!(job.external_task_id(), "sj-9");
    Ok(())
}

#[tokio::test]
async fn numeric_job_id_falls_back_from_id() -> anyhow::Result<()> {
    let transport = MockTransport::respond(200, r#"{"id": 77}"#);
    let job = adapter(&transport)
        .submit(&test_request(), &test_config(EndpointShape::Sora))
        .await?;
    assert_eq!(job.external_task_id(), "77");
    Ok(())
}

#[tokio::test]
async fn poll_with_object_status_is_unknown_state() -> anyhow::Result<()> {
    let transport = MockTransport::respond(
        200,
        r#"{"id": "sj-1", "job_id": "sj-1", "status": {"phase": "render"}}"#,
    );
    let status = adapter(&transport)
        .poll("sj-1", &test_config(EndpointShape::Sora))
        .await?;

    assert_eq!(status.state(), JobState::Unknown);
    assert!(status.job().error().is_some());
    Ok(())
}

#[tokio::test]
async fn poll_escapes_job_id_in_path() -> anyhow::Result<()> {
    let transport = MockTransport::respond(200, r#"{"status": "queued"}"#);
    adapter(&transport)
        .poll("sj/1?x", &test_config(EndpointShape::Sora))
        .await?;

    assert_eq!(
        transport.requests()[0].url,
        format!("{}/sora/jobs/sj%2F1%3Fx", BASE_URL)
    );
    Ok(())
}
