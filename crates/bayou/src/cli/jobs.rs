//! Job command handlers.

use bayou::{
    BayouConfig, BayouResult, ClipDuration, JobClient, JsonError, Prompt, ProviderAdapter,
    ProviderConfig, Resolution, SubmitRequest,
};
use std::time::Duration;
use tracing::{info, instrument};

use super::commands::{ProviderArgs, SubmitArgs};
use super::prompts::{read_input, to_pretty_json};

fn resolve_provider(args: &ProviderArgs) -> BayouResult<ProviderConfig> {
    let config = BayouConfig::load()?.provider_config(args.provider.as_deref())?;
    Ok(match &args.api_key {
        Some(key) => config.with_api_key(key.as_str()),
        None => config,
    })
}

fn submit_request(args: &SubmitArgs) -> BayouResult<SubmitRequest> {
    if let Some(path) = &args.prompt_file {
        let text = read_input(path)?;
        let prompt: Prompt = serde_json::from_str(&text).map_err(|e| {
            JsonError::new(format!("{} is not a composed prompt: {}", path.display(), e))
        })?;
        return Ok(SubmitRequest::from(&prompt));
    }

    let duration = ClipDuration::try_from(args.duration)?;
    Ok(SubmitRequest::new(
        args.prompt.clone().unwrap_or_default(),
        duration,
        Resolution::default(),
    ))
}

/// Submit one job.
#[instrument(skip_all, fields(provider = ?args.provider.provider))]
pub async fn submit(args: &SubmitArgs) -> BayouResult<String> {
    let request = submit_request(args)?;
    let config = resolve_provider(&args.provider)?;
    let client = JobClient::new(ProviderAdapter::connect(config.endpoint_shape())?);

    let job = match args.provider.deadline_secs {
        Some(secs) => {
            client
                .submit_within(&request, &config, Duration::from_secs(secs))
                .await?
        }
        None => client.submit(&request, &config).await?,
    };
    info!(task_id = %job.external_task_id(), state = %job.state(), "Submitted");
    to_pretty_json(&job)
}

/// Poll one job.
#[instrument(skip(provider))]
pub async fn poll(task_id: &str, provider: &ProviderArgs) -> BayouResult<String> {
    let config = resolve_provider(provider)?;
    let client = JobClient::new(ProviderAdapter::connect(config.endpoint_shape())?);

    let status = match provider.deadline_secs {
        Some(secs) => {
            client
                .poll_within(task_id, &config, Duration::from_secs(secs))
                .await?
        }
        None => client.poll(task_id, &config).await?,
    };
    info!(state = %status.state(), "Polled");
    to_pretty_json(&status)
}
