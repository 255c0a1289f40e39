//! Prompt command handlers.

use bayou::{
    BayouResult, IoError, JsonError, PromptComposer, RemixOverride, RemixSource, export_prompts,
    remix,
};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

use super::commands::RemixArgs;

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Serialize a command result for stdout.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> BayouResult<String> {
    Ok(serde_json::to_string_pretty(value)
        .map_err(|e| JsonError::new(format!("Failed to serialize output: {}", e)))?)
}

/// Compose `count` independent prompts.
#[instrument]
pub fn generate(count: usize, seed: Option<u64>) -> BayouResult<String> {
    let prompts = PromptComposer::new(rng(seed)).generate(count)?;
    to_pretty_json(&prompts)
}

/// Compose `count` variants of one story beat.
#[instrument]
pub fn cycle(count: usize, seed: Option<u64>) -> BayouResult<String> {
    let batch = PromptComposer::new(rng(seed)).cycle(count)?;
    to_pretty_json(&batch)
}

/// Build a remix directive.
#[instrument(skip_all, fields(video = %args.video_link))]
pub fn remix_video(args: &RemixArgs) -> BayouResult<String> {
    let source = RemixSource::new(args.video_link.as_str(), args.original_prompt.as_str());
    let overrides = RemixOverride::from_fields(
        &args.characters,
        &args.style,
        &args.lighting,
        &args.camera,
        &args.music,
        &args.mood,
    );
    let result = remix(&source, &overrides)?;
    to_pretty_json(&result)
}

/// Wrap the JSON in `input` in an export envelope.
#[instrument(skip_all, fields(input = %input.display(), creator))]
pub fn export(
    input: &Path,
    creator: &str,
    notes: &str,
    output: Option<&Path>,
) -> BayouResult<String> {
    let text = read_input(input)?;
    let content: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
        JsonError::new(format!("{} is not valid JSON: {}", input.display(), e))
    })?;

    let envelope = export_prompts(creator, notes, &content)?;
    let json = envelope.to_json()?;

    match output {
        Some(path) => {
            std::fs::write(path, &json).map_err(|e| {
                IoError::new(format!("Failed to write {}: {}", path.display(), e))
            })?;
            debug!(path = %path.display(), "Wrote export envelope");
            to_pretty_json(&serde_json::json!({ "written": path.display().to_string() }))
        }
        None => Ok(json),
    }
}

/// Read a file, or stdin when the path is "-".
pub fn read_input(path: &Path) -> BayouResult<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| IoError::new(format!("Failed to read stdin: {}", e)))?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(path)
        .map_err(|e| IoError::new(format!("Failed to read {}: {}", path.display(), e)))?)
}
