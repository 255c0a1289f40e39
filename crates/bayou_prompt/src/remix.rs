//! Delta remix of an existing video prompt.

use bayou_core::{RemixConfig, RemixOverride, RemixResult, RemixSource};
use bayou_error::{PromptError, PromptErrorKind, PromptResult};
use tracing::{debug, instrument};

/// First line of every rendered remix directive.
pub const DIRECTIVE_HEADER: &str = "Create a cinematic remix of the video described below.";

/// Last line of every rendered remix directive.
pub const CLOSING_INSTRUCTION: &str =
    "Keep the original story beat recognizable while applying the remix settings above.";

const UNKNOWN_REMIX_LABEL: &str = "Unknown Cinematic Remix";

/// Overlays user overrides onto an existing prompt.
///
/// The directive lists only the overrides that were supplied, in the order
/// characters, style, lighting, camera, music, mood. Unset fields appear in
/// the returned config as `"original <field>"`.
///
/// # Errors
///
/// Returns `InvalidRequest` if the original prompt is blank or a character
/// handle contains whitespace.
///
/// # Examples
///
/// ```
/// use bayou_core::{RemixOverride, RemixSource};
/// use bayou_prompt::remix;
///
/// let source = RemixSource::new("https://example.com/v/1", "A swamp boat at dusk.");
/// let overrides = RemixOverride::default().with_characters_csv("@a,@b");
/// let result = remix(&source, &overrides).unwrap();
///
/// assert_eq!(result.remix_version(), "@a Cinematic Remix");
/// assert_eq!(result.remix_config().style(), "original style");
/// ```
#[instrument(skip_all, fields(video = %source.video_link()))]
pub fn remix(source: &RemixSource, overrides: &RemixOverride) -> PromptResult<RemixResult> {
    if source.original_prompt().trim().is_empty() {
        return Err(invalid_request("original prompt text is required"));
    }
    if let Some(handle) = overrides
        .characters()
        .iter()
        .find(|handle| handle.chars().any(char::is_whitespace))
    {
        return Err(invalid_request(format!(
            "character handle '{}' must not contain whitespace",
            handle
        )));
    }

    let remix_version = match overrides.characters().first() {
        Some(lead) => format!("{} Cinematic Remix", lead),
        None => UNKNOWN_REMIX_LABEL.to_string(),
    };
    let rendered_directive = render_directive(source.original_prompt(), overrides);

    debug!(
        remix_version = %remix_version,
        characters = overrides.characters().len(),
        "Rendered remix directive"
    );

    Ok(RemixResult::new(
        source.video_link().clone(),
        remix_version,
        RemixConfig::resolve(overrides),
        rendered_directive,
    ))
}

fn render_directive(original_prompt: &str, overrides: &RemixOverride) -> String {
    let characters = (!overrides.characters().is_empty())
        .then(|| ("Characters", overrides.characters().join(", ")));
    let settings = [
        characters,
        overrides.style().clone().map(|v| ("Style", v)),
        overrides.lighting().clone().map(|v| ("Lighting", v)),
        overrides.camera().clone().map(|v| ("Camera", v)),
        overrides.music().clone().map(|v| ("Music", v)),
        overrides.mood().clone().map(|v| ("Mood", v)),
    ];

    let mut lines = vec![
        DIRECTIVE_HEADER.to_string(),
        String::new(),
        "ORIGINAL:".to_string(),
        original_prompt.to_string(),
        String::new(),
        "REMIX SETTINGS:".to_string(),
    ];
    lines.extend(
        settings
            .into_iter()
            .flatten()
            .map(|(label, value)| format!("- {}: {}", label, value)),
    );
    lines.push(String::new());
    lines.push(CLOSING_INSTRUCTION.to_string());

    lines.join("\n")
}

#[track_caller]
fn invalid_request(message: impl Into<String>) -> PromptError {
    PromptError::new(PromptErrorKind::InvalidRequest(message.into()))
}
