//! Remix inputs and outputs.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The video being remixed and the prompt that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct RemixSource {
    /// Link to the original video
    video_link: String,
    /// Original free-text prompt, reproduced verbatim in the directive
    original_prompt: String,
}

impl RemixSource {
    /// Creates a remix source.
    pub fn new(video_link: impl Into<String>, original_prompt: impl Into<String>) -> Self {
        Self {
            video_link: video_link.into(),
            original_prompt: original_prompt.into(),
        }
    }
}

/// Optional per-field replacements for a remix.
///
/// Blank values count as unset.
///
/// # Examples
///
/// ```
/// use bayou_core::RemixOverride;
///
/// let overrides = RemixOverride::default()
///     .with_characters_csv(" @a, ,@b ")
///     .with_style("   ")
///     .with_mood("paranoid but comedic");
///
/// assert_eq!(overrides.characters(), &["@a".to_string(), "@b".to_string()]);
/// assert!(overrides.style().is_none());
/// assert_eq!(overrides.mood().as_deref(), Some("paranoid but comedic"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(from = "RemixOverrideFields")]
pub struct RemixOverride {
    /// Character handles, first one names the remix
    characters: Vec<String>,
    /// Replacement style
    style: Option<String>,
    /// Replacement lighting
    lighting: Option<String>,
    /// Replacement camera treatment
    camera: Option<String>,
    /// Replacement music
    music: Option<String>,
    /// Replacement mood
    mood: Option<String>,
}

/// Wire form of a [`RemixOverride`], normalized through its setters.
#[derive(Deserialize)]
struct RemixOverrideFields {
    #[serde(default)]
    characters: Vec<String>,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    lighting: Option<String>,
    #[serde(default)]
    camera: Option<String>,
    #[serde(default)]
    music: Option<String>,
    #[serde(default)]
    mood: Option<String>,
}

impl From<RemixOverrideFields> for RemixOverride {
    fn from(fields: RemixOverrideFields) -> Self {
        Self::default()
            .with_characters(fields.characters)
            .with_style(fields.style.unwrap_or_default())
            .with_lighting(fields.lighting.unwrap_or_default())
            .with_camera(fields.camera.unwrap_or_default())
            .with_music(fields.music.unwrap_or_default())
            .with_mood(fields.mood.unwrap_or_default())
    }
}

fn non_blank(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl RemixOverride {
    /// Builds overrides from the flat text fields a form submits.
    pub fn from_fields(
        characters_csv: &str,
        style: &str,
        lighting: &str,
        camera: &str,
        music: &str,
        mood: &str,
    ) -> Self {
        Self::default()
            .with_characters_csv(characters_csv)
            .with_style(style)
            .with_lighting(lighting)
            .with_camera(camera)
            .with_music(music)
            .with_mood(mood)
    }

    /// Sets the character list from comma-separated text, dropping blank entries.
    pub fn with_characters_csv(mut self, csv: &str) -> Self {
        self.characters = csv.split(',').filter_map(|c| non_blank(c)).collect();
        self
    }

    /// Sets the character list.
    pub fn with_characters(mut self, characters: Vec<String>) -> Self {
        self.characters = characters.into_iter().filter_map(|c| non_blank(c)).collect();
        self
    }

    /// Sets the style override.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = non_blank(style);
        self
    }

    /// Sets the lighting override.
    pub fn with_lighting(mut self, lighting: impl Into<String>) -> Self {
        self.lighting = non_blank(lighting);
        self
    }

    /// Sets the camera override.
    pub fn with_camera(mut self, camera: impl Into<String>) -> Self {
        self.camera = non_blank(camera);
        self
    }

    /// Sets the music override.
    pub fn with_music(mut self, music: impl Into<String>) -> Self {
        self.music = non_blank(music);
        self
    }

    /// Sets the mood override.
    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = non_blank(mood);
        self
    }
}

/// Overrides with every unset field resolved to its "original X" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RemixConfig {
    /// Character handles, possibly empty
    characters: Vec<String>,
    /// Style or "original style"
    style: String,
    /// Lighting or "original lighting"
    lighting: String,
    /// Camera or "original camera"
    camera: String,
    /// Music or "original music"
    music: String,
    /// Mood or "original mood"
    mood: String,
}

impl RemixConfig {
    /// Resolves overrides, substituting sentinels for unset fields.
    pub fn resolve(overrides: &RemixOverride) -> Self {
        let or_original = |value: &Option<String>, field: &str| {
            value
                .clone()
                .unwrap_or_else(|| format!("original {}", field))
        };

        Self {
            characters: overrides.characters.clone(),
            style: or_original(&overrides.style, "style"),
            lighting: or_original(&overrides.lighting, "lighting"),
            camera: or_original(&overrides.camera, "camera"),
            music: or_original(&overrides.music, "music"),
            mood: or_original(&overrides.mood, "mood"),
        }
    }
}

/// Everything a remix produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct RemixResult {
    /// Link to the video that was remixed
    original_video: String,
    /// Display label, e.g. "@a Cinematic Remix"
    remix_version: String,
    /// Resolved settings
    remix_config: RemixConfig,
    /// Final text instruction
    rendered_directive: String,
}

impl RemixResult {
    /// Assembles a remix result.
    pub fn new(
        original_video: impl Into<String>,
        remix_version: impl Into<String>,
        remix_config: RemixConfig,
        rendered_directive: impl Into<String>,
    ) -> Self {
        Self {
            original_video: original_video.into(),
            remix_version: remix_version.into(),
            remix_config,
            rendered_directive: rendered_directive.into(),
        }
    }
}
