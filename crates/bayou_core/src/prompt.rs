//! Prompt value objects.

use bayou_error::{PromptError, PromptErrorKind};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Maximum number of cameo handles a single prompt may feature.
const MAX_CAMEOS: usize = 4;

/// Clip length accepted by the provider, in whole seconds.
///
/// Only 10, 11 and 12 seconds are valid.
///
/// # Examples
///
/// ```
/// use bayou_core::ClipDuration;
///
/// let d = ClipDuration::try_from(11u32).unwrap();
/// assert_eq!(d.seconds(), 11);
/// assert!(ClipDuration::try_from(9u32).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u32", into = "u32")]
#[display("{}s", _0)]
pub struct ClipDuration(u8);

impl ClipDuration {
    /// Ten seconds.
    pub const TEN: ClipDuration = ClipDuration(10);
    /// Eleven seconds.
    pub const ELEVEN: ClipDuration = ClipDuration(11);
    /// Twelve seconds.
    pub const TWELVE: ClipDuration = ClipDuration(12);
    /// Every accepted duration, shortest first.
    pub const ALL: [ClipDuration; 3] = [Self::TEN, Self::ELEVEN, Self::TWELVE];

    /// Length in seconds.
    pub fn seconds(self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u32> for ClipDuration {
    type Error = PromptError;

    #[track_caller]
    fn try_from(seconds: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|d| d.seconds() == seconds)
            .ok_or_else(|| {
                PromptError::new(PromptErrorKind::InvalidValue {
                    field: "duration_seconds".to_string(),
                    reason: format!("{} is not one of 10, 11, 12", seconds),
                })
            })
    }
}

impl From<ClipDuration> for u32 {
    fn from(duration: ClipDuration) -> Self {
        duration.seconds()
    }
}

/// Output resolution.
///
/// Both variants describe a 1280x720 frame; providers disagree on how to
/// spell it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Resolution {
    /// "720p" tier label
    #[serde(rename = "720p")]
    #[strum(serialize = "720p")]
    P720,
    /// Explicit "1280x720" frame size
    #[default]
    #[serde(rename = "1280x720")]
    #[strum(serialize = "1280x720")]
    Landscape1280x720,
}

impl Resolution {
    /// Frame size spelling, e.g. for a `size` request field.
    pub fn frame_size(self) -> &'static str {
        "1280x720"
    }

    /// Tier label spelling, e.g. for a `resolution` request field.
    pub fn tier_label(self) -> &'static str {
        "720p"
    }
}

/// A fully composed video-generation prompt.
///
/// Every narrative field is non-empty and the cameo list holds one to four
/// handles; the builder refuses anything else.
///
/// # Examples
///
/// ```
/// use bayou_core::{ClipDuration, Prompt, Resolution};
///
/// let prompt = Prompt::builder()
///     .scene("Inside a Waffle House at 3AM after a failed heist.")
///     .cameos(vec!["@obesewith.munky".to_string()])
///     .camera("slow dolly push-in with extreme depth of field")
///     .lighting("high-contrast noir red and blue tones")
///     .style("Louisiana swamp noir")
///     .dialogue("\"Sometimes I dream in 480p, bro.\"")
///     .sound("lofi jazz sample with cicada ambience")
///     .mood("grimly cinematic and serious")
///     .duration_seconds(ClipDuration::TEN)
///     .resolution(Resolution::Landscape1280x720)
///     .build()
///     .unwrap();
///
/// assert!(prompt.render().starts_with("Scene: Inside a Waffle House"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(rename_all = "camelCase", try_from = "PromptFields")]
pub struct Prompt {
    /// Where the clip takes place
    scene: String,
    /// Featured character handles, display order only
    cameos: Vec<String>,
    /// Camera treatment
    camera: String,
    /// Lighting treatment
    lighting: String,
    /// Visual style
    style: String,
    /// Spoken line
    dialogue: String,
    /// Soundtrack and effects
    sound: String,
    /// Overall mood
    mood: String,
    /// Clip length
    duration_seconds: ClipDuration,
    /// Output resolution
    resolution: Resolution,
}

impl Prompt {
    /// Creates a new builder for `Prompt`.
    pub fn builder() -> PromptBuilder {
        PromptBuilder::default()
    }

    /// Renders the narrative fields as the text sent to a provider.
    pub fn render(&self) -> String {
        format!(
            "Scene: {}\nCameos: {}\nCamera: {}\nLighting: {}\nStyle: {}\nDialogue: {}\nSound: {}\nMood: {}",
            self.scene,
            self.cameos.join(", "),
            self.camera,
            self.lighting,
            self.style,
            self.dialogue,
            self.sound,
            self.mood,
        )
    }
}

/// Wire form of a [`Prompt`], checked by the builder before use.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFields {
    scene: String,
    cameos: Vec<String>,
    camera: String,
    lighting: String,
    style: String,
    dialogue: String,
    sound: String,
    mood: String,
    duration_seconds: ClipDuration,
    resolution: Resolution,
}

impl TryFrom<PromptFields> for Prompt {
    type Error = String;

    fn try_from(fields: PromptFields) -> Result<Self, Self::Error> {
        Prompt::builder()
            .scene(fields.scene)
            .cameos(fields.cameos)
            .camera(fields.camera)
            .lighting(fields.lighting)
            .style(fields.style)
            .dialogue(fields.dialogue)
            .sound(fields.sound)
            .mood(fields.mood)
            .duration_seconds(fields.duration_seconds)
            .resolution(fields.resolution)
            .build()
            .map_err(|e| e.to_string())
    }
}

impl PromptBuilder {
    fn validate(&self) -> Result<(), String> {
        let text_fields = [
            ("scene", &self.scene),
            ("camera", &self.camera),
            ("lighting", &self.lighting),
            ("style", &self.style),
            ("dialogue", &self.dialogue),
            ("sound", &self.sound),
            ("mood", &self.mood),
        ];
        for (name, value) in text_fields {
            if value.as_ref().is_some_and(|v| v.trim().is_empty()) {
                return Err(format!("{} must not be empty", name));
            }
        }

        if let Some(cameos) = &self.cameos {
            if cameos.is_empty() || cameos.len() > MAX_CAMEOS {
                return Err(format!(
                    "cameos must hold 1 to {} handles, got {}",
                    MAX_CAMEOS,
                    cameos.len()
                ));
            }
            if cameos.iter().any(|c| c.trim().is_empty()) {
                return Err("cameo handles must not be empty".to_string());
            }
        }

        Ok(())
    }
}

/// One cycle batch: a fixed story beat rendered with several cinematic treatments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct CycleBatch {
    /// Pivot scene shared by every variant
    base_scene: String,
    /// Pivot dialogue shared by every variant
    dialogue: String,
    /// Pivot cameo set shared by every variant
    cameos: Vec<String>,
    /// Fully formed prompts differing only in non-pivot fields
    variants: Vec<Prompt>,
}

impl CycleBatch {
    /// Assembles a batch from its pivots and variants.
    pub fn new(
        base_scene: impl Into<String>,
        dialogue: impl Into<String>,
        cameos: Vec<String>,
        variants: Vec<Prompt>,
    ) -> Self {
        Self {
            base_scene: base_scene.into(),
            dialogue: dialogue.into(),
            cameos,
            variants,
        }
    }
}

/// What a job submission sends: rendered text plus clip parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    /// Rendered prompt text
    prompt: String,
    /// Clip length
    duration_seconds: ClipDuration,
    /// Output resolution
    resolution: Resolution,
}

impl SubmitRequest {
    /// Creates a submit request from already-rendered text.
    pub fn new(prompt: impl Into<String>, duration_seconds: ClipDuration, resolution: Resolution) -> Self {
        Self {
            prompt: prompt.into(),
            duration_seconds,
            resolution,
        }
    }
}

impl From<&Prompt> for SubmitRequest {
    fn from(prompt: &Prompt) -> Self {
        Self::new(prompt.render(), prompt.duration_seconds, prompt.resolution)
    }
}
