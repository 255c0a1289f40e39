//! Prompt composition from an option bank.

use crate::{IndexSource, OptionBank};
use bayou_core::{ClipDuration, CycleBatch, Prompt, Resolution};
use bayou_error::{PromptError, PromptErrorKind, PromptResult};
use tracing::{debug, instrument};

/// Number of variants a cycle produces when the caller does not say.
pub const DEFAULT_CYCLE_COUNT: usize = 5;

/// Fields held fixed across a cycle: the story beat.
struct Pivots {
    scene: &'static str,
    cameos: &'static [&'static str],
    dialogue: &'static str,
}

/// Fields redrawn for every variant: the cinematic treatment.
struct Treatment {
    camera: &'static str,
    lighting: &'static str,
    style: &'static str,
    sound: &'static str,
    mood: &'static str,
    duration: ClipDuration,
}

/// Composes prompts by drawing from an [`OptionBank`].
///
/// All randomness comes from the injected [`IndexSource`]; given the same
/// source state the composer produces identical output.
///
/// Draw order per prompt is scene, cameo set, dialogue, then camera,
/// lighting, style, sound, mood and duration.
#[derive(Debug, Clone)]
pub struct PromptComposer<S> {
    bank: OptionBank,
    source: S,
    resolution: Resolution,
}

impl<S: IndexSource> PromptComposer<S> {
    /// Creates a composer over the standard bank.
    pub fn new(source: S) -> Self {
        Self {
            bank: OptionBank::STANDARD,
            source,
            resolution: Resolution::default(),
        }
    }

    /// Creates a composer over a custom bank.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBank` if the bank fails [`OptionBank::validate`].
    pub fn with_bank(bank: OptionBank, source: S) -> PromptResult<Self> {
        bank.validate()?;
        Ok(Self {
            bank,
            source,
            resolution: Resolution::default(),
        })
    }

    /// Sets the resolution stamped on every composed prompt.
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// The bank prompts are drawn from.
    pub fn bank(&self) -> &OptionBank {
        &self.bank
    }

    /// Gives back the index source, e.g. to inspect a scripted replay.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Composes `count` prompts, each drawn independently.
    ///
    /// # Errors
    ///
    /// Returns an error if a pool cannot be drawn from.
    #[instrument(skip(self))]
    pub fn generate(&mut self, count: usize) -> PromptResult<Vec<Prompt>> {
        let prompts = (0..count)
            .map(|_| {
                let pivots = self.draw_pivots()?;
                let treatment = self.draw_treatment()?;
                self.assemble(&pivots, &treatment)
            })
            .collect::<PromptResult<Vec<_>>>()?;

        debug!(count = prompts.len(), "Generated prompts");
        Ok(prompts)
    }

    /// Composes `count` variants of one story beat.
    ///
    /// Scene, cameo set and dialogue are drawn once, before any variant, so a
    /// zero count still yields populated pivots. Every variant redraws the
    /// remaining fields.
    ///
    /// # Errors
    ///
    /// Returns an error if a pool cannot be drawn from.
    #[instrument(skip(self))]
    pub fn cycle(&mut self, count: usize) -> PromptResult<CycleBatch> {
        let pivots = self.draw_pivots()?;

        let variants = (0..count)
            .map(|_| {
                let treatment = self.draw_treatment()?;
                self.assemble(&pivots, &treatment)
            })
            .collect::<PromptResult<Vec<_>>>()?;

        debug!(
            scene = pivots.scene,
            variants = variants.len(),
            "Cycled story beat"
        );

        Ok(CycleBatch::new(
            pivots.scene,
            pivots.dialogue,
            to_owned_handles(pivots.cameos),
            variants,
        ))
    }

    fn draw_pivots(&mut self) -> PromptResult<Pivots> {
        Ok(Pivots {
            scene: *self.bank.scenes.pick(&mut self.source)?,
            cameos: *self.bank.cameos.pick(&mut self.source)?,
            dialogue: *self.bank.dialogue.pick(&mut self.source)?,
        })
    }

    fn draw_treatment(&mut self) -> PromptResult<Treatment> {
        Ok(Treatment {
            camera: *self.bank.camera.pick(&mut self.source)?,
            lighting: *self.bank.lighting.pick(&mut self.source)?,
            style: *self.bank.styles.pick(&mut self.source)?,
            sound: *self.bank.sound.pick(&mut self.source)?,
            mood: *self.bank.moods.pick(&mut self.source)?,
            duration: *self.bank.durations.pick(&mut self.source)?,
        })
    }

    fn assemble(&self, pivots: &Pivots, treatment: &Treatment) -> PromptResult<Prompt> {
        Prompt::builder()
            .scene(pivots.scene)
            .cameos(to_owned_handles(pivots.cameos))
            .camera(treatment.camera)
            .lighting(treatment.lighting)
            .style(treatment.style)
            .dialogue(pivots.dialogue)
            .sound(treatment.sound)
            .mood(treatment.mood)
            .duration_seconds(treatment.duration)
            .resolution(self.resolution)
            .build()
            .map_err(|e| {
                PromptError::new(PromptErrorKind::InvalidBank(format!(
                    "Failed to build prompt: {}",
                    e
                )))
            })
    }
}

fn to_owned_handles(handles: &[&str]) -> Vec<String> {
    handles.iter().map(|h| h.to_string()).collect()
}
