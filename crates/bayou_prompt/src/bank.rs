//! Immutable categorical option pools.

use crate::IndexSource;
use bayou_core::ClipDuration;
use bayou_error::{PromptError, PromptErrorKind, PromptResult};

/// Largest cameo set a single entry may hold.
const MAX_CAMEOS_PER_SET: usize = 4;

/// A named, fixed, ordered pool of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool<T: 'static> {
    name: &'static str,
    entries: &'static [T],
}

impl<T> Pool<T> {
    /// Creates a pool over static entries.
    pub const fn new(name: &'static str, entries: &'static [T]) -> Self {
        Self { name, entries }
    }

    /// Pool name, used in error messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Every entry, in order.
    pub fn all(&self) -> &'static [T] {
        self.entries
    }

    /// Draws one entry using `source`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBank` if the pool is empty.
    pub fn pick<S: IndexSource + ?Sized>(&self, source: &mut S) -> PromptResult<&'static T> {
        let len = self.entries.len();
        if len == 0 {
            return Err(PromptError::new(PromptErrorKind::InvalidBank(format!(
                "pool '{}' is empty",
                self.name
            ))));
        }
        Ok(&self.entries[source.next_index(len) % len])
    }
}

/// The complete set of pools a prompt is drawn from.
///
/// [`OptionBank::STANDARD`] is the built-in bayou set. Custom banks can be
/// assembled from static pools and checked with [`OptionBank::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionBank {
    /// Scene descriptions
    pub scenes: Pool<&'static str>,
    /// Cameo sets, 1 to 4 handles each
    pub cameos: Pool<&'static [&'static str]>,
    /// Camera treatments
    pub camera: Pool<&'static str>,
    /// Lighting treatments
    pub lighting: Pool<&'static str>,
    /// Visual styles
    pub styles: Pool<&'static str>,
    /// Dialogue lines
    pub dialogue: Pool<&'static str>,
    /// Soundtracks
    pub sound: Pool<&'static str>,
    /// Moods
    pub moods: Pool<&'static str>,
    /// Clip lengths
    pub durations: Pool<ClipDuration>,
}

impl Default for OptionBank {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl OptionBank {
    /// The built-in bank.
    pub const STANDARD: OptionBank = OptionBank {
        scenes: Pool::new("scene", SCENES),
        cameos: Pool::new("cameos", CAMEO_SETS),
        camera: Pool::new("camera", CAMERA),
        lighting: Pool::new("lighting", LIGHTING),
        styles: Pool::new("style", STYLES),
        dialogue: Pool::new("dialogue", DIALOGUE),
        sound: Pool::new("sound", SOUND),
        moods: Pool::new("mood", MOODS),
        durations: Pool::new("duration", DURATIONS),
    };

    /// Checks that every pool can be drawn from and holds only usable entries.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBank` naming the first offending pool.
    pub fn validate(&self) -> PromptResult<()> {
        let text_pools = [
            self.scenes,
            self.camera,
            self.lighting,
            self.styles,
            self.dialogue,
            self.sound,
            self.moods,
        ];
        for pool in text_pools {
            ensure_non_empty(pool.name(), pool.all().len())?;
            if pool.all().iter().any(|entry| entry.trim().is_empty()) {
                return Err(invalid_bank(format!("pool '{}' has a blank entry", pool.name())));
            }
        }

        ensure_non_empty(self.cameos.name(), self.cameos.all().len())?;
        for set in self.cameos.all() {
            if set.is_empty() || set.len() > MAX_CAMEOS_PER_SET {
                return Err(invalid_bank(format!(
                    "cameo set {:?} must hold 1 to {} handles",
                    set, MAX_CAMEOS_PER_SET
                )));
            }
            if set.iter().any(|handle| handle.trim().is_empty()) {
                return Err(invalid_bank(format!("cameo set {:?} has a blank handle", set)));
            }
        }

        ensure_non_empty(self.durations.name(), self.durations.all().len())
    }
}

#[track_caller]
fn invalid_bank(message: String) -> PromptError {
    PromptError::new(PromptErrorKind::InvalidBank(message))
}

fn ensure_non_empty(name: &str, len: usize) -> PromptResult<()> {
    if len == 0 {
        Err(invalid_bank(format!("pool '{}' is empty", name)))
    } else {
        Ok(())
    }
}

const DURATIONS: &[ClipDuration] = &ClipDuration::ALL;

const SCENES: &[&str] = &[
    "A foggy bayou shack glowing with neon lights and mosquitos orbiting the lamp.",
    "Inside a Waffle House at 3AM after a failed heist.",
    "Munky and Glassy arguing in a busted UFO that crash-landed in a Walmart parking lot.",
    "Yerm preaching about loyalty while Tee Fred counts cash on a swamp boat.",
    "A therapy circle in the middle of the bayou surrounded by talking frogs.",
    "A 1990s rap video being filmed during a thunderstorm.",
    "Post-apocalyptic gas station run by an alligator in sunglasses.",
    "Glassy floating through outer space trying to light himself.",
    "Munky accidentally becomes president of a reptile biker gang.",
    "Yerm trapped inside a microwave trying to negotiate peace with it.",
];

const CAMEO_SETS: &[&[&str]] = &[
    &["@obesewith.munky"],
    &["@obesewith.glassy"],
    &["@obesewith.yerm"],
    &["@obesewith.teefred"],
    &["@obesewith.munky", "@obesewith.glassy"],
    &["@obesewith.teefred", "@obesewith.yerm"],
    &["@obesewith.munky", "@obesewith.glassy", "@obesewith.teefred"],
    &[
        "@obesewith.munky",
        "@obesewith.glassy",
        "@obesewith.yerm",
        "@obesewith.teefred",
    ],
];

const CAMERA: &[&str] = &[
    "handheld documentary zooms with sudden whip-pans",
    "smooth tracking shot through fog and neon reflections",
    "360-degree orbit with glitch transitions",
    "slow dolly push-in with extreme depth of field",
    "chaotic drone flyby that crashes mid-shot",
    "comic-book panel transitions with onomatopoeia overlays",
    "cinematic over-the-shoulder crosscut with lens flares",
    "stop-motion stutter camera movement like an old VHS",
];

const LIGHTING: &[&str] = &[
    "neon pink and teal glow reflecting off water",
    "warm golden sunlight breaking through swamp fog",
    "flickering fluorescent gas-station lights with bug shadows",
    "blacklight haze with glowing smoke effects",
    "high-contrast noir red and blue tones",
    "psychedelic rainbow palette, pulsing with bass beats",
    "storm lightning flashes illuminating silhouettes",
    "retro CRT color bleed and static overlay",
];

const STYLES: &[&str] = &[
    "Adult Swim absurdist comedy",
    "Louisiana swamp noir",
    "vaporwave retro animation",
    "1990s gangster rap video",
    "mockumentary handheld realism",
    "trippy psychedelic dream sequence",
    "animated claymation chaos",
    "GTA loading-screen cinematic",
];

const DIALOGUE: &[&str] = &[
    "\"You ever seen smoke argue back? That's when I knew I was chosen.\"",
    "\"Down here, loyalty's like gator teeth — sharp till it breaks.\"",
    "\"I ain't paranoid if they really cloning me.\"",
    "\"Sometimes I dream in 480p, bro.\"",
    "\"Munky, stop touching buttons you don't understand!\"",
    "\"If it's glowing, that means it's money… or radiation.\"",
    "\"This swamp got more secrets than my search history.\"",
    "\"They told me I couldn't be two things at once — so I became three.\"",
];

const SOUND: &[&str] = &[
    "slow trap beat with frogs croaking in rhythm",
    "distorted gospel choir with low 808 rumble",
    "lofi jazz sample with cicada ambience",
    "swampy blues guitar riff blended with crickets",
    "synthwave arpeggio with dripping water FX",
    "random trumpet blasts and street noises",
    "heavy bassline synced with lightning strikes",
    "banjo trap remix with vinyl crackle",
];

const MOODS: &[&str] = &[
    "chaotic and hilarious",
    "grimly cinematic and serious",
    "trippy and dreamlike",
    "lazy swamp summer energy",
    "paranoid but comedic",
    "surreal and melancholy",
    "loud, wild, and unhinged",
    "sincere but ridiculous",
];
