//! Option banks and prompt composition.
//!
//! The composer draws from an immutable [`OptionBank`] through an injected
//! [`IndexSource`], so the same source always yields the same prompts.
//!
//! # Example
//!
//! ```
//! use bayou_prompt::PromptComposer;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut composer = PromptComposer::new(StdRng::seed_from_u64(7));
//! let batch = composer.cycle(5).unwrap();
//!
//! assert_eq!(batch.variants().len(), 5);
//! assert!(batch.variants().iter().all(|v| v.scene() == batch.base_scene()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bank;
mod composer;
mod export;
mod remix;
mod source;

pub use bank::{OptionBank, Pool};
pub use composer::{DEFAULT_CYCLE_COUNT, PromptComposer};
pub use export::export_prompts;
pub use remix::{CLOSING_INSTRUCTION, DIRECTIVE_HEADER, remix};
pub use source::{IndexSource, ScriptedIndices};
