//! Error types for the Bayou library.
//!
//! This crate provides the error types shared by every Bayou crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use bayou_error::{BayouResult, ProviderError, ProviderErrorKind};
//!
//! fn submit() -> BayouResult<String> {
//!     Err(ProviderError::new(ProviderErrorKind::Unauthorized(
//!         "bad key".to_string(),
//!     )))?
//! }
//!
//! assert!(submit().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod io;
mod json;
mod prompt;
mod provider;

pub use config::ConfigError;
pub use error::{BayouError, BayouErrorKind, BayouResult};
pub use io::IoError;
pub use json::JsonError;
pub use prompt::{PromptError, PromptErrorKind, PromptResult};
pub use provider::{ProviderError, ProviderErrorKind, ProviderResult};
