//! Trait definitions for the Bayou video-job library.
//!
//! This crate provides the capability trait every provider dialect implements.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::VideoProvider;
