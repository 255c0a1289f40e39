//! The generic `video/generations` dialect.

mod client;
mod dto;

pub use client::VideoGenerationsClient;
pub use dto::{
    ASPECT_RATIO, DEFAULT_MODEL, VideoGenerationAccepted, VideoGenerationRequest,
    VideoGenerationRequestBuilder, VideoGenerationStatus,
};
