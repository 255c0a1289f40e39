//! Metrics for video provider calls.
//!
//! Instruments are registered on the OpenTelemetry global meter; nothing is
//! exported unless the host application installs a meter provider.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<VideoMetrics> = OnceLock::new();

/// Counters and latency for submit and poll round trips.
#[derive(Clone)]
pub struct VideoMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Submissions the provider answered successfully
    pub submissions: Counter<u64>,
    /// Polls the provider answered successfully
    pub polls: Counter<u64>,
    /// Failed submits and polls
    pub errors: Counter<u64>,
    /// Round-trip duration in seconds
    pub duration: Histogram<f64>,
}

impl VideoMetrics {
    fn init() -> Self {
        let meter = global::meter("bayou_video");

        Self {
            _meter: meter.clone(),
            submissions: meter
                .u64_counter("video.submissions")
                .with_description("Video jobs accepted by the provider")
                .build(),
            polls: meter
                .u64_counter("video.polls")
                .with_description("Job status polls answered by the provider")
                .build(),
            errors: meter
                .u64_counter("video.errors")
                .with_description("Failed provider round trips")
                .build(),
            duration: meter
                .f64_histogram("video.duration")
                .with_unit("seconds")
                .with_description("Provider round-trip duration")
                .build(),
        }
    }

    /// Get the global video metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record an accepted submission.
    pub fn record_submit(&self, provider: &str, state: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("state", state.to_string()),
        ];
        self.submissions.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record an answered poll.
    pub fn record_poll(&self, provider: &str, state: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("state", state.to_string()),
        ];
        self.polls.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed round trip.
    pub fn record_error(&self, provider: &str, operation: &str, error_kind: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("operation", operation.to_string()),
            KeyValue::new("error_kind", error_kind.to_string()),
        ];
        self.errors.add(1, labels);
    }
}

impl Default for VideoMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}
