use crate::plan::Pause;
use std::time::Duration;

pub const DEFAULT_PROCESSING_PAUSE_MS: u64 = 500;
pub const DEFAULT_DISCOVERY_PAUSE_MS: u64 = 300;

/// How long the runner waits after each kind of step. Purely cosmetic:
/// pacing never changes the order of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub processing: Duration,
    pub discovery: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_millis(DEFAULT_PROCESSING_PAUSE_MS, DEFAULT_DISCOVERY_PAUSE_MS)
    }
}

impl Pacing {
    pub fn from_millis(processing_ms: u64, discovery_ms: u64) -> Self {
        Self {
            processing: Duration::from_millis(processing_ms),
            discovery: Duration::from_millis(discovery_ms),
        }
    }

    /// No pauses at all.
    pub fn instant() -> Self {
        Self {
            processing: Duration::ZERO,
            discovery: Duration::ZERO,
        }
    }

    /// Divides every pause by `speed`, to millisecond precision.
    /// Non-positive or non-finite speeds leave pacing unchanged.
    pub fn with_speed(self, speed: f32) -> Self {
        if !speed.is_finite() || speed <= 0.0 {
            return self;
        }
        let scale = |d: Duration| {
            Duration::from_millis((d.as_millis() as f64 / f64::from(speed)).round() as u64)
        };
        Self {
            processing: scale(self.processing),
            discovery: scale(self.discovery),
        }
    }

    pub fn duration(&self, pause: Pause) -> Duration {
        match pause {
            Pause::None => Duration::ZERO,
            Pause::Short => self.discovery,
            Pause::Long => self.processing,
        }
    }
}
