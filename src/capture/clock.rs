//! Video timing source used to stamp captured events.

use crate::cli::types::match_minute;

/// Anything that knows the current position of the match video.
pub trait VideoClock {
    /// Seconds into the video.
    fn current_timestamp(&self) -> f64;

    fn match_minute(&self, timestamp: f64) -> u32 {
        match_minute(timestamp)
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualClock {
    timestamp: f64,
}

impl ManualClock {
    pub fn new(timestamp: f64) -> Self {
        Self { timestamp }
    }

    pub fn set(&mut self, timestamp: f64) {
        self.timestamp = timestamp.max(0.0);
    }

    pub fn advance(&mut self, seconds: f64) {
        self.set(self.timestamp + seconds);
    }
}

impl VideoClock for ManualClock {
    fn current_timestamp(&self) -> f64 {
        self.timestamp
    }
}
