//! Frame clock for the arena simulation.
//!
//! The host samples a monotonic wall clock once per frame and hands the
//! reading to [`FrameClock::sample`]. The clock turns consecutive readings
//! into a per-frame delta in seconds, bounded above by a configured cap so
//! that a stalled or backgrounded host cannot push one enormous step
//! through the resource and score clamps.
//!
//! # Design Principles
//!
//! - The first sample only establishes a baseline; its delta is zero.
//! - A reading earlier than the previous one yields a zero delta and
//!   becomes the new baseline. Deltas are never negative.
//! - Simulated elapsed time is the sum of capped deltas, so it can lag
//!   wall-clock time after a stall.

use std::time::Duration;

/// Errors that can occur while building the clock.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// Invalid time configuration (e.g. a zero delta cap).
    #[error("invalid clock configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Converts wall-clock samples into bounded per-frame deltas.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    /// Largest delta a single frame may apply, in seconds.
    delta_cap: f64,

    /// The previous reading, if any frame has been sampled.
    last_sample: Option<Duration>,

    /// Number of frames sampled so far.
    frame: u64,

    /// Sum of all capped deltas.
    elapsed: f64,
}

impl FrameClock {
    /// Create a clock that caps each delta at `delta_cap_seconds`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] unless the cap is finite and
    /// positive.
    pub fn new(delta_cap_seconds: f64) -> Result<Self, ClockError> {
        if !(delta_cap_seconds.is_finite() && delta_cap_seconds > 0.0) {
            return Err(ClockError::InvalidConfig {
                reason: format!(
                    "delta cap must be a finite positive number of seconds, got {delta_cap_seconds}"
                ),
            });
        }
        Ok(Self {
            delta_cap: delta_cap_seconds,
            last_sample: None,
            frame: 0,
            elapsed: 0.0,
        })
    }

    /// Record a wall-clock reading and return this frame's delta in seconds.
    ///
    /// `delta = min(now - previous, cap)`, or zero on the first sample and
    /// when `now` is earlier than the previous reading.
    pub fn sample(&mut self, now: Duration) -> f64 {
        let raw = self
            .last_sample
            .map_or(Duration::ZERO, |last| now.saturating_sub(last));
        self.last_sample = Some(now);
        self.frame = self.frame.saturating_add(1);

        let delta = raw.as_secs_f64().min(self.delta_cap);
        self.elapsed += delta;
        delta
    }

    /// Number of frames sampled so far.
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulated seconds since the first sample.
    pub const fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }
}
