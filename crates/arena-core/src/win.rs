//! Win evaluation.
//!
//! [`WinEvaluator`] is stateless: it looks at the scores and says who, if
//! anyone, has won. Calling it again after a win simply repeats the answer.
//! How often it runs is decided by [`WinCheckTimer`], which fires on a fixed
//! wall-clock interval instead of every frame, so detection cost does not
//! scale with frame rate.
//!
//! Tie-break: when both teams are at the target at the moment of a check,
//! the outcome is [`WinOutcome::BothReachedSimultaneously`], scored as a
//! draw. Scores are clamped to the target, so "higher score wins" can never
//! separate two teams that have both reached it.

use std::time::Duration;

use arena_types::{Team, WinOutcome};
use arena_world::TeamScoreState;

use crate::clock::ClockError;

/// Maps team scores to a [`WinOutcome`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinEvaluator;

impl WinEvaluator {
    /// Evaluate the scores against the target.
    pub fn check(scores: &TeamScoreState) -> WinOutcome {
        let blue = scores.has_reached_target(Team::Blue);
        let red = scores.has_reached_target(Team::Red);
        match (blue, red) {
            (false, false) => WinOutcome::None,
            (true, false) => WinOutcome::BlueWins,
            (false, true) => WinOutcome::RedWins,
            (true, true) => WinOutcome::BothReachedSimultaneously,
        }
    }
}

/// Schedules win checks on a wall-clock interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinCheckTimer {
    interval: Duration,
    last_check: Option<Duration>,
}

impl WinCheckTimer {
    /// Create a timer firing every `interval_seconds`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if the interval is negative or
    /// not finite.
    pub fn new(interval_seconds: f64) -> Result<Self, ClockError> {
        let interval = Duration::try_from_secs_f64(interval_seconds).map_err(|err| {
            ClockError::InvalidConfig {
                reason: format!("invalid win check interval {interval_seconds}: {err}"),
            }
        })?;
        Ok(Self {
            interval,
            last_check: None,
        })
    }

    /// Whether a check is due at `now`.
    ///
    /// The first call only records the starting point. Afterwards the timer
    /// fires once the wall-clock time since the last check exceeds the
    /// interval, and restarts from `now`.
    pub fn due(&mut self, now: Duration) -> bool {
        let Some(last) = self.last_check else {
            self.last_check = Some(now);
            return false;
        };
        if now.saturating_sub(last) > self.interval {
            self.last_check = Some(now);
            true
        } else {
            false
        }
    }
}
