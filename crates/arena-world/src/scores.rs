//! Team score accumulators.
//!
//! Both scores live in `[0, target]` at all times. The accrual engine adds
//! to them and then calls [`TeamScoreState::clamp`]; the win evaluator and
//! presentation only read them.

use arena_types::{ScoreSnapshot, Team};

use crate::error::WorldError;

/// Per-team score totals and the shared win target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamScoreState {
    blue: f64,
    red: f64,
    target: f64,
}

impl TeamScoreState {
    /// Start both teams at zero.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidTarget`] unless `target` is finite and
    /// positive.
    pub fn new(target: f64) -> Result<Self, WorldError> {
        if !(target.is_finite() && target > 0.0) {
            return Err(WorldError::InvalidTarget(target));
        }
        Ok(Self {
            blue: 0.0,
            red: 0.0,
            target,
        })
    }

    /// Build a state at explicit scores (clamped into range).
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidTarget`] unless `target` is finite and
    /// positive.
    pub fn from_parts(blue: f64, red: f64, target: f64) -> Result<Self, WorldError> {
        let mut state = Self::new(target)?;
        state.blue = blue;
        state.red = red;
        state.clamp();
        Ok(state)
    }

    /// Add to a team's total without clamping. Call [`clamp`](Self::clamp)
    /// once the step is complete.
    pub(crate) fn add(&mut self, team: Team, amount: f64) {
        match team {
            Team::Blue => self.blue += amount,
            Team::Red => self.red += amount,
        }
    }

    /// Force both totals back into `[0, target]`. Non-finite totals reset
    /// to zero.
    pub fn clamp(&mut self) {
        self.blue = clamp_score(self.blue, self.target);
        self.red = clamp_score(self.red, self.target);
    }

    /// Score of a team.
    pub const fn score(&self, team: Team) -> f64 {
        match team {
            Team::Blue => self.blue,
            Team::Red => self.red,
        }
    }

    /// Blue total.
    pub const fn blue(&self) -> f64 {
        self.blue
    }

    /// Red total.
    pub const fn red(&self) -> f64 {
        self.red
    }

    /// Win threshold.
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// Whether a team has reached the target.
    pub fn has_reached_target(&self, team: Team) -> bool {
        self.score(team) >= self.target
    }

    /// Read-only view for presentation.
    pub const fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            blue: self.blue,
            red: self.red,
            target: self.target,
        }
    }
}

fn clamp_score(score: f64, target: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, target)
    }
}
