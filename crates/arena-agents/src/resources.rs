//! Control/focus resources and the power-up state machine.
//!
//! Each actor carries two resources:
//!
//! - **Control** regenerates continuously at `control_regen_per_second` and
//!   is capped at `max_control`. Abilities spend it.
//! - **Focus** never regenerates. It is gained from ability use and capped
//!   at `max_focus`.
//!
//! Full focus unlocks the power-up:
//!
//! ```text
//! Inactive --[focus >= max_focus, try_activate]--> Active
//! Active   --[duration elapsed | deactivate]-----> Inactive
//! ```
//!
//! Activation spends all focus. There is no terminal state; the machine
//! cycles for the lifetime of the session.

use arena_types::PowerUpStatus;
use tracing::{debug, info};

use crate::config::ResourceConfig;
use crate::error::{AbilityRejection, AgentError};

/// What happened during one resource tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceTickResult {
    /// The power-up window ran out during this tick.
    pub power_up_expired: bool,
}

/// Owns one actor's control/focus pair and power-up state.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceController {
    control: f64,
    max_control: f64,
    regen_per_second: f64,
    focus: f64,
    max_focus: f64,
    power_up_duration: f64,
    power_up: PowerUpStatus,
}

impl ResourceController {
    /// Build a controller at its configured starting levels with no focus
    /// and the power-up inactive.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: &ResourceConfig) -> Result<Self, AgentError> {
        Self::from_parts(config, config.starting_control, 0.0)
    }

    /// Build a controller at explicit resource levels (useful for tests and
    /// state restoration).
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidConfig`] if the configuration is invalid
    /// or a level lies outside `[0, max]`.
    pub fn from_parts(config: &ResourceConfig, control: f64, focus: f64) -> Result<Self, AgentError> {
        config.validate()?;
        if !(0.0..=config.max_control).contains(&control) {
            return Err(AgentError::InvalidConfig {
                reason: format!("control {control} outside [0, {}]", config.max_control),
            });
        }
        if !(0.0..=config.max_focus).contains(&focus) {
            return Err(AgentError::InvalidConfig {
                reason: format!("focus {focus} outside [0, {}]", config.max_focus),
            });
        }
        Ok(Self {
            control,
            max_control: config.max_control,
            regen_per_second: config.control_regen_per_second,
            focus,
            max_focus: config.max_focus,
            power_up_duration: config.power_up_duration_seconds,
            power_up: PowerUpStatus::Inactive,
        })
    }

    /// Advance resources by `delta` seconds.
    ///
    /// Control grows by `regen * delta`, capped at the maximum. An open
    /// power-up window counts down by `delta` and closes once it reaches
    /// zero; the closing is reported exactly once through the result.
    /// Negative or non-finite deltas are treated as zero.
    pub fn tick(&mut self, delta: f64) -> ResourceTickResult {
        let delta = sanitize(delta);

        self.control = self
            .regen_per_second
            .mul_add(delta, self.control)
            .min(self.max_control);

        let mut result = ResourceTickResult::default();
        if let PowerUpStatus::Active { remaining_seconds } = self.power_up {
            let remaining = remaining_seconds - delta;
            if remaining <= 0.0 {
                self.power_up = PowerUpStatus::Inactive;
                result.power_up_expired = true;
                info!("Power-up expired");
            } else {
                self.power_up = PowerUpStatus::Active {
                    remaining_seconds: remaining,
                };
            }
        }
        result
    }

    /// Add focus, capped at the maximum.
    ///
    /// Negative and non-finite amounts are clamped to zero, making the call
    /// a no-op rather than an error.
    pub fn gain_focus(&mut self, amount: f64) {
        let amount = sanitize(amount);
        self.focus = (self.focus + amount).min(self.max_focus);
    }

    /// Open a power-up window if focus is full and none is open.
    ///
    /// On success focus drops to zero and the window starts at the
    /// configured duration. Otherwise nothing changes. Returns whether the
    /// window was opened.
    pub fn try_activate_power_up(&mut self) -> bool {
        if !self.is_power_up_ready() {
            debug!(
                focus = self.focus,
                max_focus = self.max_focus,
                active = self.power_up.is_active(),
                "Power-up not ready"
            );
            return false;
        }
        self.focus = 0.0;
        self.power_up = PowerUpStatus::Active {
            remaining_seconds: self.power_up_duration,
        };
        info!(duration = self.power_up_duration, "Power-up activated");
        true
    }

    /// Close the power-up window unconditionally. Returns whether a window
    /// was open.
    pub fn deactivate_power_up(&mut self) -> bool {
        if self.power_up.is_active() {
            self.power_up = PowerUpStatus::Inactive;
            true
        } else {
            false
        }
    }

    /// Spend control, or refuse without touching state.
    pub(crate) fn spend_control(&mut self, cost: f64) -> Result<(), AbilityRejection> {
        if self.control >= cost {
            self.control -= cost;
            Ok(())
        } else {
            Err(AbilityRejection::InsufficientControl {
                required: cost,
                available: self.control,
            })
        }
    }

    /// Focus is full and no window is open.
    pub fn is_power_up_ready(&self) -> bool {
        self.focus >= self.max_focus && !self.power_up.is_active()
    }

    /// Current control.
    pub const fn control(&self) -> f64 {
        self.control
    }

    /// Control cap.
    pub const fn max_control(&self) -> f64 {
        self.max_control
    }

    /// Current focus.
    pub const fn focus(&self) -> f64 {
        self.focus
    }

    /// Focus cap.
    pub const fn max_focus(&self) -> f64 {
        self.max_focus
    }

    /// Current power-up state.
    pub const fn power_up(&self) -> PowerUpStatus {
        self.power_up
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
