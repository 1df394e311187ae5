//! Configuration and defaults for actor mechanics.
//!
//! These structs mirror the `resources`, `abilities` and `player` keys of
//! `arena-config.yaml`. Every field has a default matching the shipped
//! casino floor, so an empty YAML document yields a playable session.
//! Controllers validate their config on construction; an invalid value is
//! a startup failure, never a runtime one.

use arena_types::{Position, Team};
use serde::Deserialize;

use crate::error::AgentError;

/// Tunables for the control/focus pair and the power-up window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceConfig {
    /// Control cap (default: 100).
    #[serde(default = "default_max_control")]
    pub max_control: f64,

    /// Control at session start (default: 100, i.e. full).
    #[serde(default = "default_max_control")]
    pub starting_control: f64,

    /// Control regenerated per second (default: 3).
    #[serde(default = "default_control_regen_per_second")]
    pub control_regen_per_second: f64,

    /// Focus cap; reaching it unlocks the power-up (default: 100).
    #[serde(default = "default_max_focus")]
    pub max_focus: f64,

    /// Length of a power-up window in seconds (default: 10).
    #[serde(default = "default_power_up_duration_seconds")]
    pub power_up_duration_seconds: f64,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            max_control: default_max_control(),
            starting_control: default_max_control(),
            control_regen_per_second: default_control_regen_per_second(),
            max_focus: default_max_focus(),
            power_up_duration_seconds: default_power_up_duration_seconds(),
        }
    }
}

impl ResourceConfig {
    /// Check every value is finite and in range.
    pub fn validate(&self) -> Result<(), AgentError> {
        ensure_non_negative("resources.max_control", self.max_control)?;
        ensure_non_negative("resources.starting_control", self.starting_control)?;
        ensure_non_negative(
            "resources.control_regen_per_second",
            self.control_regen_per_second,
        )?;
        ensure_non_negative("resources.max_focus", self.max_focus)?;
        ensure_non_negative(
            "resources.power_up_duration_seconds",
            self.power_up_duration_seconds,
        )?;
        if self.starting_control > self.max_control {
            return Err(AgentError::InvalidConfig {
                reason: format!(
                    "resources.starting_control ({}) exceeds max_control ({})",
                    self.starting_control, self.max_control
                ),
            });
        }
        Ok(())
    }
}

/// Cost/effect table for the implemented abilities.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbilityConfig {
    /// Control spent by the primary ability (default: 25).
    #[serde(default = "default_primary_cost")]
    pub primary_cost: f64,

    /// Focus gained by a successful primary ability (default: 10).
    #[serde(default = "default_primary_focus_gain")]
    pub primary_focus_gain: f64,
}

impl Default for AbilityConfig {
    fn default() -> Self {
        Self {
            primary_cost: default_primary_cost(),
            primary_focus_gain: default_primary_focus_gain(),
        }
    }
}

impl AbilityConfig {
    /// Check every value is finite and non-negative.
    pub fn validate(&self) -> Result<(), AgentError> {
        ensure_non_negative("abilities.primary_cost", self.primary_cost)?;
        ensure_non_negative("abilities.primary_focus_gain", self.primary_focus_gain)
    }
}

/// Starting state of the controlled actor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerConfig {
    /// Hero name; must appear in the roster when one is configured.
    #[serde(default = "default_hero")]
    pub hero: String,

    /// Team the actor plays for (default: blue).
    #[serde(default = "default_team")]
    pub team: Team,

    /// Spawn position (default: 100, 500).
    #[serde(default = "default_position")]
    pub position: Position,

    /// Display level (default: 1).
    #[serde(default = "default_level")]
    pub level: u32,

    /// Display experience (default: 0).
    #[serde(default)]
    pub experience: u32,

    /// Display cash (default: 500).
    #[serde(default = "default_cash")]
    pub cash: u64,

    /// Map units moved per directional input (default: 10).
    #[serde(default = "default_movement_step")]
    pub movement_step: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            hero: default_hero(),
            team: default_team(),
            position: default_position(),
            level: default_level(),
            experience: 0,
            cash: default_cash(),
            movement_step: default_movement_step(),
        }
    }
}

impl PlayerConfig {
    /// Check the hero name is present and the step is usable.
    pub fn validate(&self) -> Result<(), AgentError> {
        if self.hero.trim().is_empty() {
            return Err(AgentError::InvalidConfig {
                reason: "player.hero must not be empty".to_owned(),
            });
        }
        if !self.position.x.is_finite() || !self.position.y.is_finite() {
            return Err(AgentError::InvalidConfig {
                reason: "player.position must be finite".to_owned(),
            });
        }
        ensure_non_negative("player.movement_step", self.movement_step)
    }
}

/// Reject negative, NaN and infinite values.
pub(crate) fn ensure_non_negative(field: &str, value: f64) -> Result<(), AgentError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AgentError::InvalidConfig {
            reason: format!("{field} must be a finite non-negative number, got {value}"),
        })
    }
}

const fn default_max_control() -> f64 {
    100.0
}

const fn default_control_regen_per_second() -> f64 {
    3.0
}

const fn default_max_focus() -> f64 {
    100.0
}

const fn default_power_up_duration_seconds() -> f64 {
    10.0
}

const fn default_primary_cost() -> f64 {
    25.0
}

const fn default_primary_focus_gain() -> f64 {
    10.0
}

fn default_hero() -> String {
    "Sam Rothstein".to_owned()
}

const fn default_team() -> Team {
    Team::Blue
}

const fn default_position() -> Position {
    Position::new(100.0, 500.0)
}

const fn default_level() -> u32 {
    1
}

const fn default_cash() -> u64 {
    500
}

const fn default_movement_step() -> f64 {
    10.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ResourceConfig::default().validate().is_ok());
        assert!(AbilityConfig::default().validate().is_ok());
        assert!(PlayerConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_regen_is_rejected() {
        let cfg = ResourceConfig {
            control_regen_per_second: -1.0,
            ..ResourceConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn nan_cost_is_rejected() {
        let cfg = AbilityConfig {
            primary_cost: f64::NAN,
            ..AbilityConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn starting_control_above_cap_is_rejected() {
        let cfg = ResourceConfig {
            starting_control: 150.0,
            ..ResourceConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("starting_control"));
    }

    #[test]
    fn empty_hero_is_rejected() {
        let cfg = PlayerConfig {
            hero: "  ".to_owned(),
            ..PlayerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: ResourceConfig = serde_json::from_str(r#"{"max_focus": 50.0}"#).unwrap();
        assert!((cfg.max_focus - 50.0).abs() < f64::EPSILON);
        assert!((cfg.max_control - 100.0).abs() < f64::EPSILON);
        assert!((cfg.power_up_duration_seconds - 10.0).abs() < f64::EPSILON);
    }
}
