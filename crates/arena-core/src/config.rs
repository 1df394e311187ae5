//! Configuration loading and typed config structures for the arena simulation.
//!
//! The canonical configuration lives in `arena-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, a loader that reads the file, and [`SimulationConfig::validate`],
//! which rejects every out-of-range value before a session is built. An
//! invalid configuration is a startup failure, never a runtime one.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use arena_agents::hero::{self, HeroProfile};
use arena_agents::{AbilityConfig, PlayerConfig, ResourceConfig};
use arena_types::{ZoneId, ZoneOwner};
use arena_world::{
    CaptureRule, ProximityCapture, StaticCapture, TeamScoreState, UnclaimedCapture,
    ZoneAccrualEngine, ZoneConfig,
};
use serde::Deserialize;

use crate::clock::FrameClock;
use crate::win::WinCheckTimer;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but holds an unusable value.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

impl ConfigError {
    fn invalid(reason: impl ToString) -> Self {
        Self::Invalid {
            reason: reason.to_string(),
        }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `arena-config.yaml`. Omitted keys take the
/// defaults shipped in that file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Win target, timing, and frame pacing.
    #[serde(default)]
    pub session: SessionConfig,

    /// The controlled actor's starting state.
    #[serde(default)]
    pub player: PlayerConfig,

    /// Control/focus tunables.
    #[serde(default)]
    pub resources: ResourceConfig,

    /// Ability costs and effects.
    #[serde(default)]
    pub abilities: AbilityConfig,

    /// Capturable zones, in presentation order.
    #[serde(default = "arena_world::default_zones")]
    pub zones: Vec<ZoneConfig>,

    /// Which capture rule decides zone ownership.
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Hero roster. When non-empty the player's hero must be listed.
    #[serde(default = "hero::default_roster")]
    pub heroes: Vec<HeroProfile>,

    /// Run limits for the headless runner.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            player: PlayerConfig::default(),
            resources: ResourceConfig::default(),
            abilities: AbilityConfig::default(),
            zones: arena_world::default_zones(),
            capture: CaptureConfig::default(),
            heroes: hero::default_roster(),
            simulation: SimulationBoundsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Check every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.validate()?;
        self.player.validate().map_err(ConfigError::invalid)?;
        self.resources.validate().map_err(ConfigError::invalid)?;
        self.abilities.validate().map_err(ConfigError::invalid)?;

        let engine = ZoneAccrualEngine::new(&self.zones).map_err(ConfigError::invalid)?;
        self.capture
            .build()
            .validate(engine.zones())
            .map_err(ConfigError::invalid)?;

        self.validate_roster()
    }

    /// Check hero names are unique and the player's hero is listed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] on a duplicate or missing hero.
    pub fn validate_roster(&self) -> Result<(), ConfigError> {
        let mut names = BTreeSet::new();
        for profile in &self.heroes {
            if !names.insert(profile.name.as_str()) {
                return Err(ConfigError::invalid(format!(
                    "duplicate hero in roster: {}",
                    profile.name
                )));
            }
        }
        if !self.heroes.is_empty() && hero::find(&self.heroes, &self.player.hero).is_none() {
            return Err(ConfigError::invalid(format!(
                "player hero {:?} is not in the roster",
                self.player.hero
            )));
        }
        Ok(())
    }

    /// The roster entry for the player's hero, if a roster is configured.
    pub fn player_hero(&self) -> Option<&HeroProfile> {
        hero::find(&self.heroes, &self.player.hero)
    }
}

/// Win target and frame timing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionConfig {
    /// Score a team needs to win (default: 500000).
    #[serde(default = "default_target")]
    pub target: f64,

    /// Wall-clock seconds between win checks (default: 2).
    #[serde(default = "default_win_check_interval_seconds")]
    pub win_check_interval_seconds: f64,

    /// Largest delta one frame may apply, in seconds (default: 0.25).
    #[serde(default = "default_delta_cap_seconds")]
    pub delta_cap_seconds: f64,

    /// Real-time milliseconds between frames in the headless runner
    /// (default: 16). Zero runs frames back to back.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            win_check_interval_seconds: default_win_check_interval_seconds(),
            delta_cap_seconds: default_delta_cap_seconds(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

impl SessionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        TeamScoreState::new(self.target).map_err(ConfigError::invalid)?;
        FrameClock::new(self.delta_cap_seconds).map_err(ConfigError::invalid)?;
        WinCheckTimer::new(self.win_check_interval_seconds).map_err(ConfigError::invalid)?;
        Ok(())
    }
}

/// Capture rule selection.
///
/// ```yaml
/// capture:
///   rule: static
///   assignments:
///     slot_cage: blue
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum CaptureConfig {
    /// Fixed assignments; unlisted zones keep their owner.
    Static {
        /// `zone -> owner` assignments.
        #[serde(default)]
        assignments: BTreeMap<ZoneId, ZoneOwner>,
    },
    /// Sole team inside the radius takes the zone.
    Proximity,
    /// Ownership never changes.
    Unclaimed,
}

impl Default for CaptureConfig {
    /// Static rule handing the slot cage to blue.
    fn default() -> Self {
        Self::Static {
            assignments: arena_world::placeholder_capture().assignments().clone(),
        }
    }
}

impl CaptureConfig {
    /// Build the configured rule.
    pub fn build(&self) -> Box<dyn CaptureRule> {
        match self {
            Self::Static { assignments } => Box::new(StaticCapture::new(assignments.clone())),
            Self::Proximity => Box::new(ProximityCapture),
            Self::Unclaimed => Box::new(UnclaimedCapture),
        }
    }
}

/// Run limits for the headless runner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Stop after this many frames (0 = unlimited).
    #[serde(default)]
    pub max_frames: u64,

    /// Stop after this many wall-clock seconds (0 = unlimited).
    #[serde(default)]
    pub max_real_time_seconds: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,

    /// Log a scoreboard line every N frames (0 = never).
    #[serde(default = "default_scoreboard_every_frames")]
    pub scoreboard_every_frames: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            scoreboard_every_frames: default_scoreboard_every_frames(),
        }
    }
}

const fn default_target() -> f64 {
    500_000.0
}

const fn default_win_check_interval_seconds() -> f64 {
    2.0
}

const fn default_delta_cap_seconds() -> f64 {
    0.25
}

const fn default_frame_interval_ms() -> u64 {
    16
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_scoreboard_every_frames() -> u64 {
    60
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use arena_types::{Position, Team};

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SimulationConfig::parse("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.zones.len(), 3);
        assert_eq!(config.heroes.len(), 3);
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let yaml = include_str!("../../../arena-config.yaml");
        let config = SimulationConfig::parse(yaml).unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn parses_full_document() {
        let yaml = r"
session:
  target: 1000
  win_check_interval_seconds: 0.5
  delta_cap_seconds: 1.0
  frame_interval_ms: 0
player:
  hero: Nicky Santoro
  team: red
  position: { x: 10, y: 20 }
resources:
  max_focus: 50
abilities:
  primary_cost: 30
zones:
  - id: vault
    position: { x: 0, y: 0 }
    radius: 5
    accrual_rate: 100
    owner: red
capture:
  rule: proximity
simulation:
  max_frames: 10
logging:
  level: debug
  json: true
";
        let config = SimulationConfig::parse(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert!((config.session.target - 1000.0).abs() < f64::EPSILON);
        assert_eq!(config.session.frame_interval_ms, 0);
        assert_eq!(config.player.team, Team::Red);
        assert_eq!(config.player.position, Position::new(10.0, 20.0));
        assert!((config.resources.max_focus - 50.0).abs() < f64::EPSILON);
        assert!((config.abilities.primary_cost - 30.0).abs() < f64::EPSILON);
        assert_eq!(config.zones.len(), 1);
        assert_eq!(config.zones.first().map(|z| z.owner), Some(ZoneOwner::Red));
        assert_eq!(config.capture, CaptureConfig::Proximity);
        assert_eq!(config.simulation.max_frames, 10);
        assert!(config.logging.json);
        assert_eq!(
            config.player_hero().map(|h| h.ultimate.as_str()),
            Some("The Baseball Bat")
        );
    }

    #[test]
    fn static_assignments_parse() {
        let yaml = "capture:\n  rule: static\n  assignments:\n    back_room: red\n";
        let config = SimulationConfig::parse(yaml).unwrap();
        let mut expected = BTreeMap::new();
        expected.insert(ZoneId::new("back_room"), ZoneOwner::Red);
        assert_eq!(
            config.capture,
            CaptureConfig::Static {
                assignments: expected
            }
        );
    }

    #[test]
    fn zero_target_is_invalid() {
        let config = SimulationConfig::parse("session:\n  target: 0\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn negative_rate_is_invalid() {
        let mut config = SimulationConfig::default();
        if let Some(zone) = config.zones.first_mut() {
            zone.accrual_rate = -1.0;
        }
        assert!(config.validate().is_err());
    }

    #[test]
    fn duplicate_zone_is_invalid() {
        let mut config = SimulationConfig::default();
        let copy = config.zones.first().cloned().unwrap();
        config.zones.push(copy);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate zone"));
    }

    #[test]
    fn zero_delta_cap_is_invalid() {
        let mut config = SimulationConfig::default();
        config.session.delta_cap_seconds = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_duration_is_invalid() {
        let mut config = SimulationConfig::default();
        config.resources.power_up_duration_seconds = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn static_rule_on_unknown_zone_is_invalid() {
        let mut assignments = BTreeMap::new();
        assignments.insert(ZoneId::new("vault"), ZoneOwner::Blue);
        let config = SimulationConfig {
            capture: CaptureConfig::Static { assignments },
            ..SimulationConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("vault"));
    }

    #[test]
    fn unknown_hero_is_invalid() {
        let mut config = SimulationConfig::default();
        config.player.hero = "Ace".to_owned();
        assert!(config.validate().is_err());
        config.heroes.clear();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let result = SimulationConfig::parse("session: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }
}
