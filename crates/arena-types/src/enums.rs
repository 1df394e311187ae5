//! Enumeration types for the arena simulation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Teams and ownership
// ---------------------------------------------------------------------------

/// One of the two competing crews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Team {
    /// The blue crew (the player's side by default).
    Blue,
    /// The red crew.
    Red,
}

/// Current owner of a zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ZoneOwner {
    /// Nobody holds the zone; it grants nothing.
    #[default]
    Neutral,
    /// Held by the blue crew.
    Blue,
    /// Held by the red crew.
    Red,
}

impl ZoneOwner {
    /// The team holding the zone, or `None` when neutral.
    pub const fn team(self) -> Option<Team> {
        match self {
            Self::Neutral => None,
            Self::Blue => Some(Team::Blue),
            Self::Red => Some(Team::Red),
        }
    }
}

impl From<Team> for ZoneOwner {
    fn from(team: Team) -> Self {
        match team {
            Team::Blue => Self::Blue,
            Team::Red => Self::Red,
        }
    }
}

// ---------------------------------------------------------------------------
// Input vocabulary
// ---------------------------------------------------------------------------

/// A directional move request (arrow keys in the browser client).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Direction {
    /// Toward smaller `y`.
    Up,
    /// Toward larger `y`.
    Down,
    /// Toward smaller `x`.
    Left,
    /// Toward larger `x`.
    Right,
}

impl Direction {
    /// Offset `(dx, dy)` produced by moving `step` units in this direction.
    pub const fn offset(self, step: f64) -> (f64, f64) {
        match self {
            Self::Up => (0.0, -step),
            Self::Down => (0.0, step),
            Self::Left => (-step, 0.0),
            Self::Right => (step, 0.0),
        }
    }
}

/// Mechanically implemented abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum AbilityKey {
    /// The basic ability bound to `q`: costs control, builds focus.
    Primary,
    /// The ultimate bound to `r`: consumes an active power-up window.
    Ultimate,
}

impl AbilityKey {
    /// Resolve a raw input key. Accepts `q`/`primary` and `r`/`ultimate`,
    /// case-insensitively. Anything else is unrecognized.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "q" | "primary" => Some(Self::Primary),
            "r" | "ultimate" => Some(Self::Ultimate),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Resource and game state
// ---------------------------------------------------------------------------

/// Power-up state of an actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "state")]
#[ts(export, export_to = "bindings/")]
pub enum PowerUpStatus {
    /// No power-up window is open.
    #[default]
    Inactive,
    /// A power-up window is open.
    Active {
        /// Seconds left before the window closes on its own.
        remaining_seconds: f64,
    },
}

impl PowerUpStatus {
    /// Whether a power-up window is currently open.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// Result of a win check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum WinOutcome {
    /// Neither team has reached the target.
    #[default]
    None,
    /// Blue reached the target while red had not.
    BlueWins,
    /// Red reached the target while blue had not.
    RedWins,
    /// Both teams were at the target when the check ran. Scored as a draw.
    BothReachedSimultaneously,
}

impl WinOutcome {
    /// Whether this outcome ends the game.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::None)
    }

    /// The winning team, if exactly one team won.
    pub const fn winner(self) -> Option<Team> {
        match self {
            Self::BlueWins => Some(Team::Blue),
            Self::RedWins => Some(Team::Red),
            Self::None | Self::BothReachedSimultaneously => None,
        }
    }
}
