//! Read-only frame snapshot published to presentation.
//!
//! After every frame the session produces one [`FrameSnapshot`]. It is a
//! plain value: presentation reads it, draws, updates bars and scoreboards,
//! and never gets a handle on the mutable simulation state. One-shot
//! transitions (power-up opened or closed, zone flips, the win) travel as
//! [`FrameEvent`]s in the snapshot of the frame they happened in, so a
//! presenter reacts to each exactly once.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{PowerUpStatus, Team, WinOutcome, ZoneOwner};
use crate::ids::ZoneId;
use crate::structs::Position;

/// A one-shot transition raised during a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "kind")]
#[ts(export, export_to = "bindings/")]
pub enum FrameEvent {
    /// Full focus was spent to open a power-up window.
    PowerUpActivated,
    /// The power-up window ran out on its own.
    PowerUpExpired,
    /// The power-up window was consumed by the ultimate ability.
    PowerUpConsumed,
    /// A capture rule changed a zone's owner.
    ZoneCaptured {
        /// The zone that changed hands.
        zone: ZoneId,
        /// Owner before the change.
        previous: ZoneOwner,
        /// Owner after the change.
        owner: ZoneOwner,
    },
    /// A win check produced a terminal outcome. Raised once per session.
    WinDeclared {
        /// The terminal outcome.
        outcome: WinOutcome,
    },
}

/// The controlled actor as presentation sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ActorSnapshot {
    /// Hero name.
    pub hero: String,
    /// Team the actor plays for.
    pub team: Team,
    /// Position on the arena floor.
    pub position: Position,
    /// Display level.
    pub level: u32,
    /// Display experience.
    pub experience: u32,
    /// Display cash.
    pub cash: u64,
    /// Current control.
    pub control: f64,
    /// Control cap.
    pub max_control: f64,
    /// Current focus.
    pub focus: f64,
    /// Focus cap.
    pub max_focus: f64,
    /// Power-up state.
    pub power_up: PowerUpStatus,
    /// Focus is full and no window is open: the activate button is lit.
    pub power_up_ready: bool,
    /// Guard is held. No mechanical effect.
    pub guarding: bool,
}

/// A zone as presentation sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ZoneSnapshot {
    /// Stable key.
    pub id: ZoneId,
    /// Center of the zone.
    pub position: Position,
    /// Capture radius.
    pub radius: f64,
    /// Current owner.
    pub owner: ZoneOwner,
    /// Score per second granted to the owning team.
    pub accrual_rate: f64,
}

/// Team scores against the win target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScoreSnapshot {
    /// Blue crew edge.
    pub blue: f64,
    /// Red crew edge.
    pub red: f64,
    /// Win threshold.
    pub target: f64,
}

impl ScoreSnapshot {
    /// Score of the given team.
    pub const fn of(&self, team: Team) -> f64 {
        match team {
            Team::Blue => self.blue,
            Team::Red => self.red,
        }
    }
}

/// Everything presentation needs after one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FrameSnapshot {
    /// Frame number (1 for the first advanced frame).
    pub frame: u64,
    /// Capped delta applied this frame, in seconds.
    pub delta_seconds: f64,
    /// Simulated seconds since the session started (sum of capped deltas).
    pub elapsed_seconds: f64,
    /// The controlled actor.
    pub actor: ActorSnapshot,
    /// All zones in configuration order.
    pub zones: Vec<ZoneSnapshot>,
    /// Team scores.
    pub scores: ScoreSnapshot,
    /// Latest win outcome. Sticky once terminal.
    pub outcome: WinOutcome,
    /// Transitions raised since the previous snapshot.
    pub events: Vec<FrameEvent>,
}

impl FrameSnapshot {
    /// Look up a zone by key.
    pub fn zone(&self, id: &ZoneId) -> Option<&ZoneSnapshot> {
        self.zones.iter().find(|zone| &zone.id == id)
    }

    /// Whether the given event was raised this frame.
    pub fn has_event(&self, event: &FrameEvent) -> bool {
        self.events.contains(event)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_kind_tag() {
        let event = FrameEvent::WinDeclared {
            outcome: WinOutcome::BlueWins,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "win_declared");
        assert_eq!(json["outcome"], "blue_wins");
    }

    #[test]
    fn score_of_team() {
        let scores = ScoreSnapshot {
            blue: 10.0,
            red: 20.0,
            target: 100.0,
        };
        assert!((scores.of(Team::Blue) - 10.0).abs() < f64::EPSILON);
        assert!((scores.of(Team::Red) - 20.0).abs() < f64::EPSILON);
    }
}
