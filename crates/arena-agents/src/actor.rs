//! The controlled actor.
//!
//! An [`Actor`] is created once at session start and lives for the whole
//! session. It is mutated every frame (resource regeneration, power-up
//! countdown) and on every input event (movement, guard, abilities).
//! Position is not bounds-checked: the arena has no topology yet.

use arena_types::{ActorSnapshot, Direction, Position, Team};
use tracing::debug;

use crate::config::{PlayerConfig, ResourceConfig};
use crate::error::AgentError;
use crate::resources::ResourceController;

/// The player-controlled agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    hero: String,
    team: Team,
    position: Position,
    level: u32,
    experience: u32,
    cash: u64,
    movement_step: f64,
    guarding: bool,
    /// Control, focus and power-up state.
    pub resources: ResourceController,
}

impl Actor {
    /// Spawn the actor from its starting configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidConfig`] if either configuration is
    /// invalid.
    pub fn new(player: &PlayerConfig, resources: &ResourceConfig) -> Result<Self, AgentError> {
        player.validate()?;
        Ok(Self {
            hero: player.hero.clone(),
            team: player.team,
            position: player.position,
            level: player.level,
            experience: player.experience,
            cash: player.cash,
            movement_step: player.movement_step,
            guarding: false,
            resources: ResourceController::new(resources)?,
        })
    }

    /// Move one step in `direction`.
    pub fn step(&mut self, direction: Direction) {
        let (dx, dy) = direction.offset(self.movement_step);
        self.position = self.position.translated(dx, dy);
    }

    /// Set the guard flag. Returns whether it changed.
    pub fn set_guard(&mut self, guarding: bool) -> bool {
        if self.guarding == guarding {
            return false;
        }
        self.guarding = guarding;
        debug!(guarding, "Guard toggled");
        true
    }

    /// Hero name.
    pub fn hero(&self) -> &str {
        &self.hero
    }

    /// Team the actor plays for.
    pub const fn team(&self) -> Team {
        self.team
    }

    /// Current position.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Whether guard is held.
    pub const fn is_guarding(&self) -> bool {
        self.guarding
    }

    /// Read-only view for presentation.
    pub fn snapshot(&self) -> ActorSnapshot {
        ActorSnapshot {
            hero: self.hero.clone(),
            team: self.team,
            position: self.position,
            level: self.level,
            experience: self.experience,
            cash: self.cash,
            control: self.resources.control(),
            max_control: self.resources.max_control(),
            focus: self.resources.focus(),
            max_focus: self.resources.max_focus(),
            power_up: self.resources.power_up(),
            power_up_ready: self.resources.is_power_up_ready(),
            guarding: self.guarding,
        }
    }
}
