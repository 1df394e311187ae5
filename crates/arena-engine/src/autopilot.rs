//! Autopilot input for headless runs.
//!
//! Plays the controlled actor from the previous frame's snapshot, one
//! decision per frame:
//!
//! 1. Open the power-up as soon as it is ready.
//! 2. Fire the ultimate just before an open window runs out.
//! 3. Cast the primary whenever control covers its cost.
//! 4. Otherwise walk toward the target zone.

use arena_core::input::{InputEvent, InputSource};
use arena_types::{Direction, FrameSnapshot, PowerUpStatus, Position, ZoneId};
use tracing::debug;

/// Seconds left in a power-up window at which the ultimate fires.
const ULTIMATE_THRESHOLD_SECONDS: f64 = 1.0;

/// Scripted player that farms focus and heads for a zone.
#[derive(Debug, Clone)]
pub struct Autopilot {
    target: ZoneId,
    primary_cost: f64,
    movement_step: f64,
}

impl Autopilot {
    /// Create an autopilot walking toward `target`.
    pub const fn new(target: ZoneId, primary_cost: f64, movement_step: f64) -> Self {
        Self {
            target,
            primary_cost,
            movement_step,
        }
    }

    fn decide(&self, last: &FrameSnapshot) -> Option<InputEvent> {
        let actor = &last.actor;
        if actor.power_up_ready {
            return Some(InputEvent::ActivatePowerUp);
        }
        if matches!(
            actor.power_up,
            PowerUpStatus::Active { remaining_seconds } if remaining_seconds <= ULTIMATE_THRESHOLD_SECONDS
        ) {
            return Some(InputEvent::ability("r"));
        }
        if actor.control >= self.primary_cost {
            return Some(InputEvent::ability("q"));
        }
        let zone = last.zone(&self.target)?;
        step_toward(actor.position, zone.position, self.movement_step).map(InputEvent::Move)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, frame: u64, last: Option<&FrameSnapshot>) -> Vec<InputEvent> {
        let decision = last.and_then(|snapshot| self.decide(snapshot));
        if let Some(event) = &decision {
            debug!(frame, ?event, "Autopilot input");
        }
        decision.into_iter().collect()
    }
}

/// Direction of one step that closes the larger axis gap, or `None` once
/// within half a step on both axes.
fn step_toward(from: Position, to: Position, step: f64) -> Option<Direction> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let slack = step / 2.0;
    if dx.abs() <= slack && dy.abs() <= slack {
        return None;
    }
    let direction = if dx.abs() >= dy.abs() {
        if dx > 0.0 { Direction::Right } else { Direction::Left }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(direction)
}
