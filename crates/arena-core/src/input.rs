//! Input events and the sources that produce them.
//!
//! The host translates raw key presses into [`InputEvent`]s and hands them
//! to [`Session::apply_input`] between frames. The headless runner gets its
//! events from an [`InputSource`] instead: once per frame it polls the
//! source with the previous snapshot, so scripted fixtures and autopilots
//! plug in without touching the loop.
//!
//! [`Session::apply_input`]: crate::session::Session::apply_input

use std::collections::BTreeMap;

use arena_agents::AbilityResult;
use arena_types::{Direction, FrameSnapshot, Position};

/// A discrete action requested by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Move one step.
    Move(Direction),
    /// Invoke the ability bound to a raw key (`q`, `r`, ...).
    UseAbility(String),
    /// Spend full focus to open a power-up window.
    ActivatePowerUp,
    /// Hold (`true`) or release (`false`) guard.
    Guard(bool),
}

impl InputEvent {
    /// Shorthand for [`InputEvent::UseAbility`].
    pub fn ability(key: impl Into<String>) -> Self {
        Self::UseAbility(key.into())
    }
}

/// What applying an [`InputEvent`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    /// The actor moved; carries the new position.
    Moved(Position),
    /// Guard was set; `changed` is false when it already had that value.
    Guard {
        /// Whether the flag flipped.
        changed: bool,
    },
    /// An ability was invoked.
    Ability(AbilityResult),
    /// A power-up activation was attempted.
    PowerUp {
        /// Whether a window opened.
        activated: bool,
    },
}

/// Produces input for the headless runner.
pub trait InputSource: Send {
    /// Events to apply before frame `frame` is advanced. `last` is the
    /// snapshot of the previous frame, absent before the first one.
    fn poll(&mut self, frame: u64, last: Option<&FrameSnapshot>) -> Vec<InputEvent>;
}

/// Never produces input. The session runs on zone accrual alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleInputSource;

impl InputSource for IdleInputSource {
    fn poll(&mut self, _frame: u64, _last: Option<&FrameSnapshot>) -> Vec<InputEvent> {
        Vec::new()
    }
}

/// Replays a fixed script keyed by frame number.
///
/// Events queued for frame `n` are returned once, before frame `n` is
/// advanced. Frames with nothing queued yield no input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInputSource {
    script: BTreeMap<u64, Vec<InputEvent>>,
}

impl ScriptedInputSource {
    /// An empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` before frame `frame`. Events on the same frame keep
    /// their insertion order.
    #[must_use]
    pub fn at(mut self, frame: u64, event: InputEvent) -> Self {
        self.script.entry(frame).or_default().push(event);
        self
    }

    /// Frames still holding queued events.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInputSource {
    fn poll(&mut self, frame: u64, _last: Option<&FrameSnapshot>) -> Vec<InputEvent> {
        self.script.remove(&frame).unwrap_or_default()
    }
}
