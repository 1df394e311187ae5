//! Session: the explicit simulation state and its per-frame step.
//!
//! A [`Session`] owns every piece of mutable game state: the actor and its
//! resources, the zone set, the team scores, the capture rule, the frame
//! clock, and the win timer. Nothing is global. The host drives it from a
//! single thread through two entry points:
//!
//! - [`Session::apply_input`] between frames, once per input event.
//! - [`Session::advance`] once per frame with a monotonic timestamp.
//!
//! Each call to `advance` runs these phases in order:
//!
//! 1. **Clock** -- turn the timestamp into a capped delta.
//! 2. **Resources** -- regenerate control, count down the power-up window.
//! 3. **Zones** -- apply the capture rule, then credit owners with
//!    `rate * delta`.
//! 4. **Win check** -- only when the wall-clock interval has passed, so a
//!    win reflects accrual from the same frame.
//! 5. **Snapshot** -- publish an immutable [`FrameSnapshot`].
//!
//! Once an outcome is terminal the session is frozen: frames still publish
//! snapshots, but resources, zones and scores no longer change, and input
//! is refused.

use std::time::Duration;

use arena_agents::hero::HeroProfile;
use arena_agents::{
    AbilityController, AbilityOutcome, AbilityRejection, AbilityResult, Actor, AgentError,
};
use arena_types::{FrameEvent, FrameSnapshot, WinOutcome};
use arena_world::{CaptureRule, Contender, TeamScoreState, WorldError, ZoneAccrualEngine};
use tracing::{debug, info};

use crate::clock::{ClockError, FrameClock};
use crate::config::{ConfigError, SimulationConfig};
use crate::input::{InputEvent, InputOutcome};
use crate::win::{WinCheckTimer, WinEvaluator};

/// Errors that can occur while assembling a session.
///
/// All of them are construction-time failures; a built session never
/// fails.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The configuration was rejected.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The clock or win timer could not be built.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// The actor or its abilities could not be built.
    #[error("agent error: {source}")]
    Agent {
        /// The underlying agent error.
        #[from]
        source: AgentError,
    },

    /// The zones, scores or capture rule could not be built.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },
}

/// One running arena match.
#[derive(Debug)]
pub struct Session {
    actor: Actor,
    abilities: AbilityController,
    zones: ZoneAccrualEngine,
    scores: TeamScoreState,
    capture: Box<dyn CaptureRule>,
    clock: FrameClock,
    win_timer: WinCheckTimer,
    outcome: WinOutcome,
    hero: Option<HeroProfile>,
    last_delta: f64,
    /// Events raised by input since the last frame.
    pending_events: Vec<FrameEvent>,
}

impl Session {
    /// Assemble a session from configuration and an explicit capture rule.
    ///
    /// `config.capture` is ignored; `capture` decides zone ownership.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if any component rejects its configuration
    /// or the capture rule does not fit the zone set.
    pub fn new(
        config: &SimulationConfig,
        capture: Box<dyn CaptureRule>,
    ) -> Result<Self, SessionError> {
        config.validate_roster()?;

        let actor = Actor::new(&config.player, &config.resources)?;
        let abilities = AbilityController::new(&config.abilities)?;
        let zones = ZoneAccrualEngine::new(&config.zones)?;
        let scores = TeamScoreState::new(config.session.target)?;
        capture.validate(zones.zones())?;
        let clock = FrameClock::new(config.session.delta_cap_seconds)?;
        let win_timer = WinCheckTimer::new(config.session.win_check_interval_seconds)?;

        info!(
            hero = actor.hero(),
            team = ?actor.team(),
            zones = zones.zones().len(),
            target = scores.target(),
            ?capture,
            "Session created"
        );

        Ok(Self {
            actor,
            abilities,
            zones,
            scores,
            capture,
            clock,
            win_timer,
            outcome: WinOutcome::None,
            hero: config.player_hero().cloned(),
            last_delta: 0.0,
            pending_events: Vec::new(),
        })
    }

    /// Assemble a session using the capture rule named in `config.capture`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the configuration is invalid.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SessionError> {
        Self::new(config, config.capture.build())
    }

    /// Apply one input event.
    ///
    /// Resulting power-up transitions are reported in the next frame's
    /// snapshot. After a terminal outcome abilities are rejected with
    /// [`AbilityRejection::SessionOver`] and every other event is a no-op.
    pub fn apply_input(&mut self, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::Move(direction) => {
                if !self.is_over() {
                    self.actor.step(direction);
                }
                InputOutcome::Moved(self.actor.position())
            }
            InputEvent::Guard(guarding) => InputOutcome::Guard {
                changed: !self.is_over() && self.actor.set_guard(guarding),
            },
            InputEvent::UseAbility(key) => InputOutcome::Ability(self.use_ability(&key)),
            InputEvent::ActivatePowerUp => InputOutcome::PowerUp {
                activated: self.activate_power_up(),
            },
        }
    }

    /// Invoke the ability bound to a raw key.
    pub fn use_ability(&mut self, key: &str) -> AbilityResult {
        if self.is_over() {
            debug!(key, "Ability refused, session is over");
            return Err(AbilityRejection::SessionOver);
        }
        let result = self.abilities.use_ability(key, &mut self.actor.resources);
        if matches!(result, Ok(AbilityOutcome::UltimateUsed)) {
            self.pending_events.push(FrameEvent::PowerUpConsumed);
        }
        result
    }

    /// Spend full focus to open a power-up window. Returns whether one
    /// opened.
    pub fn activate_power_up(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        let activated = self.actor.resources.try_activate_power_up();
        if activated {
            self.pending_events.push(FrameEvent::PowerUpActivated);
        }
        activated
    }

    /// Run one frame at monotonic timestamp `now` and publish its snapshot.
    pub fn advance(&mut self, now: Duration) -> FrameSnapshot {
        let delta = self.clock.sample(now);
        self.last_delta = delta;
        let mut events = std::mem::take(&mut self.pending_events);

        if self.is_over() {
            return self.build_snapshot(events);
        }

        let resources = self.actor.resources.tick(delta);
        if resources.power_up_expired {
            events.push(FrameEvent::PowerUpExpired);
        }

        let contenders = [Contender {
            team: self.actor.team(),
            position: self.actor.position(),
        }];
        events.extend(self.zones.apply_capture(self.capture.as_ref(), &contenders));
        self.zones.tick(delta, &mut self.scores);

        if self.win_timer.due(now) {
            self.outcome = WinEvaluator::check(&self.scores);
            debug!(
                frame = self.clock.frame(),
                blue = self.scores.blue(),
                red = self.scores.red(),
                outcome = ?self.outcome,
                "Win check"
            );
            if self.outcome.is_terminal() {
                info!(
                    frame = self.clock.frame(),
                    elapsed = self.clock.elapsed_seconds(),
                    outcome = ?self.outcome,
                    blue = self.scores.blue(),
                    red = self.scores.red(),
                    "Win declared"
                );
                events.push(FrameEvent::WinDeclared {
                    outcome: self.outcome,
                });
            }
        }

        self.build_snapshot(events)
    }

    /// The current state without advancing. Carries no events.
    pub fn snapshot(&self) -> FrameSnapshot {
        self.build_snapshot(Vec::new())
    }

    fn build_snapshot(&self, events: Vec<FrameEvent>) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.clock.frame(),
            delta_seconds: self.last_delta,
            elapsed_seconds: self.clock.elapsed_seconds(),
            actor: self.actor.snapshot(),
            zones: self.zones.snapshots(),
            scores: self.scores.snapshot(),
            outcome: self.outcome,
            events,
        }
    }

    /// Latest win outcome. Sticky once terminal.
    pub const fn outcome(&self) -> WinOutcome {
        self.outcome
    }

    /// Whether a terminal outcome has been declared.
    pub const fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Frames advanced so far.
    pub const fn frame(&self) -> u64 {
        self.clock.frame()
    }

    /// The controlled actor.
    pub const fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Team scores.
    pub const fn scores(&self) -> &TeamScoreState {
        &self.scores
    }

    /// Control spent by the primary ability.
    pub const fn primary_cost(&self) -> f64 {
        self.abilities.primary_cost()
    }

    /// Roster entry of the player's hero, when a roster is configured.
    pub const fn hero_profile(&self) -> Option<&HeroProfile> {
        self.hero.as_ref()
    }
}
