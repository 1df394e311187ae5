//! Actor state and per-player mechanics for the arena simulation.
//!
//! This crate owns everything that belongs to one controlled actor:
//!
//! - [`resources`] -- the regenerating control / accumulating focus pair and
//!   the timed power-up state machine ([`ResourceController`]).
//! - [`abilities`] -- validate-then-apply cost/effect contract for abilities
//!   ([`AbilityController`]).
//! - [`actor`] -- the actor itself: hero, team, position, display stats,
//!   guard flag, and its resources.
//! - [`hero`] -- the hero roster and ability labels.
//! - [`config`] -- typed, validated configuration for the above.
//! - [`error`] -- error and rejection types.
//!
//! Every operation is synchronous and total over valid input. Rejections
//! are typed values; nothing here panics.

pub mod abilities;
pub mod actor;
pub mod config;
pub mod error;
pub mod hero;
pub mod resources;

pub use abilities::{AbilityController, AbilityOutcome, AbilityResult};
pub use actor::Actor;
pub use config::{AbilityConfig, PlayerConfig, ResourceConfig};
pub use error::{AbilityRejection, AgentError};
pub use hero::HeroProfile;
pub use resources::{ResourceController, ResourceTickResult};
