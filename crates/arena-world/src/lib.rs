//! Zones, ownership, and team scoring for the arena simulation.
//!
//! This crate models the objective side of the game: capturable zones that
//! grant their owning team score over time, the pluggable rules that decide
//! who owns a zone, and the clamped per-team score accumulators.
//!
//! # Modules
//!
//! - [`accrual`] -- [`ZoneAccrualEngine`]: owns the zones and converts
//!   ownership plus elapsed time into team score.
//! - [`capture`] -- The [`CaptureRule`] trait and its variants (static,
//!   proximity, unclaimed).
//! - [`error`] -- Error types for zone and score construction.
//! - [`scores`] -- [`TeamScoreState`]: per-team accumulators clamped to the
//!   win target.
//! - [`starting_world`] -- Default casino floor layout.
//! - [`zone`] -- A single capturable [`Zone`] and its configuration.

pub mod accrual;
pub mod capture;
pub mod error;
pub mod scores;
pub mod starting_world;
pub mod zone;

// Re-export primary types at crate root.
pub use accrual::ZoneAccrualEngine;
pub use capture::{CaptureRule, Contender, ProximityCapture, StaticCapture, UnclaimedCapture};
pub use error::WorldError;
pub use scores::TeamScoreState;
pub use starting_world::{default_zones, placeholder_capture};
pub use zone::{Zone, ZoneConfig};
