//! Shared type definitions for the arena simulation.
//!
//! This crate is the single source of truth for the vocabulary shared by
//! every arena crate and by the presentation layer. Types that cross the
//! core/presentation boundary flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Stable identifiers (zone keys)
//! - [`enums`] -- Teams, zone ownership, directions, ability keys, power-up
//!   status, win outcomes
//! - [`structs`] -- Small value types such as [`Position`]
//! - [`snapshot`] -- The read-only per-frame snapshot published to
//!   presentation, and the events it carries

pub mod enums;
pub mod ids;
pub mod snapshot;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{AbilityKey, Direction, PowerUpStatus, Team, WinOutcome, ZoneOwner};
pub use ids::ZoneId;
pub use snapshot::{ActorSnapshot, FrameEvent, FrameSnapshot, ScoreSnapshot, ZoneSnapshot};
pub use structs::Position;

#[cfg(test)]
mod tests {
    //! Binding generation for the presentation layer.

    #[test]
    fn export_bindings() {
        // Calling `export_all` writes the `TypeScript` files into the
        // `bindings/` directory relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::ZoneId::export_all();
        let _ = crate::structs::Position::export_all();
        let _ = crate::enums::Team::export_all();
        let _ = crate::enums::ZoneOwner::export_all();
        let _ = crate::enums::Direction::export_all();
        let _ = crate::enums::AbilityKey::export_all();
        let _ = crate::enums::PowerUpStatus::export_all();
        let _ = crate::enums::WinOutcome::export_all();
        let _ = crate::snapshot::FrameEvent::export_all();
        let _ = crate::snapshot::ActorSnapshot::export_all();
        let _ = crate::snapshot::ZoneSnapshot::export_all();
        let _ = crate::snapshot::ScoreSnapshot::export_all();
        let _ = crate::snapshot::FrameSnapshot::export_all();
    }
}
