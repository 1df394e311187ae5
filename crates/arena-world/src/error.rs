//! Error types for the `arena-world` crate.
//!
//! Every variant is a construction-time failure raised while assembling
//! zones, scores or capture rules from configuration.

use arena_types::ZoneId;

/// Errors that can occur while building the zone set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorldError {
    /// Two zones share the same key.
    #[error("duplicate zone id: {0}")]
    DuplicateZone(ZoneId),

    /// A zone's accrual rate is negative or not finite.
    #[error("zone {zone} has invalid accrual rate {rate}")]
    InvalidAccrualRate {
        /// The offending zone.
        zone: ZoneId,
        /// The configured rate.
        rate: f64,
    },

    /// A zone's capture radius is negative or not finite.
    #[error("zone {zone} has invalid radius {radius}")]
    InvalidRadius {
        /// The offending zone.
        zone: ZoneId,
        /// The configured radius.
        radius: f64,
    },

    /// A zone's position is not finite.
    #[error("zone {0} has a non-finite position")]
    InvalidPosition(ZoneId),

    /// The win target is zero, negative, or not finite.
    #[error("win target must be a finite positive number, got {0}")]
    InvalidTarget(f64),

    /// A capture rule refers to a zone that does not exist.
    #[error("capture rule refers to unknown zone: {0}")]
    UnknownZone(ZoneId),
}
