//! A single capturable zone.

use arena_types::{Position, ZoneId, ZoneOwner, ZoneSnapshot};
use serde::Deserialize;

use crate::error::WorldError;

/// Static description of a zone, as read from `arena-config.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ZoneConfig {
    /// Stable key.
    pub id: ZoneId,
    /// Center of the zone.
    pub position: Position,
    /// Capture radius in map units.
    pub radius: f64,
    /// Score per second granted to the owning team.
    pub accrual_rate: f64,
    /// Owner at session start (default: neutral).
    #[serde(default)]
    pub owner: ZoneOwner,
}

/// A capturable objective.
///
/// The accrual rate is fixed at creation. Only the owner changes, and only
/// through a capture rule applied by the [`ZoneAccrualEngine`].
///
/// [`ZoneAccrualEngine`]: crate::accrual::ZoneAccrualEngine
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    id: ZoneId,
    position: Position,
    radius: f64,
    accrual_rate: f64,
    owner: ZoneOwner,
}

impl Zone {
    /// Build a zone from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the rate or radius is negative or
    /// non-finite, or the position is non-finite.
    pub fn new(config: &ZoneConfig) -> Result<Self, WorldError> {
        if !(config.accrual_rate.is_finite() && config.accrual_rate >= 0.0) {
            return Err(WorldError::InvalidAccrualRate {
                zone: config.id.clone(),
                rate: config.accrual_rate,
            });
        }
        if !(config.radius.is_finite() && config.radius >= 0.0) {
            return Err(WorldError::InvalidRadius {
                zone: config.id.clone(),
                radius: config.radius,
            });
        }
        if !(config.position.x.is_finite() && config.position.y.is_finite()) {
            return Err(WorldError::InvalidPosition(config.id.clone()));
        }
        Ok(Self {
            id: config.id.clone(),
            position: config.position,
            radius: config.radius,
            accrual_rate: config.accrual_rate,
            owner: config.owner,
        })
    }

    /// Stable key.
    pub const fn id(&self) -> &ZoneId {
        &self.id
    }

    /// Center of the zone.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Capture radius.
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Score per second granted to the owner.
    pub const fn accrual_rate(&self) -> f64 {
        self.accrual_rate
    }

    /// Current owner.
    pub const fn owner(&self) -> ZoneOwner {
        self.owner
    }

    /// Whether a point lies inside the capture radius (boundary included).
    pub fn contains(&self, point: Position) -> bool {
        self.position.distance_to(point) <= self.radius
    }

    pub(crate) const fn set_owner(&mut self, owner: ZoneOwner) {
        self.owner = owner;
    }

    /// Read-only view for presentation.
    pub fn snapshot(&self) -> ZoneSnapshot {
        ZoneSnapshot {
            id: self.id.clone(),
            position: self.position,
            radius: self.radius,
            owner: self.owner,
            accrual_rate: self.accrual_rate,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(rate: f64, radius: f64) -> ZoneConfig {
        ZoneConfig {
            id: ZoneId::new("slot_cage"),
            position: Position::new(400.0, 300.0),
            radius,
            accrual_rate: rate,
            owner: ZoneOwner::Neutral,
        }
    }

    #[test]
    fn valid_zone_builds() {
        let zone = Zone::new(&config(2000.0, 60.0)).unwrap();
        assert_eq!(zone.owner(), ZoneOwner::Neutral);
        assert!((zone.accrual_rate() - 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_rate_is_rejected() {
        let err = Zone::new(&config(-1.0, 60.0)).unwrap_err();
        assert!(matches!(err, WorldError::InvalidAccrualRate { .. }));
    }

    #[test]
    fn infinite_radius_is_rejected() {
        let err = Zone::new(&config(10.0, f64::INFINITY)).unwrap_err();
        assert!(matches!(err, WorldError::InvalidRadius { .. }));
    }

    #[test]
    fn zero_rate_is_allowed() {
        assert!(Zone::new(&config(0.0, 0.0)).is_ok());
    }

    #[test]
    fn containment_includes_boundary() {
        let zone = Zone::new(&config(1.0, 60.0)).unwrap();
        assert!(zone.contains(Position::new(400.0, 300.0)));
        assert!(zone.contains(Position::new(460.0, 300.0)));
        assert!(!zone.contains(Position::new(461.0, 300.0)));
    }

    #[test]
    fn owner_defaults_to_neutral_when_omitted() {
        let cfg: ZoneConfig = serde_json::from_str(
            r#"{"id":"high_limit","position":{"x":200.0,"y":100.0},"radius":40.0,"accrual_rate":1500.0}"#,
        )
        .unwrap();
        assert_eq!(cfg.owner, ZoneOwner::Neutral);
        assert_eq!(cfg.id, ZoneId::new("high_limit"));
    }
}
