//! Capture rules: who owns a zone next.
//!
//! Ownership changes are not the accrual engine's business. Once per frame,
//! before accrual, the session asks the injected [`CaptureRule`] for each
//! zone's next owner given the current owner and the positions of every
//! contender on the floor. Three rules ship:
//!
//! - [`StaticCapture`] -- fixed assignments; zones not listed keep their
//!   owner. Used as a test fixture and for the default
//!   "slot cage belongs to blue" floor.
//! - [`ProximityCapture`] -- a team takes a zone when it is the only team
//!   with a contender inside the radius. Contested or empty zones hold.
//! - [`UnclaimedCapture`] -- nothing ever changes hands.

use std::collections::BTreeMap;
use std::fmt::Debug;

use arena_types::{Position, Team, ZoneId, ZoneOwner};

use crate::error::WorldError;
use crate::zone::Zone;

/// Someone on the floor who can take zones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contender {
    /// Team the contender plays for.
    pub team: Team,
    /// Where the contender stands.
    pub position: Position,
}

/// Decides the next owner of a zone.
///
/// Implementations must be deterministic: the same zone and contenders
/// always produce the same owner.
pub trait CaptureRule: Debug + Send + Sync {
    /// Next owner of `zone` given everyone on the floor.
    fn next_owner(&self, zone: &Zone, contenders: &[Contender]) -> ZoneOwner;

    /// Check the rule against the zone set at session construction.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the rule refers to something that does not
    /// exist.
    fn validate(&self, _zones: &[Zone]) -> Result<(), WorldError> {
        Ok(())
    }
}

/// Fixed per-zone assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCapture {
    assignments: BTreeMap<ZoneId, ZoneOwner>,
}

impl StaticCapture {
    /// Build a rule from `zone -> owner` assignments.
    pub const fn new(assignments: BTreeMap<ZoneId, ZoneOwner>) -> Self {
        Self { assignments }
    }

    /// Add or replace one assignment.
    #[must_use]
    pub fn assign(mut self, zone: impl Into<ZoneId>, owner: ZoneOwner) -> Self {
        self.assignments.insert(zone.into(), owner);
        self
    }

    /// The configured assignments.
    pub const fn assignments(&self) -> &BTreeMap<ZoneId, ZoneOwner> {
        &self.assignments
    }
}

impl CaptureRule for StaticCapture {
    fn next_owner(&self, zone: &Zone, _contenders: &[Contender]) -> ZoneOwner {
        self.assignments
            .get(zone.id())
            .copied()
            .unwrap_or_else(|| zone.owner())
    }

    fn validate(&self, zones: &[Zone]) -> Result<(), WorldError> {
        for id in self.assignments.keys() {
            if !zones.iter().any(|zone| zone.id() == id) {
                return Err(WorldError::UnknownZone(id.clone()));
            }
        }
        Ok(())
    }
}

/// Sole-occupant capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProximityCapture;

impl CaptureRule for ProximityCapture {
    fn next_owner(&self, zone: &Zone, contenders: &[Contender]) -> ZoneOwner {
        let mut present: Option<Team> = None;
        for contender in contenders.iter().filter(|c| zone.contains(c.position)) {
            match present {
                None => present = Some(contender.team),
                Some(team) if team != contender.team => return zone.owner(),
                Some(_) => {}
            }
        }
        present.map_or_else(|| zone.owner(), ZoneOwner::from)
    }
}

/// Ownership never changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnclaimedCapture;

impl CaptureRule for UnclaimedCapture {
    fn next_owner(&self, zone: &Zone, _contenders: &[Contender]) -> ZoneOwner {
        zone.owner()
    }
}
