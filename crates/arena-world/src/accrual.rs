//! Zone accrual: ownership plus elapsed time becomes team score.
//!
//! Accrual is continuous. Each frame a zone owned by a team adds
//! `accrual_rate * delta` to that team, so the total earned over a span of
//! wall-clock time does not depend on how many frames it was split into
//! (up to floating-point rounding). Neutral zones earn nothing. After all
//! zones are processed both totals are clamped to `[0, target]`.

use std::collections::BTreeSet;

use arena_types::{FrameEvent, ZoneId, ZoneSnapshot};
use tracing::info;

use crate::capture::{CaptureRule, Contender};
use crate::error::WorldError;
use crate::scores::TeamScoreState;
use crate::zone::{Zone, ZoneConfig};

/// Owns the zone set and turns ownership into score.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneAccrualEngine {
    zones: Vec<Zone>,
}

impl ZoneAccrualEngine {
    /// Build the zone set in configuration order.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateZone`] if two zones share a key, or
    /// any error raised by [`Zone::new`].
    pub fn new(configs: &[ZoneConfig]) -> Result<Self, WorldError> {
        let mut seen: BTreeSet<&ZoneId> = BTreeSet::new();
        let mut zones = Vec::with_capacity(configs.len());
        for config in configs {
            if !seen.insert(&config.id) {
                return Err(WorldError::DuplicateZone(config.id.clone()));
            }
            zones.push(Zone::new(config)?);
        }
        Ok(Self { zones })
    }

    /// Ask `rule` for every zone's next owner and apply the answers.
    ///
    /// Returns one [`FrameEvent::ZoneCaptured`] per zone that changed hands.
    pub fn apply_capture(
        &mut self,
        rule: &dyn CaptureRule,
        contenders: &[Contender],
    ) -> Vec<FrameEvent> {
        let mut events = Vec::new();
        for zone in &mut self.zones {
            let previous = zone.owner();
            let owner = rule.next_owner(zone, contenders);
            if owner != previous {
                zone.set_owner(owner);
                info!(zone = %zone.id(), ?previous, ?owner, "Zone changed hands");
                events.push(FrameEvent::ZoneCaptured {
                    zone: zone.id().clone(),
                    previous,
                    owner,
                });
            }
        }
        events
    }

    /// Credit each owning team with `rate * delta`, then clamp both scores.
    /// Negative or non-finite deltas credit nothing.
    pub fn tick(&self, delta: f64, scores: &mut TeamScoreState) {
        if delta.is_finite() && delta > 0.0 {
            for zone in &self.zones {
                if let Some(team) = zone.owner().team() {
                    scores.add(team, zone.accrual_rate() * delta);
                }
            }
        }
        scores.clamp();
    }

    /// All zones in configuration order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Look up a zone by key.
    pub fn zone(&self, id: &ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.id() == id)
    }

    /// Read-only views for presentation.
    pub fn snapshots(&self) -> Vec<ZoneSnapshot> {
        self.zones.iter().map(Zone::snapshot).collect()
    }
}
