//! Default casino floor.
//!
//! Three objectives on an 800x600 floor, all neutral at start, plus the
//! default static ownership rule.

use arena_types::{Position, ZoneId, ZoneOwner};

use crate::capture::StaticCapture;
use crate::zone::ZoneConfig;

/// Helper to build a neutral [`ZoneConfig`].
fn zone(id: &str, x: f64, y: f64, radius: f64, accrual_rate: f64) -> ZoneConfig {
    ZoneConfig {
        id: ZoneId::new(id),
        position: Position::new(x, y),
        radius,
        accrual_rate,
        owner: ZoneOwner::Neutral,
    }
}

/// The high-limit room, the slot cage, and the back room.
pub fn default_zones() -> Vec<ZoneConfig> {
    vec![
        zone("high_limit", 200.0, 100.0, 40.0, 1500.0),
        zone("slot_cage", 400.0, 300.0, 60.0, 2000.0),
        zone("back_room", 600.0, 500.0, 40.0, 1500.0),
    ]
}

/// The slot cage always belongs to blue.
pub fn placeholder_capture() -> StaticCapture {
    StaticCapture::default().assign("slot_cage", ZoneOwner::Blue)
}
