//! Stable identifiers for simulation entities.
//!
//! Zones are keyed by a human-readable name taken from configuration
//! (e.g. `slot_cage`) rather than a generated id, so capture rules and
//! scripted fixtures can refer to them directly.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Stable key of a capturable zone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ZoneId(pub String);

impl ZoneId {
    /// Create a zone id from anything string-like.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for ZoneId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_raw_key() {
        let id = ZoneId::new("slot_cage");
        assert_eq!(id.to_string(), "slot_cage");
        assert_eq!(id.as_str(), "slot_cage");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ZoneId::from("back_room");
        let json = serde_json::to_string(&id).unwrap_or_default();
        assert_eq!(json, "\"back_room\"");
    }
}
