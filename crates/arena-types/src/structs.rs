//! Small value types shared across crates.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A point on the arena floor, in map units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Position {
    /// Horizontal coordinate (grows to the right).
    pub x: f64,
    /// Vertical coordinate (grows downward).
    pub y: f64,
}

impl Position {
    /// Create a position from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this position shifted by the given offsets.
    pub const fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_adds_offsets() {
        let p = Position::new(100.0, 500.0).translated(10.0, -10.0);
        assert!((p.x - 110.0).abs() < f64::EPSILON);
        assert!((p.y - 490.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < f64::EPSILON);
    }
}
