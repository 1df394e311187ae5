//! Hero roster.
//!
//! A hero is a name plus the labels of its four ability slots. Labels are
//! display-only: the slots bound to `q` and `r` map onto the primary and
//! ultimate mechanics, while `w` and `e` are named but not yet implemented.

use arena_types::AbilityKey;
use serde::Deserialize;

/// A playable hero and its ability labels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeroProfile {
    /// Hero name, unique within a roster.
    pub name: String,
    /// Label of the `q` slot (primary ability).
    pub q: String,
    /// Label of the `w` slot.
    pub w: String,
    /// Label of the `e` slot.
    pub e: String,
    /// Label of the `r` slot (ultimate).
    pub ultimate: String,
}

impl HeroProfile {
    fn new(name: &str, q: &str, w: &str, e: &str, ultimate: &str) -> Self {
        Self {
            name: name.to_owned(),
            q: q.to_owned(),
            w: w.to_owned(),
            e: e.to_owned(),
            ultimate: ultimate.to_owned(),
        }
    }

    /// Display label of an implemented ability.
    pub fn label(&self, key: AbilityKey) -> &str {
        match key {
            AbilityKey::Primary => &self.q,
            AbilityKey::Ultimate => &self.ultimate,
        }
    }
}

/// The casino crew shipped with the game.
pub fn default_roster() -> Vec<HeroProfile> {
    vec![
        HeroProfile::new(
            "Sam Rothstein",
            "The Eye in the Sky",
            "The Payout",
            "The Chip Run",
            "The System",
        ),
        HeroProfile::new(
            "Nicky Santoro",
            "The Wire",
            "Leave the Desert",
            "The Temper",
            "The Baseball Bat",
        ),
        HeroProfile::new(
            "Ginger McKenna",
            "The Lure",
            "The Distraction",
            "The Safe Deposit",
            "The Mother's Fury",
        ),
    ]
}

/// Find a hero by name.
pub fn find<'a>(roster: &'a [HeroProfile], name: &str) -> Option<&'a HeroProfile> {
    roster.iter().find(|hero| hero.name == name)
}
