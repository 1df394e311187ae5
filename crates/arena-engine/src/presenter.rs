//! Frame callback that presents the session through the log.
//!
//! The headless engine has no canvas, so every one-shot [`FrameEvent`]
//! becomes an `info!` line and the scoreboard is logged on a fixed frame
//! cadence, formatted the way the HUD shows it ("Blue Crew Edge: $12,345").

use arena_agents::HeroProfile;
use arena_core::runner::FrameCallback;
use arena_types::{AbilityKey, FrameEvent, FrameSnapshot, ScoreSnapshot, Team};
use tracing::{debug, info};

/// Logs events and a periodic scoreboard.
pub struct LoggingPresenter {
    hero: Option<HeroProfile>,
    scoreboard_every: u64,
}

impl LoggingPresenter {
    /// Create a presenter. `scoreboard_every` is a frame count; zero turns
    /// the periodic scoreboard off.
    pub const fn new(hero: Option<HeroProfile>, scoreboard_every: u64) -> Self {
        Self {
            hero,
            scoreboard_every,
        }
    }

    fn ultimate_label(&self) -> &str {
        self.hero
            .as_ref()
            .map_or("ultimate", |hero| hero.label(AbilityKey::Ultimate))
    }

    fn present_event(&self, frame: u64, event: &FrameEvent) {
        match event {
            FrameEvent::PowerUpActivated => {
                info!(frame, "Rage unlocked");
            }
            FrameEvent::PowerUpExpired => {
                info!(frame, "Rage wore off");
            }
            FrameEvent::PowerUpConsumed => {
                info!(frame, ability = self.ultimate_label(), "Ultimate unleashed");
            }
            FrameEvent::ZoneCaptured {
                zone,
                previous,
                owner,
            } => {
                info!(frame, %zone, ?previous, ?owner, "Zone taken");
            }
            FrameEvent::WinDeclared { outcome } => {
                info!(frame, ?outcome, "Game over");
            }
        }
    }
}

impl FrameCallback for LoggingPresenter {
    fn on_frame(&mut self, snapshot: &FrameSnapshot) {
        for event in &snapshot.events {
            self.present_event(snapshot.frame, event);
        }

        let due = self.scoreboard_every > 0 && snapshot.frame % self.scoreboard_every == 0;
        if due || snapshot.outcome.is_terminal() {
            info!(
                frame = snapshot.frame,
                blue = %edge_line(Team::Blue, &snapshot.scores),
                red = %edge_line(Team::Red, &snapshot.scores),
                control = snapshot.actor.control,
                focus = snapshot.actor.focus,
                rage_ready = snapshot.actor.power_up_ready,
                "Scoreboard"
            );
        } else {
            debug!(frame = snapshot.frame, delta = snapshot.delta_seconds, "Frame");
        }
    }
}

/// Scoreboard line for one team, e.g. `Blue Crew Edge: $12,345`.
pub fn edge_line(team: Team, scores: &ScoreSnapshot) -> String {
    let crew = match team {
        Team::Blue => "Blue",
        Team::Red => "Red",
    };
    format!("{crew} Crew Edge: ${}", whole_dollars(scores.of(team)))
}

/// Truncate to whole dollars and group digits in threes. A score never
/// shows more than it has actually earned.
pub fn whole_dollars(amount: f64) -> String {
    // `abs` folds a negative zero into plain zero.
    let whole = format!("{:.0}", amount.max(0.0).floor().abs());
    let digits = whole.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(whole_dollars(0.0), "0");
        assert_eq!(whole_dollars(999.4), "999");
        assert_eq!(whole_dollars(1_000.0), "1,000");
        assert_eq!(whole_dollars(12_345.0), "12,345");
        assert_eq!(whole_dollars(500_000.0), "500,000");
        assert_eq!(whole_dollars(1_234_567.8), "1,234,567");
    }

    #[test]
    fn never_rounds_up_to_the_next_dollar() {
        assert_eq!(whole_dollars(999.6), "999");
        assert_eq!(whole_dollars(499_999.5), "499,999");
        assert_eq!(whole_dollars(499_999.999), "499,999");
    }

    #[test]
    fn negative_and_nan_show_zero() {
        assert_eq!(whole_dollars(-5.0), "0");
        assert_eq!(whole_dollars(f64::NAN), "0");
        assert_eq!(whole_dollars(-0.0), "0");
        assert_eq!(whole_dollars(-0.4), "0");
    }

    #[test]
    fn edge_lines() {
        let scores = ScoreSnapshot {
            blue: 12_345.0,
            red: 40.2,
            target: 500_000.0,
        };
        assert_eq!(edge_line(Team::Blue, &scores), "Blue Crew Edge: $12,345");
        assert_eq!(edge_line(Team::Red, &scores), "Red Crew Edge: $40");
    }

    #[test]
    fn falls_back_to_generic_label() {
        let presenter = LoggingPresenter::new(None, 0);
        assert_eq!(presenter.ultimate_label(), "ultimate");
        let roster = arena_agents::hero::default_roster();
        let presenter = LoggingPresenter::new(roster.into_iter().next(), 0);
        assert_eq!(presenter.ultimate_label(), "The System");
    }
}
