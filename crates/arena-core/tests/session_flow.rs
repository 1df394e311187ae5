//! Integration tests for a full arena session.
//!
//! These drive [`Session`] frame by frame with synthetic timestamps, the
//! way a host would, and check the observable behavior through snapshots:
//! accrual to the win target, the delta cap, the power-up life cycle,
//! ability rejections, and the frozen state after a win.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]

use std::time::Duration;

use arena_agents::{AbilityOutcome, AbilityRejection};
use arena_core::config::{CaptureConfig, SimulationConfig};
use arena_core::input::{InputEvent, InputOutcome};
use arena_core::session::Session;
use arena_types::{Direction, FrameEvent, FrameSnapshot, Position, WinOutcome, ZoneId, ZoneOwner};
use arena_world::{StaticCapture, ZoneConfig};

const EPS: f64 = 1e-6;

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

/// Default casino layout with one-second frames allowed through the cap.
fn one_second_frames() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.session.delta_cap_seconds = 1.0;
    config
}

fn count_wins(snapshots: &[FrameSnapshot]) -> usize {
    snapshots
        .iter()
        .flat_map(|s| &s.events)
        .filter(|e| matches!(e, FrameEvent::WinDeclared { .. }))
        .count()
}

#[test]
fn slot_cage_alone_wins_for_blue() {
    let mut session = Session::from_config(&one_second_frames()).unwrap();
    let mut snapshots = Vec::new();

    for t in 0..=251 {
        snapshots.push(session.advance(secs(t)));
    }
    // Target reached at t=250, but the next check only runs at t=252.
    let at_250 = &snapshots[250];
    assert!((at_250.scores.blue - 500_000.0).abs() < EPS);
    assert_eq!(at_250.outcome, WinOutcome::None);
    assert_eq!(snapshots[251].outcome, WinOutcome::None);

    let win = session.advance(secs(252));
    assert_eq!(win.outcome, WinOutcome::BlueWins);
    assert!(win.has_event(&FrameEvent::WinDeclared {
        outcome: WinOutcome::BlueWins
    }));
    assert!(win.scores.red.abs() < EPS);
    snapshots.push(win);

    for t in 253..270 {
        snapshots.push(session.advance(secs(t)));
    }
    assert_eq!(count_wins(&snapshots), 1);
    assert_eq!(session.outcome(), WinOutcome::BlueWins);
}

#[test]
fn scores_never_exceed_target() {
    let mut session = Session::from_config(&one_second_frames()).unwrap();
    for t in 0..400 {
        let snap = session.advance(secs(t));
        assert!(snap.scores.blue <= snap.scores.target);
        assert!(snap.scores.blue >= 0.0);
    }
}

#[test]
fn stalled_host_is_capped() {
    let mut session = Session::from_config(&SimulationConfig::default()).unwrap();
    session.advance(Duration::ZERO);
    let snap = session.advance(secs(10));
    assert!((snap.delta_seconds - 0.25).abs() < EPS);
    assert!((snap.scores.blue - 500.0).abs() < EPS);
    assert!((snap.elapsed_seconds - 0.25).abs() < EPS);
}

#[test]
fn accrual_does_not_depend_on_frame_rate() {
    let run = |fps: u32| {
        let mut session = Session::from_config(&SimulationConfig::default()).unwrap();
        let frames = fps * 10;
        let mut last = session.advance(Duration::ZERO);
        for i in 1..=frames {
            last = session.advance(Duration::from_secs_f64(f64::from(i) / f64::from(fps)));
        }
        last.scores.blue
    };
    let slow = run(10);
    let fast = run(60);
    assert!((slow - 20_000.0).abs() < 1e-3);
    assert!((slow - fast).abs() < 1e-3);
}

#[test]
fn power_up_life_cycle() {
    let mut config = one_second_frames();
    config.abilities.primary_cost = 10.0;
    let mut session = Session::from_config(&config).unwrap();
    session.advance(Duration::ZERO);

    // Not ready yet.
    assert_eq!(
        session.apply_input(InputEvent::ActivatePowerUp),
        InputOutcome::PowerUp { activated: false }
    );

    for _ in 0..10 {
        assert!(session.use_ability("q").is_ok());
    }
    let snap = session.snapshot();
    assert!((snap.actor.focus - 100.0).abs() < EPS);
    assert!(snap.actor.control.abs() < EPS);
    assert!(snap.actor.power_up_ready);

    assert_eq!(
        session.apply_input(InputEvent::ActivatePowerUp),
        InputOutcome::PowerUp { activated: true }
    );
    let snap = session.advance(secs(1));
    assert!(snap.has_event(&FrameEvent::PowerUpActivated));
    assert!(snap.actor.focus.abs() < EPS);
    assert!(!snap.actor.power_up_ready);

    let mut expirations = 0;
    for t in 2..=15 {
        let snap = session.advance(secs(t));
        if snap.has_event(&FrameEvent::PowerUpExpired) {
            expirations += 1;
            assert_eq!(snap.frame, 11);
        }
    }
    assert_eq!(expirations, 1);
    assert!(!session.snapshot().actor.power_up.is_active());
}

#[test]
fn ultimate_consumes_the_window() {
    let mut config = SimulationConfig::default();
    config.abilities.primary_focus_gain = 100.0;
    let mut session = Session::from_config(&config).unwrap();
    session.advance(Duration::ZERO);

    assert!(session.use_ability("Q").is_ok());
    assert!(session.activate_power_up());
    assert_eq!(session.use_ability("R"), Ok(AbilityOutcome::UltimateUsed));

    let snap = session.advance(Duration::from_millis(100));
    assert!(snap.has_event(&FrameEvent::PowerUpActivated));
    assert!(snap.has_event(&FrameEvent::PowerUpConsumed));
    assert!(!snap.has_event(&FrameEvent::PowerUpExpired));
    assert!(!snap.actor.power_up.is_active());
}

#[test]
fn rejected_abilities_change_nothing() {
    let mut session = Session::from_config(&SimulationConfig::default()).unwrap();
    session.advance(Duration::ZERO);
    let before = session.snapshot();

    assert_eq!(
        session.use_ability("w"),
        Err(AbilityRejection::InvalidAbilityKey {
            key: "w".to_owned()
        })
    );
    assert_eq!(session.use_ability("r"), Err(AbilityRejection::PowerUpInactive));
    assert_eq!(session.snapshot(), before);

    for _ in 0..4 {
        assert!(session.use_ability("q").is_ok());
    }
    let drained = session.snapshot();
    assert_eq!(
        session.use_ability("q"),
        Err(AbilityRejection::InsufficientControl {
            required: 25.0,
            available: 0.0
        })
    );
    assert_eq!(session.snapshot(), drained);
}

#[test]
fn control_regenerates_between_casts() {
    let mut session = Session::from_config(&one_second_frames()).unwrap();
    session.advance(Duration::ZERO);
    for _ in 0..4 {
        assert!(session.use_ability("q").is_ok());
    }
    let snap = session.advance(secs(1));
    assert!((snap.actor.control - 3.0).abs() < EPS);
    assert!((snap.actor.focus - 40.0).abs() < EPS);
}

#[test]
fn finished_session_is_frozen() {
    let mut config = one_second_frames();
    config.session.target = 4_000.0;
    let mut session = Session::from_config(&config).unwrap();
    for t in 0..=3 {
        session.advance(secs(t));
    }
    assert_eq!(session.outcome(), WinOutcome::BlueWins);
    let frozen = session.snapshot();

    assert_eq!(session.use_ability("q"), Err(AbilityRejection::SessionOver));
    assert!(!session.activate_power_up());
    assert_eq!(
        session.apply_input(InputEvent::Move(Direction::Right)),
        InputOutcome::Moved(frozen.actor.position)
    );

    let later = session.advance(secs(20));
    assert_eq!(later.outcome, WinOutcome::BlueWins);
    assert_eq!(later.scores, frozen.scores);
    assert_eq!(later.actor.control, frozen.actor.control);
    assert!(later.events.is_empty());
}

#[test]
fn both_teams_at_target_is_a_draw() {
    let zone = |id: &str, x: f64| ZoneConfig {
        id: ZoneId::new(id),
        position: Position::new(x, 0.0),
        radius: 10.0,
        accrual_rate: 1_000.0,
        owner: ZoneOwner::Neutral,
    };
    let mut config = one_second_frames();
    config.session.target = 1_000.0;
    config.zones = vec![zone("east", 0.0), zone("west", 100.0)];
    let rule = StaticCapture::default()
        .assign("east", ZoneOwner::Blue)
        .assign("west", ZoneOwner::Red);
    let mut session = Session::new(&config, Box::new(rule)).unwrap();

    for t in 0..=3 {
        session.advance(secs(t));
    }
    assert_eq!(session.outcome(), WinOutcome::BothReachedSimultaneously);
    assert_eq!(session.outcome().winner(), None);
}

#[test]
fn red_actor_with_proximity_rule_earns_for_red() {
    let mut config = one_second_frames();
    config.capture = CaptureConfig::Proximity;
    config.player.team = arena_types::Team::Red;
    config.player.position = Position::new(400.0, 340.0);
    let mut session = Session::from_config(&config).unwrap();

    session.advance(Duration::ZERO);
    let snap = session.advance(secs(1));
    assert_eq!(
        snap.zone(&ZoneId::new("slot_cage")).map(|z| z.owner),
        Some(ZoneOwner::Red)
    );
    assert!((snap.scores.red - 2_000.0).abs() < EPS);

    // Walking out does not release the zone.
    for _ in 0..20 {
        session.apply_input(InputEvent::Move(Direction::Down));
    }
    let snap = session.advance(secs(2));
    assert_eq!(
        snap.zone(&ZoneId::new("slot_cage")).map(|z| z.owner),
        Some(ZoneOwner::Red)
    );
    assert!((snap.scores.red - 4_000.0).abs() < EPS);
}
