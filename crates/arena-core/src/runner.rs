//! Headless frame loop with operator controls.
//!
//! [`run_session`] drives a [`Session`] in real time on the tokio runtime:
//!
//! - **Input**: polls an [`InputSource`] before every frame.
//! - **Pacing**: sleeps the operator's frame interval between frames.
//! - **Pause/resume**: the host can halt and continue the loop.
//! - **Bounded runs**: stops after `max_frames` or `max_real_time_seconds`.
//! - **Victory**: stops on the frame a terminal outcome is declared.
//! - **Clean shutdown**: a stop request ends the loop before the next frame.
//!
//! Timestamps come from [`tokio::time::Instant`], so tests running on a
//! paused clock advance the session deterministically.

use std::sync::Arc;

use arena_types::FrameSnapshot;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::input::{InputOutcome, InputSource};
use crate::operator::{OperatorState, SessionEndReason};
use crate::session::Session;

/// Result of a run.
#[derive(Debug, Clone)]
pub struct SessionResult {
    /// Why the loop stopped.
    pub end_reason: SessionEndReason,
    /// The last published snapshot, or the initial state if no frame ran.
    pub final_snapshot: FrameSnapshot,
    /// Frames advanced by this run.
    pub total_frames: u64,
}

/// Called after every frame with its snapshot.
///
/// This is the presentation seam: a renderer, a logger, or a test probe
/// reads the snapshot and never touches the session.
pub trait FrameCallback: Send {
    /// Called after a frame completes.
    fn on_frame(&mut self, snapshot: &FrameSnapshot);
}

/// A no-op frame callback for testing.
pub struct NoOpCallback;

impl FrameCallback for NoOpCallback {
    fn on_frame(&mut self, _snapshot: &FrameSnapshot) {}
}

/// Run frames until a termination condition is met.
///
/// The session is not consumed: after this returns the host can still
/// inspect it.
pub async fn run_session(
    session: &mut Session,
    input: &mut dyn InputSource,
    operator: &Arc<OperatorState>,
    callback: &mut dyn FrameCallback,
) -> SessionResult {
    let started = Instant::now();
    let mut last: Option<FrameSnapshot> = None;
    let mut total_frames: u64 = 0;

    info!(
        frame_interval_ms = operator.frame_interval_ms(),
        target = session.scores().target(),
        "Session starting"
    );

    let end_reason = loop {
        if operator.is_paused() {
            info!("Session paused, waiting for resume...");
            operator.wait_if_paused().await;
            info!("Session resumed");
        }

        if operator.is_stop_requested() {
            info!("Operator stop requested");
            break SessionEndReason::OperatorStop;
        }

        if operator.time_limit_reached() {
            info!(elapsed = operator.elapsed_seconds(), "Real-time limit reached");
            break SessionEndReason::MaxRealTimeReached;
        }

        let next_frame = session.frame().saturating_add(1);
        for event in input.poll(next_frame, last.as_ref()) {
            let outcome = session.apply_input(event);
            if let InputOutcome::Ability(Err(rejection)) = &outcome {
                debug!(frame = next_frame, %rejection, "Input rejected");
            }
        }

        let snapshot = session.advance(started.elapsed());
        total_frames = total_frames.saturating_add(1);
        callback.on_frame(&snapshot);

        let frame = snapshot.frame;
        let outcome = snapshot.outcome;
        last = Some(snapshot);

        if outcome.is_terminal() {
            info!(frame, ?outcome, "Victory");
            break SessionEndReason::Victory(outcome);
        }

        if operator.frame_limit_reached(frame) {
            info!(frame, "Frame limit reached");
            break SessionEndReason::MaxFramesReached;
        }

        let interval_ms = operator.frame_interval_ms();
        if interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(interval_ms)).await;
        } else {
            tokio::task::yield_now().await;
        }
    };

    operator.set_end_reason(end_reason).await;
    SessionResult {
        end_reason,
        final_snapshot: last.unwrap_or_else(|| session.snapshot()),
        total_frames,
    }
}

/// Log how a run ended.
pub fn log_session_end(result: &SessionResult) {
    let scores = result.final_snapshot.scores;
    info!(
        reason = ?result.end_reason,
        total_frames = result.total_frames,
        final_frame = result.final_snapshot.frame,
        elapsed = result.final_snapshot.elapsed_seconds,
        blue = scores.blue,
        red = scores.red,
        target = scores.target,
        "Session ended"
    );
    if result.total_frames == 0 {
        warn!("Session ended with no frames executed");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use arena_types::WinOutcome;

    use super::*;
    use crate::config::{SimulationBoundsConfig, SimulationConfig};
    use crate::input::IdleInputSource;

    /// Records every snapshot it sees.
    #[derive(Default)]
    struct Recorder {
        frames: Vec<FrameSnapshot>,
    }

    impl FrameCallback for Recorder {
        fn on_frame(&mut self, snapshot: &FrameSnapshot) {
            self.frames.push(snapshot.clone());
        }
    }

    fn operator(interval_ms: u64, max_frames: u64) -> Arc<OperatorState> {
        Arc::new(OperatorState::new(
            interval_ms,
            &SimulationBoundsConfig {
                max_frames,
                max_real_time_seconds: 0,
            },
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn stops_at_frame_limit() {
        let mut session = Session::from_config(&SimulationConfig::default()).unwrap();
        let op = operator(16, 5);
        let mut recorder = Recorder::default();
        let result = run_session(&mut session, &mut IdleInputSource, &op, &mut recorder).await;

        assert_eq!(result.end_reason, SessionEndReason::MaxFramesReached);
        assert_eq!(result.total_frames, 5);
        assert_eq!(result.final_snapshot.frame, 5);
        assert_eq!(recorder.frames.len(), 5);
        assert_eq!(op.end_reason().await, Some(SessionEndReason::MaxFramesReached));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_before_first_frame() {
        let mut session = Session::from_config(&SimulationConfig::default()).unwrap();
        let op = operator(16, 0);
        op.request_stop();
        let result = run_session(&mut session, &mut IdleInputSource, &op, &mut NoOpCallback).await;

        assert_eq!(result.end_reason, SessionEndReason::OperatorStop);
        assert_eq!(result.total_frames, 0);
        assert_eq!(result.final_snapshot.frame, 0);
        log_session_end(&result);
    }

    #[tokio::test(start_paused = true)]
    async fn runs_to_victory_on_accrual_alone() {
        let mut config = SimulationConfig::default();
        config.session.target = 10_000.0;
        let mut session = Session::from_config(&config).unwrap();
        let op = operator(100, 0);
        let result = run_session(&mut session, &mut IdleInputSource, &op, &mut NoOpCallback).await;

        assert_eq!(
            result.end_reason,
            SessionEndReason::Victory(WinOutcome::BlueWins)
        );
        assert!((result.final_snapshot.scores.blue - 10_000.0).abs() < 1e-6);
        assert!(result.final_snapshot.events.iter().any(|e| matches!(
            e,
            arena_types::FrameEvent::WinDeclared {
                outcome: WinOutcome::BlueWins
            }
        )));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_from_callback_ends_the_loop() {
        struct StopAfter {
            op: Arc<OperatorState>,
            at: u64,
        }

        impl FrameCallback for StopAfter {
            fn on_frame(&mut self, snapshot: &FrameSnapshot) {
                if snapshot.frame == self.at {
                    self.op.request_stop();
                }
            }
        }

        let mut session = Session::from_config(&SimulationConfig::default()).unwrap();
        let op = operator(0, 0);
        let mut callback = StopAfter {
            op: Arc::clone(&op),
            at: 3,
        };
        let result = run_session(&mut session, &mut IdleInputSource, &op, &mut callback).await;

        assert_eq!(result.end_reason, SessionEndReason::OperatorStop);
        assert_eq!(result.total_frames, 3);
    }
}
