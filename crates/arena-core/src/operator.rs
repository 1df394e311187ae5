//! Operator control state for a running session.
//!
//! The headless runner and the host share one [`OperatorState`]. The host
//! can pause and resume the frame loop, change its pacing, and request a
//! clean stop (e.g. on Ctrl-C) without tearing the session down.
//!
//! All control fields are atomics so the frame loop reads them without
//! locking. The end reason is written once, behind a mutex.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use arena_types::WinOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, Notify};

use crate::config::SimulationBoundsConfig;

/// Why the runner stopped advancing the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEndReason {
    /// A win check declared a terminal outcome.
    Victory(WinOutcome),
    /// Reached the configured `max_frames` limit.
    MaxFramesReached,
    /// Reached the configured `max_real_time_seconds` limit.
    MaxRealTimeReached,
    /// The host requested a stop.
    OperatorStop,
}

/// Shared operator control state.
#[derive(Debug)]
pub struct OperatorState {
    /// Whether the frame loop is paused.
    paused: AtomicBool,

    /// Wakes the frame loop when resumed.
    resume_notify: Notify,

    /// Whether a stop has been requested.
    stop_requested: AtomicBool,

    /// Real-time milliseconds between frames (runtime-adjustable).
    frame_interval_ms: AtomicU64,

    /// Wall-clock time the session started.
    started_at: DateTime<Utc>,

    /// Maximum number of frames (0 = unlimited).
    max_frames: u64,

    /// Maximum wall-clock seconds (0 = unlimited).
    max_real_time_seconds: u64,

    end_reason: Mutex<Option<SessionEndReason>>,
}

impl OperatorState {
    /// Create operator state from the pacing and run limits.
    pub fn new(frame_interval_ms: u64, bounds: &SimulationBoundsConfig) -> Self {
        Self {
            paused: AtomicBool::new(false),
            resume_notify: Notify::new(),
            stop_requested: AtomicBool::new(false),
            frame_interval_ms: AtomicU64::new(frame_interval_ms),
            started_at: Utc::now(),
            max_frames: bounds.max_frames,
            max_real_time_seconds: bounds.max_real_time_seconds,
            end_reason: Mutex::new(None),
        }
    }

    // -----------------------------------------------------------------------
    // Pause / Resume
    // -----------------------------------------------------------------------

    /// Check whether the frame loop is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Pause the frame loop. It sleeps until resumed.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Resume the frame loop and wake it.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
        self.resume_notify.notify_one();
    }

    /// Wait until the frame loop is no longer paused.
    ///
    /// Returns immediately if not paused.
    pub async fn wait_if_paused(&self) {
        while self.paused.load(Ordering::Acquire) {
            self.resume_notify.notified().await;
        }
    }

    // -----------------------------------------------------------------------
    // Stop
    // -----------------------------------------------------------------------

    /// Request a clean stop. A paused loop is woken so it can exit.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
        self.paused.store(false, Ordering::Release);
        self.resume_notify.notify_one();
    }

    /// Check whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    /// Record why the session ended.
    pub async fn set_end_reason(&self, reason: SessionEndReason) {
        let mut guard = self.end_reason.lock().await;
        *guard = Some(reason);
    }

    /// Why the session ended, if it has.
    pub async fn end_reason(&self) -> Option<SessionEndReason> {
        *self.end_reason.lock().await
    }

    // -----------------------------------------------------------------------
    // Pacing
    // -----------------------------------------------------------------------

    /// Current real-time interval between frames in milliseconds.
    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms.load(Ordering::Acquire)
    }

    /// Change the frame interval. Returns the previous value.
    pub fn set_frame_interval_ms(&self, ms: u64) -> u64 {
        self.frame_interval_ms.swap(ms, Ordering::AcqRel)
    }

    // -----------------------------------------------------------------------
    // Boundaries
    // -----------------------------------------------------------------------

    /// Returns `true` if `max_frames > 0` and `frame >= max_frames`.
    pub const fn frame_limit_reached(&self, frame: u64) -> bool {
        self.max_frames > 0 && frame >= self.max_frames
    }

    /// Returns `true` if `max_real_time_seconds > 0` and that many
    /// wall-clock seconds have passed since start.
    pub fn time_limit_reached(&self) -> bool {
        self.max_real_time_seconds > 0 && self.elapsed_seconds() >= self.max_real_time_seconds
    }

    /// Wall-clock start time.
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Wall-clock seconds since start.
    pub fn elapsed_seconds(&self) -> u64 {
        let elapsed = Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds();
        // Negative if the system clock stepped backwards.
        u64::try_from(elapsed.max(0)).unwrap_or(u64::MAX)
    }
}
