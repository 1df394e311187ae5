//! Frame clock, win evaluation, and orchestration for the arena simulation.
//!
//! This crate owns the per-frame loop that drives the simulation:
//! sample the clock, update resources, apply the capture rule, accrue zone
//! score, periodically check for a win, and publish a snapshot.
//!
//! # Modules
//!
//! - [`clock`] -- [`FrameClock`]: wall-clock samples to bounded deltas.
//! - [`config`] -- Configuration loading from `arena-config.yaml` into
//!   strongly-typed, validated structs.
//! - [`input`] -- Input events, their outcomes, and the [`InputSource`]
//!   trait with idle and scripted implementations.
//! - [`operator`] -- Pause/resume, stop, and run limits shared with the
//!   host.
//! - [`runner`] -- The async frame loop around [`Session::advance`].
//! - [`session`] -- [`Session`]: the explicit simulation state and its
//!   `advance` step.
//! - [`win`] -- [`WinEvaluator`] and the interval timer that schedules it.
//!
//! [`FrameClock`]: clock::FrameClock
//! [`InputSource`]: input::InputSource
//! [`Session`]: session::Session
//! [`Session::advance`]: session::Session::advance
//! [`WinEvaluator`]: win::WinEvaluator

pub mod clock;
pub mod config;
pub mod input;
pub mod operator;
pub mod runner;
pub mod session;
pub mod win;
