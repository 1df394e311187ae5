//! Headless engine binary for the arena simulation.
//!
//! Loads configuration, installs logging, assembles a session, and runs
//! the frame loop with the autopilot at the controls until someone wins,
//! a run limit is hit, or Ctrl-C is pressed.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `ARENA_CONFIG` or `arena-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Assemble the session from the configured capture rule
//! 4. Create operator state from the run limits
//! 5. Wire Ctrl-C to a clean stop
//! 6. Run the frame loop
//! 7. Log the result

mod autopilot;
mod error;
mod presenter;

use std::path::PathBuf;
use std::sync::Arc;

use arena_core::config::{LoggingConfig, SimulationConfig};
use arena_core::operator::OperatorState;
use arena_core::runner;
use arena_core::session::Session;
use arena_types::ZoneId;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::autopilot::Autopilot;
use crate::error::EngineError;
use crate::presenter::LoggingPresenter;

/// Environment variable naming the config file.
const CONFIG_ENV: &str = "ARENA_CONFIG";

/// Config file looked up in the working directory.
const DEFAULT_CONFIG_PATH: &str = "arena-config.yaml";

/// Zone the autopilot walks toward.
const AUTOPILOT_TARGET: &str = "slot_cage";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration.
    let (config, source) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;
    info!(config = %source, "arena-engine starting");
    info!(
        hero = %config.player.hero,
        target = config.session.target,
        zones = config.zones.len(),
        frame_interval_ms = config.session.frame_interval_ms,
        "Configuration loaded"
    );

    // 3. Assemble the session.
    let mut session = Session::from_config(&config).map_err(EngineError::from)?;
    if let Some(hero) = session.hero_profile() {
        info!(
            hero = %hero.name,
            q = %hero.q,
            w = %hero.w,
            e = %hero.e,
            ultimate = %hero.ultimate,
            "Hero selected"
        );
    }

    // 4. Create operator state.
    let operator = Arc::new(OperatorState::new(
        config.session.frame_interval_ms,
        &config.simulation,
    ));

    // 5. Ctrl-C requests a clean stop.
    {
        let operator = Arc::clone(&operator);
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Ctrl-C received, stopping");
                    operator.request_stop();
                }
                Err(e) => warn!(error = %e, "failed to listen for Ctrl-C"),
            }
        });
    }

    // 6. Run the frame loop.
    let mut pilot = Autopilot::new(
        ZoneId::new(AUTOPILOT_TARGET),
        session.primary_cost(),
        config.player.movement_step,
    );
    let mut presenter = LoggingPresenter::new(
        session.hero_profile().cloned(),
        config.logging.scoreboard_every_frames,
    );
    let result = runner::run_session(&mut session, &mut pilot, &operator, &mut presenter).await;

    // 7. Log results.
    runner::log_session_end(&result);
    info!(end_reason = ?result.end_reason, "arena-engine shutdown complete");

    Ok(())
}

/// Load configuration.
///
/// `ARENA_CONFIG` must name an existing file. Without it, a missing
/// `arena-config.yaml` falls back to the built-in defaults.
fn load_config() -> Result<(SimulationConfig, String), EngineError> {
    let (path, explicit) = std::env::var_os(CONFIG_ENV).map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        |path| (PathBuf::from(path), true),
    );

    let config = if path.exists() {
        SimulationConfig::from_file(&path)?
    } else if explicit {
        return Err(EngineError::MissingConfig { path });
    } else {
        return Ok((SimulationConfig::default(), "defaults".to_owned()));
    };
    config.validate()?;
    Ok((config, path.display().to_string()))
}

/// Install the tracing subscriber. `RUST_LOG` wins over the configured
/// level.
fn init_logging(logging: &LoggingConfig) -> Result<(), EngineError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let installed = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| EngineError::Logging {
        message: e.to_string(),
    })
}
