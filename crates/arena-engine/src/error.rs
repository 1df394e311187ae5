//! Error types for the arena engine binary.
//!
//! [`EngineError`] wraps every failure mode during startup so `main` can
//! propagate it with `?`. Once the frame loop is running nothing fails.

use std::path::PathBuf;

/// Top-level error for the arena engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: arena_core::config::ConfigError,
    },

    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", path.display())]
    MissingConfig {
        /// The path taken from `ARENA_CONFIG`.
        path: PathBuf,
    },

    /// Session assembly failed.
    #[error("session error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: arena_core::session::SessionError,
    },

    /// Logging could not be installed.
    #[error("logging error: {message}")]
    Logging {
        /// Description of the failure.
        message: String,
    },
}
