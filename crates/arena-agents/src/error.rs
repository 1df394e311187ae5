//! Error types for the arena-agents crate.
//!
//! [`AgentError`] is a construction-time failure: the configuration handed
//! to a controller is unusable. [`AbilityRejection`] is a recoverable,
//! per-call refusal that leaves all state untouched.

/// Errors raised while building actor components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    /// A configured value is out of range (negative rate, empty name, ...).
    #[error("invalid agent configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Why an ability invocation was refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AbilityRejection {
    /// The key does not name a mechanically implemented ability.
    #[error("unrecognized ability key: {key:?}")]
    InvalidAbilityKey {
        /// The raw key that was supplied.
        key: String,
    },

    /// Not enough control to pay the ability's cost.
    #[error("insufficient control: need {required}, have {available}")]
    InsufficientControl {
        /// Cost of the ability.
        required: f64,
        /// Control at the time of the call.
        available: f64,
    },

    /// The ultimate requires an open power-up window.
    #[error("power-up is not active")]
    PowerUpInactive,

    /// The session already has a terminal outcome.
    #[error("session is over")]
    SessionOver,
}

impl AbilityRejection {
    /// Whether this rejection is due to missing resources (as opposed to a
    /// bad key or a finished session).
    pub const fn is_insufficient_resource(&self) -> bool {
        matches!(
            self,
            Self::InsufficientControl { .. } | Self::PowerUpInactive
        )
    }
}
