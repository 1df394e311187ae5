//! Ability cost/effect contract.
//!
//! Abilities follow a validate-then-apply pattern: the controller first
//! checks the preconditions against the current [`ResourceController`] and
//! only mutates it once every check has passed. Given the same resource
//! state and key the outcome is deterministic, and a rejection never
//! changes anything.
//!
//! | Key        | Precondition          | Effect                                   |
//! |------------|-----------------------|------------------------------------------|
//! | primary    | `control >= cost`     | spend `cost` control, gain focus         |
//! | ultimate   | power-up active       | consume the window immediately           |
//! | other      | never                 | rejected as an unrecognized key          |

use arena_types::AbilityKey;
use tracing::debug;

use crate::config::AbilityConfig;
use crate::error::{AbilityRejection, AgentError};
use crate::resources::ResourceController;

/// What a successful ability did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AbilityOutcome {
    /// The primary ability fired.
    PrimaryUsed {
        /// Control deducted.
        control_spent: f64,
        /// Focus actually gained after clamping to the cap.
        focus_gained: f64,
    },
    /// The ultimate fired and closed the power-up window.
    UltimateUsed,
}

/// Result of an ability invocation.
pub type AbilityResult = Result<AbilityOutcome, AbilityRejection>;

/// Validates and applies ability invocations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilityController {
    primary_cost: f64,
    primary_focus_gain: f64,
}

impl AbilityController {
    /// Build a controller from its cost table.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidConfig`] if a cost or gain is negative
    /// or non-finite.
    pub fn new(config: &AbilityConfig) -> Result<Self, AgentError> {
        config.validate()?;
        Ok(Self {
            primary_cost: config.primary_cost,
            primary_focus_gain: config.primary_focus_gain,
        })
    }

    /// Invoke the ability bound to a raw input key.
    pub fn use_ability(&self, key: &str, resources: &mut ResourceController) -> AbilityResult {
        let Some(ability) = AbilityKey::from_key(key) else {
            debug!(key, "Unrecognized ability key");
            return Err(AbilityRejection::InvalidAbilityKey {
                key: key.to_owned(),
            });
        };
        self.use_key(ability, resources)
    }

    /// Invoke an already-resolved ability.
    pub fn use_key(&self, key: AbilityKey, resources: &mut ResourceController) -> AbilityResult {
        let result = match key {
            AbilityKey::Primary => self.primary(resources),
            AbilityKey::Ultimate => Self::ultimate(resources),
        };
        match &result {
            Ok(outcome) => debug!(?key, ?outcome, "Ability used"),
            Err(rejection) => debug!(?key, %rejection, "Ability rejected"),
        }
        result
    }

    /// Control spent by the primary ability.
    pub const fn primary_cost(&self) -> f64 {
        self.primary_cost
    }

    fn primary(&self, resources: &mut ResourceController) -> AbilityResult {
        resources.spend_control(self.primary_cost)?;
        let before = resources.focus();
        resources.gain_focus(self.primary_focus_gain);
        Ok(AbilityOutcome::PrimaryUsed {
            control_spent: self.primary_cost,
            focus_gained: resources.focus() - before,
        })
    }

    fn ultimate(resources: &mut ResourceController) -> AbilityResult {
        if resources.deactivate_power_up() {
            Ok(AbilityOutcome::UltimateUsed)
        } else {
            Err(AbilityRejection::PowerUpInactive)
        }
    }
}
