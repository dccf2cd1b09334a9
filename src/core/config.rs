//! Guide configuration.
//!
//! Callers configure the interpreter at startup with a `GuideConfig`.
//! Every field has a default matching the standard board, so most callers
//! use `GuideConfig::default()` and only override what their variant changes.

use serde::{Deserialize, Serialize};

use super::SquareId;
use crate::error::Result;

/// How the interpreter treats a passed-GO flag on a forced trip to jail.
///
/// Going to jail never pays the GO salary, but the upstream engine may still
/// report `passedGO` when the token is moved around the board to get there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoToJailPolicy {
    /// Hide the passed-GO badge when the result sends the player to jail.
    #[default]
    SuppressBadge,
    /// Show whatever the engine reported.
    TrustEngine,
}

/// Complete guide configuration.
///
/// ## Example
///
/// ```
/// use board_guide::core::{GoToJailPolicy, GuideConfig, SquareId};
///
/// let config = GuideConfig::default()
///     .with_go_salary(400)
///     .with_go_to_jail_policy(GoToJailPolicy::TrustEngine);
///
/// assert_eq!(config.go_salary, 400);
/// assert_eq!(config.jail_square, SquareId::new(10));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Salary shown on passed-GO badges.
    pub go_salary: u32,

    /// Position of the Jail / Just Visiting square.
    pub jail_square: SquareId,

    /// Passed-GO handling for forced trips to jail.
    pub go_to_jail_policy: GoToJailPolicy,

    /// Reject results whose path disagrees with their endpoints or GO flag.
    pub validate_paths: bool,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            go_salary: 200,
            jail_square: SquareId::new(10),
            go_to_jail_policy: GoToJailPolicy::default(),
            validate_paths: true,
        }
    }
}

impl GuideConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the GO salary.
    #[must_use]
    pub fn with_go_salary(mut self, salary: u32) -> Self {
        self.go_salary = salary;
        self
    }

    /// Set the jail position.
    #[must_use]
    pub fn with_jail_square(mut self, square: SquareId) -> Self {
        self.jail_square = square;
        self
    }

    /// Set the forced-jail passed-GO policy.
    #[must_use]
    pub fn with_go_to_jail_policy(mut self, policy: GoToJailPolicy) -> Self {
        self.go_to_jail_policy = policy;
        self
    }

    /// Turn path validation off (trust the engine's paths as-is).
    #[must_use]
    pub fn without_path_validation(mut self) -> Self {
        self.validate_paths = false;
        self
    }
}
