//! Project configuration.

use crate::utils::get_env_with_prefix;
use serde::{Deserialize, Serialize};

/// Configuration for roster invitations.
///
/// # Example
///
/// ```rust
/// use taskboard::projects::InvitationConfig;
///
/// let config = InvitationConfig::new().max_pending_per_project(10);
/// assert_eq!(config.max_pending_per_project, 10);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InvitationConfig {
    /// Maximum pending invitations per project.
    #[serde(default = "default_max_pending")]
    pub max_pending_per_project: u32,
}

fn default_max_pending() -> u32 {
    50
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            max_pending_per_project: default_max_pending(),
        }
    }
}

impl InvitationConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum pending invitations per project.
    #[must_use]
    pub fn max_pending_per_project(mut self, max: u32) -> Self {
        self.max_pending_per_project = max;
        self
    }

    /// Load from `TASKBOARD_MAX_PENDING_INVITATIONS`, keeping defaults for
    /// anything missing or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(max) = get_env_with_prefix("MAX_PENDING_INVITATIONS") {
            if let Ok(max) = max.parse() {
                config.max_pending_per_project = max;
            }
        }
        config
    }
}
