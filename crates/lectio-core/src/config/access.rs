//! Premium feature access configuration.

use serde::{Deserialize, Serialize};

/// Feature access settings.
///
/// `pilot_phase` is a process-wide override injected at startup. While it is
/// on, every actor is treated as a premium trial user regardless of stored
/// subscription state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Whether the program is running in its pilot phase.
    #[serde(default)]
    pub pilot_phase: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self { pilot_phase: false }
    }
}
