//! Resolved tier assignment.

use serde::{Deserialize, Serialize};

/// A resolved status tier with its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierAssignment {
    /// Display label shown to the actor.
    pub label: String,
    /// Icon token the presentation layer maps to artwork.
    pub icon: String,
    /// The threshold the metric cleared to earn this tier.
    pub min: f64,
}

impl Default for TierAssignment {
    /// The assignment used when no tier table entry applies.
    fn default() -> Self {
        Self {
            label: "Unranked".to_string(),
            icon: String::new(),
            min: 0.0,
        }
    }
}
