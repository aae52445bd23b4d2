//! Subscription status and tier enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Billing status of a parent's subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Billing is current.
    Active,
    /// A renewal payment failed and is being retried.
    PastDue,
    /// The subscription was cancelled.
    Canceled,
}

impl SubscriptionStatus {
    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::PastDue => "past_due",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = lectio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "past_due" => Ok(Self::PastDue),
            "canceled" => Ok(Self::Canceled),
            _ => Err(lectio_core::AppError::validation(format!(
                "Invalid subscription status: '{s}'. Expected one of: active, past_due, canceled"
            ))),
        }
    }
}

/// Named subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    /// The no-cost plan every account starts on.
    Free,
    /// The paid plan that unlocks premium features.
    Premium,
}

impl SubscriptionTier {
    /// Return the tier as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubscriptionTier {
    type Err = lectio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "premium" => Ok(Self::Premium),
            _ => Err(lectio_core::AppError::validation(format!(
                "Invalid subscription tier: '{s}'. Expected one of: free, premium"
            ))),
        }
    }
}
