//! Subscription entities.

pub mod model;
pub mod status;

pub use model::SubscriptionState;
pub use status::{SubscriptionStatus, SubscriptionTier};
