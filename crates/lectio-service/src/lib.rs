//! # lectio-service
//!
//! Business logic for the Lectio reading-incentive program: the streak
//! calculator, tier resolver, and feature-access resolver, plus thin
//! services that orchestrate them over repository seams.
//!
//! The calculators are pure, synchronous functions — the services fetch a
//! bounded activity or subscription window, hand the data to the
//! calculators, and return the derived views. Services follow constructor
//! injection — all dependencies are provided at construction time via `Arc`
//! references.

pub mod access;
pub mod progress;
pub mod repository;

pub use access::{AccessService, resolve_features};
pub use progress::{ProgressService, compute_streak, resolve_tier, rolling_average};
pub use repository::{ActivityLogRepository, SubscriptionRepository};
