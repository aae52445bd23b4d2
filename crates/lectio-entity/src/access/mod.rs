//! Derived feature access.

pub mod model;

pub use model::FeatureAccess;
