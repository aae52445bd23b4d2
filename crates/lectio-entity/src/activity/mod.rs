//! Activity session entities.

pub mod model;

pub use model::ActivitySession;
