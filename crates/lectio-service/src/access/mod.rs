//! Premium feature gating.

pub mod resolver;
pub mod service;

pub use resolver::{PREMIUM_FEATURES, resolve_features};
pub use service::AccessService;
