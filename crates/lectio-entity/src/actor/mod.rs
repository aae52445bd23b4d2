//! Actor role enumeration.

pub mod role;

pub use role::ActorRole;
