//! Shared value types: typed identifiers and the local calendar date.

pub mod date;
pub mod id;

pub use date::LocalDate;
pub use id::{ActivitySessionId, ActorId, DioceseId, SchoolId};
