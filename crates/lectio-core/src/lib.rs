//! # lectio-core
//!
//! Core crate for the Lectio reading-incentive program. Contains
//! configuration schemas, typed identifiers, the local calendar-date
//! value type, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Lectio crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
