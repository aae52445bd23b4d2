//! Local calendar-date value type.
//!
//! Streak and tier arithmetic works in the actor's local calendar, one whole
//! day at a time. [`LocalDate`] wraps [`chrono::NaiveDate`] and exposes only
//! explicit day-step operations, so no caller can accidentally cross a day
//! boundary with raw millisecond subtraction.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AppError;

/// A calendar day in the actor's local timezone, with no time-of-day
/// component.
///
/// The canonical textual form is `YYYY-MM-DD`. Two activity sessions on the
/// same local day map to the same `LocalDate` regardless of time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDate(NaiveDate);

impl LocalDate {
    /// Construct from calendar components. Returns an invalid-date error for
    /// days that do not exist (e.g. February 30th).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, AppError> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self).ok_or_else(|| {
            AppError::invalid_date(format!("No such calendar day: {year:04}-{month:02}-{day:02}"))
        })
    }

    /// Construct from an existing [`NaiveDate`].
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Return the wrapped [`NaiveDate`].
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// The previous calendar day, or `None` at the representable minimum.
    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// The next calendar day, or `None` at the representable maximum.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// The day `days` whole calendar days before this one.
    pub fn days_back(&self, days: u32) -> Option<Self> {
        self.0.checked_sub_days(chrono::Days::new(u64::from(days))).map(Self)
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for LocalDate {
    type Err = AppError;

    /// Parse the canonical `YYYY-MM-DD` form. Anything else — a timestamp,
    /// a slash-separated date, missing zero padding — is rejected rather
    /// than silently coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let canonical = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
        if !canonical {
            return Err(AppError::invalid_date(format!(
                "Invalid date string: '{s}'. Expected canonical YYYY-MM-DD"
            )));
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| AppError::invalid_date(format!("Invalid date string: '{s}': {e}")))
    }
}

impl Serialize for LocalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocalDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
