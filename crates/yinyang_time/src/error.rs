//! Error types for civil time handling.

use thiserror::Error;

/// Errors from civil date/time validation and solar time correction.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    #[error("invalid month {0}: expected 1..=12")]
    InvalidMonth(u32),
    /// Day outside the month's range.
    #[error("invalid day {day} for {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23.
    #[error("invalid hour {0}: expected 0..=23")]
    InvalidHour(u32),
    /// Minute outside 0..=59.
    #[error("invalid minute {0}: expected 0..=59")]
    InvalidMinute(u32),
    /// Longitude not finite or outside [-180, 180].
    #[error("invalid longitude {0}: expected a finite value in [-180, 180]")]
    InvalidLongitude(f64),
    /// Date/time text could not be parsed.
    #[error("cannot parse date/time {0:?}: expected YYYY-MM-DDThh:mm")]
    Parse(String),
}
