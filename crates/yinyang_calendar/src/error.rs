//! Error types for calendar conversion.

use thiserror::Error;
use yinyang_time::TimeError;

/// Errors from converting a civil moment to pillars or luck cycles.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Invalid civil date/time.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Year outside the range the solar model supports.
    #[error("year {year} outside supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    /// Solar-term search did not bracket a crossing.
    #[error("solar term search failed: {0}")]
    SearchFailed(&'static str),
}
