//! Error types for trend projection.

use thiserror::Error;

/// Errors from projecting a trend over a luck cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TrendError {
    /// A window of zero years was requested.
    #[error("trend window must contain at least one year")]
    ZeroCount,
    /// The cycle skips or repeats a year.
    #[error("cycle years are not contiguous: {found} follows {previous}")]
    NonContiguous { previous: i32, found: i32 },
    /// The cycle does not contain the window's start year.
    #[error("cycle covers {first}..={last}, window starts at {start}")]
    WindowNotCovered { start: i32, first: i32, last: i32 },
    /// The cycle ends before the window does.
    #[error("cycle holds {available} of {requested} years from {start}")]
    CycleTooShort {
        start: i32,
        requested: u32,
        available: u32,
    },
    /// The cycle has no years at all.
    #[error("cycle contains no years")]
    EmptyCycle,
}
