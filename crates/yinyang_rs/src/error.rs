//! Error type for the convenience pipeline.

use thiserror::Error;
use yinyang_base::BaseError;
use yinyang_calendar::CalendarError;
use yinyang_config::ConfigError;
use yinyang_time::TimeError;
use yinyang_trend::TrendError;

/// Single error surfaced by the pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum YinyangError {
    /// Invalid civil date/time or longitude.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Calendar conversion failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// Malformed input such as a gender code outside {0, 1}.
    #[error(transparent)]
    Input(#[from] BaseError),
    #[error(transparent)]
    Trend(#[from] TrendError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
