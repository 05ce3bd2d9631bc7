//! Life-trend projection for a Four Pillars chart.
//!
//! This crate provides:
//! - `Dimension`, the seven scored aspects (overall plus six derived ones)
//! - `TrendProjector`, which walks a decade/year cycle and scores each year
//! - Seeded, reproducible jitter keyed by (year, dimension)
//!
//! Scoring is pure: identical inputs and seed give identical trends.

pub mod dimension;
pub mod error;
pub mod jitter;
pub mod projector;
pub mod scoring;

pub use dimension::{ALL_DIMENSIONS, Dimension};
pub use error::TrendError;
pub use jitter::Jitter;
pub use projector::{
    DEFAULT_COUNT, DimensionSeries, NatalInput, Trend, TrendProjector, TrendWindow, YearPoint,
};
pub use scoring::{Adjustment, YearContext, adjust, base_score};
