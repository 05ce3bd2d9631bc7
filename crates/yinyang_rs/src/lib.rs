//! Convenience pipeline for Four Pillars profiles and life trends.
//!
//! Wires the calendar engine, the base classifiers and the trend projector
//! behind one entry point, so callers pass a birth moment, a gender code and
//! a longitude and get back a serialisable `Profile`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use yinyang_rs::*;
//!
//! // 1990-05-20 04:00 (UTC+8), male, Beijing
//! let profile = compute_profile(1990, 5, 20, 4, 0, 1, 116.4)?;
//! println!("{} {}", profile.chart_title, profile.natal.chart);
//! for (year, score) in profile.trend.scores(Dimension::Overall).take(5) {
//!     println!("{year}: {score}");
//! }
//! ```
//!
//! For a non-default ruleset or calendar, build a `Pipeline` directly:
//!
//! ```rust,ignore
//! let config = Config::load(Some(Path::new("yinyang.toml")))?;
//! let pipeline = Pipeline::from_config(&config);
//! let natal = pipeline.natal(&BirthInput::from_fields(1984, 3, 1, 12, 0, 0, 121.5)?)?;
//! ```

pub mod convenience;
pub mod error;
pub mod pipeline;

pub use convenience::{
    DEFAULT_LONGITUDE, chart, city_longitude, compute_profile, compute_profile_with, element_of,
    natal, solar_time, trend,
};
pub use error::YinyangError;
pub use pipeline::{BirthInput, NatalReading, Pipeline, Profile, WindowRequest};

// Re-export the types callers see in a profile.
pub use yinyang_base::{
    Chart, Classification, Climate, DayMasterProfile, Decade, DecadeSummary, Element,
    EnergyVector, GanZhi, Gender, Marker, Pattern, PillarTenGods, PositionMarkers, Ruleset,
    RulesetProfile, TenGod,
};
pub use yinyang_calendar::{CalendarEngine, SolarTermCalendar, ZiHourConvention};
pub use yinyang_config::Config;
pub use yinyang_time::{CivilDateTime, SolarTimeCorrection};
pub use yinyang_trend::{
    ALL_DIMENSIONS, DEFAULT_COUNT, Dimension, DimensionSeries, Trend, TrendWindow, YearPoint,
};
