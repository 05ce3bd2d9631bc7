//! Solar-term calendar for the Four Pillars pipeline.
//!
//! This crate provides:
//! - `CalendarEngine`, the contract from civil time to pillars and luck cycles
//! - `SolarTermCalendar`, an implementation driven by apparent solar longitude
//! - Sectional term ("jie") search by coarse scan and bisection

pub mod engine;
pub mod error;
pub mod search;
pub mod solar;

pub use engine::{
    CalendarEngine, DECADE_COUNT, LUCK_DAYS_PER_DAY, LuckDirection, LuckStart, MAX_YEAR,
    MIN_YEAR, SolarTermCalendar, ZiHourConvention, year_ganzhi,
};
pub use error::CalendarError;
pub use search::{JieEvent, SearchDirection, find_jie};
pub use solar::{JIE_NAMES, jie_longitude, month_index, normalize_360, solar_longitude_deg, wrap_180};
