//! Civil time handling for the Four Pillars pipeline.
//!
//! This crate provides:
//! - `CivilDateTime`, a minute-resolution wall-clock moment
//! - Julian Day Number ↔ Gregorian calendar conversions
//! - True solar time correction from longitude
//! - A static longitude table for major cities

pub mod cities;
pub mod civil;
pub mod error;
pub mod julian;
pub mod solar_time;

pub use cities::{CITIES, City, cities_in, find_city, provinces};
pub use civil::CivilDateTime;
pub use error::TimeError;
pub use julian::{
    J2000_JD, MINUTES_PER_DAY, calendar_to_jd, calendar_to_jdn, days_in_month, is_leap_year,
    jdn_to_calendar,
};
pub use solar_time::{
    MINUTES_PER_DEGREE, REFERENCE_MERIDIAN_DEG, SolarTimeCorrection, longitude_offset_minutes,
    true_solar_time,
};
