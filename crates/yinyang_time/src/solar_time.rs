//! True solar time correction relative to the UTC+8 reference meridian.
//!
//! Civil time in the reference zone is kept for the 120°E meridian. Every
//! degree of longitude away from it shifts local solar time by four minutes.
//! The corrected moment may carry day 0 or day 32; folding it into a valid
//! date is left to the calendar stage (`CivilDateTime::normalized`).

use serde::Serialize;

use crate::civil::CivilDateTime;
use crate::error::TimeError;
use crate::julian::MINUTES_PER_DAY;

/// Reference meridian of the UTC+8 zone, in degrees east.
pub const REFERENCE_MERIDIAN_DEG: f64 = 120.0;

/// Solar time shift per degree of longitude, in minutes.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Result of a true solar time correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTimeCorrection {
    /// Input wall-clock time.
    pub civil: CivilDateTime,
    /// Corrected time; `day` may be out of month range after a rollover.
    pub corrected: CivilDateTime,
    /// Applied offset in minutes (negative west of the reference meridian).
    pub offset_minutes: f64,
    /// Calendar day shift applied by the rollover: -1, 0 or +1.
    pub day_shift: i8,
}

/// Offset in minutes between local solar time and reference-zone civil time.
pub fn longitude_offset_minutes(longitude_deg: f64) -> f64 {
    (longitude_deg - REFERENCE_MERIDIAN_DEG) * MINUTES_PER_DEGREE
}

/// Correct a civil time to true solar time for the given longitude.
///
/// Hour and minute of the result are the floor of the shifted minute count.
pub fn true_solar_time(
    civil: &CivilDateTime,
    longitude_deg: f64,
) -> Result<SolarTimeCorrection, TimeError> {
    if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(TimeError::InvalidLongitude(longitude_deg));
    }

    let offset = longitude_offset_minutes(longitude_deg);
    let day_minutes = MINUTES_PER_DAY as f64;
    let mut total = civil.minute_of_day() as f64 + offset;
    let mut day_shift: i8 = 0;
    if total >= day_minutes {
        day_shift = 1;
        total -= day_minutes;
    } else if total < 0.0 {
        day_shift = -1;
        total += day_minutes;
    }

    let whole = total.floor() as u32;
    let day = u32::try_from(i64::from(civil.day) + i64::from(day_shift)).map_err(|_| {
        TimeError::InvalidDay {
            year: civil.year,
            month: civil.month,
            day: civil.day,
        }
    })?;
    let corrected = CivilDateTime {
        year: civil.year,
        month: civil.month,
        day,
        hour: whole / 60,
        minute: whole % 60,
    };

    tracing::debug!(
        civil = %civil,
        corrected = %corrected,
        offset_minutes = offset,
        "true solar time correction"
    );

    Ok(SolarTimeCorrection {
        civil: *civil,
        corrected,
        offset_minutes: offset,
        day_shift,
    })
}
