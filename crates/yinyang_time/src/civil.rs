//! Civil (wall-clock) date and time at minute resolution.
//!
//! `CivilDateTime` is the birth-moment representation used throughout the
//! pipeline. Times are local wall-clock times of the UTC+8 reference zone
//! unless they have been corrected to true solar time.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{MINUTES_PER_DAY, calendar_to_jd, calendar_to_jdn, days_in_month, jdn_to_calendar};

/// Civil calendar date with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CivilDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Strict field validation: month, day within the month, hour, minute.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidMonth(self.month));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidHour(self.hour));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidMinute(self.minute));
        }
        Ok(())
    }

    /// Fold an out-of-month day (0, 32, ...) into a valid calendar date.
    ///
    /// Month, hour and minute must already be in range.
    pub fn normalized(&self) -> Result<Self, TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidMonth(self.month));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidHour(self.hour));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidMinute(self.minute));
        }
        let (year, month, day) = jdn_to_calendar(self.jdn());
        Ok(Self {
            year,
            month,
            day,
            hour: self.hour,
            minute: self.minute,
        })
    }

    /// Julian Day Number of the calendar date (time of day ignored).
    pub fn jdn(&self) -> i64 {
        calendar_to_jdn(self.year, self.month, self.day as i64)
    }

    /// Minutes elapsed since local midnight.
    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Fractional Julian Date of this wall-clock moment (no zone shift).
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(
            self.year,
            self.month,
            self.day as i64,
            self.minute_of_day() as f64,
        )
    }

    /// Wall-clock moment of a fractional Julian Date, truncated to the minute.
    pub fn from_jd(jd: f64) -> Self {
        let shifted = jd + 0.5;
        let jdn = shifted.floor();
        let minutes = ((shifted - jdn) * MINUTES_PER_DAY as f64 + 1e-6).floor() as u32;
        let (jdn, minutes) = if minutes >= MINUTES_PER_DAY {
            (jdn as i64 + 1, minutes - MINUTES_PER_DAY)
        } else {
            (jdn as i64, minutes)
        };
        let (year, month, day) = jdn_to_calendar(jdn);
        Self {
            year,
            month,
            day,
            hour: minutes / 60,
            minute: minutes % 60,
        }
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm` (a space may replace the `T`; the time part
    /// is optional and defaults to midnight).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeError::Parse(s.to_string());
        let trimmed = s.trim();
        let (date, time) = match trimmed.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (trimmed, None),
        };

        // Leading '-' belongs to a negative year, not a separator.
        let (sign, date_body) = match date.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, date),
        };
        let mut parts = date_body.split('-');
        let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        if parts.next().is_some() {
            return Err(err());
        }

        let (hour, minute) = match time {
            Some(t) => {
                let t = t.trim_end_matches('Z');
                let mut hm = t.split(':');
                let hour: u32 = hm.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
                let minute: u32 = hm.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
                (hour, minute)
            }
            None => (0, 0),
        };

        let parsed = Self::new(sign * year, month, day, hour, minute);
        parsed.validate()?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = CivilDateTime::new(1990, 5, 17, 8, 45);
        assert_eq!(t.year, 1990);
        assert_eq!(t.month, 5);
        assert_eq!(t.day, 17);
        assert_eq!(t.hour, 8);
        assert_eq!(t.minute, 45);
    }

    #[test]
    fn display_format() {
        let t = CivilDateTime::new(2024, 1, 5, 7, 3);
        assert_eq!(t.to_string(), "2024-01-05T07:03");
    }

    #[test]
    fn parse_with_t_and_space() {
        let a: CivilDateTime = "1990-05-17T08:45".parse().unwrap();
        let b: CivilDateTime = "1990-05-17 08:45".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, CivilDateTime::new(1990, 5, 17, 8, 45));
    }

    #[test]
    fn parse_date_only() {
        let t: CivilDateTime = "2001-12-31".parse().unwrap();
        assert_eq!(t, CivilDateTime::new(2001, 12, 31, 0, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("yesterday".parse::<CivilDateTime>().is_err());
        assert!("2001-13-01T00:00".parse::<CivilDateTime>().is_err());
        assert!("2001-02-30T00:00".parse::<CivilDateTime>().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_fields() {
        assert_eq!(
            CivilDateTime::new(2023, 2, 29, 0, 0).validate(),
            Err(TimeError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert_eq!(
            CivilDateTime::new(2023, 1, 1, 24, 0).validate(),
            Err(TimeError::InvalidHour(24))
        );
        assert_eq!(
            CivilDateTime::new(2023, 1, 1, 0, 60).validate(),
            Err(TimeError::InvalidMinute(60))
        );
        assert_eq!(
            CivilDateTime::new(2023, 0, 1, 0, 0).validate(),
            Err(TimeError::InvalidMonth(0))
        );
    }

    #[test]
    fn normalize_day_rollover() {
        let t = CivilDateTime::new(2023, 12, 32, 0, 10).normalized().unwrap();
        assert_eq!(t, CivilDateTime::new(2024, 1, 1, 0, 10));
        let t = CivilDateTime::new(2023, 3, 0, 23, 50).normalized().unwrap();
        assert_eq!(t, CivilDateTime::new(2023, 2, 28, 23, 50));
    }

    #[test]
    fn jd_roundtrip() {
        let t = CivilDateTime::new(1987, 6, 21, 13, 37);
        assert_eq!(CivilDateTime::from_jd(t.to_jd()), t);
    }
}
