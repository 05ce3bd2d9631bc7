//! Julian Day Number conversions for the proleptic Gregorian calendar.
//!
//! Integer algorithms (Fliegel & Van Flandern / Richards), valid for any
//! year after -4800. The day argument may overflow the month: day 0 is the
//! last day of the previous month, day 32 of January is February 1st.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Julian Day Number of a Gregorian calendar date.
///
/// `day` is not range-checked; out-of-month values roll over linearly.
pub fn calendar_to_jdn(year: i32, month: u32, day: i64) -> i64 {
    let month = month as i64;
    let a = (14 - month) / 12;
    let y = year as i64 + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Gregorian calendar date `(year, month, day)` of a Julian Day Number.
pub fn jdn_to_calendar(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as i32, month as u32, day as u32)
}

/// Fractional Julian Date for a calendar date and minute of day.
///
/// The JDN refers to noon, so midnight is `jdn - 0.5`.
pub fn calendar_to_jd(year: i32, month: u32, day: i64, minute_of_day: f64) -> f64 {
    calendar_to_jdn(year, month, day) as f64 - 0.5 + minute_of_day / MINUTES_PER_DAY as f64
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, or 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_jdn() {
        assert_eq!(calendar_to_jdn(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn jdn_roundtrip_known_dates() {
        for (y, m, d) in [(1900, 3, 1), (1984, 2, 4), (2000, 2, 29), (2024, 12, 31)] {
            let jdn = calendar_to_jdn(y, m, d as i64);
            assert_eq!(jdn_to_calendar(jdn), (y, m, d));
        }
    }

    #[test]
    fn day_overflow_rolls_into_next_month() {
        let jdn = calendar_to_jdn(2023, 1, 32);
        assert_eq!(jdn_to_calendar(jdn), (2023, 2, 1));
    }

    #[test]
    fn day_zero_is_previous_month_end() {
        let jdn = calendar_to_jdn(2024, 3, 0);
        assert_eq!(jdn_to_calendar(jdn), (2024, 2, 29));
        let jdn = calendar_to_jdn(2024, 1, 0);
        assert_eq!(jdn_to_calendar(jdn), (2023, 12, 31));
    }

    #[test]
    fn midnight_jd_is_half_day_before_noon() {
        let jd = calendar_to_jd(2000, 1, 1, 720.0);
        assert!((jd - J2000_JD).abs() < 1e-9);
        let jd = calendar_to_jd(2000, 1, 1, 0.0);
        assert!((jd - (J2000_JD - 0.5)).abs() < 1e-9);
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 13), 0);
    }
}
