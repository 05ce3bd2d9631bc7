//! Property checks for true solar time correction and date normalisation.

use proptest::prelude::*;
use yinyang_time::{CivilDateTime, days_in_month, true_solar_time};

fn civil_strategy() -> impl Strategy<Value = CivilDateTime> {
    (1900i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60)
        .prop_map(|(y, m, d, h, min)| CivilDateTime::new(y, m, d, h, min))
}

proptest! {
    #[test]
    fn corrected_time_is_always_a_valid_clock_reading(
        t in civil_strategy(),
        lon in -180.0f64..=180.0,
    ) {
        let c = true_solar_time(&t, lon).unwrap();
        prop_assert!(c.corrected.hour < 24);
        prop_assert!(c.corrected.minute < 60);
        prop_assert!((-1..=1).contains(&c.day_shift));
        let n = c.corrected.normalized().unwrap();
        prop_assert!(n.validate().is_ok());
    }

    #[test]
    fn shift_matches_four_minutes_per_degree(
        t in civil_strategy(),
        lon in 73.0f64..136.0,
    ) {
        let c = true_solar_time(&t, lon).unwrap();
        let before = t.minute_of_day() as f64;
        let after = c.corrected.minute_of_day() as f64 + c.day_shift as f64 * 1440.0;
        let expected = before + (lon - 120.0) * 4.0;
        prop_assert!((after - expected.floor()).abs() < 1.0 + 1e-9);
    }

    #[test]
    fn normalisation_preserves_valid_dates(t in civil_strategy()) {
        prop_assert_eq!(t.normalized().unwrap(), t);
    }
}

#[test]
fn month_end_rollover_forward() {
    for month in 1..=12u32 {
        let last = days_in_month(2023, month);
        let t = CivilDateTime::new(2023, month, last, 23, 59);
        let c = true_solar_time(&t, 130.0).unwrap();
        assert_eq!(c.day_shift, 1);
        let n = c.corrected.normalized().unwrap();
        assert_eq!(n.day, 1);
    }
}
