use pretty_assertions::assert_eq;
use proptest::prelude::*;
use yinyang_base::{Gender, Stem};
use yinyang_calendar::{CalendarEngine, LuckDirection, SolarTermCalendar, year_ganzhi};
use yinyang_time::{CivilDateTime, days_in_month};

fn moment() -> impl Strategy<Value = CivilDateTime> {
    (1900i32..2100, 1u32..=12, 1u32..=31, 0u32..24, 0u32..60).prop_map(|(y, mo, d, h, mi)| {
        CivilDateTime::new(y, mo, d.min(days_in_month(y, mo)), h, mi)
    })
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pillars_are_valid_sexagenary_pairs(m in moment()) {
        let chart = SolarTermCalendar::default().chart(&m).unwrap();
        for p in chart.pillars() {
            prop_assert!(p.ganzhi.cycle_index().is_some(), "{}", p.ganzhi);
        }
    }

    #[test]
    fn month_stem_follows_year_stem(m in moment()) {
        let chart = SolarTermCalendar::default().chart(&m).unwrap();
        let months_since_yin = (chart.month.branch.index() as i64 + 10) % 12;
        let expected = Stem::from_index((chart.year.stem.index() as i64 % 5) * 2 + 2 + months_since_yin);
        prop_assert_eq!(chart.month.stem, expected);
    }

    #[test]
    fn decade_years_are_contiguous(m in moment(), g in gender()) {
        let cal = SolarTermCalendar::default();
        let chart = cal.chart(&m).unwrap();
        let decades = cal.decade_cycles(&m, &chart, g).unwrap();

        let years: Vec<_> = decades.iter().flat_map(|d| d.years.iter()).collect();
        prop_assert_eq!(years[0].year, m.year);
        for pair in years.windows(2) {
            prop_assert_eq!(pair[1].year, pair[0].year + 1);
        }
        for y in &years {
            prop_assert_eq!(y.ganzhi, year_ganzhi(y.year));
        }
        for d in &decades {
            prop_assert_eq!(d.years.first().map(|y| y.year), Some(d.start_year));
            prop_assert_eq!(d.years.last().map(|y| y.year), Some(d.end_year));
        }
    }

    #[test]
    fn luck_starts_within_eleven_years(m in moment(), g in gender()) {
        let cal = SolarTermCalendar::default();
        let chart = cal.chart(&m).unwrap();
        let luck = cal.luck_start(&m, &chart, g).unwrap();
        prop_assert!(luck.days_to_jie >= 0.0 && luck.days_to_jie < 32.0);
        prop_assert!(luck.start_year() >= m.year);
        prop_assert!(luck.start_year() <= m.year + 11);
        prop_assert_eq!(luck.direction, LuckDirection::of(chart.year.stem, g));
    }
}

#[test]
fn consecutive_days_advance_the_day_pillar() {
    let cal = SolarTermCalendar::default();
    let mut prev = cal.chart(&CivilDateTime::new(1999, 12, 25, 12, 0)).unwrap().day;
    for day in 26..=31 {
        let next = cal.chart(&CivilDateTime::new(1999, 12, day, 12, 0)).unwrap().day;
        assert_eq!(next, prev.offset(1));
        prev = next;
    }
}

#[test]
fn known_chart_1990() {
    // 1990-05-20 04:00 Beijing time
    let chart = SolarTermCalendar::default()
        .chart(&CivilDateTime::new(1990, 5, 20, 4, 0))
        .unwrap();
    assert_eq!(chart.to_string(), "庚午 辛巳 丙戌 庚寅");
}
