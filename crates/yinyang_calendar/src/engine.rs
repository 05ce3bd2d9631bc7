//! Calendar engine: civil moment to four pillars and luck cycles.

use serde::{Deserialize, Serialize};
use yinyang_base::{
    Branch, Chart, Decade, GanZhi, Gender, Polarity, Stem, YearCycle,
};
use yinyang_time::CivilDateTime;

use crate::error::CalendarError;
use crate::search::{JieEvent, SearchDirection, find_jie};
use crate::solar::{LICHUN_DEG, ZONE_OFFSET_DAYS, month_index, solar_longitude_deg};

/// Earliest year the solar model is trusted for.
pub const MIN_YEAR: i32 = 1000;
/// Latest year the solar model is trusted for.
pub const MAX_YEAR: i32 = 3000;

/// Luck-start scale: three days to a sectional term count as one year.
pub const LUCK_DAYS_PER_DAY: f64 = 365.25 / 3.0;

/// Luck pillars generated after decade 0.
pub const DECADE_COUNT: u32 = 10;

/// Offset between a Julian Day Number and the sexagenary day index.
const DAY_CYCLE_OFFSET: i64 = 49;

/// A pluggable calendar.
///
/// Implementors turn a (solar-corrected) civil moment into the four pillars
/// and the decade/year luck cycles used by trend projection.
pub trait CalendarEngine: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Four pillars of a moment.
    fn chart(&self, moment: &CivilDateTime) -> Result<Chart, CalendarError>;

    /// Decade cycles in chronological order, each with its calendar years.
    fn decade_cycles(
        &self,
        birth: &CivilDateTime,
        chart: &Chart,
        gender: Gender,
    ) -> Result<Vec<Decade>, CalendarError>;
}

/// How 23:00–24:00 (late Zi hour) is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiHourConvention {
    /// Day pillar stays on the current date; the hour stem follows the next day.
    #[default]
    SameDay,
    /// The new day starts at 23:00.
    NextDay,
}

/// Direction the luck pillars walk through the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    /// Forward for a Yang year and a male, or a Yin year and a female.
    pub fn of(year_stem: Stem, gender: Gender) -> Self {
        match (year_stem.polarity(), gender) {
            (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => Self::Forward,
            _ => Self::Backward,
        }
    }

    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// When the first luck pillar begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LuckStart {
    pub direction: LuckDirection,
    /// Sectional term the count runs to.
    pub jie: JieEvent,
    /// Days between birth and `jie`.
    pub days_to_jie: f64,
    /// Local wall-clock moment the first luck pillar starts.
    pub start: CivilDateTime,
}

impl LuckStart {
    pub fn start_year(&self) -> i32 {
        self.start.year
    }
}

/// Sexagenary pair of a calendar year counted from Lichun.
pub const fn year_ganzhi(year: i32) -> GanZhi {
    GanZhi::from_cycle_index(year as i64 - 4)
}

/// Solar-term calendar on the UTC+8 reference zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolarTermCalendar {
    pub zi_hour: ZiHourConvention,
}

impl SolarTermCalendar {
    pub const fn new(zi_hour: ZiHourConvention) -> Self {
        Self { zi_hour }
    }

    /// Normalize the date, validate fields and check the supported year range.
    pub fn prepare(&self, moment: &CivilDateTime) -> Result<CivilDateTime, CalendarError> {
        let normalized = moment.normalized()?;
        normalized.validate()?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&normalized.year) {
            return Err(CalendarError::YearOutOfRange {
                year: normalized.year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }
        Ok(normalized)
    }

    /// First luck pillar start for a birth moment.
    pub fn luck_start(
        &self,
        birth: &CivilDateTime,
        chart: &Chart,
        gender: Gender,
    ) -> Result<LuckStart, CalendarError> {
        let birth = self.prepare(birth)?;
        let jd_ut = ut_jd(&birth);
        let direction = LuckDirection::of(chart.year.stem, gender);
        let search = match direction {
            LuckDirection::Forward => SearchDirection::Forward,
            LuckDirection::Backward => SearchDirection::Backward,
        };
        let jie = find_jie(jd_ut, search)?;
        let days_to_jie = (jie.jd_ut - jd_ut).abs();
        let start_jd_ut = jd_ut + days_to_jie * LUCK_DAYS_PER_DAY;
        let start = CivilDateTime::from_jd(start_jd_ut + ZONE_OFFSET_DAYS);

        tracing::debug!(
            ?direction,
            term = jie.name,
            days_to_jie,
            %start,
            "luck start"
        );

        Ok(LuckStart {
            direction,
            jie,
            days_to_jie,
            start,
        })
    }
}

fn ut_jd(moment: &CivilDateTime) -> f64 {
    moment.to_jd() - ZONE_OFFSET_DAYS
}

fn day_pillar(jdn: i64) -> GanZhi {
    GanZhi::from_cycle_index(jdn + DAY_CYCLE_OFFSET)
}

fn year_cycles(from: i32, to: i32) -> Vec<YearCycle> {
    (from..=to)
        .map(|year| YearCycle {
            year,
            ganzhi: year_ganzhi(year),
        })
        .collect()
}

impl CalendarEngine for SolarTermCalendar {
    fn name(&self) -> &'static str {
        "solar-term"
    }

    fn chart(&self, moment: &CivilDateTime) -> Result<Chart, CalendarError> {
        let moment = self.prepare(moment)?;
        let lambda = solar_longitude_deg(ut_jd(&moment));

        // January and February before Lichun still belong to the previous year.
        let before_lichun = (270.0..LICHUN_DEG).contains(&lambda);
        let pillar_year = if moment.month <= 2 && before_lichun {
            moment.year - 1
        } else {
            moment.year
        };
        let year = year_ganzhi(pillar_year);

        let m = month_index(lambda) as i64;
        let month = GanZhi::new(
            Stem::from_index((year.stem.index() as i64 % 5) * 2 + 2 + m),
            Branch::from_index(2 + m),
        );

        let late_zi = moment.hour == 23;
        let jdn = moment.jdn();
        let day = match (late_zi, self.zi_hour) {
            (true, ZiHourConvention::NextDay) => day_pillar(jdn + 1),
            _ => day_pillar(jdn),
        };
        let hour_day_stem = if late_zi {
            day_pillar(jdn + 1).stem
        } else {
            day.stem
        };
        let hour_branch = Branch::from_index(((moment.hour as i64 + 1) / 2) % 12);
        let hour = GanZhi::new(
            Stem::from_index((hour_day_stem.index() as i64 % 5) * 2 + hour_branch.index() as i64),
            hour_branch,
        );

        let chart = Chart::new(year, month, day, hour);
        tracing::debug!(%moment, solar_longitude = lambda, %chart, "pillars");
        Ok(chart)
    }

    fn decade_cycles(
        &self,
        birth: &CivilDateTime,
        chart: &Chart,
        gender: Gender,
    ) -> Result<Vec<Decade>, CalendarError> {
        let birth = self.prepare(birth)?;
        let luck = self.luck_start(&birth, chart, gender)?;
        let first = luck.start_year();
        let step = luck.direction.step();

        let mut decades = Vec::with_capacity(DECADE_COUNT as usize + 1);
        if first > birth.year {
            decades.push(Decade {
                index: 0,
                ganzhi: None,
                start_year: birth.year,
                end_year: first - 1,
                start_age: 1,
                years: year_cycles(birth.year, first - 1),
            });
        }
        for index in 1..=DECADE_COUNT {
            let start_year = first + 10 * (index as i32 - 1);
            let end_year = start_year + 9;
            decades.push(Decade {
                index,
                ganzhi: Some(chart.month.offset(step * index as i64)),
                start_year,
                end_year,
                start_age: start_year - birth.year + 1,
                years: year_cycles(start_year, end_year),
            });
        }
        Ok(decades)
    }
}
