//! Forward pipeline: corrected time → chart → energy → pattern → markers, trend.

use serde::Serialize;
use yinyang_base::{
    Chart, Decade, DecadeSummary, DayMasterProfile, EnergyVector, Gender, Pattern,
    PillarTenGods, PositionMarkers, Ruleset, allocate_energy, classify_pattern,
    day_master_profile, summarize_decades, tag_chart,
};
use yinyang_calendar::{CalendarEngine, SolarTermCalendar};
use yinyang_config::Config;
use yinyang_time::{CivilDateTime, SolarTimeCorrection, true_solar_time};
use yinyang_trend::{DEFAULT_COUNT, NatalInput, Trend, TrendProjector, TrendWindow};

use crate::error::YinyangError;

/// Birth data as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthInput {
    /// Wall-clock time in the UTC+8 reference zone.
    pub civil: CivilDateTime,
    pub gender: Gender,
    /// Degrees east.
    pub longitude: f64,
}

impl BirthInput {
    pub fn new(civil: CivilDateTime, gender: Gender, longitude: f64) -> Self {
        Self {
            civil,
            gender,
            longitude,
        }
    }

    /// Build from raw fields; gender code 1 is male, 0 female.
    pub fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        gender_code: i64,
        longitude: f64,
    ) -> Result<Self, YinyangError> {
        Ok(Self::new(
            CivilDateTime::new(year, month, day, hour, minute),
            Gender::from_code(gender_code)?,
            longitude,
        ))
    }
}

/// Static reading of a birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalReading {
    pub solar_time: SolarTimeCorrection,
    pub chart: Chart,
    pub ten_gods: [PillarTenGods; 4],
    pub energy: EnergyVector,
    pub pattern: Pattern,
    pub markers: [PositionMarkers; 4],
}

/// Everything computed for one birth.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub gender: Gender,
    /// 乾造 / 坤造
    pub chart_title: &'static str,
    #[serde(flatten)]
    pub natal: NatalReading,
    pub day_master: &'static DayMasterProfile,
    pub decades: Vec<DecadeSummary>,
    pub trend: Trend,
}

/// Requested trend window. A missing start is the birth year after solar
/// correction; a missing count is [`DEFAULT_COUNT`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowRequest {
    pub start_year: Option<i32>,
    pub count: Option<u32>,
}

impl WindowRequest {
    pub const fn new(start_year: Option<i32>, count: Option<u32>) -> Self {
        Self { start_year, count }
    }

    /// First year of the cycle, which is the corrected birth year.
    fn resolve(self, decades: &[Decade], fallback_year: i32) -> TrendWindow {
        let birth_year = decades
            .first()
            .and_then(|d| d.years.first())
            .map_or(fallback_year, |y| y.year);
        TrendWindow::new(
            self.start_year.unwrap_or(birth_year),
            self.count.unwrap_or(DEFAULT_COUNT),
        )
    }
}

impl From<TrendWindow> for WindowRequest {
    fn from(window: TrendWindow) -> Self {
        Self::new(Some(window.start_year), Some(window.count))
    }
}

/// The pipeline, parameterised by a calendar engine and a ruleset.
#[derive(Debug, Clone)]
pub struct Pipeline<E: CalendarEngine = SolarTermCalendar> {
    engine: E,
    ruleset: Ruleset,
}

impl Pipeline<SolarTermCalendar> {
    pub fn new(ruleset: Ruleset) -> Self {
        Self::with_engine(SolarTermCalendar::default(), ruleset)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_engine(
            SolarTermCalendar::new(config.calendar.zi_hour),
            config.ruleset,
        )
    }
}

impl Default for Pipeline<SolarTermCalendar> {
    fn default() -> Self {
        Self::new(Ruleset::default())
    }
}

impl<E: CalendarEngine> Pipeline<E> {
    pub fn with_engine(engine: E, ruleset: Ruleset) -> Self {
        Self { engine, ruleset }
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Validate the civil input and shift it to true solar time.
    pub fn correct(&self, input: &BirthInput) -> Result<SolarTimeCorrection, YinyangError> {
        input.civil.validate()?;
        Ok(true_solar_time(&input.civil, input.longitude)?)
    }

    /// Chart, energy, pattern and static markers.
    pub fn natal(&self, input: &BirthInput) -> Result<NatalReading, YinyangError> {
        let solar_time = self.correct(input)?;
        let chart = self.engine.chart(&solar_time.corrected)?;
        let energy = allocate_energy(&chart, &self.ruleset.weights);
        let pattern = classify_pattern(
            &energy,
            chart.day_master().element(),
            chart.month_branch(),
            &self.ruleset.strength,
        );
        tracing::debug!(
            engine = self.engine.name(),
            %chart,
            pattern = pattern.name(),
            "natal reading"
        );
        Ok(NatalReading {
            solar_time,
            ten_gods: chart.ten_gods(),
            markers: tag_chart(&chart),
            chart,
            energy,
            pattern,
        })
    }

    /// Decade cycles of the corrected birth moment.
    pub fn decades(
        &self,
        input: &BirthInput,
        natal: &NatalReading,
    ) -> Result<Vec<Decade>, YinyangError> {
        Ok(self
            .engine
            .decade_cycles(&natal.solar_time.corrected, &natal.chart, input.gender)?)
    }

    /// Trend over the requested window.
    ///
    /// The default start is taken after solar correction, so a rollover
    /// across New Year's Eve starts the window on the corrected year.
    pub fn trend(
        &self,
        input: &BirthInput,
        natal: &NatalReading,
        decades: &[Decade],
        window: WindowRequest,
    ) -> Result<Trend, YinyangError> {
        let window = window.resolve(decades, input.civil.year);
        let natal_input = NatalInput {
            chart: &natal.chart,
            pattern: &natal.pattern,
            gender: input.gender,
        };
        Ok(TrendProjector::from_ruleset(&self.ruleset).project(&natal_input, decades, window)?)
    }

    /// Full profile.
    pub fn profile(
        &self,
        input: &BirthInput,
        window: WindowRequest,
    ) -> Result<Profile, YinyangError> {
        let natal = self.natal(input)?;
        let decades = self.decades(input, &natal)?;
        let trend = self.trend(input, &natal, &decades, window)?;
        Ok(Profile {
            gender: input.gender,
            chart_title: input.gender.chart_title(),
            day_master: day_master_profile(natal.chart.day_master()),
            decades: summarize_decades(&decades),
            natal,
            trend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yinyang_base::{BaseError, RulesetProfile};
    use yinyang_time::TimeError;

    fn beijing(h: u32, mi: u32) -> BirthInput {
        BirthInput::from_fields(1990, 5, 20, h, mi, 1, 116.4).unwrap()
    }

    #[test]
    fn correction_keeps_hour_branch() {
        let p = Pipeline::default();
        let natal = p.natal(&beijing(4, 0)).unwrap();
        assert_eq!(natal.solar_time.corrected.hour, 3);
        assert_eq!(natal.solar_time.corrected.minute, 45);
        assert_eq!(natal.chart.to_string(), "庚午 辛巳 丙戌 庚寅");
    }

    #[test]
    fn rollover_moves_day_pillar_back() {
        // 00:05 at 100°E is 22:45 the previous day
        let input = BirthInput::from_fields(1990, 5, 20, 0, 5, 0, 100.0).unwrap();
        let natal = Pipeline::default().natal(&input).unwrap();
        assert_eq!(natal.solar_time.day_shift, -1);
        assert_eq!(natal.chart.day.to_string(), "乙酉");
        assert_eq!(natal.chart.hour.branch.chinese(), "亥");
    }

    #[test]
    fn malformed_inputs() {
        assert!(matches!(
            BirthInput::from_fields(1990, 5, 20, 4, 0, 2, 116.4),
            Err(YinyangError::Input(BaseError::InvalidGender(2)))
        ));
        let p = Pipeline::default();
        let bad_month = BirthInput::from_fields(1990, 13, 1, 4, 0, 1, 116.4).unwrap();
        assert!(matches!(
            p.natal(&bad_month),
            Err(YinyangError::Time(TimeError::InvalidMonth(13)))
        ));
        let bad_lon = BirthInput::from_fields(1990, 5, 20, 4, 0, 1, 200.0).unwrap();
        assert!(matches!(
            p.natal(&bad_lon),
            Err(YinyangError::Time(TimeError::InvalidLongitude(_)))
        ));
    }

    #[test]
    fn new_year_rollover_moves_default_window() {
        // 23:30 on 31 Dec at 135°E is 00:30 on 1 Jan
        let input = BirthInput::from_fields(1990, 12, 31, 23, 30, 1, 135.0).unwrap();
        let p = Pipeline::default();
        let profile = p.profile(&input, WindowRequest::default()).unwrap();
        let overall = profile.trend.series(yinyang_trend::Dimension::Overall);
        assert_eq!(overall.points[0].year, 1991);
        assert_eq!(overall.points.len(), 80);

        // a count without a start still starts on the corrected year
        let short = p.profile(&input, WindowRequest::new(None, Some(5))).unwrap();
        let years: Vec<i32> = short
            .trend
            .scores(yinyang_trend::Dimension::Overall)
            .map(|(year, _)| year)
            .collect();
        assert_eq!(years, vec![1991, 1992, 1993, 1994, 1995]);
    }

    #[test]
    fn explicit_start_is_kept() {
        let input = beijing(4, 0);
        let p = Pipeline::default();
        let profile = p
            .profile(&input, WindowRequest::new(Some(2000), None))
            .unwrap();
        let overall = profile.trend.series(yinyang_trend::Dimension::Overall);
        assert_eq!(overall.points[0].year, 2000);
        assert_eq!(overall.points.len(), 80);
        assert_eq!(
            WindowRequest::from(TrendWindow::new(2000, 3)),
            WindowRequest::new(Some(2000), Some(3))
        );
    }

    #[test]
    fn config_selects_profile() {
        let mut config = Config::default_config();
        config.ruleset = Ruleset::simplified();
        let p = Pipeline::from_config(&config);
        assert_eq!(p.ruleset().profile, RulesetProfile::Simplified);
        let natal = p.natal(&beijing(4, 0)).unwrap();
        assert!((natal.energy.total() - 110.0).abs() < 0.5);
    }
}
