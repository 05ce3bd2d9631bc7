use yinyang_base::{Chart, Element, element_of_symbol};
use yinyang_config::Config;
use yinyang_time::{
    CivilDateTime, City, REFERENCE_MERIDIAN_DEG, SolarTimeCorrection, find_city, true_solar_time,
};
use yinyang_trend::{Trend, TrendWindow};

use crate::error::YinyangError;
use crate::pipeline::{BirthInput, NatalReading, Pipeline, Profile, WindowRequest};

/// Longitude of the reference meridian, used when no city is given.
pub const DEFAULT_LONGITUDE: f64 = REFERENCE_MERIDIAN_DEG;

/// Full profile with the built-in classic ruleset.
///
/// `gender_code` is 1 for male and 0 for female.
pub fn compute_profile(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    gender_code: i64,
    longitude: f64,
) -> Result<Profile, YinyangError> {
    let input = BirthInput::from_fields(year, month, day, hour, minute, gender_code, longitude)?;
    Pipeline::default().profile(&input, WindowRequest::default())
}

/// Full profile under a resolved configuration.
pub fn compute_profile_with(
    config: &Config,
    input: &BirthInput,
    window: WindowRequest,
) -> Result<Profile, YinyangError> {
    Pipeline::from_config(config).profile(input, window)
}

/// Four pillars only.
pub fn chart(input: &BirthInput) -> Result<Chart, YinyangError> {
    Ok(Pipeline::default().natal(input)?.chart)
}

/// Chart, energy, pattern and markers.
pub fn natal(input: &BirthInput) -> Result<NatalReading, YinyangError> {
    Pipeline::default().natal(input)
}

/// Trend over an explicit window.
pub fn trend(input: &BirthInput, window: TrendWindow) -> Result<Trend, YinyangError> {
    let pipeline = Pipeline::default();
    let natal = pipeline.natal(input)?;
    let decades = pipeline.decades(input, &natal)?;
    pipeline.trend(input, &natal, &decades, window.into())
}

/// True solar time of a civil moment.
pub fn solar_time(
    civil: &CivilDateTime,
    longitude: f64,
) -> Result<SolarTimeCorrection, YinyangError> {
    civil.validate()?;
    Ok(true_solar_time(civil, longitude)?)
}

/// Element of a stem or branch symbol; unknown symbols fall back to earth.
pub fn element_of(symbol: &str) -> Element {
    element_of_symbol(symbol)
}

/// Longitude of a listed city, or the reference meridian when unknown.
pub fn city_longitude(province: Option<&str>, name: &str) -> f64 {
    match find_city(province, name) {
        Some(City { longitude_deg, .. }) => *longitude_deg,
        None => {
            tracing::warn!(
                city = name,
                longitude = DEFAULT_LONGITUDE,
                "city not found, using reference meridian"
            );
            DEFAULT_LONGITUDE
        }
    }
}
