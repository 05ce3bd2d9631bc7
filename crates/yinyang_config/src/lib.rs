//! Configuration management for the yinyang pipeline.
//!
//! A TOML file names a built-in ruleset profile and may patch any of its
//! parameters. Resolution order:
//! 1. built-in profile (`profile` key, default `classic`)
//! 2. `YINYANG_PROFILE` environment variable, replacing the profile name
//! 3. `[weights]`, `[strength]` and `[trend]` patches from the file
//!
//! The resolved ruleset is validated before it is handed out.

pub mod error;

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use yinyang_base::{
    Ruleset, RulesetProfile, ScoreRange, SlotWeights, StrengthPolicy, StrengthRules,
    TaiSuiPenalties, TrendRules,
};
use yinyang_calendar::ZiHourConvention;

pub use error::ConfigError;

/// Environment variable overriding the profile name.
pub const PROFILE_ENV: &str = "YINYANG_PROFILE";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter level; `RUST_LOG` takes precedence at runtime.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    pub zi_hour: ZiHourConvention,
}

/// Optional overrides of `SlotWeights`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeightsPatch {
    pub year_stem: Option<f64>,
    pub year_branch: Option<f64>,
    pub month_stem: Option<f64>,
    pub month_branch: Option<f64>,
    pub day_stem: Option<f64>,
    pub day_branch: Option<f64>,
    pub hour_stem: Option<f64>,
    pub hour_branch: Option<f64>,
}

/// Optional overrides of `StrengthRules`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrengthPatch {
    pub policy: Option<StrengthPolicy>,
    pub dominant_at: Option<f64>,
    pub overwhelmed_at: Option<f64>,
    pub strong_at: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct JitterPatch {
    pub enabled: Option<bool>,
    pub seed: Option<u64>,
    pub overall_amplitude: Option<i32>,
    pub dimension_amplitude: Option<i32>,
    pub family_amplitude: Option<i32>,
}

/// Optional overrides of `TrendRules`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrendPatch {
    pub base_score: Option<i32>,
    pub stem_favorable: Option<i32>,
    pub stem_unfavorable: Option<i32>,
    pub branch_favorable: Option<i32>,
    pub branch_unfavorable: Option<i32>,
    pub climate_relief: Option<i32>,
    pub overall_range: Option<ScoreRange>,
    pub tai_sui: Option<TaiSuiPenalties>,
    pub dimension_range: Option<ScoreRange>,
    pub family_base: Option<i32>,
    pub family_range: Option<ScoreRange>,
    pub jitter: JitterPatch,
}

/// The file as written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub profile: RulesetProfile,
    pub logging: LoggingConfig,
    pub calendar: CalendarConfig,
    pub weights: WeightsPatch,
    pub strength: StrengthPatch,
    pub trend: TrendPatch,
}

/// Resolved, validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub logging: LoggingConfig,
    pub calendar: CalendarConfig,
    pub ruleset: Ruleset,
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

impl WeightsPatch {
    pub fn apply(&self, w: &mut SlotWeights) {
        set(&mut w.year_stem, self.year_stem);
        set(&mut w.year_branch, self.year_branch);
        set(&mut w.month_stem, self.month_stem);
        set(&mut w.month_branch, self.month_branch);
        set(&mut w.day_stem, self.day_stem);
        set(&mut w.day_branch, self.day_branch);
        set(&mut w.hour_stem, self.hour_stem);
        set(&mut w.hour_branch, self.hour_branch);
    }
}

impl StrengthPatch {
    pub fn apply(&self, s: &mut StrengthRules) {
        set(&mut s.policy, self.policy);
        set(&mut s.dominant_at, self.dominant_at);
        set(&mut s.overwhelmed_at, self.overwhelmed_at);
        set(&mut s.strong_at, self.strong_at);
    }
}

impl TrendPatch {
    pub fn apply(&self, t: &mut TrendRules) {
        set(&mut t.base_score, self.base_score);
        set(&mut t.stem_favorable, self.stem_favorable);
        set(&mut t.stem_unfavorable, self.stem_unfavorable);
        set(&mut t.branch_favorable, self.branch_favorable);
        set(&mut t.branch_unfavorable, self.branch_unfavorable);
        set(&mut t.climate_relief, self.climate_relief);
        set(&mut t.overall_range, self.overall_range);
        set(&mut t.tai_sui, self.tai_sui);
        set(&mut t.dimension_range, self.dimension_range);
        set(&mut t.family_base, self.family_base);
        set(&mut t.family_range, self.family_range);

        let j = &mut t.jitter;
        set(&mut j.enabled, self.jitter.enabled);
        set(&mut j.seed, self.jitter.seed);
        set(&mut j.overall_amplitude, self.jitter.overall_amplitude);
        set(&mut j.dimension_amplitude, self.jitter.dimension_amplitude);
        set(&mut j.family_amplitude, self.jitter.family_amplitude);
    }
}

impl ConfigFile {
    /// Parse TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Build and validate the ruleset, optionally replacing the profile name.
    pub fn resolve(&self, profile_override: Option<RulesetProfile>) -> Result<Config, ConfigError> {
        let profile = profile_override.unwrap_or(self.profile);
        let mut ruleset = Ruleset::for_profile(profile);
        self.weights.apply(&mut ruleset.weights);
        self.strength.apply(&mut ruleset.strength);
        self.trend.apply(&mut ruleset.trend);
        ruleset.validate()?;

        let level = self.logging.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::LogLevel(self.logging.level.clone()));
        }

        tracing::debug!(profile = %profile, "config resolved");
        Ok(Config {
            logging: LoggingConfig { level },
            calendar: self.calendar,
            ruleset,
        })
    }
}

/// Profile named by `YINYANG_PROFILE`, if set.
pub fn profile_from_env() -> Result<Option<RulesetProfile>, ConfigError> {
    match std::env::var(PROFILE_ENV) {
        Ok(name) if !name.trim().is_empty() => Ok(Some(RulesetProfile::from_str(&name)?)),
        _ => Ok(None),
    }
}

impl Config {
    /// Load from an optional file, then apply the environment override.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => ConfigFile::from_file(p)?,
            None => ConfigFile::default(),
        };
        file.resolve(profile_from_env()?)
    }

    /// Built-in defaults: classic profile, info logging.
    pub fn default_config() -> Self {
        Self {
            logging: LoggingConfig::default(),
            calendar: CalendarConfig::default(),
            ruleset: Ruleset::classic(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
