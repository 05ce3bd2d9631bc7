//! Named rule sets: every numeric parameter of the scoring pipeline.
//!
//! Two profiles exist. `classic` uses the four-tier classification and
//! leaves the day stem out of the energy count; `simplified` uses the
//! two-tier classification and weighs the day stem at 10. Trend rules are
//! shared by both.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::energy::SlotWeights;
use crate::error::BaseError;
use crate::pattern::{StrengthPolicy, StrengthRules};
use crate::tai_sui::TaiSuiRelation;

/// Built-in profile name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulesetProfile {
    #[default]
    Classic,
    Simplified,
}

impl RulesetProfile {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Simplified => "simplified",
        }
    }
}

impl Display for RulesetProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RulesetProfile {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "simplified" => Ok(Self::Simplified),
            _ => Err(BaseError::UnknownProfile(s.to_string())),
        }
    }
}

/// Inclusive integer score bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: i32,
    pub max: i32,
}

impl ScoreRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub const fn clamp(self, score: i32) -> i32 {
        if score < self.min {
            self.min
        } else if score > self.max {
            self.max
        } else {
            score
        }
    }

    pub const fn contains(self, score: i32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// Tai Sui penalties, subtracted from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaiSuiPenalties {
    pub clashes: i32,
    pub occupies: i32,
    /// Punishes, Harms and Breaks.
    pub minor: i32,
}

impl TaiSuiPenalties {
    pub const fn penalty(&self, relation: TaiSuiRelation) -> i32 {
        match relation {
            TaiSuiRelation::Clashes => self.clashes,
            TaiSuiRelation::Occupies => self.occupies,
            TaiSuiRelation::Punishes | TaiSuiRelation::Harms | TaiSuiRelation::Breaks => {
                self.minor
            }
        }
    }
}

/// Seeded smoothing noise. Amplitude `a` draws from `-a..a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JitterRules {
    pub enabled: bool,
    pub seed: u64,
    pub overall_amplitude: i32,
    /// Career, wealth, health, love.
    pub dimension_amplitude: i32,
    /// Parents, children.
    pub family_amplitude: i32,
}

impl JitterRules {
    pub const DEFAULT: Self = Self {
        enabled: true,
        seed: 0,
        overall_amplitude: 5,
        dimension_amplitude: 4,
        family_amplitude: 3,
    };

    pub const DISABLED: Self = Self {
        enabled: false,
        ..Self::DEFAULT
    };
}

/// Year-by-year trend scoring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRules {
    pub base_score: i32,
    /// Year stem element favorable.
    pub stem_favorable: i32,
    /// Year stem element overcomes the day master (subtracted).
    pub stem_unfavorable: i32,
    pub branch_favorable: i32,
    pub branch_unfavorable: i32,
    /// Fire branch in a cold chart, Water branch in a dry chart.
    pub climate_relief: i32,
    pub overall_range: ScoreRange,
    pub tai_sui: TaiSuiPenalties,
    /// Career, wealth, health, love.
    pub dimension_range: ScoreRange,
    /// Starting score of parents and children.
    pub family_base: i32,
    pub family_range: ScoreRange,
    pub jitter: JitterRules,
}

impl TrendRules {
    pub const DEFAULT: Self = Self {
        base_score: 50,
        stem_favorable: 10,
        stem_unfavorable: 5,
        branch_favorable: 20,
        branch_unfavorable: 10,
        climate_relief: 15,
        overall_range: ScoreRange::new(15, 95),
        tai_sui: TaiSuiPenalties {
            clashes: 15,
            occupies: 10,
            minor: 5,
        },
        dimension_range: ScoreRange::new(15, 95),
        family_base: 60,
        family_range: ScoreRange::new(20, 95),
        jitter: JitterRules::DEFAULT,
    };
}

impl Default for TrendRules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Every tunable of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ruleset {
    pub profile: RulesetProfile,
    pub weights: SlotWeights,
    pub strength: StrengthRules,
    pub trend: TrendRules,
}

impl Ruleset {
    /// Four-tier classification, day stem excluded from energy.
    pub const fn classic() -> Self {
        Self {
            profile: RulesetProfile::Classic,
            weights: SlotWeights::CLASSIC,
            strength: StrengthRules::FOUR_TIER,
            trend: TrendRules::DEFAULT,
        }
    }

    /// Two-tier classification, day stem weighted 10.
    pub const fn simplified() -> Self {
        Self {
            profile: RulesetProfile::Simplified,
            weights: SlotWeights::SIMPLIFIED,
            strength: StrengthRules::TWO_TIER,
            trend: TrendRules::DEFAULT,
        }
    }

    pub const fn for_profile(profile: RulesetProfile) -> Self {
        match profile {
            RulesetProfile::Classic => Self::classic(),
            RulesetProfile::Simplified => Self::simplified(),
        }
    }

    /// Same ruleset with jitter turned off.
    pub const fn without_jitter(mut self) -> Self {
        self.trend.jitter.enabled = false;
        self
    }

    /// Check parameter consistency.
    pub fn validate(&self) -> Result<(), BaseError> {
        let invalid = |msg: String| Err(BaseError::InvalidRuleset(msg));

        let w = &self.weights;
        for (name, v) in [
            ("year_stem", w.year_stem),
            ("year_branch", w.year_branch),
            ("month_stem", w.month_stem),
            ("month_branch", w.month_branch),
            ("day_stem", w.day_stem),
            ("day_branch", w.day_branch),
            ("hour_stem", w.hour_stem),
            ("hour_branch", w.hour_branch),
        ] {
            if !v.is_finite() || v < 0.0 {
                return invalid(format!("weight {name} must be finite and non-negative, got {v}"));
            }
        }
        if w.month_branch <= 0.0 {
            return invalid("weight month_branch must be positive".to_string());
        }

        let s = &self.strength;
        if ![s.dominant_at, s.overwhelmed_at, s.strong_at]
            .iter()
            .all(|t| t.is_finite())
        {
            return invalid("strength thresholds must be finite".to_string());
        }
        if s.policy == StrengthPolicy::FourTier
            && !(s.overwhelmed_at < s.strong_at && s.strong_at < s.dominant_at)
        {
            return invalid(format!(
                "four-tier thresholds must satisfy overwhelmed_at < strong_at < dominant_at, got {} / {} / {}",
                s.overwhelmed_at, s.strong_at, s.dominant_at
            ));
        }

        let t = &self.trend;
        for (name, r) in [
            ("overall_range", t.overall_range),
            ("dimension_range", t.dimension_range),
            ("family_range", t.family_range),
        ] {
            if r.min > r.max {
                return invalid(format!("{name} is inverted: {} > {}", r.min, r.max));
            }
        }
        let j = &t.jitter;
        if j.overall_amplitude < 0 || j.dimension_amplitude < 0 || j.family_amplitude < 0 {
            return invalid("jitter amplitudes must be non-negative".to_string());
        }
        Ok(())
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::classic()
    }
}
