//! Gender and the decade / year luck cycles.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::ganzhi::GanZhi;

/// Subject gender; the wire code is 1 = male, 0 = female.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn from_code(code: i64) -> Result<Self, BaseError> {
        match code {
            0 => Ok(Self::Female),
            1 => Ok(Self::Male),
            other => Err(BaseError::InvalidGender(other)),
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Female => 0,
            Self::Male => 1,
        }
    }

    /// Traditional chart title: 乾造 (male) / 坤造 (female).
    pub const fn chart_title(self) -> &'static str {
        match self {
            Self::Female => "坤造",
            Self::Male => "乾造",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Female => "female",
            Self::Male => "male",
        })
    }
}

/// One calendar year of a luck cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearCycle {
    pub year: i32,
    pub ganzhi: GanZhi,
}

/// A decade (ten-year luck period) and its years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decade {
    /// 0 for the years before the first luck pillar starts.
    pub index: u32,
    /// Luck pillar; `None` for decade 0.
    pub ganzhi: Option<GanZhi>,
    pub start_year: i32,
    pub end_year: i32,
    /// Nominal (East Asian) age in the start year.
    pub start_age: i32,
    /// Years in chronological order.
    pub years: Vec<YearCycle>,
}

/// Listing entry for a luck pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecadeSummary {
    pub index: u32,
    pub ganzhi: GanZhi,
    pub start_year: i32,
    pub end_year: i32,
    pub start_age: i32,
}

/// Luck pillars for display; the pre-luck decade 0 is omitted.
pub fn summarize_decades(decades: &[Decade]) -> Vec<DecadeSummary> {
    decades
        .iter()
        .filter_map(|d| {
            d.ganzhi.map(|ganzhi| DecadeSummary {
                index: d.index,
                ganzhi,
                start_year: d.start_year,
                end_year: d.end_year,
                start_age: d.start_age,
            })
        })
        .collect()
}
