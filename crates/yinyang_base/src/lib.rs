//! Core Four Pillars tables and classifiers.
//!
//! This crate provides:
//! - Five elements, stems, branches and the sexagenary cycle
//! - Ten-god relations to the day master
//! - Elemental energy allocation over the eight chart slots
//! - Strength classification, climate and favorable elements
//! - Shen sha marker tables and Tai Sui conflict relations
//! - Luck-cycle data types and named rulesets
//!
//! Everything here is pure computation over static tables.

pub mod chart;
pub mod cycle;
pub mod day_master;
pub mod element;
pub mod energy;
pub mod error;
pub mod ganzhi;
pub mod pattern;
pub mod ruleset;
pub mod shensha;
pub mod tai_sui;
pub mod ten_gods;

pub use chart::{
    ALL_POSITIONS, ALL_SLOTS, Chart, Pillar, PillarPosition, PillarTenGods, Slot, SlotValue,
};
pub use cycle::{Decade, DecadeSummary, Gender, YearCycle, summarize_decades};
pub use day_master::{DayMasterProfile, day_master_profile};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, FALLBACK_ELEMENT, Polarity};
pub use energy::{EnergyVector, SlotWeights, allocate_energy};
pub use error::BaseError;
pub use ganzhi::{ALL_BRANCHES, ALL_STEMS, Branch, GanZhi, Stem, element_of_symbol};
pub use pattern::{
    Classification, Climate, Pattern, StrengthPolicy, StrengthRules, apply_climate_override,
    classify_pattern, self_support,
};
pub use ruleset::{
    JitterRules, Ruleset, RulesetProfile, ScoreRange, TaiSuiPenalties, TrendRules,
};
pub use shensha::{
    CHART_RULES, Marker, MarkerCategory, MarkerKey, PositionMarkers, ShenSha, VirtueTarget,
    YEAR_RULES, heaven_virtue, moon_virtue, noble_branches, tag_chart, year_shensha,
};
pub use tai_sui::{ALL_TAI_SUI_RELATIONS, TaiSuiRelation, TaiSuiRelations, tai_sui};
pub use ten_gods::{ALL_TEN_GODS, TEN_GOD_TABLE, TenGod, TenGodFamily, ten_god};
