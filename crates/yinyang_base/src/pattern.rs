//! Body-strength classification, climate, and favorable-element selection.
//!
//! Support for the day master is the energy of its own element plus the
//! energy of the element that generates it. Thresholds map support to a
//! classification; the classification picks the favorable elements; a
//! cold or dry month then forces its remedy element to the front.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::energy::EnergyVector;
use crate::ganzhi::Branch;

/// Classification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthPolicy {
    /// Dominant / Overwhelmed / Balanced-Strong / Balanced-Weak.
    FourTier,
    /// Strong / weak only (reported as the two balanced tiers).
    TwoTier,
}

/// Support thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthRules {
    pub policy: StrengthPolicy,
    /// Support at or above this is Dominant (four-tier only).
    pub dominant_at: f64,
    /// Support at or below this is Overwhelmed (four-tier only).
    pub overwhelmed_at: f64,
    /// Support at or above this is strong.
    pub strong_at: f64,
}

impl StrengthRules {
    pub const FOUR_TIER: Self = Self {
        policy: StrengthPolicy::FourTier,
        dominant_at: 80.0,
        overwhelmed_at: 20.0,
        strong_at: 45.0,
    };

    pub const TWO_TIER: Self = Self {
        policy: StrengthPolicy::TwoTier,
        ..Self::FOUR_TIER
    };

    /// Classify a support value.
    pub fn classify(&self, support: f64) -> Classification {
        match self.policy {
            StrengthPolicy::FourTier if support >= self.dominant_at => Classification::Dominant,
            StrengthPolicy::FourTier if support <= self.overwhelmed_at => {
                Classification::Overwhelmed
            }
            _ if support >= self.strong_at => Classification::BalancedStrong,
            _ => Classification::BalancedWeak,
        }
    }
}

impl Default for StrengthRules {
    fn default() -> Self {
        Self::FOUR_TIER
    }
}

/// Strength classification, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Classification {
    Overwhelmed,
    BalancedWeak,
    BalancedStrong,
    Dominant,
}

impl Classification {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Overwhelmed => "Overwhelmed",
            Self::BalancedWeak => "Balanced-Weak",
            Self::BalancedStrong => "Balanced-Strong",
            Self::Dominant => "Dominant",
        }
    }

    /// Traditional pattern name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overwhelmed => "从弱格",
            Self::BalancedWeak => "正格(身弱)",
            Self::BalancedStrong => "正格(身强)",
            Self::Dominant => "专旺格",
        }
    }

    pub const fn is_strong(self) -> bool {
        matches!(self, Self::BalancedStrong | Self::Dominant)
    }

    /// Favorable elements for a day master element, priority first.
    pub fn favorable(self, me: Element) -> Vec<Element> {
        match self {
            // follow the flow
            Self::Dominant => vec![me.generated_by(), me, me.generates()],
            Self::Overwhelmed => vec![me.overcome_by(), me.overcomes(), me.generates()],
            // restrain, drain, consume
            Self::BalancedStrong => vec![me.overcome_by(), me.generates(), me.overcomes()],
            // reinforce
            Self::BalancedWeak => vec![me.generated_by(), me],
        }
    }
}

/// Seasonal climate of the month branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Climate {
    Cold,
    Dry,
    Neutral,
}

impl Climate {
    /// Winter months (亥子丑) are cold, summer months (巳午未) dry.
    pub const fn of_month(month_branch: Branch) -> Self {
        match month_branch {
            Branch::Hai | Branch::Zi | Branch::Chou => Self::Cold,
            Branch::Si | Branch::Wu | Branch::Wei => Self::Dry,
            _ => Self::Neutral,
        }
    }

    /// Element that relieves the climate, if any.
    pub const fn remedy(self) -> Option<Element> {
        match self {
            Self::Cold => Some(Element::Fire),
            Self::Dry => Some(Element::Water),
            Self::Neutral => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Dry => "Dry",
            Self::Neutral => "Neutral",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Cold => "寒",
            Self::Dry => "燥",
            Self::Neutral => "平",
        }
    }
}

/// Result of pattern classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    pub classification: Classification,
    pub strong: bool,
    /// Own element plus generating element energy.
    pub self_support: f64,
    pub climate: Climate,
    /// Favorable elements, priority first, no duplicates.
    pub favorable: Vec<Element>,
}

impl Pattern {
    /// Set membership; trend scoring never depends on list order.
    pub fn is_favorable(&self, element: Element) -> bool {
        self.favorable.contains(&element)
    }

    pub fn name(&self) -> &'static str {
        self.classification.label()
    }
}

/// Support for the day master: own element plus its generator.
pub fn self_support(energy: &EnergyVector, me: Element) -> f64 {
    energy.get(me) + energy.get(me.generated_by())
}

/// Prepend the climate remedy when it is not already favorable.
pub fn apply_climate_override(favorable: &mut Vec<Element>, climate: Climate) {
    if let Some(remedy) = climate.remedy() {
        if !favorable.contains(&remedy) {
            favorable.insert(0, remedy);
        }
    }
}

/// Classify strength, climate and favorable elements.
pub fn classify_pattern(
    energy: &EnergyVector,
    day_master: Element,
    month_branch: Branch,
    rules: &StrengthRules,
) -> Pattern {
    let support = self_support(energy, day_master);
    let classification = rules.classify(support);
    let climate = Climate::of_month(month_branch);
    let mut favorable = classification.favorable(day_master);
    apply_climate_override(&mut favorable, climate);

    tracing::debug!(
        support,
        classification = classification.name(),
        climate = climate.name(),
        favorable = ?favorable,
        "pattern classified"
    );

    Pattern {
        classification,
        strong: classification.is_strong(),
        self_support: support,
        climate,
        favorable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_strong_wood() {
        let energy = EnergyVector::from_scores([30.0, 20.0, 15.0, 10.0, 25.0]);
        let p = classify_pattern(&energy, Element::Wood, Branch::Yin, &StrengthRules::FOUR_TIER);
        assert_eq!(p.self_support, 55.0);
        assert_eq!(p.classification, Classification::BalancedStrong);
        assert!(p.strong);
        assert_eq!(p.climate, Climate::Neutral);
        assert_eq!(p.favorable, vec![Element::Metal, Element::Fire, Element::Earth]);
    }

    #[test]
    fn four_tier_thresholds() {
        let r = StrengthRules::FOUR_TIER;
        assert_eq!(r.classify(80.0), Classification::Dominant);
        assert_eq!(r.classify(79.9), Classification::BalancedStrong);
        assert_eq!(r.classify(45.0), Classification::BalancedStrong);
        assert_eq!(r.classify(44.9), Classification::BalancedWeak);
        assert_eq!(r.classify(20.1), Classification::BalancedWeak);
        assert_eq!(r.classify(20.0), Classification::Overwhelmed);
    }

    #[test]
    fn two_tier_has_no_extremes() {
        let r = StrengthRules::TWO_TIER;
        assert_eq!(r.classify(95.0), Classification::BalancedStrong);
        assert_eq!(r.classify(5.0), Classification::BalancedWeak);
    }

    #[test]
    fn favorable_lists() {
        use Element::*;
        assert_eq!(Classification::Dominant.favorable(Fire), vec![Wood, Fire, Earth]);
        assert_eq!(Classification::Overwhelmed.favorable(Fire), vec![Water, Metal, Earth]);
        assert_eq!(Classification::BalancedWeak.favorable(Fire), vec![Wood, Fire]);
    }

    #[test]
    fn cold_month_prepends_fire() {
        let energy = EnergyVector::from_scores([30.0, 20.0, 15.0, 10.0, 25.0]);
        let p = classify_pattern(&energy, Element::Wood, Branch::Zi, &StrengthRules::FOUR_TIER);
        assert_eq!(p.climate, Climate::Cold);
        // Fire is already favorable: no duplicate.
        assert_eq!(p.favorable, vec![Element::Metal, Element::Fire, Element::Earth]);

        let weak = EnergyVector::from_scores([15.0, 20.0, 30.0, 25.0, 10.0]);
        let p = classify_pattern(&weak, Element::Wood, Branch::Zi, &StrengthRules::FOUR_TIER);
        assert_eq!(p.classification, Classification::BalancedWeak);
        assert_eq!(p.favorable, vec![Element::Fire, Element::Water, Element::Wood]);
    }

    #[test]
    fn dry_month_prepends_water() {
        let mut fav = vec![Element::Wood, Element::Fire];
        apply_climate_override(&mut fav, Climate::Dry);
        assert_eq!(fav, vec![Element::Water, Element::Wood, Element::Fire]);
        apply_climate_override(&mut fav, Climate::Dry);
        assert_eq!(fav.len(), 3);
    }

    #[test]
    fn climate_of_months() {
        assert_eq!(Climate::of_month(Branch::Chou), Climate::Cold);
        assert_eq!(Climate::of_month(Branch::Wei), Climate::Dry);
        assert_eq!(Climate::of_month(Branch::Shen), Climate::Neutral);
    }
}
