//! Elemental energy allocation over the eight chart slots.
//!
//! Stems give their full slot weight to their own element. Branches split
//! their weight across the hidden-stem distribution. Each element total is
//! rounded to one decimal place.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::chart::{ALL_SLOTS, Chart, PillarPosition, Slot, SlotValue};
use crate::element::{ALL_ELEMENTS, Element};

/// Fixed weight of each slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotWeights {
    pub year_stem: f64,
    pub year_branch: f64,
    pub month_stem: f64,
    /// Command of the month; dominant.
    pub month_branch: f64,
    /// Zero means the self does not score itself.
    pub day_stem: f64,
    pub day_branch: f64,
    pub hour_stem: f64,
    pub hour_branch: f64,
}

impl SlotWeights {
    /// Four-tier model weights (day stem excluded); totals 100.
    pub const CLASSIC: Self = Self {
        year_stem: 7.0,
        year_branch: 7.0,
        month_stem: 10.0,
        month_branch: 40.0,
        day_stem: 0.0,
        day_branch: 16.0,
        hour_stem: 8.0,
        hour_branch: 12.0,
    };

    /// Simplified model weights (day stem included); totals 110.
    pub const SIMPLIFIED: Self = Self {
        day_stem: 10.0,
        ..Self::CLASSIC
    };

    pub const fn weight(&self, slot: Slot) -> f64 {
        match slot {
            Slot::Stem(PillarPosition::Year) => self.year_stem,
            Slot::Branch(PillarPosition::Year) => self.year_branch,
            Slot::Stem(PillarPosition::Month) => self.month_stem,
            Slot::Branch(PillarPosition::Month) => self.month_branch,
            Slot::Stem(PillarPosition::Day) => self.day_stem,
            Slot::Branch(PillarPosition::Day) => self.day_branch,
            Slot::Stem(PillarPosition::Hour) => self.hour_stem,
            Slot::Branch(PillarPosition::Hour) => self.hour_branch,
        }
    }

    /// Sum of all slot weights.
    pub fn total(&self) -> f64 {
        ALL_SLOTS.iter().map(|&s| self.weight(s)).sum()
    }
}

impl Default for SlotWeights {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Energy score per element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyVector {
    scores: [f64; 5],
}

impl EnergyVector {
    /// Build from scores in element order (Wood, Fire, Earth, Metal, Water).
    pub const fn from_scores(scores: [f64; 5]) -> Self {
        Self { scores }
    }

    pub const fn get(&self, element: Element) -> f64 {
        self.scores[element.index() as usize]
    }

    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// `(element, score)` pairs in element order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.get(e)))
    }

    fn add(&mut self, element: Element, amount: f64) {
        self.scores[element.index() as usize] += amount;
    }

    fn rounded(mut self) -> Self {
        for s in &mut self.scores {
            *s = (*s * 10.0).round() / 10.0;
        }
        self
    }
}

impl Serialize for EnergyVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (e, s) in self.iter() {
            map.serialize_entry(e.name(), &s)?;
        }
        map.end()
    }
}

/// Distribute slot weights over the five elements.
///
/// A slot with zero weight is skipped entirely.
pub fn allocate_energy(chart: &Chart, weights: &SlotWeights) -> EnergyVector {
    let mut energy = EnergyVector::default();
    for slot in ALL_SLOTS {
        let weight = weights.weight(slot);
        if weight == 0.0 {
            continue;
        }
        match chart.slot(slot) {
            SlotValue::Stem(stem) => energy.add(stem.element(), weight),
            SlotValue::Branch(branch) => {
                for &(hidden, ratio) in branch.hidden_stems() {
                    energy.add(hidden.element(), weight * ratio);
                }
            }
        }
    }
    let energy = energy.rounded();
    tracing::debug!(
        wood = energy.get(Element::Wood),
        fire = energy.get(Element::Fire),
        earth = energy.get(Element::Earth),
        metal = energy.get(Element::Metal),
        water = energy.get(Element::Water),
        total = energy.total(),
        "elemental energy"
    );
    energy
}
