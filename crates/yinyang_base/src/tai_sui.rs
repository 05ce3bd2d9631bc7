//! Tai Sui: conflict between a cycle year's branch and the birth-year branch.
//!
//! Five relations are recognised. Occupies and Clashes are positional (same
//! branch, opposite branch). Punishes, Harms and Breaks come from fixed
//! branch-pair tables. The pair tables overlap (寅巳 both punish and harm,
//! 巳申 both punish and break, self-punishment coincides with Occupies), so a
//! year can stand in several relations at once; the set is kept and the most
//! severe member is the one scored and shown.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::ganzhi::Branch;
use crate::shensha::{Marker, MarkerCategory};

/// Relation of a year branch to the birth-year branch, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TaiSuiRelation {
    /// Opposite branch (冲太岁).
    Clashes,
    /// Same branch (值太岁).
    Occupies,
    /// Punishment pair (刑太岁).
    Punishes,
    /// Harm pair (害太岁).
    Harms,
    /// Break pair (破太岁).
    Breaks,
}

/// All relations in severity order.
pub const ALL_TAI_SUI_RELATIONS: [TaiSuiRelation; 5] = [
    TaiSuiRelation::Clashes,
    TaiSuiRelation::Occupies,
    TaiSuiRelation::Punishes,
    TaiSuiRelation::Harms,
    TaiSuiRelation::Breaks,
];

use Branch::{
    Chen as CHEN, Chou as CHOU, Hai as HAI, Mao as MAO, Shen as SHEN, Si as SI, Wei as WEI,
    Wu as WU, Xu as XU, Yin as YIN, You as YOU, Zi as ZI,
};

/// Punishment pairs: 子卯, the 寅巳申 and 丑戌未 triangles, and self-punishment.
const PUNISH_PAIRS: [(Branch, Branch); 11] = [
    (ZI, MAO),
    (YIN, SI),
    (SI, SHEN),
    (SHEN, YIN),
    (CHOU, XU),
    (XU, WEI),
    (WEI, CHOU),
    (CHEN, CHEN),
    (WU, WU),
    (YOU, YOU),
    (HAI, HAI),
];

const HARM_PAIRS: [(Branch, Branch); 6] = [
    (ZI, WEI),
    (CHOU, WU),
    (YIN, SI),
    (MAO, CHEN),
    (SHEN, HAI),
    (YOU, XU),
];

const BREAK_PAIRS: [(Branch, Branch); 6] = [
    (ZI, YOU),
    (MAO, WU),
    (CHEN, CHOU),
    (WEI, XU),
    (YIN, HAI),
    (SI, SHEN),
];

fn in_pairs(pairs: &[(Branch, Branch)], a: Branch, b: Branch) -> bool {
    pairs
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

impl TaiSuiRelation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clashes => "Clashes",
            Self::Occupies => "Occupies",
            Self::Punishes => "Punishes",
            Self::Harms => "Harms",
            Self::Breaks => "Breaks",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Clashes => "冲太岁",
            Self::Occupies => "值太岁",
            Self::Punishes => "刑太岁",
            Self::Harms => "害太岁",
            Self::Breaks => "破太岁",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Clashes => 1,
            Self::Occupies => 2,
            Self::Punishes => 4,
            Self::Harms => 8,
            Self::Breaks => 16,
        }
    }

    /// Whether `year` stands in this relation to `birth`.
    pub fn holds(self, birth: Branch, year: Branch) -> bool {
        match self {
            Self::Occupies => birth == year,
            Self::Clashes => birth.clashes_with(year),
            Self::Punishes => in_pairs(&PUNISH_PAIRS, birth, year),
            Self::Harms => in_pairs(&HARM_PAIRS, birth, year),
            Self::Breaks => in_pairs(&BREAK_PAIRS, birth, year),
        }
    }

    pub const fn marker(self) -> Marker {
        let (key, name, icon, description) = match self {
            Self::Clashes => ("tai_sui_clash", "Clashes Tai Sui", "💥", "冲太岁，注意化解"),
            Self::Occupies => ("tai_sui_occupy", "Occupies Tai Sui", "🔴", "值太岁，注意化解"),
            Self::Punishes => ("tai_sui_punish", "Punishes Tai Sui", "⚔️", "刑太岁，注意化解"),
            Self::Harms => ("tai_sui_harm", "Harms Tai Sui", "🐍", "害太岁，注意化解"),
            Self::Breaks => ("tai_sui_break", "Breaks Tai Sui", "💔", "破太岁，注意化解"),
        };
        Marker {
            key,
            name,
            label: self.chinese(),
            icon,
            category: MarkerCategory::Inauspicious,
            description,
        }
    }
}

/// Set of relations between a year branch and the birth-year branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TaiSuiRelations(u8);

impl TaiSuiRelations {
    /// Relations of `year` against `birth`.
    pub fn between(birth: Branch, year: Branch) -> Self {
        let bits = ALL_TAI_SUI_RELATIONS
            .iter()
            .filter(|r| r.holds(birth, year))
            .fold(0, |acc, r| acc | r.bit());
        Self(bits)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, relation: TaiSuiRelation) -> bool {
        self.0 & relation.bit() != 0
    }

    /// Members in severity order.
    pub fn iter(self) -> impl Iterator<Item = TaiSuiRelation> {
        ALL_TAI_SUI_RELATIONS
            .into_iter()
            .filter(move |&r| self.contains(r))
    }

    /// Most severe member, the one that is scored.
    pub fn primary(self) -> Option<TaiSuiRelation> {
        self.iter().next()
    }
}

impl Serialize for TaiSuiRelations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for r in self.iter() {
            seq.serialize_element(&r)?;
        }
        seq.end()
    }
}

/// Most severe Tai Sui relation of a year, if any.
pub fn tai_sui(birth: Branch, year: Branch) -> Option<TaiSuiRelation> {
    TaiSuiRelations::between(birth, year).primary()
}
