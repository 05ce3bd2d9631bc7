//! The four pillars and their eight stem/branch slots.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::ganzhi::{Branch, GanZhi, Stem};
use crate::ten_gods::{TenGod, ten_god};

/// Pillar position in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Year => "年",
            Self::Month => "月",
            Self::Day => "日",
            Self::Hour => "时",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }
}

/// One of the eight stem/branch slots of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Stem(PillarPosition),
    Branch(PillarPosition),
}

/// All eight slots: year stem, year branch, month stem, ... hour branch.
pub const ALL_SLOTS: [Slot; 8] = [
    Slot::Stem(PillarPosition::Year),
    Slot::Branch(PillarPosition::Year),
    Slot::Stem(PillarPosition::Month),
    Slot::Branch(PillarPosition::Month),
    Slot::Stem(PillarPosition::Day),
    Slot::Branch(PillarPosition::Day),
    Slot::Stem(PillarPosition::Hour),
    Slot::Branch(PillarPosition::Hour),
];

/// A pillar: a stem-branch pair at a fixed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub position: PillarPosition,
    pub ganzhi: GanZhi,
}

/// Four pillars; the day stem is the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chart {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: GanZhi,
}

impl Chart {
    pub const fn new(year: GanZhi, month: GanZhi, day: GanZhi, hour: GanZhi) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Pair at a position.
    pub const fn ganzhi(&self, position: PillarPosition) -> GanZhi {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// The four pillars in chart order.
    pub fn pillars(&self) -> [Pillar; 4] {
        ALL_POSITIONS.map(|position| Pillar {
            position,
            ganzhi: self.ganzhi(position),
        })
    }

    /// The day pillar's stem.
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// Birth-year branch, the key of most branch-driven markers.
    pub const fn year_branch(&self) -> Branch {
        self.year.branch
    }

    pub const fn month_branch(&self) -> Branch {
        self.month.branch
    }

    pub const fn hour_branch(&self) -> Branch {
        self.hour.branch
    }

    /// Stem of a stem slot or the branch of a branch slot, as a symbol pair.
    pub const fn slot(&self, slot: Slot) -> SlotValue {
        match slot {
            Slot::Stem(p) => SlotValue::Stem(self.ganzhi(p).stem),
            Slot::Branch(p) => SlotValue::Branch(self.ganzhi(p).branch),
        }
    }

    /// Ten gods of every pillar relative to the day master.
    ///
    /// Branches use their main hidden stem; the day stem itself is left
    /// unset since it is the reference.
    pub fn ten_gods(&self) -> [PillarTenGods; 4] {
        let dm = self.day_master();
        ALL_POSITIONS.map(|position| {
            let gz = self.ganzhi(position);
            PillarTenGods {
                position,
                stem: match position {
                    PillarPosition::Day => None,
                    _ => Some(ten_god(dm, gz.stem)),
                },
                branch: ten_god(dm, gz.branch.main_stem()),
            }
        })
    }
}

/// Content of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotValue {
    Stem(Stem),
    Branch(Branch),
}

/// Natal ten gods of one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarTenGods {
    pub position: PillarPosition,
    /// `None` on the day pillar (the day master).
    pub stem: Option<TenGod>,
    pub branch: TenGod,
}

impl Display for Chart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

impl FromStr for Chart {
    type Err = BaseError;

    /// Parse four whitespace-separated pairs: year, month, day, hour.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pairs: Vec<&str> = s.split_whitespace().collect();
        let [y, m, d, h] = pairs.as_slice() else {
            return Err(BaseError::InvalidPillars(s.to_string()));
        };
        Ok(Self::new(y.parse()?, m.parse()?, d.parse()?, h.parse()?))
    }
}
