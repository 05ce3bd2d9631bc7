//! Life dimensions scored per year.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A scored aspect of life. Overall comes first; the others derive from it
/// or, for the two family dimensions, from their own base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Overall,
    Career,
    Wealth,
    Health,
    Love,
    Parents,
    Children,
}

/// All dimensions in output order.
pub const ALL_DIMENSIONS: [Dimension; 7] = [
    Dimension::Overall,
    Dimension::Career,
    Dimension::Wealth,
    Dimension::Health,
    Dimension::Love,
    Dimension::Parents,
    Dimension::Children,
];

impl Dimension {
    /// Stable machine key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Career => "career",
            Self::Wealth => "wealth",
            Self::Health => "health",
            Self::Love => "love",
            Self::Parents => "parents",
            Self::Children => "children",
        }
    }

    /// Display name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Overall => "综合运势",
            Self::Career => "事业运",
            Self::Wealth => "财运",
            Self::Health => "健康运",
            Self::Love => "姻缘运",
            Self::Parents => "父母运",
            Self::Children => "子女运",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parents and children start from their own base score.
    pub const fn is_family(self) -> bool {
        matches!(self, Self::Parents | Self::Children)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ALL_DIMENSIONS
            .into_iter()
            .find(|d| d.key() == key)
            .ok_or_else(|| format!("unknown dimension '{s}'"))
    }
}
