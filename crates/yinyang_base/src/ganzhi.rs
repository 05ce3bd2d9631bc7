//! Heavenly stems, earthly branches and the sexagenary (ganzhi) cycle.
//!
//! Stems carry an element and a polarity. Branches carry a primary element
//! and a hidden-stem distribution whose ratios sum to one. A stem-branch pair
//! of equal parity names one of the sixty cycle positions; epoch 甲子 = 0.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, FALLBACK_ELEMENT, Polarity};
use crate::error::BaseError;

/// The ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in cycle order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_CHARS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Chinese character.
    pub const fn chinese(self) -> &'static str {
        STEM_CHARS[self.index() as usize]
    }

    /// 0-based index into ALL_STEMS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a cycle index; wraps modulo 10 in both directions.
    pub const fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Element: two consecutive stems per element, Wood first.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Even-indexed stems are Yang.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Parse a single Chinese character or a pinyin name (case-insensitive).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let s = symbol.trim();
        ALL_STEMS
            .into_iter()
            .find(|st| st.chinese() == s || st.name().eq_ignore_ascii_case(s))
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

impl FromStr for Stem {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| BaseError::UnknownStem(s.to_string()))
    }
}

/// The twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in cycle order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_CHARS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Hidden stems of each branch with their energy ratios, main stem first.
const HIDDEN_STEMS: [&[(Stem, f64)]; 12] = [
    &[(Stem::Gui, 1.0)],
    &[(Stem::Ji, 0.6), (Stem::Gui, 0.3), (Stem::Xin, 0.1)],
    &[(Stem::Jia, 0.6), (Stem::Bing, 0.3), (Stem::Wu, 0.1)],
    &[(Stem::Yi, 1.0)],
    &[(Stem::Wu, 0.6), (Stem::Yi, 0.3), (Stem::Gui, 0.1)],
    &[(Stem::Bing, 0.6), (Stem::Wu, 0.3), (Stem::Geng, 0.1)],
    &[(Stem::Ding, 0.7), (Stem::Ji, 0.3)],
    &[(Stem::Ji, 0.6), (Stem::Ding, 0.3), (Stem::Yi, 0.1)],
    &[(Stem::Geng, 0.6), (Stem::Ren, 0.3), (Stem::Wu, 0.1)],
    &[(Stem::Xin, 1.0)],
    &[(Stem::Wu, 0.6), (Stem::Xin, 0.3), (Stem::Ding, 0.1)],
    &[(Stem::Ren, 0.7), (Stem::Jia, 0.3)],
];

impl Branch {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese character.
    pub const fn chinese(self) -> &'static str {
        BRANCH_CHARS[self.index() as usize]
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// 0-based index into ALL_BRANCHES.
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a cycle index; wraps modulo 12 in both directions.
    pub const fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Primary element.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
        }
    }

    /// Hidden stems with their ratios; the ratios sum to 1.
    pub const fn hidden_stems(self) -> &'static [(Stem, f64)] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// Main hidden stem (benqi), the largest share.
    pub const fn main_stem(self) -> Stem {
        self.hidden_stems()[0].0
    }

    /// The opposing branch six places away.
    pub const fn clash(self) -> Self {
        Self::from_index(self.index() as i64 + 6)
    }

    /// Whether two branches clash.
    pub const fn clashes_with(self, other: Branch) -> bool {
        self.clash().index() == other.index()
    }

    /// Parse a single Chinese character or a pinyin name (case-insensitive).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let s = symbol.trim();
        ALL_BRANCHES
            .into_iter()
            .find(|b| b.chinese() == s || b.name().eq_ignore_ascii_case(s))
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

impl FromStr for Branch {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| BaseError::UnknownBranch(s.to_string()))
    }
}

/// Element of a stem or branch symbol, falling back to Earth when unknown.
///
/// The fallback keeps downstream scoring defined; it is logged at warn level.
pub fn element_of_symbol(symbol: &str) -> Element {
    if let Some(stem) = Stem::from_symbol(symbol) {
        return stem.element();
    }
    if let Some(branch) = Branch::from_symbol(symbol) {
        return branch.element();
    }
    tracing::warn!(
        symbol,
        fallback = FALLBACK_ELEMENT.name(),
        "unknown stem/branch symbol"
    );
    FALLBACK_ELEMENT
}

/// A stem-branch pair.
///
/// Pairs built by the calendar always have matching parity and name a
/// sexagenary position; arbitrary pairs are allowed for scoring input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GanZhi {
    pub stem: Stem,
    pub branch: Branch,
}

impl GanZhi {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pair at a sexagenary index; wraps modulo 60.
    pub const fn from_cycle_index(index: i64) -> Self {
        let i = index.rem_euclid(60);
        Self {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// Sexagenary index (0 = 甲子), or `None` when parities differ.
    pub const fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        if s % 2 != b % 2 {
            return None;
        }
        Some((6 * s - 5 * b).rem_euclid(60) as u8)
    }

    /// Pair `steps` positions later (or earlier when negative) in the cycle.
    pub const fn offset(self, steps: i64) -> Self {
        Self {
            stem: Stem::from_index(self.stem.index() as i64 + steps),
            branch: Branch::from_index(self.branch.index() as i64 + steps),
        }
    }
}

impl Display for GanZhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for GanZhi {
    type Err = BaseError;

    /// Parse two Chinese characters such as `甲子`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(BaseError::InvalidPillars(s.to_string()));
        };
        let stem: Stem = a.to_string().parse()?;
        let branch: Branch = b.to_string().parse()?;
        Ok(Self::new(stem, branch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn stem_elements_and_polarity() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ding.polarity(), Polarity::Yin);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn branch_elements() {
        assert_eq!(Branch::Zi.element(), Element::Water);
        assert_eq!(Branch::Chou.element(), Element::Earth);
        assert_eq!(Branch::Wu.element(), Element::Fire);
        assert_eq!(Branch::You.element(), Element::Metal);
    }

    #[test]
    fn hidden_ratios_sum_to_one() {
        for b in ALL_BRANCHES {
            let sum: f64 = b.hidden_stems().iter().map(|(_, r)| r).sum();
            assert!((sum - 1.0).abs() < 1e-9, "{b}: {sum}");
            assert!(!b.hidden_stems().is_empty() && b.hidden_stems().len() <= 3);
        }
    }

    #[test]
    fn main_stem_shares_branch_element() {
        for b in ALL_BRANCHES {
            assert_eq!(b.main_stem().element(), b.element(), "{b}");
        }
    }

    #[test]
    fn clash_pairs() {
        assert_eq!(Branch::Zi.clash(), Branch::Wu);
        assert_eq!(Branch::Si.clash(), Branch::Hai);
        assert!(Branch::Chen.clashes_with(Branch::Xu));
        assert!(!Branch::Chen.clashes_with(Branch::Chen));
    }

    #[test]
    fn symbol_parsing() {
        assert_eq!("甲".parse::<Stem>().unwrap(), Stem::Jia);
        assert_eq!("geng".parse::<Stem>().unwrap(), Stem::Geng);
        assert_eq!("亥".parse::<Branch>().unwrap(), Branch::Hai);
        assert!("X".parse::<Branch>().is_err());
    }

    #[test]
    fn unknown_symbol_falls_back_to_earth() {
        assert_eq!(element_of_symbol("壬"), Element::Water);
        assert_eq!(element_of_symbol("午"), Element::Fire);
        assert_eq!(element_of_symbol("?"), Element::Earth);
    }

    #[test]
    fn cycle_index_roundtrip() {
        for i in 0..60 {
            let gz = GanZhi::from_cycle_index(i);
            assert_eq!(gz.cycle_index(), Some(i as u8));
        }
    }

    #[test]
    fn mismatched_parity_has_no_index() {
        assert_eq!(GanZhi::new(Stem::Jia, Branch::Chou).cycle_index(), None);
    }

    #[test]
    fn offset_wraps() {
        let jiazi = GanZhi::from_cycle_index(0);
        assert_eq!(jiazi.offset(-1).to_string(), "癸亥");
        assert_eq!(jiazi.offset(61).to_string(), "乙丑");
    }

    #[test]
    fn ganzhi_parse() {
        let gz: GanZhi = "丙寅".parse().unwrap();
        assert_eq!(gz, GanZhi::new(Stem::Bing, Branch::Yin));
        assert!("丙".parse::<GanZhi>().is_err());
        assert!("丙寅卯".parse::<GanZhi>().is_err());
    }
}
