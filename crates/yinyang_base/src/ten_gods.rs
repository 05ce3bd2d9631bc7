//! Ten gods (shishen): the relation of any stem to the day master.
//!
//! The relation combines the element cycle (same, I generate, I overcome,
//! overcomes me, generates me) with a polarity match. Equal polarity gives
//! the "indirect" member of each pair, opposite polarity the "direct" one
//! (for the companion pair: Peer vs Rob Wealth).

use serde::Serialize;

use crate::ganzhi::Stem;

/// The ten relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenGod {
    /// 比肩
    Peer,
    /// 劫财
    RobWealth,
    /// 食神
    EatingGod,
    /// 伤官
    HurtingOfficer,
    /// 偏财
    IndirectWealth,
    /// 正财
    DirectWealth,
    /// 七杀
    SevenKillings,
    /// 正官
    DirectOfficer,
    /// 偏印
    IndirectResource,
    /// 正印
    DirectResource,
}

/// All ten gods in family order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Peer,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

/// Families of ten gods sharing one element relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenGodFamily {
    /// Same element: siblings, rivals.
    Companion,
    /// Element the day master generates.
    Output,
    /// Element the day master overcomes.
    Wealth,
    /// Element that overcomes the day master.
    Officer,
    /// Element that generates the day master.
    Resource,
}

impl TenGod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Peer => "Peer",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Peer => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    pub const fn family(self) -> TenGodFamily {
        match self {
            Self::Peer | Self::RobWealth => TenGodFamily::Companion,
            Self::EatingGod | Self::HurtingOfficer => TenGodFamily::Output,
            Self::IndirectWealth | Self::DirectWealth => TenGodFamily::Wealth,
            Self::SevenKillings | Self::DirectOfficer => TenGodFamily::Officer,
            Self::IndirectResource | Self::DirectResource => TenGodFamily::Resource,
        }
    }

    /// The relation seen from the other side of the pair.
    ///
    /// `ten_god(a, b).inverse() == ten_god(b, a)` for every pair of stems.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Peer => Self::Peer,
            Self::RobWealth => Self::RobWealth,
            Self::EatingGod => Self::IndirectResource,
            Self::IndirectResource => Self::EatingGod,
            Self::HurtingOfficer => Self::DirectResource,
            Self::DirectResource => Self::HurtingOfficer,
            Self::IndirectWealth => Self::SevenKillings,
            Self::SevenKillings => Self::IndirectWealth,
            Self::DirectWealth => Self::DirectOfficer,
            Self::DirectOfficer => Self::DirectWealth,
        }
    }

    /// Officer or Seven Killings.
    pub const fn is_officer(self) -> bool {
        matches!(self.family(), TenGodFamily::Officer)
    }

    /// Direct or indirect resource.
    pub const fn is_resource(self) -> bool {
        matches!(self.family(), TenGodFamily::Resource)
    }
}

use TenGod::{
    DirectOfficer as DO, DirectResource as DR, DirectWealth as DW, EatingGod as EG,
    HurtingOfficer as HO, IndirectResource as IR, IndirectWealth as IW, Peer as PE,
    RobWealth as RW, SevenKillings as SK,
};

/// Ten-god table indexed `[day_master][other]` by stem index.
pub const TEN_GOD_TABLE: [[TenGod; 10]; 10] = [
    // 甲   乙  丙  丁  戊  己  庚  辛  壬  癸
    [PE, RW, EG, HO, IW, DW, SK, DO, IR, DR], // 甲
    [RW, PE, HO, EG, DW, IW, DO, SK, DR, IR], // 乙
    [IR, DR, PE, RW, EG, HO, IW, DW, SK, DO], // 丙
    [DR, IR, RW, PE, HO, EG, DW, IW, DO, SK], // 丁
    [SK, DO, IR, DR, PE, RW, EG, HO, IW, DW], // 戊
    [DO, SK, DR, IR, RW, PE, HO, EG, DW, IW], // 己
    [IW, DW, SK, DO, IR, DR, PE, RW, EG, HO], // 庚
    [DW, IW, DO, SK, DR, IR, RW, PE, HO, EG], // 辛
    [EG, HO, IW, DW, SK, DO, IR, DR, PE, RW], // 壬
    [HO, EG, DW, IW, DO, SK, DR, IR, RW, PE], // 癸
];

/// Ten god of `other` relative to `day_master`.
pub const fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    TEN_GOD_TABLE[day_master.index() as usize][other.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementRelation;
    use crate::ganzhi::ALL_STEMS;

    /// Ten god from element relation and polarity.
    fn derive_ten_god(day_master: Stem, other: Stem) -> TenGod {
        let same_polarity = day_master.index() % 2 == other.index() % 2;
        let pair = match day_master.element().relation_to(other.element()) {
            ElementRelation::Same => (PE, RW),
            ElementRelation::Generates => (EG, HO),
            ElementRelation::Overcomes => (IW, DW),
            ElementRelation::OvercomeBy => (SK, DO),
            ElementRelation::GeneratedBy => (IR, DR),
        };
        if same_polarity { pair.0 } else { pair.1 }
    }

    #[test]
    fn table_matches_derivation() {
        for a in ALL_STEMS {
            for b in ALL_STEMS {
                assert_eq!(ten_god(a, b), derive_ten_god(a, b), "{a}->{b}");
            }
        }
    }

    #[test]
    fn self_relation_is_peer() {
        for s in ALL_STEMS {
            assert_eq!(ten_god(s, s), TenGod::Peer);
        }
    }

    #[test]
    fn polarity_antisymmetry() {
        for a in ALL_STEMS {
            for b in ALL_STEMS {
                assert_eq!(ten_god(a, b).inverse(), ten_god(b, a), "{a}<->{b}");
            }
        }
    }

    #[test]
    fn each_row_is_a_permutation() {
        for a in ALL_STEMS {
            for g in ALL_TEN_GODS {
                let hits = ALL_STEMS.iter().filter(|&&b| ten_god(a, b) == g).count();
                assert_eq!(hits, 1, "{a} {}", g.name());
            }
        }
    }

    #[test]
    fn known_entries() {
        assert_eq!(ten_god(Stem::Jia, Stem::Geng), TenGod::SevenKillings);
        assert_eq!(ten_god(Stem::Jia, Stem::Xin), TenGod::DirectOfficer);
        assert_eq!(ten_god(Stem::Gui, Stem::Bing), TenGod::DirectWealth);
        assert_eq!(ten_god(Stem::Wu, Stem::Ding), TenGod::DirectResource);
    }

    #[test]
    fn families() {
        assert!(TenGod::SevenKillings.is_officer());
        assert!(TenGod::IndirectResource.is_resource());
        assert_eq!(TenGod::HurtingOfficer.family(), TenGodFamily::Output);
    }
}
