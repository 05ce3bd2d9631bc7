//! Shen sha: symbolic markers attached to chart pillars or cycle years.
//!
//! Every marker is a pure table lookup keyed by the day stem, the birth-year
//! branch or the month branch. A marker hits when a pillar's (or a year's)
//! branch equals the mapped target; the two virtue markers may also target a
//! stem. Rules are evaluated in a fixed insertion order.

use serde::Serialize;

use crate::chart::{ALL_POSITIONS, Chart, PillarPosition};
use crate::ganzhi::{Branch, GanZhi, Stem};

/// Display category of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkerCategory {
    Auspicious,
    Inauspicious,
    Romantic,
    Movement,
    Neutral,
}

impl MarkerCategory {
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Auspicious => "吉",
            Self::Inauspicious => "凶",
            Self::Romantic => "缘",
            Self::Movement => "动",
            Self::Neutral => "平",
        }
    }
}

/// A named marker as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Marker {
    /// Stable machine key.
    pub key: &'static str,
    /// English name.
    pub name: &'static str,
    /// Chinese name.
    pub label: &'static str,
    /// Display-only glyph.
    pub icon: &'static str,
    pub category: MarkerCategory,
    pub description: &'static str,
}

impl Marker {
    /// Same marker with a context-specific description.
    pub const fn with_description(self, description: &'static str) -> Self {
        Self {
            description,
            ..self
        }
    }
}

/// Which chart symbol keys a marker table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkerKey {
    DayStem,
    YearBranch,
    MonthBranch,
}

/// Target of a virtue marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VirtueTarget {
    Stem(Stem),
    Branch(Branch),
}

/// Table-driven markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShenSha {
    /// 天乙贵人: helpful people.
    Noble,
    /// 咸池桃花: romance, popularity.
    PeachBlossom,
    /// 驿马: travel, change.
    TravelHorse,
    /// 羊刃: sharp, risk of injury.
    Blade,
    /// 华盖: art, isolation.
    Canopy,
    /// 文昌: study, letters.
    Scholar,
    /// 红鸾: marriage.
    RedPhoenix,
    /// 天喜: happy events.
    HeavenlyJoy,
    /// 禄神: income.
    Prosperity,
    /// 病符: illness.
    Illness,
    /// 丧门: mourning.
    Mourning,
    /// 劫煞: robbery, loss.
    Robbery,
    /// 天德贵人
    HeavenVirtue,
    /// 月德贵人
    MoonVirtue,
}

/// Rules applied to the natal pillars, in evaluation order.
pub const CHART_RULES: [ShenSha; 8] = [
    ShenSha::Noble,
    ShenSha::PeachBlossom,
    ShenSha::TravelHorse,
    ShenSha::Blade,
    ShenSha::Canopy,
    ShenSha::Scholar,
    ShenSha::HeavenVirtue,
    ShenSha::MoonVirtue,
];

/// Rules applied to a cycle year for the overall trend, in evaluation order.
pub const YEAR_RULES: [ShenSha; 8] = [
    ShenSha::Noble,
    ShenSha::PeachBlossom,
    ShenSha::TravelHorse,
    ShenSha::RedPhoenix,
    ShenSha::Scholar,
    ShenSha::Canopy,
    ShenSha::Prosperity,
    ShenSha::Blade,
];

use Branch::{
    Chen as CHEN, Chou as CHOU, Hai as HAI, Mao as MAO, Shen as SHEN, Si as SI, Wei as WEI,
    Wu as WU, Xu as XU, Yin as YIN, You as YOU, Zi as ZI,
};

/// Keyed by day stem.
const NOBLE: [[Branch; 2]; 10] = [
    [CHOU, WEI], // 甲
    [ZI, SHEN],  // 乙
    [HAI, YOU],  // 丙
    [HAI, YOU],  // 丁
    [CHOU, WEI], // 戊
    [ZI, SHEN],  // 己
    [CHOU, WEI], // 庚
    [WU, YIN],   // 辛
    [SI, MAO],   // 壬
    [SI, MAO],   // 癸
];
const SCHOLAR: [Branch; 10] = [SI, WU, SHEN, YOU, SHEN, YOU, HAI, ZI, YIN, MAO];
const PROSPERITY: [Branch; 10] = [YIN, MAO, SI, WU, SI, WU, SHEN, YOU, HAI, ZI];
const BLADE: [Branch; 10] = [MAO, CHEN, WU, WEI, WU, WEI, YOU, XU, ZI, CHOU];

// Keyed by year branch, 子 through 亥.
const PEACH_BLOSSOM: [Branch; 12] = [YOU, WU, MAO, ZI, YOU, WU, MAO, ZI, YOU, WU, MAO, ZI];
const TRAVEL_HORSE: [Branch; 12] = [YIN, HAI, SHEN, SI, YIN, HAI, SHEN, SI, YIN, HAI, SHEN, SI];
const CANOPY: [Branch; 12] = [
    CHEN, CHOU, XU, WEI, CHEN, CHOU, XU, WEI, CHEN, CHOU, XU, WEI,
];
const ROBBERY: [Branch; 12] = [SI, YIN, HAI, SHEN, SI, YIN, HAI, SHEN, SI, YIN, HAI, SHEN];
const RED_PHOENIX: [Branch; 12] = [MAO, YIN, CHOU, ZI, HAI, XU, YOU, SHEN, WEI, WU, SI, CHEN];
const HEAVENLY_JOY: [Branch; 12] = [YOU, SHEN, WEI, WU, SI, CHEN, MAO, YIN, CHOU, ZI, HAI, XU];
const ILLNESS: [Branch; 12] = [SI, WU, WEI, SHEN, YOU, XU, HAI, ZI, CHOU, YIN, MAO, CHEN];
const MOURNING: [Branch; 12] = [YIN, MAO, CHEN, SI, WU, WEI, SHEN, YOU, XU, HAI, ZI, CHOU];

// Keyed by month branch, 子 through 亥.
const HEAVEN_VIRTUE: [VirtueTarget; 12] = [
    VirtueTarget::Branch(SI),
    VirtueTarget::Stem(Stem::Geng),
    VirtueTarget::Stem(Stem::Ding),
    VirtueTarget::Branch(SHEN),
    VirtueTarget::Stem(Stem::Ren),
    VirtueTarget::Stem(Stem::Xin),
    VirtueTarget::Branch(HAI),
    VirtueTarget::Stem(Stem::Jia),
    VirtueTarget::Stem(Stem::Gui),
    VirtueTarget::Branch(YIN),
    VirtueTarget::Stem(Stem::Bing),
    VirtueTarget::Stem(Stem::Yi),
];
const MOON_VIRTUE: [Stem; 12] = [
    Stem::Ren,
    Stem::Geng,
    Stem::Bing,
    Stem::Jia,
    Stem::Ren,
    Stem::Geng,
    Stem::Bing,
    Stem::Jia,
    Stem::Ren,
    Stem::Geng,
    Stem::Bing,
    Stem::Jia,
];

/// Noble-helper branches of a day stem.
pub const fn noble_branches(day_stem: Stem) -> [Branch; 2] {
    NOBLE[day_stem.index() as usize]
}

/// Heaven-virtue target of a month branch.
pub const fn heaven_virtue(month_branch: Branch) -> VirtueTarget {
    HEAVEN_VIRTUE[month_branch.index() as usize]
}

/// Moon-virtue stem of a month branch.
pub const fn moon_virtue(month_branch: Branch) -> Stem {
    MOON_VIRTUE[month_branch.index() as usize]
}

impl ShenSha {
    pub const fn key(self) -> MarkerKey {
        match self {
            Self::Noble | Self::Scholar | Self::Prosperity | Self::Blade => MarkerKey::DayStem,
            Self::HeavenVirtue | Self::MoonVirtue => MarkerKey::MonthBranch,
            _ => MarkerKey::YearBranch,
        }
    }

    /// Branch target keyed by the chart, for the single-branch tables.
    const fn branch_target(self, chart: &Chart) -> Option<Branch> {
        let ds = chart.day_master().index() as usize;
        let yb = chart.year_branch().index() as usize;
        match self {
            Self::Scholar => Some(SCHOLAR[ds]),
            Self::Prosperity => Some(PROSPERITY[ds]),
            Self::Blade => Some(BLADE[ds]),
            Self::PeachBlossom => Some(PEACH_BLOSSOM[yb]),
            Self::TravelHorse => Some(TRAVEL_HORSE[yb]),
            Self::Canopy => Some(CANOPY[yb]),
            Self::Robbery => Some(ROBBERY[yb]),
            Self::RedPhoenix => Some(RED_PHOENIX[yb]),
            Self::HeavenlyJoy => Some(HEAVENLY_JOY[yb]),
            Self::Illness => Some(ILLNESS[yb]),
            Self::Mourning => Some(MOURNING[yb]),
            Self::Noble | Self::HeavenVirtue | Self::MoonVirtue => None,
        }
    }

    /// Whether this marker hits a stem/branch pair for the given chart.
    pub fn matches(self, chart: &Chart, stem: Stem, branch: Branch) -> bool {
        match self {
            Self::Noble => noble_branches(chart.day_master()).contains(&branch),
            Self::HeavenVirtue => match heaven_virtue(chart.month_branch()) {
                VirtueTarget::Stem(s) => s == stem,
                VirtueTarget::Branch(b) => b == branch,
            },
            Self::MoonVirtue => moon_virtue(chart.month_branch()) == stem,
            other => match other.branch_target(chart) {
                Some(target) => target == branch,
                None => false,
            },
        }
    }

    /// Whether this marker hits a sexagenary pair.
    pub fn matches_pair(self, chart: &Chart, ganzhi: GanZhi) -> bool {
        self.matches(chart, ganzhi.stem, ganzhi.branch)
    }

    pub const fn marker(self) -> Marker {
        match self {
            Self::Noble => Marker {
                key: "noble",
                name: "Noble Helper",
                label: "天乙贵人",
                icon: "🛡️",
                category: MarkerCategory::Auspicious,
                description: "逢凶化吉，遇难呈祥",
            },
            Self::PeachBlossom => Marker {
                key: "peach_blossom",
                name: "Peach Blossom",
                label: "咸池桃花",
                icon: "🌸",
                category: MarkerCategory::Romantic,
                description: "异性缘旺，人际活跃",
            },
            Self::TravelHorse => Marker {
                key: "travel_horse",
                name: "Travel Horse",
                label: "驿马",
                icon: "🐎",
                category: MarkerCategory::Movement,
                description: "奔波变动，远行搬迁",
            },
            Self::Blade => Marker {
                key: "blade",
                name: "Blade",
                label: "羊刃",
                icon: "⚔️",
                category: MarkerCategory::Inauspicious,
                description: "性烈刚强，防血光意外",
            },
            Self::Canopy => Marker {
                key: "canopy",
                name: "Canopy",
                label: "华盖",
                icon: "🎨",
                category: MarkerCategory::Neutral,
                description: "才华横溢，性情孤高",
            },
            Self::Scholar => Marker {
                key: "scholar",
                name: "Scholar",
                label: "文昌贵人",
                icon: "📜",
                category: MarkerCategory::Auspicious,
                description: "才思敏捷，利考学职",
            },
            Self::RedPhoenix => Marker {
                key: "red_phoenix",
                name: "Red Phoenix",
                label: "红鸾星动",
                icon: "💍",
                category: MarkerCategory::Romantic,
                description: "婚恋大吉，喜事临门",
            },
            Self::HeavenlyJoy => Marker {
                key: "heavenly_joy",
                name: "Heavenly Joy",
                label: "天喜",
                icon: "🎊",
                category: MarkerCategory::Auspicious,
                description: "喜事临门，感情顺利",
            },
            Self::Prosperity => Marker {
                key: "prosperity",
                name: "Prosperity",
                label: "禄神临门",
                icon: "💰",
                category: MarkerCategory::Auspicious,
                description: "财运亨通，享受增加",
            },
            Self::Illness => Marker {
                key: "illness",
                name: "Illness",
                label: "病符",
                icon: "🏥",
                category: MarkerCategory::Inauspicious,
                description: "健康欠佳，注意身体",
            },
            Self::Mourning => Marker {
                key: "mourning",
                name: "Mourning",
                label: "丧门",
                icon: "⚰️",
                category: MarkerCategory::Inauspicious,
                description: "注意长辈健康，防意外",
            },
            Self::Robbery => Marker {
                key: "robbery",
                name: "Robbery",
                label: "劫煞",
                icon: "💸",
                category: MarkerCategory::Inauspicious,
                description: "破财之年，谨慎投资",
            },
            Self::HeavenVirtue => Marker {
                key: "heaven_virtue",
                name: "Heaven Virtue",
                label: "天德贵人",
                icon: "⭐",
                category: MarkerCategory::Auspicious,
                description: "逢凶化吉，福德深厚",
            },
            Self::MoonVirtue => Marker {
                key: "moon_virtue",
                name: "Moon Virtue",
                label: "月德贵人",
                icon: "🌙",
                category: MarkerCategory::Auspicious,
                description: "心地仁慈，灾厄自消",
            },
        }
    }
}

/// Markers attached to one natal pillar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionMarkers {
    pub position: PillarPosition,
    pub markers: Vec<Marker>,
}

/// Tag every natal pillar with the chart rules.
pub fn tag_chart(chart: &Chart) -> [PositionMarkers; 4] {
    ALL_POSITIONS.map(|position| {
        let gz = chart.ganzhi(position);
        let markers = CHART_RULES
            .iter()
            .filter(|rule| rule.matches_pair(chart, gz))
            .map(|rule| rule.marker())
            .collect();
        PositionMarkers { position, markers }
    })
}

/// Year-level markers for a cycle year, in [`YEAR_RULES`] order.
pub fn year_shensha(chart: &Chart, year: GanZhi) -> Vec<ShenSha> {
    YEAR_RULES
        .into_iter()
        .filter(|rule| rule.matches_pair(chart, year))
        .collect()
}
