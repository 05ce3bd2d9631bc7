//! Per-year scoring: the shared base score and the dimension rules.
//!
//! Career, wealth, health and love adjust the base score (overall steps one
//! to four, before Tai Sui and clamping). Parents and children start from the
//! family base instead. Each rule either adds a bare delta or a delta plus a
//! marker explaining it.

use yinyang_base::{
    Chart, Element, GanZhi, Gender, Marker, MarkerCategory, Pattern, ShenSha, TenGod, TrendRules,
    YearCycle, ten_god,
};

use crate::dimension::Dimension;

/// Overall steps 1–4: stem and branch element against the favorable set,
/// then climate relief.
pub fn base_score(rules: &TrendRules, pattern: &Pattern, day_master: Element, year: GanZhi) -> i32 {
    let overcomer = day_master.overcome_by();
    let stem = year.stem.element();
    let branch = year.branch.element();
    let mut score = rules.base_score;

    if pattern.is_favorable(stem) {
        score += rules.stem_favorable;
    } else if stem == overcomer {
        score -= rules.stem_unfavorable;
    }

    if pattern.is_favorable(branch) {
        score += rules.branch_favorable;
    } else if branch == overcomer {
        score -= rules.branch_unfavorable;
    }

    if pattern.climate.remedy() == Some(branch) {
        score += rules.climate_relief;
    }
    score
}

/// Natal facts a year is scored against.
#[derive(Debug, Clone, Copy)]
pub struct YearContext<'a> {
    pub chart: &'a Chart,
    pub gender: Gender,
    pub cycle: YearCycle,
    /// Ten-god of the year stem relative to the day master.
    pub ten_god: TenGod,
}

impl<'a> YearContext<'a> {
    pub fn new(chart: &'a Chart, gender: Gender, cycle: YearCycle) -> Self {
        Self {
            chart,
            gender,
            cycle,
            ten_god: ten_god(chart.day_master(), cycle.ganzhi.stem),
        }
    }

    fn has(&self, star: ShenSha) -> bool {
        star.matches_pair(self.chart, self.cycle.ganzhi)
    }

    fn day_master_element(&self) -> Element {
        self.chart.day_master().element()
    }

    /// Year stem or branch carries `element`.
    fn brings(&self, element: Element) -> bool {
        self.cycle.ganzhi.stem.element() == element || self.cycle.ganzhi.branch.element() == element
    }

    /// A resource ten-god sits on a natal year, month or hour stem.
    fn natal_resource(&self) -> bool {
        self.chart
            .ten_gods()
            .iter()
            .filter_map(|p| p.stem)
            .any(TenGod::is_resource)
    }
}

/// Score delta and explaining markers of one dimension in one year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjustment {
    pub delta: i32,
    pub markers: Vec<Marker>,
}

impl Adjustment {
    fn add(&mut self, delta: i32) {
        self.delta += delta;
    }

    fn mark(&mut self, delta: i32, marker: Marker) {
        self.delta += delta;
        self.markers.push(marker);
    }
}

const fn warning(key: &'static str, name: &'static str, label: &'static str, description: &'static str) -> Marker {
    Marker {
        key,
        name,
        label,
        icon: "⚠️",
        category: MarkerCategory::Inauspicious,
        description,
    }
}

pub const UNCHECKED_KILLINGS: Marker = warning(
    "unchecked_killings",
    "Unchecked Seven Killings",
    "七杀无制",
    "事业压力大，小人作祟",
);

pub const RIVALS_TAKE_WEALTH: Marker = warning(
    "rivals_take_wealth",
    "Rivals Take Wealth",
    "比劫夺财",
    "钱财易散，防小人",
);

pub const CLASH_MONTH: Marker = warning(
    "clash_month",
    "Clashes Month Pillar",
    "冲月柱",
    "冲提纲，父母宫动荡，注意父母健康",
);

pub const CLASH_YEAR: Marker = warning(
    "clash_year",
    "Clashes Year Pillar",
    "冲年柱",
    "冲年柱，祖业宫动荡",
);

pub const CLASH_HOUR: Marker = warning(
    "clash_hour",
    "Clashes Hour Pillar",
    "冲时柱",
    "冲子女宫，注意子女健康安全",
);

pub const SPOUSE_WEALTH: Marker = Marker {
    key: "spouse_wealth",
    name: "Direct Wealth Arrives",
    label: "正财临门",
    icon: "💑",
    category: MarkerCategory::Auspicious,
    description: "婚姻宫动，利婚恋",
};

pub const SPOUSE_OFFICER: Marker = Marker {
    key: "spouse_officer",
    name: "Direct Officer Arrives",
    label: "正官临门",
    ..SPOUSE_WEALTH
};

pub const VIRTUE_PROTECTION: Marker = Marker {
    key: "virtue_protection",
    name: "Virtue Protection",
    label: "天德护佑",
    icon: "✨",
    category: MarkerCategory::Auspicious,
    description: "逢凶化吉，健康无虞",
};

pub const MOTHER_STAR: Marker = Marker {
    key: "mother_star",
    name: "Resource Star Arrives",
    label: "印星临门",
    icon: "👩",
    category: MarkerCategory::Auspicious,
    description: "母亲星旺，母亲运势佳",
};

pub const FATHER_STAR: Marker = Marker {
    key: "father_star",
    name: "Wealth Star Arrives",
    label: "财星临门",
    icon: "👨",
    description: "父亲星旺，父亲运势佳",
    ..MOTHER_STAR
};

pub const NOBLE_PROTECTION: Marker = Marker {
    key: "noble_protection",
    name: "Noble Protection",
    label: "贵人护佑",
    icon: "🛡️",
    category: MarkerCategory::Auspicious,
    description: "贵人相助，父母平安",
};

pub const CHILD_STAR: Marker = Marker {
    key: "child_star",
    name: "Child Star Thrives",
    label: "子女星旺",
    icon: "👶",
    category: MarkerCategory::Auspicious,
    description: "子女星临门，子女运势佳",
};

pub const FAMILY_JOY: Marker = Marker {
    key: "family_joy",
    name: "Family Joy",
    label: "红鸾天喜",
    icon: "🎉",
    category: MarkerCategory::Auspicious,
    description: "喜事临门，利子女",
};

/// Rule dispatch. Overall is scored by the projector and adjusts nothing.
pub fn adjust(dimension: Dimension, ctx: &YearContext<'_>) -> Adjustment {
    match dimension {
        Dimension::Overall => Adjustment::default(),
        Dimension::Career => career(ctx),
        Dimension::Wealth => wealth(ctx),
        Dimension::Health => health(ctx),
        Dimension::Love => love(ctx),
        Dimension::Parents => parents(ctx),
        Dimension::Children => children(ctx),
    }
}

fn career(ctx: &YearContext<'_>) -> Adjustment {
    let mut adj = Adjustment::default();
    if ctx.ten_god.is_officer() || ctx.ten_god.is_resource() {
        adj.add(15);
    }
    if ctx.has(ShenSha::Scholar) {
        adj.mark(12, ShenSha::Scholar.marker().with_description("才思敏捷，利考学职，事业有成"));
    }
    if ctx.has(ShenSha::Noble) {
        adj.mark(10, ShenSha::Noble.marker().with_description("贵人相助，事业顺遂"));
    }
    if ctx.has(ShenSha::HeavenVirtue) {
        adj.mark(8, ShenSha::HeavenVirtue.marker().with_description("逢凶化吉，事业稳定"));
    }
    if ctx.has(ShenSha::TravelHorse) {
        adj.mark(-5, ShenSha::TravelHorse.marker().with_description("事业变动，可能换工作或出差"));
    }
    if ctx.ten_god == TenGod::SevenKillings && !ctx.natal_resource() {
        adj.mark(-8, UNCHECKED_KILLINGS);
    }
    adj
}

fn wealth(ctx: &YearContext<'_>) -> Adjustment {
    let mut adj = Adjustment::default();
    if matches!(
        ctx.ten_god,
        TenGod::DirectWealth | TenGod::IndirectWealth | TenGod::EatingGod | TenGod::HurtingOfficer
    ) {
        adj.add(15);
    }
    if ctx.has(ShenSha::Prosperity) {
        adj.mark(18, ShenSha::Prosperity.marker().with_description("财运亨通，收入增加"));
    }
    if ctx.has(ShenSha::Noble) {
        adj.mark(8, ShenSha::Noble.marker().with_description("贵人相助，财运顺利"));
    }
    if ctx.has(ShenSha::Robbery) {
        adj.mark(-20, ShenSha::Robbery.marker());
    }
    if matches!(ctx.ten_god, TenGod::Peer | TenGod::RobWealth) {
        adj.mark(-10, RIVALS_TAKE_WEALTH);
    }
    adj
}

fn health(ctx: &YearContext<'_>) -> Adjustment {
    let mut adj = Adjustment::default();
    if ctx.has(ShenSha::Illness) {
        adj.mark(-25, ShenSha::Illness.marker());
    }
    if ctx.has(ShenSha::Mourning) {
        adj.mark(-15, ShenSha::Mourning.marker());
    }
    if ctx.has(ShenSha::HeavenVirtue) || ctx.has(ShenSha::MoonVirtue) {
        adj.mark(15, VIRTUE_PROTECTION);
    }
    if ctx.has(ShenSha::Noble) {
        adj.mark(10, ShenSha::Noble.marker().with_description("贵人相助，健康平安"));
    }
    if ctx.ten_god.is_resource() {
        adj.add(8);
    }
    adj
}

fn love(ctx: &YearContext<'_>) -> Adjustment {
    let mut adj = Adjustment::default();
    if ctx.has(ShenSha::RedPhoenix) {
        adj.mark(25, ShenSha::RedPhoenix.marker());
    }
    if ctx.has(ShenSha::PeachBlossom) {
        adj.mark(15, ShenSha::PeachBlossom.marker().with_description("异性缘旺，桃花朵朵"));
    }
    if ctx.has(ShenSha::HeavenlyJoy) {
        adj.mark(12, ShenSha::HeavenlyJoy.marker());
    }
    if ctx.has(ShenSha::Canopy) {
        adj.mark(-10, ShenSha::Canopy.marker().with_description("才华横溢，但感情上可能有些孤僻"));
    }
    if ctx.has(ShenSha::TravelHorse) {
        adj.mark(-8, ShenSha::TravelHorse.marker().with_description("聚少离多，异地恋情"));
    }
    match (ctx.gender, ctx.ten_god) {
        (Gender::Male, TenGod::DirectWealth) => adj.mark(12, SPOUSE_WEALTH),
        (Gender::Female, TenGod::DirectOfficer) => adj.mark(12, SPOUSE_OFFICER),
        _ => {}
    }
    adj
}

fn parents(ctx: &YearContext<'_>) -> Adjustment {
    let mut adj = Adjustment::default();
    let branch = ctx.cycle.ganzhi.branch;
    let me = ctx.day_master_element();
    if branch.clashes_with(ctx.chart.month_branch()) {
        adj.mark(-25, CLASH_MONTH);
    }
    if branch.clashes_with(ctx.chart.year_branch()) {
        adj.mark(-10, CLASH_YEAR);
    }
    if ctx.brings(me.generated_by()) {
        adj.mark(10, MOTHER_STAR);
    }
    if ctx.brings(me.overcomes()) {
        adj.mark(10, FATHER_STAR);
    }
    if ctx.has(ShenSha::Noble) {
        adj.mark(8, NOBLE_PROTECTION);
    }
    adj
}

fn children(ctx: &YearContext<'_>) -> Adjustment {
    let mut adj = Adjustment::default();
    let me = ctx.day_master_element();
    if ctx.cycle.ganzhi.branch.clashes_with(ctx.chart.hour_branch()) {
        adj.mark(-30, CLASH_HOUR);
    }
    let child_star = match ctx.gender {
        Gender::Male => me.overcome_by(),
        Gender::Female => me.generates(),
    };
    if ctx.brings(child_star) {
        adj.mark(15, CHILD_STAR);
    }
    if ctx.has(ShenSha::Noble) {
        adj.mark(8, NOBLE_PROTECTION.with_description("贵人相助，子女平安"));
    }
    if ctx.has(ShenSha::RedPhoenix) || ctx.has(ShenSha::HeavenlyJoy) {
        adj.mark(10, FAMILY_JOY);
    }
    adj
}
