//! Day-master imagery: a one-line portrait for each of the ten stems.

use serde::Serialize;

use crate::element::Element;
use crate::ganzhi::Stem;

/// Descriptive profile of a day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayMasterProfile {
    pub stem: Stem,
    pub element: Element,
    pub image: &'static str,
    pub icon: &'static str,
    pub traits: &'static str,
    pub description: &'static str,
}

const fn profile(
    stem: Stem,
    image: &'static str,
    icon: &'static str,
    traits: &'static str,
    description: &'static str,
) -> DayMasterProfile {
    DayMasterProfile {
        stem,
        element: stem.element(),
        image,
        icon,
        traits,
        description,
    }
}

static PROFILES: [DayMasterProfile; 10] = [
    profile(
        Stem::Jia,
        "参天大树",
        "🌲",
        "正直 · 倔强 · 进取",
        "宁折不弯的栋梁之材，有极强的保护欲和进取心，但有时略显固执。",
    ),
    profile(
        Stem::Yi,
        "花草藤蔓",
        "☘️",
        "柔韧 · 灵活 · 社交",
        "能屈能伸的社交天才，善于借力打力，生命力顽强，适应环境极快。",
    ),
    profile(
        Stem::Bing,
        "普照艳阳",
        "☀️",
        "热情 · 慷慨 · 急躁",
        "光芒万丈的太阳，藏不住心事，充满感染力，乐于奉献但容易冲动。",
    ),
    profile(
        Stem::Ding,
        "暗夜烛光",
        "🕯️",
        "细腻 · 专注 · 神秘",
        "外柔内刚的星星之火，洞察力极强，往往有独特的艺术天赋和内秀。",
    ),
    profile(
        Stem::Wu,
        "泰山磐石",
        "⛰️",
        "稳重 · 固执 · 诚信",
        "不动如山的守护者，值得信赖，沉稳厚重，但有时显得不知变通。",
    ),
    profile(
        Stem::Ji,
        "田园沃土",
        "🪴",
        "包容 · 务实 · 内敛",
        "温润的培育者，多才多艺，做事周全，具有极强的包容力和策划力。",
    ),
    profile(
        Stem::Geng,
        "利斧刀剑",
        "⚔️",
        "刚毅 · 义气 · 杀伐",
        "雷厉风行的改革者，爱憎分明，也是最讲义气的朋友，但性格刚烈。",
    ),
    profile(
        Stem::Xin,
        "高贵珠宝",
        "💎",
        "精致 · 虚荣 · 敏锐",
        "经过打磨的宝石，追求完美和面子，往往气质出众，心思非常细腻。",
    ),
    profile(
        Stem::Ren,
        "江河奔流",
        "🌊",
        "智慧 · 奔放 · 多变",
        "大开大合的战略家，聪明绝顶，反应极快，但有时容易冲动任性。",
    ),
    profile(
        Stem::Gui,
        "春雨润物",
        "🌧️",
        "温柔 · 敏感 · 灵感",
        "无孔不入的渗透者，心思缜密，第六感极强，善于以柔克刚。",
    ),
];

/// Profile of a day master stem.
pub fn day_master_profile(stem: Stem) -> &'static DayMasterProfile {
    &PROFILES[stem.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::ALL_STEMS;

    #[test]
    fn profiles_in_stem_order() {
        for s in ALL_STEMS {
            let p = day_master_profile(s);
            assert_eq!(p.stem, s);
            assert_eq!(p.element, s.element());
            assert!(!p.image.is_empty());
        }
    }

    #[test]
    fn jia_is_the_tall_tree() {
        assert_eq!(day_master_profile(Stem::Jia).image, "参天大树");
    }
}
