//! Longitude table for major Chinese cities.
//!
//! Static lookup data for the true solar time correction. Only provincial
//! capitals, municipalities and a handful of large cities are listed.

use serde::Serialize;

/// A city with its longitude in degrees east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub province: &'static str,
    pub name: &'static str,
    pub longitude_deg: f64,
}

const fn city(province: &'static str, name: &'static str, longitude_deg: f64) -> City {
    City {
        province,
        name,
        longitude_deg,
    }
}

/// All known cities, grouped by province in table order.
pub const CITIES: &[City] = &[
    city("北京市", "北京", 116.41),
    city("天津市", "天津", 117.20),
    city("上海市", "上海", 121.47),
    city("重庆市", "重庆", 106.55),
    city("河北省", "石家庄", 114.48),
    city("山西省", "太原", 112.53),
    city("内蒙古", "呼和浩特", 111.65),
    city("辽宁省", "沈阳", 123.43),
    city("辽宁省", "大连", 121.62),
    city("吉林省", "长春", 125.32),
    city("黑龙江省", "哈尔滨", 126.63),
    city("江苏省", "南京", 118.78),
    city("江苏省", "苏州", 120.62),
    city("浙江省", "杭州", 120.16),
    city("浙江省", "宁波", 121.56),
    city("安徽省", "合肥", 117.27),
    city("福建省", "福州", 119.30),
    city("福建省", "厦门", 118.10),
    city("江西省", "南昌", 115.89),
    city("山东省", "济南", 117.00),
    city("山东省", "青岛", 120.33),
    city("河南省", "郑州", 113.65),
    city("湖北省", "武汉", 114.31),
    city("湖南省", "长沙", 112.98),
    city("广东省", "广州", 113.23),
    city("广东省", "深圳", 114.07),
    city("广东省", "珠海", 113.52),
    city("广西", "南宁", 108.33),
    city("海南省", "海口", 110.35),
    city("四川省", "成都", 104.06),
    city("贵州省", "贵阳", 106.71),
    city("云南省", "昆明", 102.73),
    city("西藏", "拉萨", 91.11),
    city("陕西省", "西安", 108.95),
    city("甘肃省", "兰州", 103.82),
    city("青海省", "西宁", 101.74),
    city("宁夏", "银川", 106.27),
    city("新疆", "乌鲁木齐", 87.68),
    city("港澳台", "香港", 114.17),
    city("港澳台", "澳门", 113.54),
    city("港澳台", "台北", 121.50),
    city("港澳台", "高雄", 120.30),
];

/// Look up a city by name, optionally restricted to a province.
pub fn find_city(province: Option<&str>, name: &str) -> Option<&'static City> {
    CITIES
        .iter()
        .find(|c| c.name == name && province.is_none_or(|p| c.province == p))
}

/// Distinct province names in table order.
pub fn provinces() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for c in CITIES {
        if !out.contains(&c.province) {
            out.push(c.province);
        }
    }
    out
}

/// Cities of one province.
pub fn cities_in(province: &str) -> impl Iterator<Item = &'static City> + '_ {
    CITIES.iter().filter(move |c| c.province == province)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_longitudes_in_china_range() {
        for c in CITIES {
            assert!(
                (73.0..=136.0).contains(&c.longitude_deg),
                "{} out of range",
                c.name
            );
        }
    }

    #[test]
    fn find_by_name() {
        let c = find_city(None, "北京").unwrap();
        assert_eq!(c.longitude_deg, 116.41);
    }

    #[test]
    fn find_respects_province() {
        assert!(find_city(Some("广东省"), "深圳").is_some());
        assert!(find_city(Some("福建省"), "深圳").is_none());
    }

    #[test]
    fn provinces_are_unique() {
        let p = provinces();
        let mut sorted = p.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(p.len(), sorted.len());
        assert_eq!(cities_in("港澳台").count(), 4);
    }
}
