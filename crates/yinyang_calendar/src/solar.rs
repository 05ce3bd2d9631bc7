//! Apparent solar longitude and the twelve sectional ("jie") solar terms.
//!
//! Low-precision model after Meeus, *Astronomical Algorithms* ch. 25:
//! geometric mean longitude, equation of centre, then nutation and
//! aberration via the lunar node. Accuracy is about 0.01°, a quarter of an
//! hour of solar-term timing, which is adequate for pillar boundaries.
//! ΔT is ignored.

use yinyang_time::J2000_JD;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Offset of the UTC+8 reference zone from UT, in days.
pub const ZONE_OFFSET_DAYS: f64 = 8.0 / 24.0;

/// Longitude of Lichun (start of spring), where the year and 寅 month begin.
pub const LICHUN_DEG: f64 = 315.0;

/// Sectional terms, one per month, starting at Lichun.
pub const JIE_NAMES: [&str; 12] = [
    "立春", "惊蛰", "清明", "立夏", "芒种", "小暑", "立秋", "白露", "寒露", "立冬", "大雪", "小寒",
];

/// Normalize an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle difference to [-180, 180).
pub fn wrap_180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Apparent geocentric ecliptic longitude of the Sun, degrees in [0, 360).
pub fn solar_longitude_deg(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_3032 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.000_1537 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_360(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}

/// Month index since Lichun (0 = 寅 month ... 11 = 丑 month).
pub fn month_index(solar_longitude: f64) -> u8 {
    ((normalize_360(solar_longitude - LICHUN_DEG) / 30.0).floor() as u8).min(11)
}

/// Longitude of the sectional term that opens month `index`.
pub fn jie_longitude(index: u8) -> f64 {
    normalize_360(LICHUN_DEG + 30.0 * index as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yinyang_time::calendar_to_jd;

    #[test]
    fn wrap_and_normalize() {
        assert_eq!(normalize_360(-30.0), 330.0);
        assert_eq!(normalize_360(720.0), 0.0);
        assert_eq!(wrap_180(350.0), -10.0);
        assert_eq!(wrap_180(-190.0), 170.0);
    }

    #[test]
    fn march_equinox_near_zero() {
        // 2000-03-20 07:35 UT
        let jd = calendar_to_jd(2000, 3, 20, 7.0 * 60.0 + 35.0);
        let lon = solar_longitude_deg(jd);
        assert!(wrap_180(lon).abs() < 0.02, "lon = {lon}");
    }

    #[test]
    fn meeus_example_25a() {
        // 1992-10-13 0h TD: apparent longitude 199.90895°
        let lon = solar_longitude_deg(2_448_908.5);
        assert!((lon - 199.909).abs() < 0.01, "lon = {lon}");
    }

    #[test]
    fn month_index_boundaries() {
        assert_eq!(month_index(315.0), 0);
        assert_eq!(month_index(344.99), 0);
        assert_eq!(month_index(345.0), 1);
        assert_eq!(month_index(14.9), 1);
        assert_eq!(month_index(285.0), 11);
        assert_eq!(month_index(314.99), 11);
    }

    #[test]
    fn jie_longitudes() {
        assert_eq!(jie_longitude(0), 315.0);
        assert_eq!(jie_longitude(2), 15.0);
        assert_eq!(jie_longitude(11), 285.0);
        assert_eq!(JIE_NAMES[2], "清明");
    }
}
