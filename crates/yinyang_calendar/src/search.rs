//! Sectional solar-term ("jie") search.
//!
//! Coarse scan of `f(t) = wrap180(λ(t) − target)` in one-day steps until the
//! sign changes, then bisection. The Sun advances about 1°/day and a month
//! spans 30°, so the neighbouring term is always within 32 days.

use serde::Serialize;

use crate::error::CalendarError;
use crate::solar::{JIE_NAMES, jie_longitude, month_index, solar_longitude_deg, wrap_180};

/// Maximum scan range in days.
const MAX_SCAN_DAYS: f64 = 40.0;

/// Coarse scan step in days.
const STEP_DAYS: f64 = 1.0;

const MAX_ITERATIONS: u32 = 50;

/// About a tenth of a second.
const CONVERGENCE_DAYS: f64 = 1e-6;

/// Which neighbouring term to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// A sectional term crossing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JieEvent {
    /// Julian Date (UT) of the crossing.
    pub jd_ut: f64,
    /// Month index the term opens (0 = 寅).
    pub index: u8,
    pub longitude_deg: f64,
    pub name: &'static str,
}

/// Bisect to find the zero crossing of a scalar function between t_a and t_b.
fn bisect_zero<F>(
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    max_iter: u32,
    convergence_days: f64,
    f_at: &F,
) -> f64
where
    F: Fn(f64) -> f64,
{
    for _ in 0..max_iter {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f_at(t_mid);

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }

        if (t_b - t_a).abs() < convergence_days {
            break;
        }
    }

    0.5 * (t_a + t_b)
}

/// Nearest sectional term after (`Forward`) or at/before (`Backward`) `jd_ut`.
pub fn find_jie(jd_ut: f64, direction: SearchDirection) -> Result<JieEvent, CalendarError> {
    let current = month_index(solar_longitude_deg(jd_ut));
    let index = match direction {
        SearchDirection::Forward => (current + 1) % 12,
        SearchDirection::Backward => current,
    };
    let target = jie_longitude(index);
    let f_at = |t: f64| wrap_180(solar_longitude_deg(t) - target);

    let step = match direction {
        SearchDirection::Forward => STEP_DAYS,
        SearchDirection::Backward => -STEP_DAYS,
    };
    let max_steps = (MAX_SCAN_DAYS / STEP_DAYS).ceil() as usize;

    let mut t_prev = jd_ut;
    let mut f_prev = f_at(t_prev);
    if f_prev == 0.0 {
        return Ok(event(t_prev, index));
    }

    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let f_curr = f_at(t_curr);

        if f_prev * f_curr <= 0.0 {
            let (t_a, f_a, t_b) = if t_prev < t_curr {
                (t_prev, f_prev, t_curr)
            } else {
                (t_curr, f_curr, t_prev)
            };
            let t = bisect_zero(t_a, f_a, t_b, MAX_ITERATIONS, CONVERGENCE_DAYS, &f_at);
            tracing::trace!(jd = t, term = JIE_NAMES[index as usize], "jie crossing");
            return Ok(event(t, index));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Err(CalendarError::SearchFailed(
        "no sectional term within 40 days",
    ))
}

fn event(jd_ut: f64, index: u8) -> JieEvent {
    JieEvent {
        jd_ut,
        index,
        longitude_deg: jie_longitude(index),
        name: JIE_NAMES[index as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yinyang_time::calendar_to_jd;

    #[test]
    fn bisect_linear() {
        let t = bisect_zero(0.0, -1.0, 4.0, 60, 1e-9, &|t| t - 1.5);
        assert!((t - 1.5).abs() < 1e-8);
    }

    #[test]
    fn lichun_2024() {
        // 立春 2024: 2024-02-04 08:27 UTC
        let jd = calendar_to_jd(2024, 1, 20, 0.0);
        let e = find_jie(jd, SearchDirection::Forward).unwrap();
        assert_eq!(e.name, "立春");
        assert_eq!(e.index, 0);
        let expected = calendar_to_jd(2024, 2, 4, 8.0 * 60.0 + 27.0);
        assert!((e.jd_ut - expected).abs() < 0.02, "jd = {}", e.jd_ut);
    }

    #[test]
    fn backward_finds_opening_term() {
        // mid-May lies in the 巳 month opened by 立夏
        let jd = calendar_to_jd(2020, 5, 20, 0.0);
        let e = find_jie(jd, SearchDirection::Backward).unwrap();
        assert_eq!(e.name, "立夏");
        assert!(e.jd_ut < jd);
        assert!(jd - e.jd_ut < 31.0);
    }

    #[test]
    fn forward_and_backward_bracket_the_moment() {
        let jd = calendar_to_jd(1990, 9, 1, 600.0);
        let next = find_jie(jd, SearchDirection::Forward).unwrap();
        let prev = find_jie(jd, SearchDirection::Backward).unwrap();
        assert!(prev.jd_ut <= jd && jd < next.jd_ut);
        assert_eq!((prev.index + 1) % 12, next.index);
        let span = next.jd_ut - prev.jd_ut;
        assert!((29.0..32.5).contains(&span), "span = {span}");
    }
}
