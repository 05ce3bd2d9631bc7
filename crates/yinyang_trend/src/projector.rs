//! Trend projection over the decade/year luck cycle.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use yinyang_base::{
    Chart, Decade, GanZhi, Gender, Marker, Pattern, Ruleset, ShenSha, TaiSuiRelations,
    TrendRules, YearCycle, year_shensha,
};

use crate::dimension::{ALL_DIMENSIONS, Dimension};
use crate::error::TrendError;
use crate::jitter::Jitter;
use crate::scoring::{YearContext, adjust, base_score};

/// Years projected when no count is given.
pub const DEFAULT_COUNT: u32 = 80;

/// Calendar years to project: `start_year ..= start_year + count - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendWindow {
    pub start_year: i32,
    pub count: u32,
}

impl TrendWindow {
    pub const fn new(start_year: i32, count: u32) -> Self {
        Self { start_year, count }
    }

    /// Default-length window starting at `start_year`.
    pub const fn from_year(start_year: i32) -> Self {
        Self::new(start_year, DEFAULT_COUNT)
    }
}

/// Natal inputs of a projection.
#[derive(Debug, Clone, Copy)]
pub struct NatalInput<'a> {
    pub chart: &'a Chart,
    pub pattern: &'a Pattern,
    pub gender: Gender,
}

/// Score of one dimension in one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearPoint {
    pub year: i32,
    #[serde(serialize_with = "ganzhi_text")]
    pub ganzhi: GanZhi,
    pub score: i32,
    pub markers: Vec<Marker>,
}

fn ganzhi_text<S: Serializer>(ganzhi: &GanZhi, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(ganzhi)
}

/// One dimension's year points in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionSeries {
    pub dimension: Dimension,
    pub points: Vec<YearPoint>,
}

impl Serialize for DimensionSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("key", self.dimension.key())?;
        map.serialize_entry("name", self.dimension.chinese())?;
        map.serialize_entry("data", &self.points)?;
        map.end()
    }
}

/// Seven-dimension trend, one series per dimension in `ALL_DIMENSIONS` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    series: Vec<DimensionSeries>,
}

impl Trend {
    pub fn series(&self, dimension: Dimension) -> &DimensionSeries {
        &self.series[dimension.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionSeries> {
        self.series.iter()
    }

    /// Number of projected years.
    pub fn len(&self) -> usize {
        self.series.first().map_or(0, |s| s.points.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scores of `dimension` as (year, score) pairs.
    pub fn scores(&self, dimension: Dimension) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.series(dimension).points.iter().map(|p| (p.year, p.score))
    }
}

impl Serialize for Trend {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.series.len()))?;
        for s in &self.series {
            map.serialize_entry(s.dimension.key(), s)?;
        }
        map.end()
    }
}

/// Year-by-year scorer parameterised by trend rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendProjector {
    rules: TrendRules,
    jitter: Jitter,
}

impl TrendProjector {
    pub const fn new(rules: TrendRules) -> Self {
        Self {
            rules,
            jitter: Jitter::new(rules.jitter),
        }
    }

    pub const fn from_ruleset(ruleset: &Ruleset) -> Self {
        Self::new(ruleset.trend)
    }

    pub const fn rules(&self) -> &TrendRules {
        &self.rules
    }

    /// Walk the cycle in order and score every year of the window.
    ///
    /// The cycle must be contiguous and cover the whole window; every series
    /// of the result holds exactly `window.count` points.
    pub fn project(
        &self,
        natal: &NatalInput<'_>,
        decades: &[Decade],
        window: TrendWindow,
    ) -> Result<Trend, TrendError> {
        if window.count == 0 {
            return Err(TrendError::ZeroCount);
        }
        let years = decades.iter().flat_map(|d| d.years.iter());
        let (first, last) = match (years.clone().next(), years.clone().last()) {
            (Some(f), Some(l)) => (f.year, l.year),
            _ => return Err(TrendError::EmptyCycle),
        };
        if window.start_year < first || window.start_year > last {
            return Err(TrendError::WindowNotCovered {
                start: window.start_year,
                first,
                last,
            });
        }

        let mut series: [Vec<YearPoint>; 7] = Default::default();
        let mut previous: Option<i32> = None;
        let mut emitted = 0u32;
        for cycle in years {
            if let Some(prev) = previous {
                if cycle.year != prev + 1 {
                    return Err(TrendError::NonContiguous {
                        previous: prev,
                        found: cycle.year,
                    });
                }
            }
            previous = Some(cycle.year);
            if cycle.year < window.start_year {
                continue;
            }
            for (points, point) in series.iter_mut().zip(self.score_year(natal, *cycle)) {
                points.push(point);
            }
            emitted += 1;
            if emitted == window.count {
                break;
            }
        }

        if emitted < window.count {
            return Err(TrendError::CycleTooShort {
                start: window.start_year,
                requested: window.count,
                available: emitted,
            });
        }
        tracing::debug!(start = window.start_year, years = emitted, "trend projected");

        Ok(Trend {
            series: ALL_DIMENSIONS
                .into_iter()
                .zip(series)
                .map(|(dimension, points)| DimensionSeries { dimension, points })
                .collect(),
        })
    }

    /// All seven points of one cycle year, in `ALL_DIMENSIONS` order.
    pub fn score_year(&self, natal: &NatalInput<'_>, cycle: YearCycle) -> [YearPoint; 7] {
        let chart = natal.chart;
        let base = base_score(
            &self.rules,
            natal.pattern,
            chart.day_master().element(),
            cycle.ganzhi,
        );
        let ctx = YearContext::new(chart, natal.gender, cycle);

        let points = ALL_DIMENSIONS.map(|dimension| match dimension {
            Dimension::Overall => self.overall(chart, cycle, base),
            _ => self.dimension(dimension, &ctx, base),
        });
        tracing::trace!(
            year = cycle.year,
            ganzhi = %cycle.ganzhi,
            base,
            overall = points[0].score,
            "year scored"
        );
        points
    }

    fn overall(&self, chart: &Chart, cycle: YearCycle, base: i32) -> YearPoint {
        let mut score = base;
        let mut markers = Vec::new();

        let relations = TaiSuiRelations::between(chart.year_branch(), cycle.ganzhi.branch);
        if let Some(relation) = relations.primary() {
            score -= self.rules.tai_sui.penalty(relation);
            markers.push(relation.marker());
        }
        markers.extend(
            year_shensha(chart, cycle.ganzhi)
                .into_iter()
                .map(ShenSha::marker),
        );

        score += self.jitter.offset(cycle.year, Dimension::Overall);
        YearPoint {
            year: cycle.year,
            ganzhi: cycle.ganzhi,
            score: self.rules.overall_range.clamp(score),
            markers,
        }
    }

    fn dimension(&self, dimension: Dimension, ctx: &YearContext<'_>, base: i32) -> YearPoint {
        let (start, range) = if dimension.is_family() {
            (self.rules.family_base, self.rules.family_range)
        } else {
            (base, self.rules.dimension_range)
        };
        let adjustment = adjust(dimension, ctx);
        let score = start + adjustment.delta + self.jitter.offset(ctx.cycle.year, dimension);
        YearPoint {
            year: ctx.cycle.year,
            ganzhi: ctx.cycle.ganzhi,
            score: range.clamp(score),
            markers: adjustment.markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yinyang_base::{Classification, Climate, Element, summarize_decades};

    fn natal_chart() -> Chart {
        "丙子 戊戌 甲午 丙寅".parse().unwrap()
    }

    fn natal_pattern() -> Pattern {
        Pattern {
            classification: Classification::BalancedStrong,
            strong: true,
            self_support: 50.0,
            climate: Climate::Neutral,
            favorable: vec![Element::Metal, Element::Fire, Element::Earth],
        }
    }

    fn decades(from: i32, lengths: &[i32]) -> Vec<Decade> {
        let mut start = from;
        lengths
            .iter()
            .enumerate()
            .map(|(i, &len)| {
                let d = Decade {
                    index: i as u32,
                    ganzhi: (i > 0).then(|| GanZhi::from_cycle_index(i as i64)),
                    start_year: start,
                    end_year: start + len - 1,
                    start_age: start - from + 1,
                    years: (start..start + len)
                        .map(|year| YearCycle {
                            year,
                            ganzhi: GanZhi::from_cycle_index(year as i64 - 4),
                        })
                        .collect(),
                };
                start += len;
                d
            })
            .collect()
    }

    fn projector() -> TrendProjector {
        TrendProjector::from_ruleset(&Ruleset::classic().without_jitter())
    }

    #[test]
    fn window_spans_decades() {
        let chart = natal_chart();
        let pattern = natal_pattern();
        let natal = NatalInput {
            chart: &chart,
            pattern: &pattern,
            gender: Gender::Male,
        };
        let cycle = decades(1996, &[3, 10, 10, 10]);
        assert_eq!(summarize_decades(&cycle).len(), 3);
        let trend = projector()
            .project(&natal, &cycle, TrendWindow::new(2000, 15))
            .unwrap();
        assert_eq!(trend.len(), 15);
        for s in trend.iter() {
            let years: Vec<_> = s.points.iter().map(|p| p.year).collect();
            assert_eq!(years, (2000..2015).collect::<Vec<_>>());
        }
    }

    #[test]
    fn window_errors() {
        let chart = natal_chart();
        let pattern = natal_pattern();
        let natal = NatalInput {
            chart: &chart,
            pattern: &pattern,
            gender: Gender::Male,
        };
        let p = projector();
        let cycle = decades(1996, &[4, 10]);
        assert_eq!(
            p.project(&natal, &cycle, TrendWindow::new(2000, 0)),
            Err(TrendError::ZeroCount)
        );
        assert_eq!(
            p.project(&natal, &cycle, TrendWindow::new(1990, 5)),
            Err(TrendError::WindowNotCovered {
                start: 1990,
                first: 1996,
                last: 2009
            })
        );
        assert_eq!(p.project(&natal, &[], TrendWindow::from_year(2000)), Err(TrendError::EmptyCycle));

        let mut gapped = decades(1996, &[4, 10]);
        gapped[1].years.remove(3);
        assert_eq!(
            p.project(&natal, &gapped, TrendWindow::new(1996, 10)),
            Err(TrendError::NonContiguous {
                previous: 2002,
                found: 2004
            })
        );
    }

    #[test]
    fn short_cycle_is_an_error() {
        let chart = natal_chart();
        let pattern = natal_pattern();
        let natal = NatalInput {
            chart: &chart,
            pattern: &pattern,
            gender: Gender::Female,
        };
        // 1996..=2009: five years left from 2005
        let cycle = decades(1996, &[4, 10]);
        let p = projector();
        assert_eq!(
            p.project(&natal, &cycle, TrendWindow::new(2005, 20)),
            Err(TrendError::CycleTooShort {
                start: 2005,
                requested: 20,
                available: 5,
            })
        );
        let exact = p.project(&natal, &cycle, TrendWindow::new(2005, 5)).unwrap();
        for series in exact.iter() {
            assert_eq!(series.points.len(), 5);
            assert_eq!(series.points[4].year, 2009);
        }
    }

    #[test]
    fn tai_sui_clash_scores_and_marks() {
        // 子 birth year, 2026 丙午 clashes: fire favorable 10 + 20, minus 15
        let chart = natal_chart();
        let pattern = natal_pattern();
        let natal = NatalInput {
            chart: &chart,
            pattern: &pattern,
            gender: Gender::Male,
        };
        let cycle = YearCycle {
            year: 2026,
            ganzhi: "丙午".parse().unwrap(),
        };
        let points = projector().score_year(&natal, cycle);
        let overall = &points[Dimension::Overall.index()];
        assert_eq!(overall.score, 50 + 10 + 20 - 15);
        assert_eq!(overall.markers[0].key, "tai_sui_clash");
        // dimensions start from the pre-Tai-Sui base of 80; no love rule fires
        let love = &points[Dimension::Love.index()];
        assert_eq!(love.score, 80);
        assert!(love.markers.is_empty());
    }

    #[test]
    fn serializes_as_keyed_map() {
        let chart = natal_chart();
        let pattern = natal_pattern();
        let natal = NatalInput {
            chart: &chart,
            pattern: &pattern,
            gender: Gender::Male,
        };
        let cycle = decades(2020, &[10]);
        let trend = projector()
            .project(&natal, &cycle, TrendWindow::new(2024, 1))
            .unwrap();
        let json = serde_json::to_value(&trend).unwrap();
        assert_eq!(json["career"]["name"], "事业运");
        assert_eq!(json["overall"]["data"][0]["ganzhi"], "甲辰");
        assert_eq!(json["overall"]["data"][0]["year"], 2024);
    }
}
