use criterion::{Criterion, black_box, criterion_group, criterion_main};
use yinyang_base::{Gender, Ruleset, allocate_energy, classify_pattern};
use yinyang_calendar::{CalendarEngine, SolarTermCalendar};
use yinyang_time::CivilDateTime;
use yinyang_trend::{NatalInput, TrendProjector, TrendWindow};

fn trend_bench(c: &mut Criterion) {
    let ruleset = Ruleset::classic();
    let cal = SolarTermCalendar::default();
    let birth = CivilDateTime::new(1990, 5, 20, 4, 0);
    let chart = cal.chart(&birth).expect("chart");
    let energy = allocate_energy(&chart, &ruleset.weights);
    let pattern = classify_pattern(
        &energy,
        chart.day_master().element(),
        chart.month_branch(),
        &ruleset.strength,
    );
    let decades = cal
        .decade_cycles(&birth, &chart, Gender::Male)
        .expect("decades");
    let natal = NatalInput {
        chart: &chart,
        pattern: &pattern,
        gender: Gender::Male,
    };
    let projector = TrendProjector::from_ruleset(&ruleset);

    let mut group = c.benchmark_group("trend");
    group.bench_function("project_80_years", |b| {
        b.iter(|| projector.project(black_box(&natal), &decades, TrendWindow::from_year(1990)))
    });
    group.bench_function("score_single_year", |b| {
        let year = decades[1].years[0];
        b.iter(|| projector.score_year(black_box(&natal), year))
    });
    group.finish();

    let mut group = c.benchmark_group("calendar");
    group.bench_function("chart", |b| b.iter(|| cal.chart(black_box(&birth))));
    group.bench_function("decade_cycles", |b| {
        b.iter(|| cal.decade_cycles(black_box(&birth), &chart, Gender::Male))
    });
    group.finish();
}

criterion_group!(benches, trend_bench);
criterion_main!(benches);
