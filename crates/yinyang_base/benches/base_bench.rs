use criterion::{Criterion, black_box, criterion_group, criterion_main};
use yinyang_base::{
    Branch, Chart, GanZhi, Ruleset, SlotWeights, StrengthRules, allocate_energy,
    classify_pattern, tag_chart, tai_sui, year_shensha,
};

fn sample_chart() -> Chart {
    Chart::new(
        GanZhi::from_cycle_index(6),
        GanZhi::from_cycle_index(17),
        GanZhi::from_cycle_index(0),
        GanZhi::from_cycle_index(2),
    )
}

fn energy_bench(c: &mut Criterion) {
    let chart = sample_chart();
    let mut group = c.benchmark_group("energy");
    group.bench_function("allocate_classic", |b| {
        b.iter(|| allocate_energy(black_box(&chart), &SlotWeights::CLASSIC))
    });
    group.bench_function("allocate_and_classify", |b| {
        let rules = Ruleset::classic();
        b.iter(|| {
            let e = allocate_energy(black_box(&chart), &rules.weights);
            classify_pattern(
                &e,
                chart.day_master().element(),
                chart.month_branch(),
                &StrengthRules::FOUR_TIER,
            )
        })
    });
    group.finish();
}

fn marker_bench(c: &mut Criterion) {
    let chart = sample_chart();
    let mut group = c.benchmark_group("markers");
    group.bench_function("tag_chart", |b| b.iter(|| tag_chart(black_box(&chart))));
    group.bench_function("year_shensha_60", |b| {
        b.iter(|| {
            (0..60)
                .map(|i| year_shensha(&chart, GanZhi::from_cycle_index(black_box(i))).len())
                .sum::<usize>()
        })
    });
    group.bench_function("tai_sui_12x12", |b| {
        b.iter(|| {
            let mut n = 0;
            for a in 0..12 {
                for y in 0..12 {
                    if tai_sui(Branch::from_index(a), Branch::from_index(black_box(y))).is_some() {
                        n += 1;
                    }
                }
            }
            n
        })
    });
    group.finish();
}

criterion_group!(benches, energy_bench, marker_bench);
criterion_main!(benches);
