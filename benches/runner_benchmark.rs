//! Runner benchmark: Measure draw throughput and formatting cost.
//!
//! With a zero interval the loop is bound by these, not by the timer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lottery::sim::{format_duration, format_money, RandomDraw, TickOutcome};
use lottery::{SimulationConfig, SimulationRunner};
use std::time::{Duration, Instant};

fn tick_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("runner_tick");

    for chances in [10u64, 25_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(chances), &chances, |b, &chances| {
            let config = SimulationConfig::from_millis(chances, 0, 0.5);
            let mut runner = SimulationRunner::new(RandomDraw::seeded(42), 100);
            let now = Instant::now();
            runner.start(config, now);
            b.iter(|| {
                if runner.tick(black_box(now)) == TickOutcome::Won {
                    runner.start(config, now);
                }
            });
        });
    }

    group.finish();
}

fn random_draw_start(c: &mut Criterion) {
    c.bench_function("runner_start_random", |b| {
        let mut runner = SimulationRunner::new(RandomDraw::seeded(7), 100);
        let config = SimulationConfig::from_millis(25_000_000, 1000, 0.5);
        let now = Instant::now();
        b.iter(|| black_box(runner.start(black_box(config), now)));
    });
}

fn money_formatting(c: &mut Criterion) {
    c.bench_function("format_money_large", |b| {
        b.iter(|| format_money(black_box(12_500_000.5)));
    });
    c.bench_function("format_money_small", |b| {
        b.iter(|| format_money(black_box(0.5)));
    });
}

fn duration_formatting(c: &mut Criterion) {
    c.bench_function("format_duration_hours", |b| {
        b.iter(|| format_duration(black_box(Duration::from_secs(6944 * 3600))));
    });
}

criterion_group!(
    benches,
    tick_throughput,
    random_draw_start,
    money_formatting,
    duration_formatting
);
criterion_main!(benches);
