use criterion::{criterion_group, criterion_main, Criterion};
use run_dashboard::models::Dashboard;
use run_dashboard::services::{FetchResult, FixtureSource, LeaderboardLimits};
use std::hint::black_box;

/// Replicate the fixture up to a full five-page fetch (1000 activities).
fn full_fetch() -> FetchResult {
    let fixture = FixtureSource::load_from_file("data/activities.json")
        .expect("Failed to load fixture");

    let activities = fixture
        .activities()
        .iter()
        .cycle()
        .take(1000)
        .enumerate()
        .map(|(i, a)| {
            let mut a = a.clone();
            a.id = i as u64;
            // Spread speeds and distances so sorts do real work
            a.average_speed *= 1.0 + (i % 37) as f64 / 100.0;
            a.distance *= 1.0 + (i % 23) as f64 / 50.0;
            a
        })
        .collect();

    FetchResult {
        activities,
        pages_fetched: 5,
    }
}

fn benchmark_dashboard_build(c: &mut Criterion) {
    let fetched = full_fetch();
    let limits = LeaderboardLimits::default();

    let mut group = c.benchmark_group("dashboard");

    group.bench_function("build_full_fetch", |b| {
        b.iter(|| Dashboard::build(black_box(&fetched), black_box(&limits)))
    });

    group.bench_function("most_recent_runs", |b| {
        b.iter(|| {
            run_dashboard::services::leaderboard::most_recent_runs(
                black_box(&fetched.activities),
                5,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_dashboard_build);
criterion_main!(benches);
