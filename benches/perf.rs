use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use wc_atlas::aggregate::{classify_year, map_universe, win_counts, win_profiles};
use wc_atlas::countries;
use wc_atlas::dataset::FinalRecord;

const WINNERS: [&str; 8] = [
    "Brazil",
    "Germany",
    "Italy",
    "Argentina",
    "France",
    "Uruguay",
    "Spain",
    "Netherlands",
];

// Far larger than the real table so the derived-table passes dominate.
fn synthetic_finals(n: usize) -> Vec<FinalRecord> {
    (0..n)
        .map(|i| FinalRecord {
            year: 1900 + i as u16,
            winner: WINNERS[i % WINNERS.len()].to_string(),
            runner_up: WINNERS[(i + 1) % WINNERS.len()].to_string(),
            score: "2-1".to_string(),
            venue: "Synthetic Stadium".to_string(),
            attendance: 40_000 + (i as u32 % 50_000),
        })
        .collect()
}

fn bench_win_counts(c: &mut Criterion) {
    let finals = synthetic_finals(4_000);
    c.bench_function("win_counts", |b| {
        b.iter(|| {
            let counts = win_counts(black_box(&finals));
            black_box(counts.len());
        })
    });
}

fn bench_map_universe(c: &mut Criterion) {
    let finals = synthetic_finals(4_000);
    let counts = win_counts(&finals);
    c.bench_function("map_universe", |b| {
        b.iter(|| {
            let entries = map_universe(countries::reference_names(), black_box(&counts));
            black_box(entries.len());
        })
    });
}

fn bench_win_profiles(c: &mut Criterion) {
    let finals = synthetic_finals(4_000);
    c.bench_function("win_profiles", |b| {
        b.iter(|| {
            let profiles = win_profiles(black_box(&finals));
            black_box(profiles.len());
        })
    });
}

fn bench_classify_year(c: &mut Criterion) {
    let finals = synthetic_finals(4_000);
    c.bench_function("classify_year", |b| {
        b.iter(|| {
            let rows = classify_year(black_box(&finals), black_box(3_900)).unwrap();
            black_box(rows.len());
        })
    });
}

criterion_group!(
    benches,
    bench_win_counts,
    bench_map_universe,
    bench_win_profiles,
    bench_classify_year
);
criterion_main!(benches);
