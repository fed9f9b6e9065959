// Criterion benchmarks for Court Finder

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use court_finder::core::{nearest_court_of_type, sum_current_time};
use court_finder::models::CourtRecord;

const COURT_TYPES: [&str; 4] = ["Tribunal", "County Court", "Family Court", "Magistrates' Court"];

fn create_courts(count: usize) -> Vec<CourtRecord> {
    (0..count)
        .map(|i| CourtRecord {
            name: format!("Court {}", i),
            dx_number: if i % 2 == 0 { Some(format!("{} London", i)) } else { None },
            distance: ((count - i) as f64) * 0.37,
            types: vec![COURT_TYPES[i % COURT_TYPES.len()].to_string()],
        })
        .collect()
}

fn bench_nearest_court(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_court_of_type");

    // The API returns at most ten courts; larger sizes show the scan's scaling
    for size in [10, 100, 1000].iter() {
        let courts = create_courts(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &courts, |b, courts| {
            b.iter(|| nearest_court_of_type(black_box(courts), black_box("Tribunal")))
        });
    }

    group.finish();
}

fn bench_sum_current_time(c: &mut Criterion) {
    c.bench_function("sum_current_time", |b| {
        b.iter(|| sum_current_time(black_box("21:21:21")))
    });
}

criterion_group!(benches, bench_nearest_court, bench_sum_current_time);
criterion_main!(benches);
