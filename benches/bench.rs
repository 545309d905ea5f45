// Criterion benchmarks for Name Matcher

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use name_matcher::core::{
    features::extract_features,
    metrics::{edit_distance, soundex_code},
    NameMatcher,
};

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Aditya", "Amit", "Ananya", "Arjun", "Deepak", "Divya", "Gaurav", "Ishaan",
    "Kavita", "Krishna", "Lakshmi", "Manish", "Neha", "Pooja", "Rahul", "Ravi", "Sanjay",
    "Shreya", "Suresh", "Varun", "Vikram", "Yash",
];

const SURNAMES: &[&str] = &[
    "Sharma", "Patel", "Kumar", "Singh", "Gupta", "Verma", "Mishra", "Joshi", "Chauhan",
    "Yadav", "Agarwal", "Mehta", "Choudhary", "Shah", "Trivedi",
];

fn candidate_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            format!(
                "{} {}",
                FIRST_NAMES[i % FIRST_NAMES.len()],
                SURNAMES[(i / FIRST_NAMES.len()) % SURNAMES.len()]
            )
        })
        .collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    c.bench_function("edit_distance", |b| {
        b.iter(|| edit_distance(black_box("krishna choudhary"), black_box("krisna chaudhari")));
    });
}

fn bench_soundex(c: &mut Criterion) {
    c.bench_function("soundex_code", |b| {
        b.iter(|| soundex_code(black_box("choudhary")));
    });
}

fn bench_extract_features(c: &mut Criterion) {
    c.bench_function("extract_features", |b| {
        b.iter(|| extract_features(black_box("Vikram Gupta"), black_box("Bikram Gupta")));
    });
}

fn bench_search(c: &mut Criterion) {
    let sequential = NameMatcher::with_default_importance().with_parallel_min_candidates(usize::MAX);
    let parallel = NameMatcher::with_default_importance().with_parallel_min_candidates(1);

    let mut group = c.benchmark_group("find_matches");

    for candidate_count in [10, 100, 1000, 5000].iter() {
        let candidates = candidate_names(*candidate_count);

        group.bench_with_input(
            BenchmarkId::new("sequential", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    sequential.find_matches(black_box("Suresh Kumar"), black_box(&candidates), 0.5)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    parallel.find_matches(black_box("Suresh Kumar"), black_box(&candidates), 0.5)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_edit_distance,
    bench_soundex,
    bench_extract_features,
    bench_search
);

criterion_main!(benches);
