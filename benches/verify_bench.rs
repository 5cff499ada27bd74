use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use namecheck::{InMemoryTargetStore, Matcher, Verifier, VerifierConfig};

const PAIRS: &[(&str, &str, &str)] = &[
    ("exact", "Ahmed Al-Rashid", "Ahmed Al-Rashid"),
    ("nickname", "William Smith", "Bill Smith"),
    ("unrelated", "Ahmed Al-Rashid", "John Smith"),
    ("long", "Abdul Rahman Ibn Khalid Al-Farsi", "Abdulrahman ibn Khaled Al Farsi"),
];

fn bench_verify(c: &mut Criterion) {
    let verifier = Verifier::new(
        Arc::new(InMemoryTargetStore::new()),
        &VerifierConfig::default(),
    )
    .expect("default config");
    let mut group = c.benchmark_group("verify_pair");

    for (label, target, candidate) in PAIRS {
        group.bench_with_input(BenchmarkId::from_parameter(label), &(target, candidate), |b, (t, c)| {
            b.iter(|| verifier.verify_pair(black_box(t), black_box(c)))
        });
    }
    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let matcher = Matcher::default();
    let target: Vec<String> = ["abdulrahman", "ibnkhalid", "alfarsi"].map(String::from).to_vec();
    let candidate: Vec<String> = ["abdulrahman", "ibnkhaled", "alfarsi"].map(String::from).to_vec();

    c.bench_function("compute_similarity", |b| {
        b.iter(|| matcher.compute_similarity(black_box(&target), black_box(&candidate)))
    });
}

criterion_group!(benches, bench_verify, bench_metrics);
criterion_main!(benches);
