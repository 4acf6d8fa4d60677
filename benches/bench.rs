//! Criterion benchmarks for Stemma.
//!
//! Covers:
//! - Single word stemming through the full pipeline
//! - The structural measure on its own
//! - Sequential versus parallel batch stemming

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use stemma::batch::BatchStemmer;
use stemma::porter::PorterStemmer;
use stemma::porter::measure::degree;
use stemma::stemmer::Stemmer;
use std::hint::black_box;

/// Generate a word list for benchmarking.
fn generate_words(count: usize) -> Vec<String> {
    let words = [
        "caresses",
        "ponies",
        "relational",
        "conditional",
        "generalization",
        "electrical",
        "hopefulness",
        "controlled",
        "adjustment",
        "probate",
        "running",
        "happiness",
        "stemming",
        "normalization",
        "retrieval",
        "sky",
    ];

    words
        .iter()
        .cycle()
        .take(count)
        .map(|word| word.to_string())
        .collect()
}

fn bench_single_word(c: &mut Criterion) {
    let stemmer = PorterStemmer::new();
    let mut group = c.benchmark_group("stem");

    for word in ["sky", "controlled", "generalization"] {
        group.bench_with_input(BenchmarkId::from_parameter(word), word, |b, word| {
            b.iter(|| stemmer.stem(black_box(word)))
        });
    }

    group.finish();
}

fn bench_degree(c: &mut Criterion) {
    c.bench_function("degree", |b| {
        b.iter(|| degree(black_box("internationalization")))
    });
}

fn bench_batch(c: &mut Criterion) {
    let words = generate_words(10_000);
    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(words.len() as u64));

    let sequential = BatchStemmer::default().with_parallel_threshold(usize::MAX);
    group.bench_function("sequential", |b| {
        b.iter(|| sequential.stem_all(black_box(&words)))
    });

    let parallel = BatchStemmer::default().with_parallel_threshold(1);
    group.bench_function("parallel", |b| {
        b.iter(|| parallel.stem_all(black_box(&words)))
    });

    group.finish();
}

criterion_group!(benches, bench_single_word, bench_degree, bench_batch);
criterion_main!(benches);
