//! Throughput benchmarks for SHA-256
//!
//! Compares the one-shot path, the incremental hasher and the async builder
//! across input sizes.

#![allow(clippy::expect_used, missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cryypt_sha256::{Hash, Sha256};
use tokio::runtime::Runtime;

/// Benchmark the one-shot and incremental paths with different data sizes
fn benchmark_hash_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256_throughput");

    // 1KB, 64KB, 1MB
    let sizes = [1024, 65536, 1_048_576];

    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));

        let data = vec![0u8; *size];

        group.bench_with_input(BenchmarkId::new("one_shot", size), &data, |b, data| {
            b.iter(|| {
                let digest = cryypt_sha256::hash(data).expect("hash should succeed");
                std::hint::black_box(digest);
            });
        });

        group.bench_with_input(BenchmarkId::new("incremental_4k", size), &data, |b, data| {
            b.iter(|| {
                let mut hasher = Sha256::new();
                for chunk in data.chunks(4096) {
                    hasher.update(chunk).expect("update should succeed");
                }
                std::hint::black_box(hasher.finalize().expect("finalize should succeed"));
            });
        });
    }
    group.finish();
}

/// Benchmark builder overhead on top of the core
fn benchmark_builder_performance(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("builder_overhead");

    let data = vec![0u8; 1024]; // 1KB test data

    group.bench_function("builder_compute", |b| {
        b.iter(|| {
            rt.block_on(async {
                let digest = Hash::sha256()
                    .compute(data.clone())
                    .await
                    .expect("Hash should succeed");
                std::hint::black_box(digest);
            });
        });
    });

    group.bench_function("direct_computation", |b| {
        b.iter(|| {
            let digest = cryypt_sha256::hash(&data).expect("Hash should succeed");
            std::hint::black_box(digest);
        });
    });

    group.finish();
}

/// Benchmark concurrent independent computations
fn benchmark_concurrent_operations(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("concurrent_operations");

    let data = vec![0u8; 65536];

    group.bench_function("concurrent_4_ops", |b| {
        b.iter(|| {
            rt.block_on(async {
                let tasks = (0..4)
                    .map(|_| Hash::sha256().compute(data.clone()))
                    .collect::<Vec<_>>();

                let results = futures::future::try_join_all(tasks)
                    .await
                    .expect("All hashes should succeed");
                std::hint::black_box(results);
            });
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_hash_throughput,
    benchmark_builder_performance,
    benchmark_concurrent_operations
);
criterion_main!(benches);
