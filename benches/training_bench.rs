// ABOUTME: Criterion benchmarks for training summaries
// ABOUTME: Measures per-variant summary computation and the batch path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for training summaries.

#![allow(clippy::missing_docs_in_private_items, clippy::panic, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use workout_tracker::batch::summarize_packages;
use workout_tracker::models::WorkoutCode;
use workout_tracker::packages::{sample_packages, WorkoutPackage};

/// Batch size for the batch benchmarks
const BATCH_SIZE: u32 = 3000;

fn generate_packages(count: u32) -> Vec<WorkoutPackage> {
    (0..count)
        .map(|index| {
            let steps = f64::from(1000 + (index * 137) % 20_000);
            let hours = 0.5 + f64::from(index % 4) * 0.25;
            match index % 3 {
                0 => WorkoutPackage::new(WorkoutCode::Run, [steps, hours, 70.0]),
                1 => WorkoutPackage::new(WorkoutCode::Wlk, [steps, hours, 65.0, 172.0]),
                _ => WorkoutPackage::new(
                    WorkoutCode::Swm,
                    [steps, hours, 80.0, 25.0, f64::from(index % 80)],
                ),
            }
        })
        .collect()
}

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");
    for package in sample_packages() {
        let training = package.read().unwrap_or_else(|e| panic!("{e}"));
        group.bench_function(BenchmarkId::from_parameter(package.code), |b| {
            b.iter(|| black_box(training).show_training_info());
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let packages = generate_packages(BATCH_SIZE);
    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(u64::from(BATCH_SIZE)));
    for parallel in [false, true] {
        group.bench_with_input(
            BenchmarkId::new("summarize_packages", if parallel { "parallel" } else { "sequential" }),
            &packages,
            |b, packages| b.iter(|| summarize_packages(black_box(packages), parallel)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_summary, bench_batch);
criterion_main!(benches);
