// ABOUTME: Criterion benchmarks for the BMI engine
// ABOUTME: Measures calculation, classification, full assessment, and cached assessment throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

//! Criterion benchmarks for the BMI engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use bmi_calculator::config::BmiConfig;
use bmi_calculator::intelligence::{calculate_bmi, AssessmentCache, BmiEngine, CategoryTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Deterministic spread of in-range height/weight pairs
#[allow(clippy::cast_precision_loss)]
fn generate_inputs(count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|index| {
            let height = 140.0 + ((index * 37) % 700) as f64 / 10.0;
            let weight = 40.0 + ((index * 53) % 1100) as f64 / 10.0;
            (height, weight)
        })
        .collect()
}

fn bench_calculate(c: &mut Criterion) {
    let config = BmiConfig::default();
    c.bench_function("calculate_bmi", |b| {
        b.iter(|| calculate_bmi(black_box(170.0), black_box(70.0), &config));
    });
}

fn bench_classify(c: &mut Criterion) {
    let table = CategoryTable::who();
    let mut group = c.benchmark_group("classify");
    for bmi in [16.9, 24.2, 27.5, 33.2] {
        group.bench_with_input(BenchmarkId::from_parameter(bmi), &bmi, |b, &bmi| {
            b.iter(|| table.classify(black_box(bmi)).map(|r| r.category));
        });
    }
    group.finish();
}

fn bench_assessment(c: &mut Criterion) {
    let Ok(engine) = BmiEngine::new(BmiConfig::default()) else {
        return;
    };
    let inputs = generate_inputs(1_000);

    let mut group = c.benchmark_group("assessment");
    group.throughput(Throughput::Elements(inputs.len() as u64));

    group.bench_function("uncached", |b| {
        b.iter(|| {
            inputs
                .iter()
                .filter_map(|&(h, w)| engine.assess(black_box(h), black_box(w)).ok())
                .count()
        });
    });

    group.bench_function("cached", |b| {
        let mut cache = AssessmentCache::new(256);
        b.iter(|| {
            inputs
                .iter()
                .take(64)
                .cycle()
                .take(inputs.len())
                .filter_map(|&(h, w)| cache.assess(&engine, black_box(h), black_box(w)).ok())
                .count()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_calculate, bench_classify, bench_assessment);
criterion_main!(benches);
