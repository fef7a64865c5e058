// ABOUTME: Criterion benchmarks for the body-composition engines
// ABOUTME: Measures BMI, normal range, body fat reconciliation, and request parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Buddy Contributors

//! Criterion benchmarks for body-composition calculations.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitbuddy::requests::{execute, parse_request, CommandKind};
use fitbuddy::{
    BodyCompositionCalculator, BodyCompositionConfig, BodyFatParams, FixedUnitPolicy, Gender,
    HeightInput, WeightInput,
};

/// Generate varied body-fat inputs across both genders
#[allow(clippy::cast_precision_loss)]
fn generate_profiles(count: usize) -> Vec<BodyFatParams> {
    (0..count)
        .map(|index| {
            let female = index % 2 == 1;
            BodyFatParams {
                age: 20 + (index % 50) as u32,
                height: 155.0 + (index % 40) as f64,
                weight: 50.0 + (index % 60) as f64,
                neck: 30.0 + (index % 10) as f64,
                waist: 70.0 + (index % 35) as f64,
                gender: if female { Gender::Female } else { Gender::Male },
                hip: female.then_some(90.0 + (index % 20) as f64),
            }
        })
        .collect()
}

fn bench_bmi(c: &mut Criterion) {
    let mut group = c.benchmark_group("bmi");
    let calculator = BodyCompositionCalculator::from_config(BodyCompositionConfig::default());

    group.bench_function("scalar_metric", |b| {
        b.iter(|| calculator.bmi(black_box(70.0), black_box(170.0)));
    });

    group.bench_function("pounds_feet_inches", |b| {
        b.iter(|| {
            calculator.bmi(
                black_box(WeightInput::Pounds(154.0)),
                black_box(HeightInput::FeetInches {
                    feet: 5.0,
                    inches: 7.0,
                }),
            )
        });
    });

    group.bench_function("normal_range", |b| {
        b.iter(|| calculator.bmi_and_normal_range(black_box(180.0)));
    });

    group.finish();
}

fn bench_body_fat(c: &mut Criterion) {
    let mut group = c.benchmark_group("body_fat");
    let magnitude = BodyCompositionCalculator::from_config(BodyCompositionConfig::default());
    let metric = BodyCompositionCalculator::with_policy(
        FixedUnitPolicy::metric(),
        BodyCompositionConfig::default(),
    );

    group.bench_function("single_female_profile", |b| {
        b.iter(|| {
            magnitude.body_fat_percentage(
                black_box(25),
                black_box(177.8),
                black_box(70.0),
                black_box(50.0),
                black_box(96.0),
                black_box("F"),
                black_box(Some(92.0)),
            )
        });
    });

    for size in [100_usize, 1_000] {
        let profiles = generate_profiles(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("magnitude_policy", size), &profiles, |b, p| {
            b.iter(|| {
                for params in p {
                    let _ = magnitude.body_fat(black_box(params));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("metric_policy", size), &profiles, |b, p| {
            b.iter(|| {
                for params in p {
                    let _ = metric.body_fat(black_box(params));
                }
            });
        });
    }

    group.finish();
}

fn bench_requests(c: &mut Criterion) {
    let mut group = c.benchmark_group("requests");
    let calculator = BodyCompositionCalculator::from_config(BodyCompositionConfig::default());
    let tokens = ["25", "177.8", "70", "50", "96", "F", "92"];

    group.bench_function("parse_body_fat", |b| {
        b.iter(|| parse_request(CommandKind::BodyFat, black_box(&tokens)));
    });

    group.bench_function("parse_and_execute_body_fat", |b| {
        b.iter(|| {
            parse_request(CommandKind::BodyFat, black_box(&tokens))
                .map(|request| execute(&request, &calculator))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_bmi, bench_body_fat, bench_requests);
criterion_main!(benches);
