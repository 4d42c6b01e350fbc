// ABOUTME: Criterion benchmarks for the per-frame classifier and catalog construction
// ABOUTME: Measures frame throughput for one exercise of every recognition family
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach Contributors

//! Criterion benchmarks for the recognition engine.
//!
//! `Classifier::process` runs on the pose detector's callback thread, so its
//! per-frame cost bounds the frame rate the engine can keep up with.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use std::sync::Arc;

use common::fixtures::{generate_frames, FrameBatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use formcoach::replay::{replay_frames, ReplayFrame};
use formcoach_intelligence::{Classifier, ExerciseCatalog, SessionState};

/// One exercise per recognition family
const FAMILY_REPRESENTATIVES: [&str; 10] = [
    "SQUAT",
    "PLANK",
    "HIGH KNEES",
    "PULL-UPS",
    "BIRD-DOG",
    "RUSSIAN TWIST",
    "MOUNTAIN CLIMBER",
    "PLANK JACKS",
    "SHOULDER TAPS",
    "BURPEES",
];

fn bench_catalog_build(c: &mut Criterion) {
    c.bench_function("catalog_builtin", |b| {
        b.iter(|| black_box(ExerciseCatalog::builtin()));
    });
}

fn bench_family_throughput(c: &mut Criterion) {
    let catalog = ExerciseCatalog::builtin().unwrap_or_default();
    let frames = generate_frames(FrameBatchSize::Second.count());

    let mut group = c.benchmark_group("classifier_per_family");
    group.throughput(Throughput::Elements(frames.len() as u64));

    for name in FAMILY_REPRESENTATIVES {
        let Ok(entry) = catalog.get(name) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(name), &frames, |b, frames| {
            b.iter(|| {
                let mut state = SessionState::new(Arc::clone(&entry));
                for frame in frames {
                    black_box(Classifier::process(&mut state, frame));
                }
                state.rep_count()
            });
        });
    }

    group.finish();
}

fn bench_posture_gate(c: &mut Criterion) {
    let catalog = ExerciseCatalog::builtin().unwrap_or_default();
    let Ok(row) = catalog.get("BENT OVER ROW") else {
        return;
    };
    let frames = generate_frames(FrameBatchSize::Second.count());

    let mut group = c.benchmark_group("classifier_posture_gate");
    group.throughput(Throughput::Elements(frames.len() as u64));
    group.bench_function("bent_over_row", |b| {
        b.iter(|| {
            let mut state = SessionState::new(Arc::clone(&row));
            for frame in &frames {
                black_box(Classifier::process(&mut state, frame));
            }
        });
    });
    group.finish();
}

fn bench_full_attempt_replay(c: &mut Criterion) {
    let catalog = ExerciseCatalog::builtin().unwrap_or_default();
    let Ok(squat) = catalog.get("SQUAT") else {
        return;
    };
    let stream: Vec<ReplayFrame> = generate_frames(FrameBatchSize::Attempt.count())
        .into_iter()
        .zip((0_u64..).step_by(33))
        .map(|(joints, t_ms)| ReplayFrame { t_ms, joints })
        .collect();

    let mut group = c.benchmark_group("replay");
    group.sample_size(50);
    group.throughput(Throughput::Elements(stream.len() as u64));
    group.bench_function("squat_30s_attempt", |b| {
        b.iter(|| black_box(replay_frames(Arc::clone(&squat), &stream)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_catalog_build,
    bench_family_throughput,
    bench_posture_gate,
    bench_full_attempt_replay,
);
criterion_main!(benches);
