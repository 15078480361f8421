// ABOUTME: Criterion benchmarks for the prediction engine and HTML rendering
// ABOUTME: Measures raw model evaluation, request decoding, and full page rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Incline HR

//! Criterion benchmarks for the prediction hot path.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use incline_hr_core::{evaluate, predict, ChangeRateModel, PredictionRequest};
use incline_hr_server::pages::PredictionPage;

fn bench_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("model");

    group.bench_function("predict_indicators", |b| {
        b.iter(|| predict(black_box(1), black_box(1)));
    });

    group.bench_function("prediction_table", |b| {
        let model = ChangeRateModel::standard();
        b.iter(|| black_box(&model).prediction_table());
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let valid = PredictionRequest::new("run", "down");
    group.bench_function("valid_request", |b| {
        b.iter(|| evaluate(black_box(&valid)).unwrap());
    });

    let invalid = PredictionRequest::new("jog", "down");
    group.bench_function("invalid_request", |b| {
        b.iter(|| evaluate(black_box(&invalid)).is_err());
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    group.bench_function("blank_page", |b| {
        b.iter(|| PredictionPage::blank().render());
    });

    let result = evaluate(&PredictionRequest::new("walk", "up")).unwrap();
    group.bench_function("result_page", |b| {
        b.iter(|| PredictionPage::with_result(black_box(&result)).render());
    });

    group.finish();
}

criterion_group!(benches, bench_model, bench_evaluate, bench_render);
criterion_main!(benches);
