//! Performance benchmarks for the attendance engine.
//!
//! This benchmark suite verifies that the salary computation meets
//! performance targets:
//! - Single employee-month over HTTP: < 2ms mean
//! - Batch of 100 employee-months: < 200ms mean
//! - Batch of 1000 employee-months: < 2s mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::PayrollPolicy;

use axum::{body::Body, http::Request};
use chrono::{Datelike, NaiveDate, Weekday};
use serde_json::json;
use tower::ServiceExt;

fn create_bench_state() -> AppState {
    AppState::new(PayrollPolicy::default())
}

/// 09:00-18:00 punches for every non-Sunday day of the 2026-02 cycle,
/// with every `absent_stride`-th working day skipped.
fn cycle_punches(absent_stride: usize) -> Vec<serde_json::Value> {
    let mut punches = Vec::new();
    let mut date = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 2, 25).unwrap();
    let mut working_index = 0;
    while date <= end {
        if date.weekday() != Weekday::Sun {
            working_index += 1;
            if absent_stride == 0 || working_index % absent_stride != 0 {
                punches.push(json!({"timestamp": format!("{date}T09:00:00")}));
                punches.push(json!({"timestamp": format!("{date}T18:00:00")}));
            }
        }
        date = date.succ_opt().unwrap();
    }
    punches
}

/// A salary request body for one employee-month.
fn create_salary_body(employee_code: &str, base_salary: &str, absent_stride: usize) -> String {
    let body = json!({
        "employee": {
            "employee_code": employee_code,
            "base_salary": base_salary
        },
        "month": "2026-02",
        "shift": {
            "slots": [{"start": "09:00:00", "end": "18:00:00"}],
            "expected_hours": "9",
            "full_day_hours": "8",
            "half_day_hours": "4",
            "late_threshold_minutes": 10,
            "weekly_off": "Sun"
        },
        "holidays": [],
        "punches": cycle_punches(absent_stride),
        "overlays": {}
    });
    body.to_string()
}

/// Benchmark: one employee-month over HTTP.
///
/// Target: < 2ms mean
fn bench_single_month(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_bench_state());
    let body = create_salary_body("EMP_BENCH_001", "13500", 0);

    c.bench_function("single_month", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/salary")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: the attendance view for one employee-month.
fn bench_attendance_view(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_bench_state());
    let body = json!({
        "employee": {
            "employee_code": "EMP_BENCH_001",
            "base_salary": "13500"
        },
        "month": "2026-02",
        "shift": {
            "slots": [{"start": "09:00:00", "end": "18:00:00"}],
            "expected_hours": "9",
            "full_day_hours": "8",
            "half_day_hours": "4"
        },
        "punches": cycle_punches(0),
        "overlays": {
            "leave": [{"date": "2026-02-10", "value": "1", "category": "paid"}]
        }
    })
    .to_string();

    c.bench_function("attendance_view", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/attendance")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 employee-months.
///
/// Target: < 200ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_bench_state();

    // Pre-create 100 different requests (vary codes, salaries, absences)
    let requests: Vec<String> = (0..100)
        .map(|i| {
            create_salary_body(
                &format!("EMP_BATCH_{:03}", i),
                if i % 3 == 0 { "18000" } else { "13500" },
                i % 7,
            )
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/salary")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: batch of 1000 employee-months.
///
/// Target: < 2s mean
fn bench_batch_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_bench_state();

    let requests: Vec<String> = (0..1000)
        .map(|i| {
            create_salary_body(
                &format!("EMP_BATCH_{:04}", i),
                if i % 3 == 0 { "18000" } else { "13500" },
                i % 7,
            )
        })
        .collect();

    let mut group = c.benchmark_group("large_batch_processing");
    group.throughput(Throughput::Elements(1000));
    // Reduce sample size for large batches to keep benchmark time reasonable
    group.sample_size(10);

    group.bench_function("batch_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(1000);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/salary")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: varying punch density to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_bench_state();

    let mut group = c.benchmark_group("scaling");

    for punch_pairs in [7usize, 14, 27].iter() {
        let router = create_router(state.clone());
        // Keep the first `punch_pairs` working days, skip the rest.
        let mut punches = cycle_punches(0);
        punches.truncate(punch_pairs * 2);
        let body = json!({
            "employee": {
                "employee_code": "EMP_BENCH_001",
                "base_salary": "13500"
            },
            "month": "2026-02",
            "shift": {
                "slots": [{"start": "09:00:00", "end": "18:00:00"}],
                "expected_hours": "9",
                "full_day_hours": "8",
                "half_day_hours": "4"
            },
            "punches": punches,
            "overlays": {}
        })
        .to_string();

        group.throughput(Throughput::Elements(*punch_pairs as u64));
        group.bench_with_input(
            BenchmarkId::new("worked_days", punch_pairs),
            punch_pairs,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/salary")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_month,
    bench_attendance_view,
    bench_batch_100,
    bench_batch_1000,
    bench_scaling,
);
criterion_main!(benches);
