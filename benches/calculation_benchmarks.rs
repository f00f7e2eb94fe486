//! Performance benchmarks for the shift ledger.
//!
//! Covers the pure calculator, ledger summaries at several sizes and the
//! full HTTP path for adding a shift and reading the report.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use hourtrackr::api::{AppState, ShiftRequest, create_router};
use hourtrackr::calculation::{ShiftInput, compute_shift, compute_shift_with_id, summarize};
use hourtrackr::config::OvertimePolicy;
use hourtrackr::ledger::Ledger;
use hourtrackr::models::{Shift, ShiftForm};
use hourtrackr::storage::MemoryStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn create_test_state() -> AppState {
    AppState::new(Ledger::new(
        Arc::new(MemoryStore::new()),
        OvertimePolicy::default(),
    ))
}

/// A 12-hour day shift with four hours of overtime.
fn long_shift_input() -> ShiftInput {
    ShiftInput {
        date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
        clock_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        clock_out: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        break_minutes: Decimal::from(30),
        rate: Decimal::from_str("27.45").unwrap(),
        overtime_threshold_hours: Decimal::from(8),
        overtime_multiplier: Decimal::from_str("1.5").unwrap(),
    }
}

/// Builds a ledger of `count` shifts, alternating day and overnight work.
fn create_ledger(count: usize) -> Vec<Shift> {
    (0..count)
        .map(|i| {
            let mut input = long_shift_input();
            if i % 2 == 1 {
                input.clock_in = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
                input.clock_out = NaiveTime::from_hms_opt(7, 15, 0).unwrap();
            }
            compute_shift_with_id(&input, format!("shift_{:04}", i)).unwrap()
        })
        .collect()
}

fn shift_request_body() -> String {
    let request = ShiftRequest {
        date: Some("2026-01-13".to_string()),
        clock_in: Some("22:00".to_string()),
        clock_out: Some("06:30".to_string()),
        break_minutes: Some("30".to_string()),
        rate: Some("27.45".to_string()),
        overtime_after_hours: Some("8".to_string()),
        overtime_multiplier: Some("1.5".to_string()),
    };
    serde_json::to_string(&request).unwrap()
}

/// Benchmark: Single shift calculation.
fn bench_compute_shift(c: &mut Criterion) {
    let input = long_shift_input();

    c.bench_function("compute_shift", |b| {
        b.iter(|| black_box(compute_shift(black_box(&input))))
    });
}

/// Benchmark: Summary over ledgers of increasing size.
fn bench_summarize_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for shift_count in [10usize, 100, 1000].iter() {
        let shifts = create_ledger(*shift_count);
        group.throughput(Throughput::Elements(*shift_count as u64));
        group.bench_with_input(
            BenchmarkId::new("shifts", shift_count),
            &shifts,
            |b, shifts| b.iter(|| black_box(summarize(shifts))),
        );
    }

    group.finish();
}

/// Benchmark: POST /shifts against a fresh ledger.
fn bench_add_shift_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let body = shift_request_body();

    c.bench_function("add_shift_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = create_router(create_test_state());
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/shifts")
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

/// Benchmark: GET /report for a ledger of 100 shifts.
fn bench_report_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    for _ in 0..100 {
        state
            .ledger()
            .add_shift(&ShiftForm::new("2026-01-13", "08:00", "20:00", "27.45").with_break("30"))
            .unwrap();
    }
    let router = create_router(state);

    let mut group = c.benchmark_group("report_endpoint");
    group.throughput(Throughput::Elements(100));
    group.bench_function("ledger_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(Request::builder().uri("/report").body(Body::empty()).unwrap())
                .await
                .unwrap();
            black_box(response)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_compute_shift,
    bench_summarize_scaling,
    bench_add_shift_endpoint,
    bench_report_endpoint,
);
criterion_main!(benches);
