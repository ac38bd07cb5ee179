//! Performance benchmarks for the Shift Rotation Engine.
//!
//! This benchmark suite covers the per-render work of the calendar screen:
//! - Building one 42-cell month grid
//! - Summarizing a pay period over several years of overtime
//! - A full calendar request through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use shift_rotation_engine::api::{AppState, create_router};
use shift_rotation_engine::calculation::{build_month_grid, summarize_period};
use shift_rotation_engine::models::{
    DailyOvertime, PayPeriodStartDay, RotationPattern, Shift,
};
use shift_rotation_engine::storage::MemoryStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn rotation() -> RotationPattern {
    RotationPattern::parse("morning, morning, afternoon, afternoon, night, night, off, off, off")
        .unwrap()
}

/// Creates one overtime record every `every` days for `days` days from the start date.
fn create_overtime(days: u64, every: u64) -> BTreeMap<NaiveDate, DailyOvertime> {
    (0..days)
        .step_by(every as usize)
        .map(|offset| {
            (
                start_date() + Days::new(offset),
                DailyOvertime::new(Decimal::new(15, 1), Decimal::new(1, 0)),
            )
        })
        .collect()
}

/// Creates a stored record with a configured rotation and some edits.
fn create_record() -> String {
    let overtime: Vec<_> = create_overtime(365, 3)
        .into_iter()
        .map(|(date, entry)| serde_json::json!([date.to_string(), entry]))
        .collect();

    serde_json::json!({
        "rotation_pattern": rotation().shifts(),
        "rotation_start_date": start_date().to_string(),
        "overtime_data": overtime,
        "shift_overrides": [["2020-03-05", "off"], ["2020-03-06", "night"]],
        "pay_period_start_day": 16
    })
    .to_string()
}

/// Benchmark: One month grid with overrides and overtime.
fn bench_month_grid(c: &mut Criterion) {
    let pattern = rotation();
    let overtime = create_overtime(365 * 5, 2);
    let overrides: BTreeMap<NaiveDate, Shift> = (0..365 * 5)
        .step_by(11)
        .map(|offset| (start_date() + Days::new(offset), Shift::Off))
        .collect();
    let month = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();

    c.bench_function("month_grid", |b| {
        b.iter(|| {
            build_month_grid(
                black_box(month),
                month,
                Some(start_date()),
                Some(&pattern),
                &overtime,
                &overrides,
            )
        })
    });
}

/// Benchmark: Pay period summary as the overtime history grows.
fn bench_summary_scaling(c: &mut Criterion) {
    let month = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
    let mut group = c.benchmark_group("pay_period_summary");

    for years in [1u64, 5, 20].iter() {
        let overtime = create_overtime(365 * years, 1);

        group.throughput(Throughput::Elements(overtime.len() as u64));
        group.bench_with_input(BenchmarkId::new("years", years), years, |b, _| {
            b.iter(|| summarize_period(&overtime, black_box(month), PayPeriodStartDay::default()))
        });
    }

    group.finish();
}

/// Benchmark: GET /calendar through the router.
fn bench_calendar_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::with_store(MemoryStore::with_record(create_record())));

    c.bench_function("calendar_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/calendar/2020/3")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_month_grid,
    bench_summary_scaling,
    bench_calendar_request,
);
criterion_main!(benches);
