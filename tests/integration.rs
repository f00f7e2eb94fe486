//! Integration tests for the shift ledger API.
//!
//! This test suite drives the router end to end:
//! - Regular, overnight and overtime shifts
//! - Rejected entries (zero duration, missing fields, malformed JSON)
//! - Removing shifts and clearing the ledger
//! - Summary, report and theme endpoints
//! - Ledgers persisted to disk and read back

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use hourtrackr::api::{AppState, create_router};
use hourtrackr::config::OvertimePolicy;
use hourtrackr::ledger::Ledger;
use hourtrackr::storage::{FileStore, KeyValueStore, MemoryStore, SHIFTS_KEY};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    AppState::new(Ledger::new(
        Arc::new(MemoryStore::new()),
        OvertimePolicy::default(),
    ))
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_shift(router: Router, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri("/shifts")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn delete(router: Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

fn shift_body(clock_in: &str, clock_out: &str, break_min: &str, rate: &str) -> Value {
    json!({
        "date": "2024-01-01",
        "clock_in": clock_in,
        "clock_out": clock_out,
        "break_minutes": break_min,
        "rate": rate,
        "overtime_after_hours": "8",
        "overtime_multiplier": "1.5"
    })
}

fn assert_amount(value: &Value, expected: &str) {
    let actual = value.as_str().unwrap();
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected amount {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Shift Entry
// =============================================================================

#[tokio::test]
async fn test_regular_shift_with_break() {
    let (status, body) =
        post_shift(create_router(create_test_state()), shift_body("09:00", "17:00", "30", "20"))
            .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Shift added");

    let shift = &body["shift"];
    assert_eq!(shift["regMinutes"], 450);
    assert_eq!(shift["otMinutes"], 0);
    assert_eq!(shift["clockIn"], "09:00");
    assert_amount(&shift["regEarnings"], "150");
    assert_amount(&shift["otEarnings"], "0");
    assert_amount(&shift["totalEarnings"], "150");
}

#[tokio::test]
async fn test_overnight_shift_rolls_into_next_day() {
    let mut body = shift_body("22:00", "06:00", "0", "10");
    body["overtime_multiplier"] = json!("2");

    let (status, body) = post_shift(create_router(create_test_state()), body).await;

    assert_eq!(status, StatusCode::CREATED);
    let shift = &body["shift"];
    assert_eq!(shift["regMinutes"], 480);
    assert_eq!(shift["otMinutes"], 0);
    assert_amount(&shift["totalEarnings"], "80");
}

#[tokio::test]
async fn test_long_shift_accrues_overtime() {
    let (status, body) =
        post_shift(create_router(create_test_state()), shift_body("08:00", "20:00", "0", "15"))
            .await;

    assert_eq!(status, StatusCode::CREATED);
    let shift = &body["shift"];
    assert_eq!(shift["regMinutes"], 480);
    assert_eq!(shift["otMinutes"], 240);
    assert_amount(&shift["regEarnings"], "120");
    assert_amount(&shift["otEarnings"], "90");
    assert_amount(&shift["totalEarnings"], "210");
}

#[tokio::test]
async fn test_form_ids_and_numbers_are_accepted() {
    let body = json!({
        "date": "2024-01-01",
        "clockIn": "08:00",
        "clockOut": "20:00",
        "breakMin": 0,
        "rate": 15,
        "otAfter": 8,
        "otMult": 1.5
    });

    let (status, body) = post_shift(create_router(create_test_state()), body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["shift"]["otMinutes"], 240);
    assert_amount(&body["shift"]["totalEarnings"], "210");
}

#[tokio::test]
async fn test_blank_overtime_fields_use_policy_defaults() {
    let body = json!({
        "date": "2024-01-01",
        "clock_in": "08:00",
        "clock_out": "20:00",
        "rate": "15",
        "break_minutes": "",
        "overtime_after_hours": "",
        "overtime_multiplier": ""
    });

    let (status, body) = post_shift(create_router(create_test_state()), body).await;

    assert_eq!(status, StatusCode::CREATED);
    let shift = &body["shift"];
    assert_eq!(shift["breakMin"], 0);
    assert_eq!(shift["regMinutes"], 480);
    assert_eq!(shift["otMinutes"], 240);
    // Multiplier 1: overtime paid at the base rate.
    assert_amount(&shift["otEarnings"], "60");
}

#[tokio::test]
async fn test_oversized_break_is_clamped_and_rejected() {
    let state = create_test_state();
    let (status, body) =
        post_shift(create_router(state.clone()), shift_body("09:00", "17:00", "1500", "20")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_DURATION");
    assert!(state.ledger().shifts().is_empty());
}

// =============================================================================
// Rejected Entries
// =============================================================================

#[tokio::test]
async fn test_zero_duration_leaves_ledger_unchanged() {
    let state = create_test_state();
    post_shift(create_router(state.clone()), shift_body("09:00", "17:00", "30", "20")).await;

    let (status, body) =
        post_shift(create_router(state.clone()), shift_body("09:00", "09:00", "0", "20")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["message"],
        "Time inputs produce zero/negative minutes. Check break or times."
    );
    assert_eq!(state.ledger().shifts().len(), 1);
}

#[tokio::test]
async fn test_missing_clock_out_returns_400() {
    let mut body = shift_body("09:00", "17:00", "30", "20");
    body.as_object_mut().unwrap().remove("clock_out");

    let (status, body) = post_shift(create_router(create_test_state()), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_FIELD");
    assert_eq!(body["message"], "Please complete all required fields.");
}

#[tokio::test]
async fn test_unparseable_time_returns_422() {
    let (status, body) =
        post_shift(create_router(create_test_state()), shift_body("9am", "17:00", "0", "20")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_DURATION");
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let (status, body) = send(
        create_router(create_test_state()),
        Request::builder()
            .method("POST")
            .uri("/shifts")
            .header("Content-Type", "application/json")
            .body(Body::from("{\"date\": "))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

// =============================================================================
// Ledger Maintenance
// =============================================================================

#[tokio::test]
async fn test_remove_shift_by_id() {
    let state = create_test_state();
    let (_, first) =
        post_shift(create_router(state.clone()), shift_body("09:00", "17:00", "30", "20")).await;
    post_shift(create_router(state.clone()), shift_body("08:00", "20:00", "0", "15")).await;

    let id = first["shift"]["id"].as_str().unwrap();
    let (status, body) = delete(create_router(state.clone()), &format!("/shifts/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Shift removed");

    let (_, shifts) = get(create_router(state), "/shifts").await;
    let shifts = shifts.as_array().unwrap();
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0]["otMinutes"], 240);
}

#[tokio::test]
async fn test_clear_empties_ledger() {
    let state = create_test_state();
    post_shift(create_router(state.clone()), shift_body("09:00", "17:00", "30", "20")).await;

    let (status, body) = delete(create_router(state.clone()), "/shifts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "All data cleared.");

    let (_, summary) = get(create_router(state), "/summary").await;
    assert_eq!(summary["total_minutes"], 0);
    assert_amount(&summary["total_earnings"], "0");
}

// =============================================================================
// Summary and Report
// =============================================================================

#[tokio::test]
async fn test_summary_adds_up_all_shifts() {
    let state = create_test_state();
    post_shift(create_router(state.clone()), shift_body("09:00", "17:00", "30", "20")).await;
    post_shift(create_router(state.clone()), shift_body("08:00", "20:00", "0", "15")).await;

    let (status, summary) = get(create_router(state), "/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["regular_minutes"], 930);
    assert_eq!(summary["overtime_minutes"], 240);
    assert_eq!(summary["total_minutes"], 1170);
    assert_amount(&summary["regular_earnings"], "270");
    assert_amount(&summary["overtime_earnings"], "90");
    assert_amount(&summary["total_earnings"], "360");
}

#[tokio::test]
async fn test_report_formats_rows_and_totals() {
    let state = create_test_state();
    post_shift(create_router(state.clone()), shift_body("08:00", "20:00", "0", "15")).await;

    let (status, report) = get(create_router(state), "/report").await;

    assert_eq!(status, StatusCode::OK);
    let row = &report["rows"][0];
    assert_eq!(row["break_minutes"], "0 min");
    assert_eq!(row["regular_hours"], "8.00");
    assert_eq!(row["overtime_hours"], "4.00");
    assert_eq!(row["total_earnings"], "$210.00");
    assert_eq!(report["totals"]["total_hours"], "12.00");
    assert_eq!(report["chart"]["labels"], json!(["Regular $", "Overtime $"]));
    assert_amount(&report["chart"]["values"][1], "90");
}

#[tokio::test]
async fn test_policy_endpoint_reports_defaults() {
    let (status, policy) = get(create_router(create_test_state()), "/policy").await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&policy["threshold_hours"], "8");
    assert_amount(&policy["multiplier"], "1");
}

// =============================================================================
// Theme
// =============================================================================

#[tokio::test]
async fn test_theme_toggle_cycles() {
    let state = create_test_state();

    let (_, initial) = get(create_router(state.clone()), "/theme").await;
    assert_eq!(initial["theme"], Value::Null);

    let toggle = || {
        Request::builder()
            .method("POST")
            .uri("/theme/toggle")
            .body(Body::empty())
            .unwrap()
    };

    let (status, first) = send(create_router(state.clone()), toggle()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["theme"], "dark");

    let (_, second) = send(create_router(state.clone()), toggle()).await;
    assert_eq!(second["theme"], "light");

    let (_, current) = get(create_router(state), "/theme").await;
    assert_eq!(current["theme"], "light");
}

// =============================================================================
// Persistence
// =============================================================================

#[tokio::test]
async fn test_file_backed_ledger_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let open = || {
        AppState::new(Ledger::new(
            Arc::new(FileStore::open(dir.path()).unwrap()),
            OvertimePolicy::default(),
        ))
    };

    let (_, added) =
        post_shift(create_router(open()), shift_body("22:00", "06:00", "0", "10")).await;

    let (_, shifts) = get(create_router(open()), "/shifts").await;
    assert_eq!(shifts, json!([added["shift"].clone()]));
}

#[tokio::test]
async fn test_legacy_ledger_with_numeric_amounts_is_readable() {
    let legacy = json!([{
        "id": "3f1c2a9e-7b4d-4e2a-9c61-0d8f5b7a1e42",
        "date": "2024-01-01",
        "clockIn": "08:00",
        "clockOut": "20:00",
        "breakMin": 0,
        "rate": 15,
        "otAfterHrs": 8,
        "otMult": 1.5,
        "regMinutes": 480,
        "otMinutes": 240,
        "regEarnings": 120,
        "otEarnings": 90,
        "totalEarnings": 210
    }]);
    let store = MemoryStore::new();
    store.set(SHIFTS_KEY, &legacy.to_string()).unwrap();
    let state = AppState::new(Ledger::new(Arc::new(store), OvertimePolicy::default()));

    let (_, summary) = get(create_router(state.clone()), "/summary").await;
    assert_eq!(summary["overtime_minutes"], 240);
    assert_amount(&summary["total_earnings"], "210");

    let (status, _) = delete(create_router(state.clone()), "/shifts/3f1c2a9e-7b4d-4e2a-9c61-0d8f5b7a1e42").await;
    assert_eq!(status, StatusCode::OK);
    assert!(state.ledger().shifts().is_empty());
}

#[tokio::test]
async fn test_corrupt_ledger_reads_as_empty() {
    let store = MemoryStore::with_entry(SHIFTS_KEY, "not json");
    let state = AppState::new(Ledger::new(Arc::new(store), OvertimePolicy::default()));

    let (status, shifts) = get(create_router(state), "/shifts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(shifts, json!([]));
}
