mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use shared::api::payloads::{DayWorkoutResponse, MonthWorkoutsResponse};

#[tokio::test]
async fn test_month_totals() {
    let app = TestApp::new();
    let running = app.create_cardio_type(1, "Running").await;

    // Written out of order, read back sorted
    app.write_day(
        1,
        json!({
            "date": "2025-03-15",
            "entries": [strength(DEADLIFT, 2, 10, "10.00")],
            "cardio_entries": [cardio(running, 25, None)],
        }),
    )
    .await;
    app.write_day(1, json!({ "date": "2025-03-01", "entries": [strength(BENCH_PRESS, 3, 10, "50.00")] }))
        .await;
    // Neighbouring months stay out
    app.write_day(1, json!({ "date": "2025-02-28", "entries": [strength(BENCH_PRESS, 1, 1, "1")] }))
        .await;
    app.write_day(1, json!({ "date": "2025-04-01", "entries": [strength(BENCH_PRESS, 1, 1, "1")] }))
        .await;

    let (status, body) = app.get(1, "/api/workouts/month?year=2025&month=3").await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(
        body,
        json!({
            "year": 2025,
            "month": 3,
            "days_with_workouts": [
                {
                    "date": "2025-03-01",
                    "day_total_weight": "1500.00",
                    "day_total_reps": 30,
                    "day_total_cardio_minutes": 0,
                },
                {
                    "date": "2025-03-15",
                    "day_total_weight": "200.00",
                    "day_total_reps": 20,
                    "day_total_cardio_minutes": 25,
                },
            ],
            "month_total_weight": "1700.00",
            "month_total_reps": 50,
            "month_total_cardio_minutes": 25,
        })
    );
}

#[tokio::test]
async fn test_totals_wider_than_u64() {
    let app = TestApp::new();
    let max = i32::MAX as u32;
    let entries: Vec<_> = (0..5).map(|_| strength(BENCH_PRESS, max, max, "1")).collect();

    let (status, body) = app.write_day(1, json!({ "date": "2025-03-01", "entries": entries })).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let day: DayWorkoutResponse = app.get_as(1, "/api/workouts/day?date=2025-03-01").await;
    assert_eq!(day.day_total_reps, 23_058_430_070_662_103_045);
    assert_eq!(day.day_total_weight.to_string(), "23058430070662103045.00");

    let month: MonthWorkoutsResponse = app.get_as(1, "/api/workouts/month?year=2025&month=3").await;
    assert_eq!(month.days_with_workouts[0].day_total_reps, 23_058_430_070_662_103_045);
    assert_eq!(month.month_total_reps, 23_058_430_070_662_103_045);
    assert_eq!(month.month_total_weight.to_string(), "23058430070662103045.00");
}

#[tokio::test]
async fn test_empty_month() {
    let app = TestApp::new();

    let (status, body) = app.get(1, "/api/workouts/month?year=2026&month=12").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days_with_workouts"], json!([]));
    assert_eq!(body["month_total_weight"], "0.00");
    assert_eq!(body["month_total_reps"], 0);
}

#[tokio::test]
async fn test_december_includes_last_day() {
    let app = TestApp::new();
    app.write_day(1, json!({ "date": "2025-12-31", "entries": [strength(BENCH_PRESS, 1, 1, "1")] }))
        .await;
    app.write_day(1, json!({ "date": "2026-01-01", "entries": [strength(BENCH_PRESS, 1, 1, "1")] }))
        .await;

    let (_, body) = app.get(1, "/api/workouts/month?year=2025&month=12").await;
    assert_eq!(body["days_with_workouts"].as_array().unwrap().len(), 1);
    assert_eq!(body["days_with_workouts"][0]["date"], "2025-12-31");
}

#[tokio::test]
async fn test_month_is_per_user() {
    let app = TestApp::new();
    app.write_day(2, json!({ "date": "2025-03-01", "entries": [strength(BENCH_PRESS, 3, 10, "50.00")] }))
        .await;

    let (_, body) = app.get(1, "/api/workouts/month?year=2025&month=3").await;
    assert_eq!(body["days_with_workouts"], json!([]));
}

#[tokio::test]
async fn test_invalid_month_parameters() {
    let app = TestApp::new();

    let (status, body) = app.get(1, "/api/workouts/month?year=2024&month=3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Year must be 2025 or 2026");

    let (status, body) = app.get(1, "/api/workouts/month?year=2025&month=13").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Month must be between 1 and 12");

    let (status, _) = app.get(1, "/api/workouts/month?year=2025&month=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.get(1, "/api/workouts/month?year=abc&month=3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid year or month parameter");
}
