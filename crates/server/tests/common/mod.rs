#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use server::{app, cli::Cli, db, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

pub const IDENTITY_HEADER: &str = "x-authenticated-user";

/// Seeded shared exercises
pub const BENCH_PRESS: i64 = 1;
pub const DEADLIFT: i64 = 4;
pub const BACK_SQUAT: i64 = 8;

pub struct TestApp {
    // Keeps the database file alive for the lifetime of the app
    _dir: TempDir,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.sqlite").to_str().unwrap().to_owned();

        db::run_migrations(&path).unwrap();
        let pool = db::create_pool(&path).unwrap();
        let router = app(AppState::new(pool, Cli::with_database(path))).unwrap();

        Self { _dir: dir, router }
    }

    pub async fn send_raw(&self, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes)
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = self.send_raw(request).await;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, user: i64, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .uri(uri)
                .header(IDENTITY_HEADER, user.to_string())
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// For bodies holding integers too wide for `Value`
    pub async fn get_as<T: DeserializeOwned>(&self, user: i64, uri: &str) -> T {
        let (status, bytes) = self
            .send_raw(
                Request::builder()
                    .uri(uri)
                    .header(IDENTITY_HEADER, user.to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{}", String::from_utf8_lossy(&bytes));
        serde_json::from_slice(&bytes).unwrap()
    }

    pub async fn post(&self, user: i64, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(IDENTITY_HEADER, user.to_string())
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn write_day(&self, user: i64, body: Value) -> (StatusCode, Value) {
        self.post(user, "/api/workouts/day", body).await
    }

    pub async fn read_day(&self, user: i64, date: &str) -> (StatusCode, Value) {
        self.get(user, &format!("/api/workouts/day?date={date}")).await
    }

    pub async fn create_exercise(&self, user: i64, name: &str, muscle_group: &str) -> i64 {
        let (status, body) = self
            .post(user, "/api/exercises", json!({ "name": name, "muscle_group": muscle_group }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    pub async fn create_cardio_type(&self, user: i64, name: &str) -> i64 {
        let (status, body) = self.post(user, "/api/cardio-types", json!({ "name": name })).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }
}

pub fn strength(exercise_id: i64, sets: u32, reps: u32, weight: &str) -> Value {
    json!({ "exercise_id": exercise_id, "sets": sets, "reps": reps, "weight": weight })
}

pub fn cardio(cardio_type_id: i64, minutes: u32, distance: Option<&str>) -> Value {
    json!({ "cardio_type_id": cardio_type_id, "minutes": minutes, "distance": distance })
}
