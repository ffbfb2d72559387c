// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use trakker::config::Config;
use trakker::models::{Exercise, WorkoutSession, WorkoutSet};
use trakker::routes::create_router;
use trakker::store::MemoryStore;
use trakker::AppState;
use uuid::Uuid;

/// Create a test app backed by an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let state = Arc::new(AppState {
        config,
        store: Arc::new(MemoryStore::new()),
    });

    (create_router(state.clone()), state)
}

/// Build an exercise with the given (reps, weight) sets.
#[allow(dead_code)]
pub fn exercise(name: &str, sets: &[(u32, f64)]) -> Exercise {
    Exercise {
        id: Uuid::new_v4(),
        name: name.to_string(),
        sets: sets
            .iter()
            .map(|&(reps, weight)| WorkoutSet::with(reps, weight))
            .collect(),
    }
}

/// Build a session dated to the given February 2026 day.
#[allow(dead_code)]
pub fn session_on_day(name: &str, day: u32, exercises: Vec<Exercise>) -> WorkoutSession {
    WorkoutSession {
        id: Uuid::new_v4(),
        date: Utc.with_ymd_and_hms(2026, 2, day, 18, 0, 0).unwrap(),
        name: name.to_string(),
        exercises,
    }
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Response body is not JSON")
}
