// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise catalog routes, backed by the history queries.

use crate::services::history::{self, ProgressPoint, SetSummary};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/exercises", get(list_names))
        .route("/api/exercises/{name}/last-sets", get(last_sets))
        .route("/api/exercises/{name}/progress", get(progress))
}

/// Every exercise name ever logged, sorted.
async fn list_names(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    let sessions = state.store.list_sessions();
    Json(history::exercise_names(&sessions))
}

/// The most recent sets for an exercise, or `null` if never logged.
/// Matching is case-insensitive.
async fn last_sets(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<Option<Vec<SetSummary>>> {
    let sessions = state.store.list_sessions();
    Json(history::last_sets_for_exercise(&sessions, name.trim()))
}

/// Per-session progress points for an exercise, oldest first.
async fn progress(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<Vec<ProgressPoint>> {
    let sessions = state.store.list_sessions();
    Json(history::progress_series(&sessions, name.trim()))
}
