// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout session routes: list, save, delete.

use crate::error::{AppError, Result};
use crate::models::{Exercise, WorkoutSession, WorkoutSet};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/sessions", get(list_sessions).post(save_session))
        .route("/api/sessions/{id}", delete(delete_session))
}

/// List all sessions, most recent first.
async fn list_sessions(State(state): State<Arc<AppState>>) -> Json<Vec<WorkoutSession>> {
    Json(state.store.list_sessions())
}

// ─── Save ────────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Validate)]
pub struct SetPayload {
    /// Client-minted id, kept when present.
    #[serde(default)]
    pub id: Option<Uuid>,
    pub reps: u32,
    #[validate(range(min = 0.0, message = "weight cannot be negative"))]
    pub weight: f64,
}

#[derive(Deserialize, Validate)]
pub struct ExercisePayload {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[validate(length(max = 100, message = "exercise name too long"))]
    pub name: String,
    #[validate(length(min = 1, message = "an exercise needs at least one set"), nested)]
    pub sets: Vec<SetPayload>,
}

#[derive(Deserialize, Validate)]
pub struct SaveSessionRequest {
    /// Present when re-saving an existing session (upsert by id).
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    #[validate(length(max = 100, message = "workout name too long"))]
    pub name: String,
    #[validate(nested)]
    pub exercises: Vec<ExercisePayload>,
}

impl ExercisePayload {
    fn into_exercise(self) -> Exercise {
        Exercise {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            sets: self
                .sets
                .into_iter()
                .map(|set| WorkoutSet {
                    id: set.id.unwrap_or_else(Uuid::new_v4),
                    reps: set.reps,
                    weight: set.weight,
                })
                .collect(),
        }
    }
}

/// Save (upsert) a session. Unnamed exercises are dropped; a session
/// with no named exercise is rejected before anything is persisted.
async fn save_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveSessionRequest>,
) -> Result<Json<WorkoutSession>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let exercises: Vec<Exercise> = req
        .exercises
        .into_iter()
        .map(ExercisePayload::into_exercise)
        .collect();

    let session = WorkoutSession::from_draft(req.id, &req.name, exercises)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::info!(
        session_id = %session.id,
        exercises = session.exercises.len(),
        "Saving session"
    );
    state.store.upsert_session(session.clone())?;

    Ok(Json(session))
}

// ─── Delete ──────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteSessionResponse {
    pub deleted: bool,
}

/// Delete one session by id.
async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteSessionResponse>> {
    if !state.store.delete_session(id)? {
        return Err(AppError::NotFound(format!("Session {} not found", id)));
    }
    tracing::info!(session_id = %id, "Session deleted");
    Ok(Json(DeleteSessionResponse { deleted: true }))
}
