// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training plan routes: the active program, today's day, and
//! materialization.

use crate::error::{AppError, Result};
use crate::models::plan::DEFAULT_PLAN_NAME;
use crate::models::{DayType, Exercise, PlanDay, PlanExercise, WorkoutPlan};
use crate::services::{materialize_day, today_day_index};
use crate::time_utils::local_today;
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
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
        .route(
            "/api/plan",
            get(get_plan).put(save_plan).delete(clear_plan),
        )
        .route("/api/plan/today", get(today))
        .route("/api/plan/today/materialize", post(materialize_today))
}

/// The active plan, or `null` when none is configured.
async fn get_plan(State(state): State<Arc<AppState>>) -> Json<Option<WorkoutPlan>> {
    Json(state.store.get_active_plan())
}

// ─── Save ────────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct PlanExercisePayload {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[validate(length(max = 100, message = "exercise name too long"))]
    pub name: String,
    #[validate(range(min = 1, message = "default_sets must be at least 1"))]
    pub default_sets: u32,
    #[validate(range(min = 1, message = "default_reps must be at least 1"))]
    pub default_reps: u32,
}

#[derive(Deserialize, Validate)]
pub struct PlanDayPayload {
    pub day_index: usize,
    pub day_type: DayType,
    #[validate(length(max = 100, message = "day label too long"))]
    pub label: String,
    #[serde(default)]
    #[validate(nested)]
    pub exercises: Vec<PlanExercisePayload>,
}

#[derive(Deserialize, Validate)]
pub struct SavePlanRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "plan name too long"))]
    pub name: String,
    #[validate(range(min = 1, message = "a cycle needs at least one day"))]
    pub period_days: usize,
    #[validate(nested)]
    pub days: Vec<PlanDayPayload>,
}

impl PlanDayPayload {
    fn into_day(self) -> PlanDay {
        PlanDay {
            day_index: self.day_index,
            day_type: self.day_type,
            label: self.label,
            exercises: self
                .exercises
                .into_iter()
                .map(|exercise| PlanExercise {
                    id: exercise.id.unwrap_or_else(Uuid::new_v4),
                    name: exercise.name,
                    default_sets: exercise.default_sets,
                    default_reps: exercise.default_reps,
                })
                .collect(),
        }
    }
}

/// Save the active plan, replacing any prior one wholesale.
///
/// The id and the cycle anchor (`start_date`) carry over from the prior
/// plan when one exists; otherwise the anchor is today. A `period_days`
/// differing from the submitted day list resizes the cycle: growing
/// appends rest days, shrinking truncates trailing days.
async fn save_plan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SavePlanRequest>,
) -> Result<Json<WorkoutPlan>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let (id, start_date) = match state.store.get_active_plan() {
        Some(prior) => (prior.id, prior.start_date),
        None => (Uuid::new_v4(), local_today()),
    };

    let trimmed = req.name.trim();
    let days: Vec<PlanDay> = req.days.into_iter().map(PlanDayPayload::into_day).collect();

    let mut plan = WorkoutPlan {
        id,
        name: if trimmed.is_empty() {
            DEFAULT_PLAN_NAME.to_string()
        } else {
            trimmed.to_string()
        },
        period_days: days.len(),
        start_date,
        days,
    };
    if req.period_days != plan.days.len() {
        plan.resize_period(req.period_days);
    }
    plan.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::info!(
        plan_id = %plan.id,
        period_days = plan.period_days,
        "Saving active plan"
    );
    state.store.set_active_plan(plan.clone())?;

    Ok(Json(plan))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ClearPlanResponse {
    pub cleared: bool,
}

/// Remove the active plan. Idempotent.
async fn clear_plan(State(state): State<Arc<AppState>>) -> Result<Json<ClearPlanResponse>> {
    state.store.clear_active_plan()?;
    tracing::info!("Active plan cleared");
    Ok(Json(ClearPlanResponse { cleared: true }))
}

// ─── Today ───────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TodayResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub day_index: usize,
    pub day: PlanDay,
}

fn current_day(plan: &WorkoutPlan) -> Result<(usize, PlanDay)> {
    let day_index = today_day_index(plan);
    let day = plan
        .days
        .get(day_index)
        .cloned()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Day index {} out of range", day_index)))?;
    Ok((day_index, day))
}

/// Which plan day applies today.
async fn today(State(state): State<Arc<AppState>>) -> Result<Json<TodayResponse>> {
    let plan = state
        .store
        .get_active_plan()
        .ok_or_else(|| AppError::NotFound("No active plan".to_string()))?;
    let (day_index, day) = current_day(&plan)?;
    Ok(Json(TodayResponse { day_index, day }))
}

// ─── Materialize ─────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MaterializedDraft {
    pub name: String,
    pub exercises: Vec<Exercise>,
}

/// Pre-fill a draft for today's plan day from the exercise templates and
/// the most recent logged performance. Nothing is written to the store.
async fn materialize_today(State(state): State<Arc<AppState>>) -> Result<Json<MaterializedDraft>> {
    let plan = state
        .store
        .get_active_plan()
        .ok_or_else(|| AppError::NotFound("No active plan".to_string()))?;
    let (day_index, day) = current_day(&plan)?;

    if day.day_type == DayType::Rest {
        return Err(AppError::BadRequest(
            "Today is a rest day".to_string(),
        ));
    }

    let sessions = state.store.list_sessions();
    let exercises = materialize_day(&day, &sessions);

    tracing::info!(day_index, exercises = exercises.len(), "Draft materialized");
    Ok(Json(MaterializedDraft {
        name: day.label.clone(),
        exercises,
    }))
}
