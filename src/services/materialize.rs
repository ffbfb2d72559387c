// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session materialization: turn a plan day into a pre-filled draft.
//!
//! Each plan exercise becomes a draft exercise with `default_sets` sets.
//! Set i copies the user's most recent performance at position i when
//! history has one, and falls back to the template's default reps at zero
//! weight otherwise. Everything gets fresh identities; the store is never
//! written.

use uuid::Uuid;

use crate::models::{Exercise, PlanDay, WorkoutSession, WorkoutSet};
use crate::services::history;

/// Build draft exercises for a plan day, merging in recent history.
///
/// Rest days have no exercises configured, so they produce an empty
/// draft; callers gate the "start workout" action on the day type.
pub fn materialize_day(day: &PlanDay, sessions: &[WorkoutSession]) -> Vec<Exercise> {
    let drafts: Vec<Exercise> = day
        .exercises
        .iter()
        .map(|template| {
            let name = template.name.trim();
            let last = if name.is_empty() {
                None
            } else {
                history::last_sets_for_exercise(sessions, name)
            };

            let sets = (0..template.default_sets as usize)
                .map(|i| match last.as_ref().and_then(|sets| sets.get(i)) {
                    Some(prev) => WorkoutSet::with(prev.reps, prev.weight),
                    None => WorkoutSet::with(template.default_reps, 0.0),
                })
                .collect();

            Exercise {
                id: Uuid::new_v4(),
                name: template.name.clone(),
                sets,
            }
        })
        .collect();

    tracing::debug!(
        day_index = day.day_index,
        exercises = drafts.len(),
        "Materialized plan day"
    );
    drafts
}
