// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! History queries: everything derived from the stored session list.
//!
//! "Most recent" always means list order, not the `date` field. The
//! store keeps sessions newest-first (new saves are prepended), which is
//! what makes a linear scan correct here.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::WorkoutSession;

/// Reps and weight of one historical set, detached from its identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SetSummary {
    pub reps: u32,
    pub weight: f64,
}

/// One session's contribution to an exercise's progress chart.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProgressPoint {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: DateTime<Utc>,
    pub max_weight: f64,
    /// Sum of reps x weight across all sets of the exercise that session.
    pub total_volume: f64,
}

/// Every distinct exercise name across all history, sorted.
///
/// Names keep their stored casing; deduplication is exact. Callers that
/// want case-insensitive matching do it at lookup time.
pub fn exercise_names(sessions: &[WorkoutSession]) -> Vec<String> {
    let names: BTreeSet<&str> = sessions
        .iter()
        .flat_map(|session| session.exercises.iter())
        .map(|exercise| exercise.name.as_str())
        .collect();
    names.into_iter().map(String::from).collect()
}

/// The sets from the most recent session containing this exercise.
///
/// Scans in stored order and takes the first case-insensitive name match.
/// `None` when the exercise was never logged.
pub fn last_sets_for_exercise(sessions: &[WorkoutSession], name: &str) -> Option<Vec<SetSummary>> {
    let needle = name.to_lowercase();
    sessions.iter().find_map(|session| {
        session
            .exercises
            .iter()
            .find(|exercise| exercise.name.to_lowercase() == needle)
            .map(|exercise| {
                exercise
                    .sets
                    .iter()
                    .map(|set| SetSummary {
                        reps: set.reps,
                        weight: set.weight,
                    })
                    .collect()
            })
    })
}

/// Per-session max weight and total volume for one exercise, oldest
/// session first.
///
/// A session logging the exercise more than once contributes a single
/// point pooling all matching entries.
pub fn progress_series(sessions: &[WorkoutSession], name: &str) -> Vec<ProgressPoint> {
    let needle = name.to_lowercase();
    let mut points: Vec<ProgressPoint> = sessions
        .iter()
        .filter_map(|session| {
            let sets: Vec<_> = session
                .exercises
                .iter()
                .filter(|exercise| exercise.name.to_lowercase() == needle)
                .flat_map(|exercise| exercise.sets.iter())
                .collect();
            if sets.is_empty() {
                return None;
            }
            Some(ProgressPoint {
                date: session.date,
                max_weight: sets.iter().fold(0.0, |max, set| set.weight.max(max)),
                total_volume: sets
                    .iter()
                    .map(|set| set.reps as f64 * set.weight)
                    .sum(),
            })
        })
        .collect();
    // Stored list is newest-first; charts read left to right.
    points.reverse();
    points
}
