// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logged workout models for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;

/// Reps prefilled into a freshly added set.
///
/// Shared with the auto-fill guard in the guided logging flow: an exercise
/// still holding a single set at these defaults counts as untouched.
pub const DEFAULT_REPS: u32 = 10;

/// A single performed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutSet {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub id: Uuid,
    pub reps: u32,
    /// Weight in kg, never negative.
    pub weight: f64,
}

impl WorkoutSet {
    /// A fresh set at the default reps and zero weight.
    pub fn new() -> Self {
        Self::with(DEFAULT_REPS, 0.0)
    }

    pub fn with(reps: u32, weight: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            reps,
            weight,
        }
    }
}

impl Default for WorkoutSet {
    fn default() -> Self {
        Self::new()
    }
}

/// An exercise entry within a logged session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Exercise {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub id: Uuid,
    /// Free-form name; matched against history case-insensitively.
    pub name: String,
    pub sets: Vec<WorkoutSet>,
}

impl Exercise {
    /// A fresh unnamed exercise with one default set.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            sets: vec![WorkoutSet::new()],
        }
    }

    /// Whether the exercise still holds exactly its single untouched
    /// default set. History auto-fill only replaces sets in this state so
    /// user-entered data is never overwritten.
    pub fn is_pristine(&self) -> bool {
        self.sets.len() == 1 && self.sets[0].reps == DEFAULT_REPS && self.sets[0].weight == 0.0
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl Default for Exercise {
    fn default() -> Self {
        Self::new()
    }
}

/// A completed, saved workout session.
///
/// Sessions are stored most-recent-first; new sessions are prepended and
/// re-saving an existing id replaces the record in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutSession {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub id: Uuid,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: DateTime<Utc>,
    pub name: String,
    pub exercises: Vec<Exercise>,
}

/// A draft with no named exercise cannot be saved.
#[derive(Debug, thiserror::Error)]
#[error("Please add at least one exercise with a name")]
pub struct EmptySessionError;

impl WorkoutSession {
    /// Build a saveable session from draft input.
    ///
    /// Unnamed exercises are dropped, an empty workout name falls back to
    /// "Workout", and the build fails when no named exercise remains.
    pub fn from_draft(
        id: Option<Uuid>,
        name: &str,
        exercises: Vec<Exercise>,
    ) -> Result<Self, EmptySessionError> {
        let named: Vec<Exercise> = exercises.into_iter().filter(Exercise::has_name).collect();
        if named.is_empty() {
            return Err(EmptySessionError);
        }

        let trimmed = name.trim();
        Ok(Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            date: Utc::now(),
            name: if trimmed.is_empty() {
                "Workout".to_string()
            } else {
                trimmed.to_string()
            },
            exercises: named,
        })
    }
}
