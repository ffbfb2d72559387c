// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Guided progression: a cursor walking an in-progress draft set by set,
//! suggesting weights relative to history.
//!
//! The cursor invariants live in one pure function, [`reconcile`], which
//! runs after every edit to the draft's exercise list. Everything else is
//! a thin state machine around it.

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Exercise, WorkoutSession, WorkoutSet};
use crate::services::history;

/// Position of the guidance cursor: exercise index, then set index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuidedCursor {
    pub exercise: usize,
    pub set: usize,
}

/// Result of re-deriving cursor state against the current exercise list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciled {
    pub cursor: GuidedCursor,
    /// Nearest later exercise with a non-empty name, shown as "up next".
    pub next_named_exercise: Option<usize>,
}

/// Clamp and re-derive the cursor after an edit to the exercise list.
///
/// - An empty list resets to (0, 0).
/// - An exercise index past the end clamps to the last exercise's last
///   set (covers removal of the exercise under the cursor).
/// - The set index clamps to the current exercise's set count.
/// - A cursor resting on an unnamed exercise jumps to the first named
///   exercise in list order, if any, so guidance doesn't stall on a
///   placeholder row the user hasn't filled in yet.
pub fn reconcile(cursor: GuidedCursor, exercises: &[Exercise]) -> Reconciled {
    if exercises.is_empty() {
        return Reconciled {
            cursor: GuidedCursor::default(),
            next_named_exercise: None,
        };
    }

    let mut cursor = cursor;
    if cursor.exercise > exercises.len() - 1 {
        cursor.exercise = exercises.len() - 1;
        cursor.set = exercises[cursor.exercise].sets.len().saturating_sub(1);
    } else {
        cursor.set = cursor
            .set
            .min(exercises[cursor.exercise].sets.len().saturating_sub(1));
    }

    if !exercises[cursor.exercise].has_name() {
        if let Some(fallback) = exercises.iter().position(Exercise::has_name) {
            if fallback != cursor.exercise {
                cursor = GuidedCursor {
                    exercise: fallback,
                    set: 0,
                };
            }
        }
    }

    let next_named_exercise = if cursor.exercise >= exercises.len() - 1 {
        None
    } else {
        exercises
            .iter()
            .enumerate()
            .skip(cursor.exercise + 1)
            .find(|(_, exercise)| exercise.has_name())
            .map(|(index, _)| index)
    };

    Reconciled {
        cursor,
        next_named_exercise,
    }
}

/// A weight suggestion for one set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseWeight {
    pub weight: f64,
    /// True when the weight came from a historical entry at this set
    /// position, false when it fell back to the draft's own value.
    pub has_history: bool,
}

/// Suggested base weight for a set of the given exercise.
///
/// Named exercises consult history at the same set position; otherwise
/// the draft set's current weight (or zero) is the base. Never negative.
pub fn base_weight(
    exercise: Option<&Exercise>,
    set_index: usize,
    sessions: &[WorkoutSession],
) -> BaseWeight {
    let Some(exercise) = exercise else {
        return BaseWeight {
            weight: 0.0,
            has_history: false,
        };
    };

    let name = exercise.name.trim();
    let history_entry = if name.is_empty() {
        None
    } else {
        history::last_sets_for_exercise(sessions, name)
            .and_then(|sets| sets.get(set_index).cloned())
    };

    match history_entry {
        Some(entry) => BaseWeight {
            weight: entry.weight.max(0.0),
            has_history: true,
        },
        None => BaseWeight {
            weight: exercise
                .sets
                .get(set_index)
                .map(|set| set.weight)
                .unwrap_or(0.0)
                .max(0.0),
            has_history: false,
        },
    }
}

/// An unsaved workout under interactive construction.
///
/// Owns the draft exercises plus the guidance cursor, and funnels every
/// mutation through [`reconcile`] so the cursor invariants hold at all
/// times. Dropped without trace if the user walks away before saving.
#[derive(Debug, Clone)]
pub struct DraftSession {
    pub name: String,
    exercises: Vec<Exercise>,
    cursor: GuidedCursor,
    next_named_exercise: Option<usize>,
}

impl DraftSession {
    /// An empty draft with one blank exercise row, as the logging screen
    /// starts.
    pub fn new() -> Self {
        Self::with_exercises(String::new(), vec![Exercise::new()])
    }

    /// A draft pre-filled from materialization.
    pub fn with_exercises(name: impl Into<String>, exercises: Vec<Exercise>) -> Self {
        let mut draft = Self {
            name: name.into(),
            exercises,
            cursor: GuidedCursor::default(),
            next_named_exercise: None,
        };
        draft.refresh();
        draft
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn cursor(&self) -> GuidedCursor {
        self.cursor
    }

    pub fn next_named_exercise(&self) -> Option<usize> {
        self.next_named_exercise
    }

    /// The exercise under the cursor, if the draft has any.
    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.exercises.get(self.cursor.exercise)
    }

    /// Whether guidance has anything to point at.
    pub fn guidance_active(&self) -> bool {
        self.current_exercise().is_some()
    }

    fn refresh(&mut self) {
        let reconciled = reconcile(self.cursor, &self.exercises);
        self.cursor = reconciled.cursor;
        self.next_named_exercise = reconciled.next_named_exercise;
    }

    /// Append a blank exercise row. Returns its id.
    pub fn add_exercise(&mut self) -> Uuid {
        let exercise = Exercise::new();
        let id = exercise.id;
        self.exercises.push(exercise);
        self.refresh();
        id
    }

    pub fn remove_exercise(&mut self, exercise_id: Uuid) {
        self.exercises.retain(|exercise| exercise.id != exercise_id);
        self.refresh();
    }

    /// Rename an exercise, auto-filling its sets from history when the
    /// row is still untouched.
    ///
    /// The pristine check is what keeps a rename from clobbering sets the
    /// user already entered: only an exercise holding exactly its single
    /// default set gets replaced with fresh copies of the historical
    /// sets.
    pub fn rename_exercise(
        &mut self,
        exercise_id: Uuid,
        name: &str,
        sessions: &[WorkoutSession],
    ) {
        if let Some(exercise) = self
            .exercises
            .iter_mut()
            .find(|exercise| exercise.id == exercise_id)
        {
            let trimmed = name.trim();
            if !trimmed.is_empty() && exercise.is_pristine() {
                if let Some(last) = history::last_sets_for_exercise(sessions, trimmed) {
                    exercise.sets = last
                        .iter()
                        .map(|entry| WorkoutSet::with(entry.reps, entry.weight))
                        .collect();
                }
            }
            exercise.name = name.to_string();
        }
        self.refresh();
    }

    pub fn add_set(&mut self, exercise_id: Uuid) {
        if let Some(exercise) = self
            .exercises
            .iter_mut()
            .find(|exercise| exercise.id == exercise_id)
        {
            exercise.sets.push(WorkoutSet::new());
        }
        self.refresh();
    }

    /// Remove a set. An exercise always keeps at least one set.
    pub fn remove_set(&mut self, exercise_id: Uuid, set_id: Uuid) -> Result<()> {
        let Some(exercise) = self
            .exercises
            .iter_mut()
            .find(|exercise| exercise.id == exercise_id)
        else {
            return Ok(());
        };
        if exercise.sets.len() <= 1 {
            return Err(AppError::BadRequest(
                "An exercise must keep at least one set".to_string(),
            ));
        }
        exercise.sets.retain(|set| set.id != set_id);
        self.refresh();
        Ok(())
    }

    pub fn set_reps(&mut self, exercise_id: Uuid, set_id: Uuid, reps: u32) {
        self.update_set(exercise_id, set_id, |set| set.reps = reps);
    }

    pub fn set_weight(&mut self, exercise_id: Uuid, set_id: Uuid, weight: f64) {
        self.update_set(exercise_id, set_id, |set| set.weight = weight.max(0.0));
    }

    fn update_set(&mut self, exercise_id: Uuid, set_id: Uuid, apply: impl FnOnce(&mut WorkoutSet)) {
        if let Some(set) = self
            .exercises
            .iter_mut()
            .find(|exercise| exercise.id == exercise_id)
            .and_then(|exercise| exercise.sets.iter_mut().find(|set| set.id == set_id))
        {
            apply(set);
        }
        self.refresh();
    }

    /// The suggestion for the set under the cursor.
    pub fn suggested_weight(&self, sessions: &[WorkoutSession]) -> BaseWeight {
        base_weight(self.current_exercise(), self.cursor.set, sessions)
    }

    /// Apply a one-tap adjustment relative to the suggested base weight.
    ///
    /// No-op while the cursor sits on an unnamed exercise or an empty
    /// draft. The result never goes below zero.
    pub fn apply_suggested_weight(&mut self, delta: f64, sessions: &[WorkoutSession]) {
        let Some(exercise) = self.current_exercise() else {
            return;
        };
        if !exercise.has_name() {
            return;
        }
        let Some(set) = exercise.sets.get(self.cursor.set) else {
            return;
        };
        let (exercise_id, set_id) = (exercise.id, set.id);

        let base = base_weight(Some(exercise), self.cursor.set, sessions).weight;
        let next = (base + delta).max(0.0);
        self.update_set(exercise_id, set_id, |set| set.weight = next);
    }

    /// Move to the next set, or the first set of the next exercise, or
    /// stay put at the end of the session.
    pub fn advance(&mut self) {
        let Some(exercise) = self.current_exercise() else {
            return;
        };
        if self.cursor.set + 1 < exercise.sets.len() {
            self.cursor.set += 1;
            return;
        }
        if self.cursor.exercise + 1 < self.exercises.len() {
            self.cursor.exercise += 1;
            self.cursor.set = 0;
            self.refresh();
        }
    }

    /// Finalize into a saveable session, dropping unnamed rows.
    pub fn into_session(self) -> Result<WorkoutSession> {
        WorkoutSession::from_draft(None, &self.name, self.exercises)
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::new()
    }
}
