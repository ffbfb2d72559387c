// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training plan models: a repeating cycle of configured days anchored at
//! a start date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;

/// Sets prefilled into a freshly added plan exercise.
pub const DEFAULT_PLAN_SETS: u32 = 3;
/// Reps prefilled into a freshly added plan exercise.
pub const DEFAULT_PLAN_REPS: u32 = 10;
/// Plan name used when the user leaves the field empty.
pub const DEFAULT_PLAN_NAME: &str = "My Program";

/// Kind of training day within a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum DayType {
    Rest,
    Upper,
    Lower,
    Push,
    Pull,
    Full,
    Cardio,
    Custom,
}

impl DayType {
    /// Display label shown for days of this type.
    pub fn label(self) -> &'static str {
        match self {
            DayType::Rest => "Rest",
            DayType::Upper => "Upper",
            DayType::Lower => "Lower",
            DayType::Push => "Push",
            DayType::Pull => "Pull",
            DayType::Full => "Full Body",
            DayType::Cardio => "Cardio",
            DayType::Custom => "Custom",
        }
    }
}

/// An exercise template on a plan day. Describes intent, not a performed
/// set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlanExercise {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub id: Uuid,
    pub name: String,
    /// How many sets to prefill when starting this day, at least 1.
    pub default_sets: u32,
    /// Reps prefilled for sets without a historical entry, at least 1.
    pub default_reps: u32,
}

impl PlanExercise {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            default_sets: DEFAULT_PLAN_SETS,
            default_reps: DEFAULT_PLAN_REPS,
        }
    }
}

impl Default for PlanExercise {
    fn default() -> Self {
        Self::new()
    }
}

/// One day within the repeating cycle.
///
/// `day_index` is the day's fixed position within the cycle. It is an
/// identity key, never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlanDay {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub day_index: usize,
    pub day_type: DayType,
    pub label: String,
    pub exercises: Vec<PlanExercise>,
}

impl PlanDay {
    /// A fresh rest day at the given cycle position.
    pub fn rest(day_index: usize) -> Self {
        Self {
            day_index,
            day_type: DayType::Rest,
            label: day_label(day_index),
            exercises: Vec::new(),
        }
    }

    /// Change the day type, resetting the label to the type's display
    /// label. Custom days keep whatever label the user typed.
    pub fn set_type(&mut self, day_type: DayType) {
        self.day_type = day_type;
        if day_type != DayType::Custom {
            self.label = day_type.label().to_string();
        }
    }
}

/// Default label for a cycle position ("Day 1", "Day 2", ...).
pub fn day_label(day_index: usize) -> String {
    format!("Day {}", day_index + 1)
}

/// Plan invariant violations, reported when saving.
#[derive(Debug, thiserror::Error)]
pub enum PlanValidationError {
    #[error("A plan needs at least one day in its cycle")]
    EmptyPeriod,

    #[error("Plan has {actual} days but a cycle length of {expected}")]
    DayCountMismatch { expected: usize, actual: usize },

    #[error("Day at position {position} carries day_index {found}")]
    DayIndexMismatch { position: usize, found: usize },
}

/// The active training program: a cycle of `period_days` days repeating
/// from `start_date`.
///
/// `start_date` is the immutable anchor for cycle-position arithmetic and
/// is preserved across edits to an existing plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutPlan {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub id: Uuid,
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub period_days: usize,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub start_date: NaiveDate,
    pub days: Vec<PlanDay>,
}

impl WorkoutPlan {
    /// A fresh plan of all-rest days anchored at `start_date`.
    pub fn new(name: impl Into<String>, period_days: usize, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            period_days,
            start_date,
            days: (0..period_days).map(PlanDay::rest).collect(),
        }
    }

    /// Change the cycle length in place.
    ///
    /// Growing appends fresh rest days; shrinking truncates trailing days
    /// together with any exercises configured on them.
    pub fn resize_period(&mut self, period_days: usize) {
        if period_days > self.days.len() {
            let extra = (self.days.len()..period_days).map(PlanDay::rest);
            self.days.extend(extra);
        } else {
            self.days.truncate(period_days);
        }
        self.period_days = period_days;
    }

    /// Check the day-list invariants: one day per cycle position, each
    /// carrying its own position as `day_index`.
    pub fn validate(&self) -> Result<(), PlanValidationError> {
        if self.period_days == 0 {
            return Err(PlanValidationError::EmptyPeriod);
        }
        if self.days.len() != self.period_days {
            return Err(PlanValidationError::DayCountMismatch {
                expected: self.period_days,
                actual: self.days.len(),
            });
        }
        for (position, day) in self.days.iter().enumerate() {
            if day.day_index != position {
                return Err(PlanValidationError::DayIndexMismatch {
                    position,
                    found: day.day_index,
                });
            }
        }
        Ok(())
    }
}
