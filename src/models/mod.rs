// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod plan;
pub mod session;

pub use plan::{DayType, PlanDay, PlanExercise, WorkoutPlan};
pub use session::{Exercise, WorkoutSession, WorkoutSet};
