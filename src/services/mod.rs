// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - the scheduling, history and logging engine.

pub mod guided;
pub mod history;
pub mod materialize;
pub mod schedule;

pub use guided::{base_weight, reconcile, BaseWeight, DraftSession, GuidedCursor};
pub use history::{exercise_names, last_sets_for_exercise, progress_series, SetSummary};
pub use materialize::materialize_day;
pub use schedule::{day_index_on, today_day_index};
