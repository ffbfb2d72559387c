// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cycle scheduling: which day of the repeating program applies on a
//! given date.

use chrono::NaiveDate;

use crate::models::WorkoutPlan;
use crate::time_utils::local_today;

/// The plan's day index for an arbitrary calendar date.
///
/// Both the anchor and the queried date are whole calendar days, so the
/// result is stable for the entire day. `rem_euclid` keeps the index
/// non-negative when `date` precedes the anchor, since a plan may
/// legitimately start in the future. Day counts are i64, good for far
/// more history than a human career.
///
/// The plan must have `period_days >= 1` (enforced when plans are saved).
pub fn day_index_on(plan: &WorkoutPlan, date: NaiveDate) -> usize {
    let diff_days = (date - plan.start_date).num_days();
    diff_days.rem_euclid(plan.period_days as i64) as usize
}

/// The plan's day index for today, in local time.
pub fn today_day_index(plan: &WorkoutPlan) -> usize {
    day_index_on(plan, local_today())
}
