// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date handling.

use chrono::{Local, NaiveDate};

/// The current calendar date in the local time zone.
///
/// Cycle arithmetic works on whole calendar days; using the local date
/// keeps a plan's computed day index stable for the entire day.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
