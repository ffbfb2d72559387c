// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Trakker: plan-driven workout logging.
//!
//! This crate provides the backend API for recording training sessions,
//! scheduling days of a repeating program, and pre-filling drafts from
//! the user's most recent performance.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use std::sync::Arc;

use config::Config;
use store::RecordStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn RecordStore>,
}
