// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON-file record store.
//!
//! Sessions and the active plan live in two JSON files under the
//! configured data directory. The full state is loaded once at startup
//! and kept in memory; every mutation rewrites the affected file through
//! a temp-file rename so a record file is always either the prior state
//! or the new state, never a partial write.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{WorkoutPlan, WorkoutSession};
use crate::store::{files, RecordStore};

/// File-backed record store.
pub struct JsonStore {
    dir: PathBuf,
    state: RwLock<State>,
}

struct State {
    sessions: Vec<WorkoutSession>,
    plan: Option<WorkoutPlan>,
}

impl JsonStore {
    /// Open (or create) a store rooted at `dir`.
    ///
    /// Missing files mean no data yet; unreadable or corrupt files are
    /// logged and treated as empty so the application always starts with
    /// a valid state.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| AppError::Store(format!("Failed to create {}: {}", dir.display(), e)))?;

        let sessions: Vec<WorkoutSession> =
            read_or_default(&dir.join(files::SESSIONS)).unwrap_or_default();
        let plan: Option<WorkoutPlan> = read_or_default(&dir.join(files::PLAN));

        tracing::info!(
            dir = %dir.display(),
            sessions = sessions.len(),
            has_plan = plan.is_some(),
            "Record store opened"
        );

        Ok(Self {
            dir,
            state: RwLock::new(State { sessions, plan }),
        })
    }

    fn persist_sessions(&self, sessions: &[WorkoutSession]) -> Result<()> {
        write_atomic(&self.dir.join(files::SESSIONS), sessions)
    }

    fn persist_plan(&self, plan: &Option<WorkoutPlan>) -> Result<()> {
        let path = self.dir.join(files::PLAN);
        match plan {
            Some(plan) => write_atomic(&path, plan),
            None => {
                if path.exists() {
                    fs::remove_file(&path).map_err(|e| {
                        AppError::Store(format!("Failed to remove {}: {}", path.display(), e))
                    })?;
                }
                Ok(())
            }
        }
    }
}

impl RecordStore for JsonStore {
    fn list_sessions(&self) -> Vec<WorkoutSession> {
        self.state.read().expect("store lock poisoned").sessions.clone()
    }

    fn upsert_session(&self, session: WorkoutSession) -> Result<()> {
        let mut state = self.state.write().expect("store lock poisoned");
        match state.sessions.iter_mut().find(|s| s.id == session.id) {
            Some(existing) => *existing = session,
            None => state.sessions.insert(0, session),
        }
        self.persist_sessions(&state.sessions)
    }

    fn delete_session(&self, id: Uuid) -> Result<bool> {
        let mut state = self.state.write().expect("store lock poisoned");
        let before = state.sessions.len();
        state.sessions.retain(|s| s.id != id);
        if state.sessions.len() == before {
            return Ok(false);
        }
        self.persist_sessions(&state.sessions)?;
        Ok(true)
    }

    fn get_active_plan(&self) -> Option<WorkoutPlan> {
        self.state.read().expect("store lock poisoned").plan.clone()
    }

    fn set_active_plan(&self, plan: WorkoutPlan) -> Result<()> {
        let mut state = self.state.write().expect("store lock poisoned");
        state.plan = Some(plan);
        self.persist_plan(&state.plan)
    }

    fn clear_active_plan(&self) -> Result<()> {
        let mut state = self.state.write().expect("store lock poisoned");
        state.plan = None;
        self.persist_plan(&state.plan)
    }
}

/// Read and deserialize a record file.
///
/// `None` means "no usable data": the file is absent, unreadable, or does
/// not parse. Corruption is logged but never propagated.
fn read_or_default<T: DeserializeOwned>(path: &Path) -> Option<T> {
    if !path.exists() {
        return None;
    }
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read record file");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Corrupt record file, starting empty");
            None
        }
    }
}

/// Serialize to a temp file in the same directory, then rename over the
/// target.
fn write_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Store(format!("Failed to serialize records: {}", e)))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)
        .map_err(|e| AppError::Store(format!("Failed to write {}: {}", tmp.display(), e)))?;
    fs::rename(&tmp, path)
        .map_err(|e| AppError::Store(format!("Failed to replace {}: {}", path.display(), e)))?;
    Ok(())
}
