// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory record store for tests.

use std::sync::RwLock;

use uuid::Uuid;

use crate::error::Result;
use crate::models::{WorkoutPlan, WorkoutSession};
use crate::store::RecordStore;

/// Volatile store with the same ordering semantics as [`super::JsonStore`].
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    sessions: Vec<WorkoutSession>,
    plan: Option<WorkoutPlan>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn list_sessions(&self) -> Vec<WorkoutSession> {
        self.state.read().expect("store lock poisoned").sessions.clone()
    }

    fn upsert_session(&self, session: WorkoutSession) -> Result<()> {
        let mut state = self.state.write().expect("store lock poisoned");
        match state.sessions.iter_mut().find(|s| s.id == session.id) {
            Some(existing) => *existing = session,
            None => state.sessions.insert(0, session),
        }
        Ok(())
    }

    fn delete_session(&self, id: Uuid) -> Result<bool> {
        let mut state = self.state.write().expect("store lock poisoned");
        let before = state.sessions.len();
        state.sessions.retain(|s| s.id != id);
        Ok(state.sessions.len() != before)
    }

    fn get_active_plan(&self) -> Option<WorkoutPlan> {
        self.state.read().expect("store lock poisoned").plan.clone()
    }

    fn set_active_plan(&self, plan: WorkoutPlan) -> Result<()> {
        self.state.write().expect("store lock poisoned").plan = Some(plan);
        Ok(())
    }

    fn clear_active_plan(&self) -> Result<()> {
        self.state.write().expect("store lock poisoned").plan = None;
        Ok(())
    }
}
