//! Record store layer (local JSON files).

pub mod json;
pub mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use uuid::Uuid;

use crate::error::Result;
use crate::models::{WorkoutPlan, WorkoutSession};

/// Record file names as constants.
pub mod files {
    pub const SESSIONS: &str = "sessions.json";
    pub const PLAN: &str = "plan.json";
}

/// Persistence operations for workout records.
///
/// The session list is ordered most-recent-first: `upsert_session`
/// replaces an existing id in place and prepends otherwise. History
/// queries rely on that order to define "most recent", so implementations
/// must preserve it. Reads never fail; unreadable data is reported as an
/// empty list or an absent plan.
pub trait RecordStore: Send + Sync {
    /// All saved sessions, most recent first.
    fn list_sessions(&self) -> Vec<WorkoutSession>;

    /// Replace the session with the same id, or prepend a new one.
    fn upsert_session(&self, session: WorkoutSession) -> Result<()>;

    /// Delete a session by id. Returns whether a record was removed.
    fn delete_session(&self, id: Uuid) -> Result<bool>;

    /// The active plan, if one is configured.
    fn get_active_plan(&self) -> Option<WorkoutPlan>;

    /// Replace the active plan wholesale.
    fn set_active_plan(&self, plan: WorkoutPlan) -> Result<()>;

    /// Remove the active plan. Idempotent.
    fn clear_active_plan(&self) -> Result<()>;
}
