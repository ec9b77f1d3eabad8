//! Saved walking plans.
//!
//! A plan is an immutable snapshot of one computed route plus the
//! inputs that produced it: created on explicit save, deleted on
//! explicit delete, never mutated. The whole plan list is kept as one
//! JSON document behind a key-value port, so the backing medium is an
//! injected detail rather than ambient global state.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{Direction, RouteStation, WalkingSpeed};

/// The key the plan list is stored under.
pub const STORAGE_KEY: &str = "oedo-walking-plans";

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing store failed (I/O and similar).
    #[error("storage backend error: {0}")]
    Backend(String),

    /// The stored document could not be decoded.
    #[error("corrupt saved-plan data: {0}")]
    Corrupt(String),
}

/// Key-value persistence port.
///
/// The store only ever reads and writes whole string values under
/// fixed keys, so any medium that can do that can back it.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// The inputs and computed output captured when the user saves a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDraft {
    pub origin: String,
    pub destination: String,
    pub direction: Direction,
    pub walking_speed: WalkingSpeed,
    pub start_time: NaiveDateTime,
    pub rest_minutes: u32,
    pub total_distance_km: f64,
    pub stations: Vec<RouteStation>,
}

/// A stored plan: a draft plus its identity and creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub origin: String,
    pub destination: String,
    pub direction: Direction,
    pub walking_speed: WalkingSpeed,
    pub start_time: NaiveDateTime,
    pub rest_minutes: u32,
    pub total_distance_km: f64,
    pub stations: Vec<RouteStation>,
}

/// Saved-plan store over an injected key-value backend.
pub struct PlanStore {
    kv: Box<dyn KeyValueStore>,
}

impl PlanStore {
    pub fn new(kv: impl KeyValueStore + 'static) -> Self {
        Self { kv: Box::new(kv) }
    }

    /// Store a new plan, newest first. Returns the stored plan with
    /// its assigned id and creation time.
    pub fn save(&mut self, draft: PlanDraft) -> Result<SavedPlan, StorageError> {
        let mut plans = self.list()?;

        let plan = SavedPlan {
            id: Uuid::new_v4(),
            created_at: Local::now().naive_local(),
            origin: draft.origin,
            destination: draft.destination,
            direction: draft.direction,
            walking_speed: draft.walking_speed,
            start_time: draft.start_time,
            rest_minutes: draft.rest_minutes,
            total_distance_km: draft.total_distance_km,
            stations: draft.stations,
        };

        plans.insert(0, plan.clone());
        self.persist(&plans)?;
        debug!(id = %plan.id, origin = %plan.origin, destination = %plan.destination, "saved plan");

        Ok(plan)
    }

    /// All saved plans, newest first. A missing document is an empty list.
    pub fn list(&self) -> Result<Vec<SavedPlan>, StorageError> {
        match self.kv.get(STORAGE_KEY)? {
            None => Ok(Vec::new()),
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| StorageError::Corrupt(e.to_string()))
            }
        }
    }

    /// Delete one plan by id. Returns whether anything was removed.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, StorageError> {
        let mut plans = self.list()?;
        let before = plans.len();
        plans.retain(|p| p.id != id);

        if plans.len() == before {
            return Ok(false);
        }

        self.persist(&plans)?;
        debug!(%id, "deleted plan");
        Ok(true)
    }

    /// Delete every saved plan.
    pub fn delete_all(&mut self) -> Result<(), StorageError> {
        self.kv.remove(STORAGE_KEY)
    }

    fn persist(&mut self, plans: &[SavedPlan]) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(plans).map_err(|e| StorageError::Backend(e.to_string()))?;
        self.kv.set(STORAGE_KEY, &json)
    }
}
