//! Application state for the web layer.

use std::sync::{Arc, Mutex};

use crate::storage::PlanStore;
use crate::topology::Topology;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The line topology routes are computed over
    pub topology: Arc<Topology>,

    /// Saved-plan store
    pub plans: Arc<Mutex<PlanStore>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(topology: Topology, plans: PlanStore) -> Self {
        Self {
            topology: Arc::new(topology),
            plans: Arc::new(Mutex::new(plans)),
        }
    }
}
