//! Web layer for the walking-itinerary planner.
//!
//! Provides a JSON API for listing stations, planning routes, and
//! managing saved plans.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
