//! Domain types for the walking-itinerary planner.
//!
//! This module contains the core domain model: stations and zones,
//! traversal directions, walking-speed presets, computed routes, and
//! clock-time helpers. Where a type has invariants they are enforced at
//! construction time, so code that receives these types can trust them.

mod direction;
mod error;
mod route;
mod speed;
mod station;
mod time;

pub use direction::Direction;
pub use error::RouteError;
pub use route::{RouteResult, RouteStation};
pub use speed::WalkingSpeed;
pub use station::{Station, Zone};
pub use time::{ClockTimeError, format_clock_time, parse_clock_time};
