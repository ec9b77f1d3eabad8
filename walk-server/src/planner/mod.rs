//! The route computation engine.
//!
//! Pure, synchronous computation from (topology, endpoints, speed,
//! start time, direction, rest policy) to an ordered station visitation
//! list with timestamps and total distance. The engine holds no state
//! and is safe to call concurrently.

mod engine;

pub use engine::compute_route;
