//! Route-engine error types.
//!
//! Both variants indicate a caller contract violation rather than
//! ordinary user error: the caller is expected to offer only valid
//! station names and positive speeds. The engine never returns a
//! partial route.

/// Errors from route computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// The named station is in neither topology sequence.
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// Walking speed must be a positive, finite km/h value.
    #[error("invalid walking speed: {0} km/h")]
    InvalidSpeed(f64),
}
