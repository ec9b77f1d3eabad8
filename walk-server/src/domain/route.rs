//! Computed route types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One visited station in a computed route.
///
/// `departure` is recorded for the origin (equal to the start time) and
/// for rest stations (arrival plus the rest duration); every other
/// station carries arrival only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStation {
    pub name: String,

    pub arrival: NaiveDateTime,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure: Option<NaiveDateTime>,

    #[serde(default)]
    pub is_rest_station: bool,
}

impl RouteStation {
    /// The time the walk continues from this station.
    pub fn leaves_at(&self) -> NaiveDateTime {
        self.departure.unwrap_or(self.arrival)
    }
}

/// A complete computed itinerary: the ordered station list (origin
/// first, destination last) and the total distance actually walked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub stations: Vec<RouteStation>,
    pub total_distance_km: f64,
}

impl RouteResult {
    /// Total elapsed time from first arrival to last arrival, in
    /// fractional hours. A route with fewer than two stations is 0.
    pub fn total_elapsed_hours(&self) -> f64 {
        let (Some(first), Some(last)) = (self.stations.first(), self.stations.last()) else {
            return 0.0;
        };
        if self.stations.len() < 2 {
            return 0.0;
        }
        let elapsed = last.arrival.signed_duration_since(first.arrival);
        elapsed.num_milliseconds() as f64 / 3_600_000.0
    }

    /// The origin entry, if any.
    pub fn origin(&self) -> Option<&RouteStation> {
        self.stations.first()
    }

    /// The destination entry, if any.
    pub fn destination(&self) -> Option<&RouteStation> {
        self.stations.last()
    }
}
