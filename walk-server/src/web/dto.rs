//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Direction, RouteResult, RouteStation, WalkingSpeed, format_clock_time,
};
use crate::storage::SavedPlan;

/// Request to plan a walking route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Origin station name
    pub origin: String,

    /// Destination station name
    pub destination: String,

    /// Loop direction (ignored for purely linear routes)
    pub direction: Direction,

    /// Departure time in HH:MM format
    pub start_time: String,

    /// Minutes spent at each rest stop
    pub rest_minutes: u32,
}

/// A station visit in a computed route.
#[derive(Debug, Serialize)]
pub struct RouteStationResult {
    /// Station name
    pub name: String,

    /// Arrival clock time in HH:MM format
    pub arrival: String,

    /// Departure clock time, absent at the final destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,

    /// Whether a rest is taken here
    pub is_rest_station: bool,
}

/// The route computed for one walking speed.
#[derive(Debug, Serialize)]
pub struct SpeedRouteResult {
    /// Walking speed identifier
    pub speed: WalkingSpeed,

    /// Display label for the speed
    pub label: String,

    /// Speed in km/h
    pub km_per_hour: f64,

    /// Total distance walked in kilometres
    pub total_distance_km: f64,

    /// Door-to-door elapsed time in hours, rests included
    pub total_hours: f64,

    /// Station visits in order
    pub stations: Vec<RouteStationResult>,
}

/// Response for route planning: one route per supported speed.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    pub routes: Vec<SpeedRouteResult>,
}

/// A selectable walking speed.
#[derive(Debug, Serialize)]
pub struct SpeedOption {
    pub id: WalkingSpeed,
    pub label: String,
    pub km_per_hour: f64,
}

/// Response for the stations listing.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// Selectable station names, junction listed once
    pub stations: Vec<String>,

    /// The station shared by the linear and circular sections
    pub junction: String,

    /// Selectable walking speeds
    pub speeds: Vec<SpeedOption>,

    /// Selectable rest durations in minutes
    pub rest_minute_options: Vec<u32>,
}

/// Request to save a plan. The route is recomputed server-side so the
/// stored itinerary always matches the stored inputs.
#[derive(Debug, Deserialize)]
pub struct SavePlanRequest {
    pub origin: String,
    pub destination: String,
    pub direction: Direction,
    pub walking_speed: WalkingSpeed,

    /// Departure time in HH:MM format
    pub start_time: String,

    pub rest_minutes: u32,
}

/// A saved plan.
#[derive(Debug, Serialize)]
pub struct SavedPlanResult {
    pub id: String,
    pub created_at: String,
    pub origin: String,
    pub destination: String,
    pub direction: Direction,
    pub walking_speed: WalkingSpeed,

    /// Departure time in HH:MM format
    pub start_time: String,

    pub rest_minutes: u32,
    pub total_distance_km: f64,
    pub stations: Vec<RouteStationResult>,
}

/// Response for the saved-plan listing, newest first.
#[derive(Debug, Serialize)]
pub struct PlansResponse {
    pub plans: Vec<SavedPlanResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl RouteStationResult {
    fn from_station(station: &RouteStation) -> Self {
        Self {
            name: station.name.clone(),
            arrival: format_clock_time(station.arrival),
            departure: station.departure.map(format_clock_time),
            is_rest_station: station.is_rest_station,
        }
    }
}

impl SpeedRouteResult {
    /// Create from a computed route at the given speed.
    pub fn from_result(speed: WalkingSpeed, result: &RouteResult) -> Self {
        Self {
            speed,
            label: speed.label().to_string(),
            km_per_hour: speed.km_per_hour(),
            total_distance_km: result.total_distance_km,
            total_hours: result.total_elapsed_hours(),
            stations: result
                .stations
                .iter()
                .map(RouteStationResult::from_station)
                .collect(),
        }
    }
}

impl SavedPlanResult {
    /// Create from a stored plan.
    pub fn from_plan(plan: &SavedPlan) -> Self {
        Self {
            id: plan.id.to_string(),
            created_at: plan.created_at.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            origin: plan.origin.clone(),
            destination: plan.destination.clone(),
            direction: plan.direction,
            walking_speed: plan.walking_speed,
            start_time: format_clock_time(plan.start_time),
            rest_minutes: plan.rest_minutes,
            total_distance_km: plan.total_distance_km,
            stations: plan
                .stations
                .iter()
                .map(RouteStationResult::from_station)
                .collect(),
        }
    }
}
