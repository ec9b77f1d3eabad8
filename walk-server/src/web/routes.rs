//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

use crate::domain::{ClockTimeError, RouteError, WalkingSpeed, parse_clock_time};
use crate::planner::compute_route;
use crate::storage::{PlanDraft, StorageError};
use crate::topology::REST_MINUTE_OPTIONS;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/route/plan", post(plan_route))
        .route(
            "/plans",
            get(list_plans).post(save_plan).delete(delete_all_plans),
        )
        .route("/plans/:id", delete(delete_plan))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List selectable stations, speeds, and rest durations.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let speeds = WalkingSpeed::ALL
        .iter()
        .map(|s| SpeedOption {
            id: *s,
            label: s.label().to_string(),
            km_per_hour: s.km_per_hour(),
        })
        .collect();

    Json(StationsResponse {
        stations: state
            .topology
            .station_options()
            .iter()
            .map(|s| s.name.to_string())
            .collect(),
        junction: state.topology.junction().to_string(),
        speeds,
        rest_minute_options: REST_MINUTE_OPTIONS.to_vec(),
    })
}

/// Plan a route, returning one itinerary per supported speed.
async fn plan_route(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<Json<PlanRouteResponse>, AppError> {
    let start = parse_start_time(&req.start_time)?;

    let mut routes = Vec::with_capacity(WalkingSpeed::ALL.len());
    for speed in WalkingSpeed::ALL {
        let result = compute_route(
            &state.topology,
            &req.origin,
            &req.destination,
            speed.km_per_hour(),
            start,
            req.direction,
            req.rest_minutes,
        )?;
        routes.push(SpeedRouteResult::from_result(speed, &result));
    }

    Ok(Json(PlanRouteResponse { routes }))
}

/// List saved plans, newest first.
async fn list_plans(State(state): State<AppState>) -> Result<Json<PlansResponse>, AppError> {
    let store = state.plans.lock().map_err(|_| AppError::poisoned())?;
    let plans = store.list()?.iter().map(SavedPlanResult::from_plan).collect();
    Ok(Json(PlansResponse { plans }))
}

/// Save a plan. The route is recomputed from the submitted inputs.
async fn save_plan(
    State(state): State<AppState>,
    Json(req): Json<SavePlanRequest>,
) -> Result<(StatusCode, Json<SavedPlanResult>), AppError> {
    let start = parse_start_time(&req.start_time)?;

    let result = compute_route(
        &state.topology,
        &req.origin,
        &req.destination,
        req.walking_speed.km_per_hour(),
        start,
        req.direction,
        req.rest_minutes,
    )?;

    let draft = PlanDraft {
        origin: req.origin,
        destination: req.destination,
        direction: req.direction,
        walking_speed: req.walking_speed,
        start_time: start,
        rest_minutes: req.rest_minutes,
        total_distance_km: result.total_distance_km,
        stations: result.stations,
    };

    let mut store = state.plans.lock().map_err(|_| AppError::poisoned())?;
    let saved = store.save(draft)?;

    Ok((StatusCode::CREATED, Json(SavedPlanResult::from_plan(&saved))))
}

/// Delete one saved plan by id.
async fn delete_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut store = state.plans.lock().map_err(|_| AppError::poisoned())?;
    if store.delete(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            message: format!("no saved plan with id {id}"),
        })
    }
}

/// Delete every saved plan.
async fn delete_all_plans(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let mut store = state.plans.lock().map_err(|_| AppError::poisoned())?;
    store.delete_all()?;
    Ok(StatusCode::NO_CONTENT)
}

/// Parse an HH:MM departure time against today's date.
fn parse_start_time(raw: &str) -> Result<NaiveDateTime, AppError> {
    let today = Local::now().date_naive();
    parse_clock_time(raw, today).map_err(AppError::from)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    fn poisoned() -> Self {
        AppError::Internal {
            message: "plan store lock poisoned".to_string(),
        }
    }
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<ClockTimeError> for AppError {
    fn from(e: ClockTimeError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
