//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::command::{CommandError, run_script};
use crate::domain::{Autonomy, Distance, HighwayError};
use crate::highway::Highway;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations).post(add_station))
        .route("/stations/:distance", delete(remove_station))
        .route("/stations/:distance/vehicles", post(add_vehicle))
        .route(
            "/stations/:distance/vehicles/:autonomy",
            delete(remove_vehicle),
        )
        .route("/route", get(plan_route))
        .route("/commands", post(run_commands))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All stations in increasing distance order.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationView>> {
    let highway = state.highway.lock().await;
    Json(highway.stations().map(StationView::from_station).collect())
}

/// Build a station with its initial fleet.
async fn add_station(
    State(state): State<AppState>,
    Json(req): Json<AddStationRequest>,
) -> Result<(StatusCode, Json<StationView>), AppError> {
    let mut highway = state.highway.lock().await;
    highway.add_station(req.distance, req.vehicles)?;
    let view = station_view(&highway, req.distance)?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Demolish a station.
async fn remove_station(
    State(state): State<AppState>,
    Path(distance): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut highway = state.highway.lock().await;
    highway.remove_station(Distance(distance))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Park a vehicle at a station.
async fn add_vehicle(
    State(state): State<AppState>,
    Path(distance): Path<i64>,
    Json(req): Json<AddVehicleRequest>,
) -> Result<(StatusCode, Json<StationView>), AppError> {
    let mut highway = state.highway.lock().await;
    let distance = Distance(distance);
    highway.add_vehicle(distance, req.autonomy)?;
    let view = station_view(&highway, distance)?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Scrap one vehicle from a station.
async fn remove_vehicle(
    State(state): State<AppState>,
    Path((distance, autonomy)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    let mut highway = state.highway.lock().await;
    highway.remove_vehicle(Distance(distance), Autonomy(autonomy))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Plan a route with the fewest stops.
///
/// No route is a normal answer and comes back as `200` with a null route.
async fn plan_route(
    State(state): State<AppState>,
    Query(query): Query<PlanRouteQuery>,
) -> Json<PlanRouteResponse> {
    let mut highway = state.highway.lock().await;
    let result = highway.search(query.start, query.end);
    Json(PlanRouteResponse::from_result(&query, result))
}

/// Run a command script and return its replies as text.
async fn run_commands(State(state): State<AppState>, body: String) -> Result<String, AppError> {
    let mut highway = state.highway.lock().await;
    let replies = run_script(&mut highway, &body)?;
    let mut out = String::new();
    for reply in replies {
        out.push_str(&reply.to_string());
        out.push('\n');
    }
    Ok(out)
}

fn station_view(highway: &Highway, distance: Distance) -> Result<StationView, AppError> {
    highway
        .station(distance)
        .map(StationView::from_station)
        .ok_or(AppError::from(HighwayError::StationNotFound(distance)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
}

impl From<HighwayError> for AppError {
    fn from(e: HighwayError) -> Self {
        let message = e.to_string();
        match e {
            HighwayError::DuplicateStation(_) => AppError::Conflict { message },
            HighwayError::StationNotFound(_) | HighwayError::VehicleNotFound { .. } => {
                AppError::NotFound { message }
            }
        }
    }
}

impl From<CommandError> for AppError {
    fn from(e: CommandError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
        };

        warn!(status = status.as_u16(), %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
