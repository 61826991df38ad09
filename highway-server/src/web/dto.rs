//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Autonomy, Direction, Distance};
use crate::planner::SearchResult;
use crate::stations::Station;

/// Request to build a station.
#[derive(Debug, Deserialize)]
pub struct AddStationRequest {
    /// Position along the highway
    pub distance: Distance,

    /// Ranges of the vehicles parked there initially
    #[serde(default)]
    pub vehicles: Vec<Autonomy>,
}

/// Request to park a vehicle at a station.
#[derive(Debug, Deserialize)]
pub struct AddVehicleRequest {
    /// Range of the new vehicle
    pub autonomy: Autonomy,
}

/// Query for route planning.
#[derive(Debug, Deserialize)]
pub struct PlanRouteQuery {
    pub start: Distance,
    pub end: Distance,
}

/// A station as shown to clients.
#[derive(Debug, Serialize)]
pub struct StationView {
    /// Position along the highway
    pub distance: Distance,

    /// Best range available
    pub max_autonomy: Autonomy,

    /// Vehicle ranges, largest first
    pub vehicles: Vec<Autonomy>,
}

impl StationView {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        let mut vehicles: Vec<Autonomy> = station.fleet().iter().collect();
        vehicles.sort_unstable_by(|a, b| b.cmp(a));
        Self {
            distance: station.distance(),
            max_autonomy: station.max_autonomy(),
            vehicles,
        }
    }
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    /// Stops from start to end, or null when there is no route
    pub route: Option<Vec<Distance>>,

    /// Direction of travel requested
    pub direction: Direction,

    /// Number of stations expanded by the search
    pub stations_expanded: usize,
}

impl PlanRouteResponse {
    /// Create from a planner result.
    pub fn from_result(query: &PlanRouteQuery, result: SearchResult) -> Self {
        Self {
            route: result.route.map(|r| r.stops().to_vec()),
            direction: Direction::between(query.start, query.end),
            stations_expanded: result.stations_expanded,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
