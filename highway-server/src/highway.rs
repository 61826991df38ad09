//! The highway: stations, their fleets and route planning behind one API.
//!
//! Every operation either succeeds completely or returns an error and
//! leaves the highway unchanged.

use tracing::debug;

use crate::domain::{Autonomy, Distance, Fleet, HighwayError, Route};
use crate::planner::{Planner, SearchRequest, SearchResult};
use crate::stations::{Station, StationIndex};

/// A highway of service stations.
#[derive(Debug, Default)]
pub struct Highway {
    index: StationIndex,
}

impl Highway {
    /// Create an empty highway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a station at `distance` with an initial fleet.
    pub fn add_station(
        &mut self,
        distance: Distance,
        vehicles: impl IntoIterator<Item = Autonomy>,
    ) -> Result<(), HighwayError> {
        if self.index.find(distance).is_some() {
            return Err(HighwayError::DuplicateStation(distance));
        }
        let fleet: Fleet = vehicles.into_iter().collect();
        debug!(
            distance = distance.0,
            vehicles = fleet.len(),
            "station added"
        );
        self.index.insert(Station::new(distance, fleet));
        Ok(())
    }

    /// Demolish the station at `distance`, scrapping its fleet.
    pub fn remove_station(&mut self, distance: Distance) -> Result<(), HighwayError> {
        let id = self
            .index
            .find(distance)
            .ok_or(HighwayError::StationNotFound(distance))?;
        let station = self.index.remove(id);
        debug!(
            distance = distance.0,
            vehicles = station.fleet().len(),
            "station demolished"
        );
        Ok(())
    }

    /// Park a vehicle at the station at `distance`.
    pub fn add_vehicle(
        &mut self,
        distance: Distance,
        autonomy: Autonomy,
    ) -> Result<(), HighwayError> {
        let id = self
            .index
            .find(distance)
            .ok_or(HighwayError::StationNotFound(distance))?;
        self.index.station_mut(id).add_vehicle(autonomy);
        debug!(distance = distance.0, autonomy = autonomy.0, "vehicle added");
        Ok(())
    }

    /// Scrap one vehicle with range `autonomy` from the station at `distance`.
    pub fn remove_vehicle(
        &mut self,
        distance: Distance,
        autonomy: Autonomy,
    ) -> Result<(), HighwayError> {
        let id = self
            .index
            .find(distance)
            .ok_or(HighwayError::StationNotFound(distance))?;
        if !self.index.station_mut(id).remove_vehicle(autonomy) {
            return Err(HighwayError::VehicleNotFound {
                station: distance,
                autonomy,
            });
        }
        debug!(distance = distance.0, autonomy = autonomy.0, "vehicle scrapped");
        Ok(())
    }

    /// Plan a route with the fewest stops from `start` to `end`.
    ///
    /// Returns `None` when there is no route, including when either
    /// endpoint has no station.
    pub fn plan_route(&mut self, start: Distance, end: Distance) -> Option<Route> {
        self.search(start, end).route
    }

    /// Like [`Highway::plan_route`], also reporting search effort.
    pub fn search(&mut self, start: Distance, end: Distance) -> SearchResult {
        Planner::new(&mut self.index).search(&SearchRequest::new(start, end))
    }

    /// Look up the station at `distance`.
    pub fn station(&self, distance: Distance) -> Option<&Station> {
        self.index
            .find(distance)
            .map(|id| self.index.station(id))
    }

    /// All stations in increasing distance order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.index.iter()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the highway has no stations.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
