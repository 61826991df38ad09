//! Route planning entry point.
//!
//! Resolves the endpoints, picks the search for the direction of travel and
//! tears down the per-station search marks before returning.

use tracing::debug;

use crate::domain::{Direction, Distance, Route};
use crate::stations::StationIndex;

use super::bfs::{reset_direct, reset_reverse, search_direct, search_reverse};

/// Request for a route between two highway positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    /// Where the trip begins.
    pub start: Distance,

    /// Where the trip ends.
    pub end: Distance,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(start: Distance, end: Distance) -> Self {
        Self { start, end }
    }

    /// Direction of travel.
    pub fn direction(&self) -> Direction {
        Direction::between(self.start, self.end)
    }
}

/// Result of route planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Route with the fewest stops, or `None` when the end is unreachable.
    pub route: Option<Route>,

    /// Number of stations taken off the work queue.
    pub stations_expanded: usize,
}

impl SearchResult {
    /// A result with no route and no work done.
    pub fn no_route() -> Self {
        Self {
            route: None,
            stations_expanded: 0,
        }
    }
}

/// Route planner over a station index.
///
/// Borrows the index mutably for the duration of a call because the search
/// keeps its visited flags and predecessor links on the stations
/// themselves. Every call leaves those marks cleared.
pub struct Planner<'a> {
    index: &'a mut StationIndex,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(index: &'a mut StationIndex) -> Self {
        Self { index }
    }

    /// Find a route using the fewest stops.
    ///
    /// A start or end with no station yields no route.
    pub fn search(&mut self, request: &SearchRequest) -> SearchResult {
        let (Some(start), Some(end)) = (
            self.index.find(request.start),
            self.index.find(request.end),
        ) else {
            debug!(
                start = request.start.0,
                end = request.end.0,
                "endpoint not indexed, no route"
            );
            return SearchResult::no_route();
        };

        let outcome = match request.direction() {
            Direction::Stationary => {
                return SearchResult {
                    route: Some(Route::single(request.start)),
                    stations_expanded: 0,
                };
            }
            Direction::Direct => {
                let outcome = search_direct(self.index, start, end);
                reset_direct(self.index, start, request.end);
                outcome
            }
            Direction::Reverse => {
                let outcome = search_reverse(self.index, start, end);
                reset_reverse(self.index, start, request.end);
                outcome
            }
        };

        debug!(
            start = request.start.0,
            end = request.end.0,
            hops = outcome.route.as_ref().map(Route::hops),
            expanded = outcome.expanded,
            "route search complete"
        );

        SearchResult {
            route: outcome.route,
            stations_expanded: outcome.expanded,
        }
    }
}
