//! Planned routes.

use std::fmt;

use serde::Serialize;

use super::{Distance, DomainError};

/// Travel direction along the highway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Distances increase from start to end.
    Direct,
    /// Distances decrease from start to end.
    Reverse,
    /// Start and end are the same station.
    Stationary,
}

impl Direction {
    /// Direction of travel from `start` to `end`.
    pub fn between(start: Distance, end: Distance) -> Self {
        match start.cmp(&end) {
            std::cmp::Ordering::Less => Direction::Direct,
            std::cmp::Ordering::Greater => Direction::Reverse,
            std::cmp::Ordering::Equal => Direction::Stationary,
        }
    }
}

/// A sequence of station stops from start to end, inclusive.
///
/// Distances are strictly monotonic in the route's direction, so the
/// number of hops is `len() - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    stops: Vec<Distance>,
}

impl Route {
    /// Build a route from its stops.
    ///
    /// Rejects empty sequences and stops that are not strictly
    /// increasing or strictly decreasing.
    pub fn new(stops: Vec<Distance>) -> Result<Self, DomainError> {
        if stops.is_empty() {
            return Err(DomainError::EmptyRoute);
        }
        let ascending = stops.windows(2).all(|w| w[0] < w[1]);
        let descending = stops.windows(2).all(|w| w[0] > w[1]);
        if !ascending && !descending {
            return Err(DomainError::NonMonotonicRoute);
        }
        Ok(Self { stops })
    }

    /// Build a route the planner already knows to be monotonic.
    pub(crate) fn from_monotonic(stops: Vec<Distance>) -> Self {
        debug_assert!(!stops.is_empty());
        Self { stops }
    }

    /// The trivial route that stays at one station.
    pub fn single(at: Distance) -> Self {
        Self { stops: vec![at] }
    }

    /// First stop.
    pub fn start(&self) -> Distance {
        self.stops[0]
    }

    /// Last stop.
    pub fn end(&self) -> Distance {
        self.stops[self.stops.len() - 1]
    }

    pub fn direction(&self) -> Direction {
        Direction::between(self.start(), self.end())
    }

    /// All stops, start first.
    pub fn stops(&self) -> &[Distance] {
        &self.stops
    }

    /// Number of stops, endpoints included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false; a route has at least one stop.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of hops between stations.
    pub fn hops(&self) -> usize {
        self.stops.len() - 1
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for stop in &self.stops {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{stop}")?;
            first = false;
        }
        Ok(())
    }
}
