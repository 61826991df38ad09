//! Domain error types.
//!
//! These errors are the caller-visible outcomes of well-formed requests
//! that cannot be carried out. None of them is fatal and none leaves the
//! highway partially mutated.

use super::{Autonomy, Distance};

/// Rejected highway operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HighwayError {
    /// A station already exists at this distance
    #[error("station at {0} already exists")]
    DuplicateStation(Distance),

    /// No station exists at this distance
    #[error("no station at {0}")]
    StationNotFound(Distance),

    /// The station has no vehicle with this range
    #[error("station at {station} has no vehicle with autonomy {autonomy}")]
    VehicleNotFound {
        station: Distance,
        autonomy: Autonomy,
    },
}

/// Invalid construction of a domain value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Route has no stops
    #[error("route must have at least one stop")]
    EmptyRoute,

    /// Route stops are not strictly increasing or strictly decreasing
    #[error("route stops must be strictly monotonic")]
    NonMonotonicRoute,
}
