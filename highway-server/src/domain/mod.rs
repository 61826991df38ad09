//! Domain types for the highway route planner.
//!
//! Value types that carry no index structure: positions, vehicle ranges,
//! fleets and planned routes.

mod distance;
mod error;
mod fleet;
mod route;

pub use distance::{Autonomy, Distance};
pub use error::{DomainError, HighwayError};
pub use fleet::Fleet;
pub use route::{Direction, Route};
