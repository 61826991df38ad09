//! Station storage.
//!
//! Stations are kept in an ordered index keyed by their distance from the
//! start of the highway. Each station owns its fleet and caches the best
//! range available there.

mod index;
mod station;

pub use index::{Iter, StationId, StationIndex};
pub use station::Station;
pub(crate) use station::SearchMark;
