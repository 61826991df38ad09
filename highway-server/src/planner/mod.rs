//! Route planner using BFS search.
//!
//! Answers "which stations do I stop at to get from here to there with the
//! fewest stops?". Stations form an implicit graph: a hop is legal when the
//! best vehicle at the departing station can cover the gap.

mod bfs;
mod queue;
mod search;


pub use queue::WorkQueue;
pub use search::{Planner, SearchRequest, SearchResult};
