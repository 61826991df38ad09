//! Breadth-first search over the implicit reachability graph.
//!
//! There is no stored edge list. An edge exists between two stations when
//! the gap between them is within the best range of the station a vehicle
//! departs from. Both searches record a visited flag and a predecessor link
//! on each station they touch; [`reset_direct`] and [`reset_reverse`] clear
//! them again.
//!
//! A station's predecessor is set once, by the first frontier member that
//! reaches it. Frontier members are expanded in discovery order and each
//! expansion walks candidates in ascending distance, so among equally short
//! routes the one through the smallest-distance frontier member wins.

use tracing::trace;

use crate::domain::{Distance, Route};
use crate::stations::{SearchMark, StationId, StationIndex};

use super::queue::WorkQueue;

/// Result of one search: the route, if any, and how much work it took.
pub(super) struct BfsOutcome {
    pub route: Option<Route>,
    pub expanded: usize,
}

/// Mark `reach` as discovered from `from`, unless already visited.
///
/// Returns true when the station was newly discovered.
fn discover(index: &mut StationIndex, reach: StationId, from: StationId) -> bool {
    let mark = index.mark_mut(reach);
    if mark.visited {
        return false;
    }
    mark.visited = true;
    mark.predecessor = Some(from);
    true
}

/// Search towards increasing distance.
///
/// An edge runs from `a` to a farther `b` when `b - a` is within the best
/// range at `a`. Reachability from a fixed station is monotonic in
/// distance, so each expansion stops at the first candidate out of range.
pub(super) fn search_direct(
    index: &mut StationIndex,
    start: StationId,
    end: StationId,
) -> BfsOutcome {
    let mut queue = WorkQueue::new();
    let mut expanded = 0;
    let mut found = false;

    index.mark_mut(start).visited = true;
    queue.push(start);

    while !found {
        let Some(curr) = queue.pop() else {
            break;
        };
        expanded += 1;

        let origin = index.station(curr).distance();
        let range = index.station(curr).max_autonomy();
        trace!(station = origin.0, range = range.0, "expanding (direct)");

        let mut candidate = index.successor(curr);
        while let Some(reach) = candidate {
            if !range.covers(origin.gap(index.station(reach).distance())) {
                break;
            }
            if discover(index, reach, curr) {
                queue.push(reach);
            }
            if reach == end {
                found = true;
                break;
            }
            candidate = index.successor(reach);
        }
    }

    let route = index.mark(end).predecessor.map(|_| {
        let mut stops = Vec::new();
        let mut cursor = Some(end);
        while let Some(id) = cursor {
            stops.push(index.station(id).distance());
            cursor = index.mark(id).predecessor;
        }
        stops.reverse();
        Route::from_monotonic(stops)
    });

    trace!(enqueued = queue.enqueued(), "direct search drained");
    BfsOutcome { route, expanded }
}

/// Search towards decreasing distance.
///
/// An edge runs from a farther `h` down to `l` when `h - l` is within the
/// best range at `h`. The search starts from `end` (the nearer endpoint) and
/// walks up towards `start`, so predecessor links point the way a vehicle
/// travels: from `start` they lead down to `end`. Unlike the direct search,
/// a candidate out of range does not stop the walk, since the next one may
/// have a better vehicle.
pub(super) fn search_reverse(
    index: &mut StationIndex,
    start: StationId,
    end: StationId,
) -> BfsOutcome {
    let limit = index.station(start).distance();
    let mut queue = WorkQueue::new();
    let mut expanded = 0;
    let mut found = false;

    index.mark_mut(end).visited = true;
    queue.push(end);

    while !found {
        let Some(curr) = queue.pop() else {
            break;
        };
        expanded += 1;

        let target = index.station(curr).distance();
        trace!(station = target.0, "expanding (reverse)");

        let mut candidate = index.successor(curr);
        while let Some(reach) = candidate {
            let station = index.station(reach);
            if station.distance() > limit {
                break;
            }
            if station.max_autonomy().covers(station.distance().gap(target)) {
                if discover(index, reach, curr) {
                    queue.push(reach);
                }
                if reach == start {
                    found = true;
                    break;
                }
            }
            candidate = index.successor(reach);
        }
    }

    let route = index.mark(start).predecessor.map(|_| {
        let mut stops = Vec::new();
        let mut cursor = Some(start);
        while let Some(id) = cursor {
            stops.push(index.station(id).distance());
            cursor = index.mark(id).predecessor;
        }
        Route::from_monotonic(stops)
    });

    trace!(enqueued = queue.enqueued(), "reverse search drained");
    BfsOutcome { route, expanded }
}

/// Clear marks on every station from `start` up to `end` inclusive.
pub(super) fn reset_direct(index: &mut StationIndex, start: StationId, end: Distance) {
    let mut cursor = Some(start);
    while let Some(id) = cursor {
        if index.station(id).distance() > end {
            break;
        }
        *index.mark_mut(id) = SearchMark::default();
        cursor = index.successor(id);
    }
}

/// Clear marks on every station from `start` down to `end` inclusive.
pub(super) fn reset_reverse(index: &mut StationIndex, start: StationId, end: Distance) {
    let mut cursor = Some(start);
    while let Some(id) = cursor {
        if index.station(id).distance() < end {
            break;
        }
        *index.mark_mut(id) = SearchMark::default();
        cursor = index.predecessor(id);
    }
}
