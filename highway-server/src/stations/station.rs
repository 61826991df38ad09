//! Station records.

use crate::domain::{Autonomy, Distance, Fleet};

use super::StationId;

/// Per-station marks owned by the route planner.
///
/// Only meaningful during a planning call. The planner resets every mark it
/// touched before returning, so outside a call every station holds the
/// default (unvisited, no predecessor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SearchMark {
    pub(crate) visited: bool,
    pub(crate) predecessor: Option<StationId>,
}

/// A service station and the vehicles parked there.
#[derive(Debug, Clone)]
pub struct Station {
    distance: Distance,
    fleet: Fleet,
    max_autonomy: Autonomy,
    pub(crate) mark: SearchMark,
}

impl Station {
    /// Create a station with an initial fleet.
    pub fn new(distance: Distance, fleet: Fleet) -> Self {
        let max_autonomy = fleet.max_autonomy();
        Self {
            distance,
            fleet,
            max_autonomy,
            mark: SearchMark::default(),
        }
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Best range available at this station, or [`Autonomy::NONE`].
    pub fn max_autonomy(&self) -> Autonomy {
        self.max_autonomy
    }

    /// Park one more vehicle here.
    pub fn add_vehicle(&mut self, autonomy: Autonomy) {
        self.fleet.add(autonomy);
        if autonomy > self.max_autonomy {
            self.max_autonomy = autonomy;
        }
    }

    /// Scrap one vehicle with this range. Returns `false` if none matches.
    ///
    /// The cached maximum is rescanned only when the scrapped vehicle held it.
    pub fn remove_vehicle(&mut self, autonomy: Autonomy) -> bool {
        if !self.fleet.remove(autonomy) {
            return false;
        }
        if autonomy == self.max_autonomy {
            self.max_autonomy = self.fleet.max_autonomy();
        }
        true
    }
}
