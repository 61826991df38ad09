//! Highway position and vehicle range types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a station, measured from the start of the highway.
///
/// Distances are unique per highway and totally ordered; the unit is
/// whatever the caller uses consistently (kilometres in practice).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Distance(pub i64);

impl Distance {
    /// Absolute gap between two positions.
    ///
    /// Returned as `u64` so the full `i64` span never overflows.
    pub fn gap(self, other: Distance) -> u64 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Travel range of a single vehicle.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Autonomy(pub i64);

impl Autonomy {
    /// Range of a station with no vehicles.
    pub const NONE: Autonomy = Autonomy(0);

    /// Whether a vehicle with this range can cover `gap`.
    ///
    /// Negative ranges cover nothing.
    pub fn covers(self, gap: u64) -> bool {
        u64::try_from(self.0).is_ok_and(|range| range >= gap)
    }
}

impl fmt::Display for Autonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_is_symmetric() {
        assert_eq!(Distance(2).gap(Distance(7)), 5);
        assert_eq!(Distance(7).gap(Distance(2)), 5);
        assert_eq!(Distance(-3).gap(Distance(3)), 6);
    }

    #[test]
    fn gap_spans_full_range() {
        assert_eq!(Distance(i64::MIN).gap(Distance(i64::MAX)), u64::MAX);
    }

    #[test]
    fn covers_boundary_is_inclusive() {
        assert!(Autonomy(4).covers(4));
        assert!(Autonomy(4).covers(3));
        assert!(!Autonomy(4).covers(5));
    }

    #[test]
    fn negative_autonomy_covers_nothing() {
        assert!(!Autonomy(-1).covers(0));
        assert!(!Autonomy(-1).covers(1));
    }

    #[test]
    fn display() {
        assert_eq!(Distance(-12).to_string(), "-12");
        assert_eq!(Autonomy(40).to_string(), "40");
    }

    #[test]
    fn serde_is_transparent() {
        assert_eq!(serde_json::to_string(&Distance(5)).unwrap(), "5");
        let a: Autonomy = serde_json::from_str("17").unwrap();
        assert_eq!(a, Autonomy(17));
    }
}
