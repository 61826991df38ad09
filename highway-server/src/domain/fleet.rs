//! Vehicles parked at a station.

use super::Autonomy;

/// Unordered multiset of vehicle ranges.
///
/// Vehicles have no identity beyond their range, so two vehicles with the
/// same range are distinct members and are removed one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    vehicles: Vec<Autonomy>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one vehicle. O(1).
    pub fn add(&mut self, autonomy: Autonomy) {
        self.vehicles.push(autonomy);
    }

    /// Remove one vehicle with exactly this range.
    ///
    /// The most recently added match is removed. Returns `false` if no
    /// vehicle has this range.
    pub fn remove(&mut self, autonomy: Autonomy) -> bool {
        match self.vehicles.iter().rposition(|&v| v == autonomy) {
            Some(idx) => {
                self.vehicles.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// Largest range in the fleet, or [`Autonomy::NONE`] when empty.
    ///
    /// Full scan; callers cache the result.
    pub fn max_autonomy(&self) -> Autonomy {
        self.vehicles
            .iter()
            .copied()
            .fold(Autonomy::NONE, Autonomy::max)
    }

    /// Number of vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns true if the fleet has no vehicles.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Iterate over vehicle ranges in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Autonomy> + '_ {
        self.vehicles.iter().copied()
    }
}

impl FromIterator<Autonomy> for Fleet {
    fn from_iter<I: IntoIterator<Item = Autonomy>>(iter: I) -> Self {
        Self {
            vehicles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet(ranges: &[i64]) -> Fleet {
        ranges.iter().map(|&r| Autonomy(r)).collect()
    }

    #[test]
    fn empty_fleet_has_zero_max() {
        let f = Fleet::new();
        assert!(f.is_empty());
        assert_eq!(f.max_autonomy(), Autonomy::NONE);
    }

    #[test]
    fn max_over_vehicles() {
        assert_eq!(fleet(&[3, 9, 1]).max_autonomy(), Autonomy(9));
    }

    #[test]
    fn negative_ranges_do_not_lower_max_below_zero() {
        assert_eq!(fleet(&[-4, -2]).max_autonomy(), Autonomy::NONE);
    }

    #[test]
    fn duplicates_are_removed_one_at_a_time() {
        let mut f = fleet(&[5, 5, 2]);
        assert!(f.remove(Autonomy(5)));
        assert_eq!(f.len(), 2);
        assert_eq!(f.max_autonomy(), Autonomy(5));
        assert!(f.remove(Autonomy(5)));
        assert_eq!(f.max_autonomy(), Autonomy(2));
        assert!(!f.remove(Autonomy(5)));
    }

    #[test]
    fn remove_missing_leaves_fleet_unchanged() {
        let mut f = fleet(&[1, 2]);
        assert!(!f.remove(Autonomy(3)));
        assert_eq!(f, fleet(&[1, 2]));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Edit {
        Add(i64),
        Remove(i64),
    }

    fn edit() -> impl Strategy<Value = Edit> {
        prop_oneof![
            (0i64..20).prop_map(Edit::Add),
            (0i64..20).prop_map(Edit::Remove),
        ]
    }

    proptest! {
        /// The fleet behaves like a multiset of ranges.
        #[test]
        fn matches_sorted_multiset(edits in prop::collection::vec(edit(), 0..60)) {
            let mut fleet = Fleet::new();
            let mut model: Vec<i64> = Vec::new();

            for e in edits {
                match e {
                    Edit::Add(r) => {
                        fleet.add(Autonomy(r));
                        model.push(r);
                    }
                    Edit::Remove(r) => {
                        let expected = model.iter().position(|&m| m == r);
                        if let Some(i) = expected {
                            model.remove(i);
                        }
                        prop_assert_eq!(fleet.remove(Autonomy(r)), expected.is_some());
                    }
                }
            }

            let mut got: Vec<i64> = fleet.iter().map(|a| a.0).collect();
            got.sort_unstable();
            model.sort_unstable();
            prop_assert_eq!(got, model.clone());
            prop_assert_eq!(
                fleet.max_autonomy(),
                Autonomy(model.last().copied().unwrap_or(0).max(0))
            );
        }
    }
}
