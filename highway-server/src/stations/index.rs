//! Ordered station index.
//!
//! An unbalanced binary search tree keyed by distance, with parent links so
//! that neighbours can be found by walking the tree rather than scanning.
//! No rebalancing is done: the shape follows insertion order, and a
//! highway built in sorted order degenerates into a list.
//!
//! # Arena-based allocation
//!
//! Nodes live in a `Vec` arena and refer to each other by [`StationId`].
//! Freed slots are recycled through a free list, so an id is only valid
//! until the station it names is removed.

use tracing::trace;

use crate::domain::Distance;

use super::station::{SearchMark, Station};

/// Index of a station slot in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId(u32);

impl StationId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct Node {
    station: Station,
    parent: Option<StationId>,
    left: Option<StationId>,
    right: Option<StationId>,
}

/// The set of all stations on the highway, ordered by distance.
#[derive(Debug, Default)]
pub struct StationIndex {
    slots: Vec<Option<Node>>,
    free_list: Vec<u32>,
    root: Option<StationId>,
    len: usize,
}

impl StationIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the index holds no stations.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root of the tree, if any.
    pub fn root(&self) -> Option<StationId> {
        self.root
    }

    // ===== Arena =====

    fn alloc(&mut self, station: Station) -> StationId {
        let node = Node {
            station,
            parent: None,
            left: None,
            right: None,
        };
        match self.free_list.pop() {
            Some(idx) => {
                self.slots[idx as usize] = Some(node);
                StationId(idx)
            }
            None => {
                let idx = self.slots.len() as u32;
                self.slots.push(Some(node));
                StationId(idx)
            }
        }
    }

    fn node(&self, id: StationId) -> &Node {
        match &self.slots[id.index()] {
            Some(node) => node,
            None => unreachable!("stale station id {id:?}"),
        }
    }

    fn node_mut(&mut self, id: StationId) -> &mut Node {
        match &mut self.slots[id.index()] {
            Some(node) => node,
            None => unreachable!("stale station id {id:?}"),
        }
    }

    /// The station stored at `id`.
    pub fn station(&self, id: StationId) -> &Station {
        &self.node(id).station
    }

    /// Mutable access to a station's fleet.
    ///
    /// The distance is not mutable, so the ordering cannot be broken here.
    pub fn station_mut(&mut self, id: StationId) -> &mut Station {
        &mut self.node_mut(id).station
    }

    pub(crate) fn mark(&self, id: StationId) -> SearchMark {
        self.node(id).station.mark
    }

    pub(crate) fn mark_mut(&mut self, id: StationId) -> &mut SearchMark {
        &mut self.node_mut(id).station.mark
    }

    fn distance(&self, id: StationId) -> Distance {
        self.node(id).station.distance()
    }

    // ===== Lookup =====

    /// Find the station at exactly this distance.
    pub fn find(&self, distance: Distance) -> Option<StationId> {
        let mut current = self.root;
        while let Some(id) = current {
            let here = self.distance(id);
            if distance == here {
                return Some(id);
            }
            current = if distance < here {
                self.node(id).left
            } else {
                self.node(id).right
            };
        }
        None
    }

    /// Leftmost station in the subtree rooted at `id`.
    pub fn minimum(&self, mut id: StationId) -> StationId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    /// Rightmost station in the subtree rooted at `id`.
    pub fn maximum(&self, mut id: StationId) -> StationId {
        while let Some(right) = self.node(id).right {
            id = right;
        }
        id
    }

    /// Station closest to the origin.
    pub fn first(&self) -> Option<StationId> {
        self.root.map(|r| self.minimum(r))
    }

    /// Station farthest from the origin.
    pub fn last(&self) -> Option<StationId> {
        self.root.map(|r| self.maximum(r))
    }

    /// Next station by increasing distance, or `None` at the end.
    pub fn successor(&self, id: StationId) -> Option<StationId> {
        if let Some(right) = self.node(id).right {
            return Some(self.minimum(right));
        }
        let mut child = id;
        let mut parent = self.node(id).parent;
        while let Some(p) = parent {
            if self.node(p).right != Some(child) {
                break;
            }
            child = p;
            parent = self.node(p).parent;
        }
        parent
    }

    /// Previous station by decreasing distance, or `None` at the start.
    pub fn predecessor(&self, id: StationId) -> Option<StationId> {
        if let Some(left) = self.node(id).left {
            return Some(self.maximum(left));
        }
        let mut child = id;
        let mut parent = self.node(id).parent;
        while let Some(p) = parent {
            if self.node(p).left != Some(child) {
                break;
            }
            child = p;
            parent = self.node(p).parent;
        }
        parent
    }

    /// Stations in increasing distance order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            index: self,
            next: self.first(),
        }
    }

    // ===== Mutation =====

    /// Insert a station.
    ///
    /// The index does not check for duplicates: callers must `find` the
    /// distance first. A duplicate would be placed in the right subtree of
    /// its twin and break lookups.
    pub fn insert(&mut self, station: Station) -> StationId {
        let distance = station.distance();
        let id = self.alloc(station);

        let mut parent = None;
        let mut current = self.root;
        while let Some(c) = current {
            parent = Some(c);
            current = if distance < self.distance(c) {
                self.node(c).left
            } else {
                self.node(c).right
            };
        }

        self.node_mut(id).parent = parent;
        match parent {
            None => self.root = Some(id),
            Some(p) if distance < self.distance(p) => self.node_mut(p).left = Some(id),
            Some(p) => self.node_mut(p).right = Some(id),
        }
        self.len += 1;
        trace!(distance = distance.0, "station indexed");
        id
    }

    /// Replace the subtree rooted at `old` with the one rooted at `new`.
    fn transplant(&mut self, old: StationId, new: Option<StationId>) {
        let parent = self.node(old).parent;
        match parent {
            None => self.root = new,
            Some(p) if self.node(p).left == Some(old) => self.node_mut(p).left = new,
            Some(p) => self.node_mut(p).right = new,
        }
        if let Some(n) = new {
            self.node_mut(n).parent = parent;
        }
    }

    /// Remove a station and hand it back to the caller.
    ///
    /// A station with two children is replaced by its in-order successor,
    /// which is first spliced out of its own position when it is not the
    /// direct right child.
    pub fn remove(&mut self, id: StationId) -> Station {
        let (left, right) = {
            let node = self.node(id);
            (node.left, node.right)
        };

        match (left, right) {
            (None, _) => self.transplant(id, right),
            (Some(_), None) => self.transplant(id, left),
            (Some(left), Some(right)) => {
                let successor = self.minimum(right);
                if self.node(successor).parent != Some(id) {
                    let successor_right = self.node(successor).right;
                    self.transplant(successor, successor_right);
                    self.node_mut(successor).right = Some(right);
                    self.node_mut(right).parent = Some(successor);
                }
                self.transplant(id, Some(successor));
                self.node_mut(successor).left = Some(left);
                self.node_mut(left).parent = Some(successor);
            }
        }

        self.len -= 1;
        self.free_list.push(id.0);
        match self.slots[id.index()].take() {
            Some(node) => node.station,
            None => unreachable!("stale station id {id:?}"),
        }
    }

    /// Whether any station still carries planner marks.
    #[cfg(test)]
    pub(crate) fn has_search_residue(&self) -> bool {
        self.slots
            .iter()
            .flatten()
            .any(|node| node.station.mark != SearchMark::default())
    }
}

/// In-order iterator over an index.
pub struct Iter<'a> {
    index: &'a StationIndex,
    next: Option<StationId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Station;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.index.successor(id);
        Some(self.index.station(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Fleet;

    fn station(d: i64) -> Station {
        Station::new(Distance(d), Fleet::new())
    }

    fn build(ds: &[i64]) -> StationIndex {
        let mut index = StationIndex::new();
        for &d in ds {
            index.insert(station(d));
        }
        index
    }

    fn distances(index: &StationIndex) -> Vec<i64> {
        index.iter().map(|s| s.distance().0).collect()
    }

    fn remove_at(index: &mut StationIndex, d: i64) {
        let id = index.find(Distance(d)).unwrap();
        let removed = index.remove(id);
        assert_eq!(removed.distance(), Distance(d));
    }

    #[test]
    fn empty_index() {
        let index = StationIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.find(Distance(0)).is_none());
        assert!(index.first().is_none());
        assert!(index.last().is_none());
        assert_eq!(index.iter().count(), 0);
    }

    #[test]
    fn in_order_traversal_is_sorted() {
        let index = build(&[50, 20, 80, 10, 30, 70, 90, 25]);
        assert_eq!(distances(&index), vec![10, 20, 25, 30, 50, 70, 80, 90]);
        assert_eq!(index.len(), 8);
    }

    #[test]
    fn find_existing_and_missing() {
        let index = build(&[50, 20, 80]);
        let id = index.find(Distance(20)).unwrap();
        assert_eq!(index.station(id).distance(), Distance(20));
        assert!(index.find(Distance(21)).is_none());
    }

    #[test]
    fn first_and_last() {
        let index = build(&[50, 20, 80, -5]);
        assert_eq!(index.station(index.first().unwrap()).distance(), Distance(-5));
        assert_eq!(index.station(index.last().unwrap()).distance(), Distance(80));
    }

    #[test]
    fn successor_walks_through_ancestors() {
        let index = build(&[50, 20, 30, 25, 80]);
        // 30 has no right child; its successor is the ancestor 50.
        let thirty = index.find(Distance(30)).unwrap();
        let next = index.successor(thirty).unwrap();
        assert_eq!(index.station(next).distance(), Distance(50));

        let last = index.find(Distance(80)).unwrap();
        assert!(index.successor(last).is_none());
    }

    #[test]
    fn predecessor_walks_through_ancestors() {
        let index = build(&[50, 80, 60, 70, 20]);
        let sixty = index.find(Distance(60)).unwrap();
        let prev = index.predecessor(sixty).unwrap();
        assert_eq!(index.station(prev).distance(), Distance(50));

        let first = index.find(Distance(20)).unwrap();
        assert!(index.predecessor(first).is_none());
    }

    #[test]
    fn degenerate_insertion_order() {
        let index = build(&[1, 2, 3, 4, 5]);
        assert_eq!(distances(&index), vec![1, 2, 3, 4, 5]);
        let mut back = Vec::new();
        let mut cur = index.last();
        while let Some(id) = cur {
            back.push(index.station(id).distance().0);
            cur = index.predecessor(id);
        }
        assert_eq!(back, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn remove_leaf() {
        let mut index = build(&[50, 20, 80]);
        remove_at(&mut index, 20);
        assert_eq!(distances(&index), vec![50, 80]);
    }

    #[test]
    fn remove_node_with_one_child() {
        let mut index = build(&[50, 20, 10]);
        remove_at(&mut index, 20);
        assert_eq!(distances(&index), vec![10, 50]);
        let ten = index.find(Distance(10)).unwrap();
        assert_eq!(index.station(index.successor(ten).unwrap()).distance(), Distance(50));
    }

    #[test]
    fn remove_with_direct_right_successor() {
        let mut index = build(&[50, 20, 80, 90]);
        remove_at(&mut index, 50);
        assert_eq!(distances(&index), vec![20, 80, 90]);
        assert_eq!(index.station(index.root().unwrap()).distance(), Distance(80));
    }

    #[test]
    fn remove_with_deep_successor() {
        let mut index = build(&[50, 20, 80, 60, 90, 70]);
        remove_at(&mut index, 50);
        assert_eq!(distances(&index), vec![20, 60, 70, 80, 90]);
        assert_eq!(index.station(index.root().unwrap()).distance(), Distance(60));
        // 70 was spliced into the successor's old place under 80.
        let seventy = index.find(Distance(70)).unwrap();
        assert_eq!(
            index.station(index.successor(seventy).unwrap()).distance(),
            Distance(80)
        );
    }

    #[test]
    fn remove_root_until_empty() {
        let mut index = build(&[3, 1, 2]);
        remove_at(&mut index, 3);
        remove_at(&mut index, 1);
        remove_at(&mut index, 2);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn slots_are_recycled() {
        let mut index = build(&[1, 2, 3]);
        remove_at(&mut index, 2);
        index.insert(station(4));
        assert_eq!(index.slots.len(), 3);
        assert_eq!(distances(&index), vec![1, 3, 4]);
    }
}
