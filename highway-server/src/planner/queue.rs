//! FIFO work queue for one planning call.

use std::collections::VecDeque;

use crate::stations::StationId;

/// Stations waiting to be expanded, in discovery order.
#[derive(Debug, Default)]
pub struct WorkQueue {
    items: VecDeque<StationId>,
    enqueued: usize,
}

impl WorkQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a station at the back.
    pub fn push(&mut self, id: StationId) {
        self.items.push_back(id);
        self.enqueued += 1;
    }

    /// Take the oldest station, if any.
    pub fn pop(&mut self) -> Option<StationId> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of pushes since creation.
    pub fn enqueued(&self) -> usize {
        self.enqueued
    }
}
