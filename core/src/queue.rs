//! Bounded-throughput FIFO processing queues.
//!
//! A queue releases at most `throughput` passengers per tick, oldest
//! first. Anything beyond that waits for the next tick.

use crate::types::PassengerId;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingQueue {
    pub name: String,
    throughput: u32,
    waiting: VecDeque<PassengerId>,
}

impl ProcessingQueue {
    pub fn new(name: impl Into<String>, throughput: u32) -> Self {
        Self {
            name: name.into(),
            throughput,
            waiting: VecDeque::new(),
        }
    }

    pub fn throughput(&self) -> u32 {
        self.throughput
    }

    pub fn enqueue(&mut self, passenger_id: PassengerId) {
        self.waiting.push_back(passenger_id);
    }

    /// Release up to `throughput` passengers in arrival order.
    pub fn release_batch(&mut self) -> Vec<PassengerId> {
        let n = (self.throughput as usize).min(self.waiting.len());
        self.waiting.drain(..n).collect()
    }

    /// Drop the given passengers wherever they wait. Returns how many left.
    pub fn purge(&mut self, ids: &HashSet<PassengerId>) -> usize {
        let before = self.waiting.len();
        self.waiting.retain(|id| !ids.contains(id));
        before - self.waiting.len()
    }

    pub fn contains(&self, passenger_id: PassengerId) -> bool {
        self.waiting.contains(&passenger_id)
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PassengerId> + '_ {
        self.waiting.iter().copied()
    }
}
