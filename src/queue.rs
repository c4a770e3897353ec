// Joseph Prichard
// 1/5/2023
// Min priority queue of pending trees used while building a huffman tree

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use crate::error::{Error, Result};
use crate::tree::Tree;

// wraps a tree with its insertion sequence number, equal weights are extracted in insertion order
struct QueueEntry {
    tree: Tree,
    seq: u64,
}

impl Eq for QueueEntry {}

impl PartialEq<Self> for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.tree.weight() == other.tree.weight() && self.seq == other.seq
    }
}

impl PartialOrd<Self> for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    // reversed so the max heap pops the lightest, oldest entry first
    fn cmp(&self, other: &Self) -> Ordering {
        other.tree.weight().cmp(&self.tree.weight())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct PriorityQueue {
    heap: BinaryHeap<QueueEntry>,
    next_seq: u64,
}

impl PriorityQueue {
    pub fn new() -> PriorityQueue {
        PriorityQueue { heap: BinaryHeap::new(), next_seq: 0 }
    }

    pub fn insert(&mut self, tree: Tree) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(QueueEntry { tree, seq });
    }

    pub fn extract_min(&mut self) -> Result<Tree> {
        self.heap.pop()
            .map(|entry| entry.tree)
            .ok_or(Error::EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Default for PriorityQueue {
    fn default() -> Self {
        PriorityQueue::new()
    }
}
