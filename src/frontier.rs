use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, NodeId};

/// Which discovered node gets expanded next. Holds arena ids only.
pub trait Frontier {
    fn push(&mut self, id: NodeId, key: FrontierKey);

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    fn high_water(&self) -> usize;
}

/// Last in, first out. The key is ignored.
#[derive(Debug, Default)]
pub struct StackFrontier {
    stack: Vec<NodeId>,
    high_water: usize,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn push(&mut self, id: NodeId, _key: FrontierKey) {
        self.stack.push(id);
        self.high_water = self.high_water.max(self.stack.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Lowest [`FrontierKey`] first.
///
/// `BinaryHeap` is a max-heap, hence the `Reverse`. Creation order is unique
/// per node, so keys never tie and pop order is fully determined.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<(FrontierKey, NodeId)>>,
    high_water: usize,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: NodeId, key: FrontierKey) {
        self.heap.push(Reverse((key, id)));
        self.high_water = self.high_water.max(self.heap.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, id))| id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}
