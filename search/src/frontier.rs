//! Frontier disciplines: FIFO, LIFO and priority-by-cost.
//!
//! The frontier holds node ids; the branch's [`crate::node::NodePool`] owns
//! the nodes. One engine drives all three disciplines.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::error::SearchError;
use crate::node::{FrontierKey, NodeId, SearchNodeV1};
use crate::policy::StrategyV1;

#[derive(Debug)]
enum Pending {
    Fifo(VecDeque<NodeId>),
    Lifo(Vec<NodeId>),
    Priority(BinaryHeap<Reverse<FrontierKey>>),
}

/// Pending-node container for one branch.
///
/// - FIFO (breadth-first): pop returns the oldest pushed node, so depth
///   never decreases.
/// - LIFO (depth-first): pop returns the most recently pushed node.
/// - Priority (best-first): pop returns the lowest `f_cost`; equal keys pop
///   in push order. `BinaryHeap` is a max-heap, hence `Reverse`.
#[derive(Debug)]
pub struct Frontier {
    pending: Pending,
    pushes: u64,
    high_water: usize,
}

impl Frontier {
    /// Empty frontier with the discipline of `strategy`.
    #[must_use]
    pub fn for_strategy(strategy: StrategyV1) -> Self {
        let pending = match strategy {
            StrategyV1::BreadthFirst => Pending::Fifo(VecDeque::new()),
            StrategyV1::DepthFirst => Pending::Lifo(Vec::new()),
            StrategyV1::BestFirst => Pending::Priority(BinaryHeap::new()),
        };
        Self {
            pending,
            pushes: 0,
            high_water: 0,
        }
    }

    pub fn push<S, A>(&mut self, node: &SearchNodeV1<S, A>) {
        match &mut self.pending {
            Pending::Fifo(queue) => queue.push_back(node.node_id),
            Pending::Lifo(stack) => stack.push(node.node_id),
            Pending::Priority(heap) => heap.push(Reverse(FrontierKey::new(node, self.pushes))),
        }
        self.pushes += 1;
        self.high_water = self.high_water.max(self.len());
    }

    /// Remove the next node according to the discipline.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] when nothing is pending.
    pub fn pop(&mut self) -> Result<NodeId, SearchError> {
        let next = match &mut self.pending {
            Pending::Fifo(queue) => queue.pop_front(),
            Pending::Lifo(stack) => stack.pop(),
            Pending::Priority(heap) => heap.pop().map(|Reverse(key)| key.node_id),
        };
        next.ok_or(SearchError::EmptyFrontier)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.pending {
            Pending::Fifo(queue) => queue.len(),
            Pending::Lifo(stack) => stack.len(),
            Pending::Priority(heap) => heap.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest number of pending nodes ever held.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
