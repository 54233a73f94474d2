use crate::graph::algos::shared::{sorted_neighbors, Frame, SearchState};
use crate::graph::types::{Algorithm, Cost, SearchResult};
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap.
///
/// Ordered by accumulated cost, then node id, then path, so entries with
/// equal cost pop in a fixed order.
#[derive(Debug, Clone)]
pub(crate) struct HeapEntry {
    pub accumulated_cost: Cost,
    pub node_id: String,
    pub path: Vec<String>,
}

impl HeapEntry {
    fn from_frame(frame: Frame) -> Self {
        HeapEntry {
            accumulated_cost: frame.cost,
            node_id: frame.node,
            path: frame.path,
        }
    }

    fn into_frame(self) -> Frame {
        Frame {
            node: self.node_id,
            path: self.path,
            cost: self.accumulated_cost,
        }
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Uniform-cost search (Dijkstra without decrease-key).
///
/// Every unvisited neighbor gets a fresh entry; entries for nodes already
/// finalized are dropped when popped. A node's first pop carries its
/// minimum cost as long as no weight is negative.
#[tracing::instrument(skip(provider), fields(explored = tracing::field::Empty))]
pub fn ucs_search(provider: &dyn GraphProvider, start: &str, goal: &str) -> Option<SearchResult> {
    if provider.has_negative_weights() {
        tracing::warn!(
            "graph has negative weights; uniform-cost result may not be the cheapest path"
        );
    }

    let mut state = SearchState::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry::from_frame(Frame::root(start))));

    while let Some(Reverse(entry)) = heap.pop() {
        if !state.finalize(&entry.node_id) {
            continue;
        }
        tracing::trace!(node = %entry.node_id, cost = entry.accumulated_cost, "ucs_pop");

        let frame = entry.into_frame();
        if frame.node == goal {
            tracing::Span::current().record("explored", state.explored());
            return Some(state.into_result(Algorithm::Ucs, frame));
        }

        for neighbor in sorted_neighbors(provider, &frame.node) {
            if !state.is_visited(&neighbor.node) {
                heap.push(Reverse(HeapEntry::from_frame(frame.step(&neighbor))));
            }
        }
    }

    tracing::Span::current().record("explored", state.explored());
    None
}

#[cfg(test)]
mod tests;
