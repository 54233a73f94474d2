use crate::graph::algos::shared::{sorted_neighbors, Frame, SearchState};
use crate::graph::types::{Algorithm, SearchResult};
use crate::graph::GraphProvider;
use std::collections::VecDeque;

/// Breadth-first search.
///
/// Nodes are finalized when enqueued, so each node enters the queue at most
/// once and the exploration log reflects discovery order. The returned path
/// has the fewest edges; its cost is whatever those edges sum to.
#[tracing::instrument(skip(provider), fields(explored = tracing::field::Empty))]
pub fn bfs_search(provider: &dyn GraphProvider, start: &str, goal: &str) -> Option<SearchResult> {
    let mut state = SearchState::new();
    let mut queue: VecDeque<Frame> = VecDeque::new();

    state.finalize(start);
    queue.push_back(Frame::root(start));

    while let Some(frame) = queue.pop_front() {
        tracing::trace!(node = %frame.node, cost = frame.cost, "bfs_dequeue");

        if frame.node == goal {
            tracing::Span::current().record("explored", state.explored());
            return Some(state.into_result(Algorithm::Bfs, frame));
        }

        for neighbor in sorted_neighbors(provider, &frame.node) {
            if state.finalize(&neighbor.node) {
                queue.push_back(frame.step(&neighbor));
            }
        }
    }

    tracing::Span::current().record("explored", state.explored());
    None
}
