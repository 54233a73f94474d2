use crate::graph::algos::shared::{sorted_neighbors, Frame, SearchState};
use crate::graph::types::{Algorithm, SearchResult};
use crate::graph::GraphProvider;

/// Depth-first search with an explicit stack.
///
/// Nodes are finalized when popped, so a node may sit on the stack more than
/// once; stale frames are discarded on pop. Children are pushed in
/// descending (neighbor, weight) order so the smallest is expanded first.
#[tracing::instrument(skip(provider), fields(explored = tracing::field::Empty))]
pub fn dfs_search(provider: &dyn GraphProvider, start: &str, goal: &str) -> Option<SearchResult> {
    let mut state = SearchState::new();
    let mut stack = vec![Frame::root(start)];

    while let Some(frame) = stack.pop() {
        if !state.finalize(&frame.node) {
            continue;
        }
        tracing::trace!(node = %frame.node, cost = frame.cost, "dfs_pop");

        if frame.node == goal {
            tracing::Span::current().record("explored", state.explored());
            return Some(state.into_result(Algorithm::Dfs, frame));
        }

        for neighbor in sorted_neighbors(provider, &frame.node).iter().rev() {
            if !state.is_visited(&neighbor.node) {
                stack.push(frame.step(neighbor));
            }
        }
    }

    tracing::Span::current().record("explored", state.explored());
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn graph(edges: &[(&str, &str, i64)]) -> Graph {
        let mut graph = Graph::new();
        for (from, to, weight) in edges {
            graph.add_edge(*from, *to, *weight);
        }
        graph
    }

    #[test]
    fn test_dfs_expands_smallest_neighbor_first() {
        let g = graph(&[
            ("A", "B", 1),
            ("A", "C", 4),
            ("B", "C", 2),
            ("B", "D", 5),
            ("C", "D", 1),
        ]);

        let result = dfs_search(&g, "A", "D").unwrap();
        assert_eq!(result.joined_exploration_order(""), "ABCD");
        assert_eq!(result.joined_path(""), "ABCD");
        assert_eq!(result.depth, 3);
        assert_eq!(result.cost, 4);
    }

    #[test]
    fn test_dfs_goes_deep_before_wide() {
        // A -> B -> E is fully explored before A's second child C
        let g = graph(&[("A", "B", 1), ("A", "C", 1), ("B", "E", 1), ("C", "G", 1)]);

        let result = dfs_search(&g, "A", "G").unwrap();
        assert_eq!(result.exploration_order, vec!["A", "B", "E", "C", "G"]);
        assert_eq!(result.path, vec!["A", "C", "G"]);
    }

    #[test]
    fn test_dfs_discards_stale_frames() {
        // C is pushed twice (from A and from B); it is logged once
        let g = graph(&[("A", "B", 1), ("A", "C", 1), ("B", "C", 1)]);

        let result = dfs_search(&g, "A", "Z");
        assert!(result.is_none());

        let result = dfs_search(&g, "A", "C").unwrap();
        assert_eq!(result.exploration_order, vec!["A", "B", "C"]);
        assert_eq!(result.path, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_dfs_survives_cycles_and_self_loops() {
        let g = graph(&[("A", "A", 1), ("A", "B", 1), ("B", "A", 1)]);
        assert!(dfs_search(&g, "A", "C").is_none());
    }

    #[test]
    fn test_dfs_start_is_goal() {
        let g = graph(&[("A", "B", 1)]);
        let result = dfs_search(&g, "A", "A").unwrap();
        assert_eq!(result.path, vec!["A"]);
        assert_eq!(result.exploration_order, vec!["A"]);
        assert_eq!(result.depth, 0);
        assert_eq!(result.cost, 0);
    }
}
