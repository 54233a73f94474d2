use crate::graph::store::Graph;
use crate::graph::types::Neighbor;

/// Trait for providing graph adjacency to the search algorithms
pub trait GraphProvider {
    /// Outgoing edges of `id` in load order; empty when there are none
    fn neighbors(&self, id: &str) -> &[Neighbor];

    /// Whether any edge carries a negative weight
    fn has_negative_weights(&self) -> bool {
        false
    }
}

impl GraphProvider for Graph {
    fn neighbors(&self, id: &str) -> &[Neighbor] {
        self.neighbors(id)
    }

    fn has_negative_weights(&self) -> bool {
        self.has_negative_weights()
    }
}
