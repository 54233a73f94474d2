use crate::graph::types::{Algorithm, Cost, Neighbor, SearchResult};
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// A frontier entry: the node reached, the path that reached it, and the
/// weight accumulated along that path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub node: String,
    pub path: Vec<String>,
    pub cost: Cost,
}

impl Frame {
    /// The frame every search starts from
    pub fn root(start: &str) -> Self {
        Frame {
            node: start.to_string(),
            path: vec![start.to_string()],
            cost: 0,
        }
    }

    /// Extend this frame across one edge
    pub fn step(&self, neighbor: &Neighbor) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(neighbor.node.clone());
        Frame {
            node: neighbor.node.clone(),
            path,
            cost: self.cost + Cost::from(neighbor.weight),
        }
    }
}

/// Visited set plus the exploration log, owned by a single search call
#[derive(Debug, Default)]
pub struct SearchState {
    visited: HashSet<String>,
    exploration_order: Vec<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visited(&self, node: &str) -> bool {
        self.visited.contains(node)
    }

    /// Mark `node` visited and append it to the exploration log.
    /// Returns false if it was already finalized.
    pub fn finalize(&mut self, node: &str) -> bool {
        if !self.visited.insert(node.to_string()) {
            return false;
        }
        self.exploration_order.push(node.to_string());
        true
    }

    pub fn explored(&self) -> usize {
        self.exploration_order.len()
    }

    /// Build the result for the goal frame
    pub fn into_result(self, algorithm: Algorithm, frame: Frame) -> SearchResult {
        SearchResult::new(algorithm, frame.path, self.exploration_order, frame.cost)
    }
}

/// Neighbors of `node` sorted by (neighbor id, weight)
pub fn sorted_neighbors(provider: &dyn GraphProvider, node: &str) -> Vec<Neighbor> {
    let mut neighbors = provider.neighbors(node).to_vec();
    neighbors.sort();
    neighbors
}
