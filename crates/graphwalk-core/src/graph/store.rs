//! In-memory adjacency-list graph
//!
//! Built once by the loader and read-only afterwards. Edges are directed,
//! parallel edges and self-loops are kept as given.

use std::collections::{HashMap, HashSet};

use crate::graph::types::{Neighbor, Weight};

#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Neighbor>>,
    edge_count: usize,
    negative_weights: bool,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `to` with `weight` to the adjacency list of `from`.
    ///
    /// No dedup and no validation: a second edge between the same pair is
    /// stored alongside the first.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, weight: Weight) {
        self.adjacency
            .entry(from.into())
            .or_default()
            .push(Neighbor::new(to, weight));
        self.edge_count += 1;
        self.negative_weights |= weight < 0;
    }

    /// Outgoing edges of `node` in insertion order
    pub fn neighbors(&self, node: &str) -> &[Neighbor] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `node` appears as the source or target of any edge
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
            || self
                .adjacency
                .values()
                .flatten()
                .any(|neighbor| neighbor.node == node)
    }

    /// Nodes with at least one outgoing edge
    pub fn source_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Distinct nodes seen as either source or target
    pub fn node_count(&self) -> usize {
        let mut nodes: HashSet<&str> = self.adjacency.keys().map(String::as_str).collect();
        nodes.extend(
            self.adjacency
                .values()
                .flatten()
                .map(|neighbor| neighbor.node.as_str()),
        );
        nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn has_negative_weights(&self) -> bool {
        self.negative_weights
    }
}
