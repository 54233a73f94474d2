//! Adjacency-list file loader
//!
//! One source node per line:
//!
//! ```text
//! NODE:NEIGHBOR1:WEIGHT1,NEIGHBOR2:WEIGHT2,...
//! ```
//!
//! Any malformed line aborts the whole load; no partial graph is returned.

use std::fs;
use std::path::Path;

use crate::bail_parse;
use crate::error::{GraphwalkError, Result};
use crate::graph::store::Graph;
use crate::graph::types::Weight;

/// How the loader treats negative edge weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightPolicy {
    /// Keep negative weights (uniform-cost results are then not guaranteed optimal)
    #[default]
    AllowNegative,
    /// Fail the load on the first negative weight
    RejectNegative,
}

/// Load a graph from an adjacency-list file
#[tracing::instrument(skip(path, policy), fields(path = %path.display()))]
pub fn load_graph(path: &Path, policy: WeightPolicy) -> Result<Graph> {
    let content = fs::read_to_string(path).map_err(|e| GraphwalkError::GraphUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_graph(&content, policy)
}

/// Parse adjacency-list text into a graph
pub fn parse_graph(content: &str, policy: WeightPolicy) -> Result<Graph> {
    let mut graph = Graph::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((node, edges)) = line.split_once(':') else {
            bail_parse!(line_no, "missing ':' after node name in {:?}", line);
        };
        let node = node.trim();
        if node.is_empty() {
            bail_parse!(line_no, "empty node name in {:?}", line);
        }

        for token in edges.split(',') {
            let (to, weight) = parse_edge_token(line_no, token)?;
            if weight < 0 && policy == WeightPolicy::RejectNegative {
                return Err(GraphwalkError::NegativeWeight {
                    line: line_no,
                    from: node.to_string(),
                    to: to.to_string(),
                    weight,
                });
            }
            graph.add_edge(node, to, weight);
        }
    }

    tracing::debug!(
        sources = graph.source_count(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        negative_weights = graph.has_negative_weights(),
        "graph_loaded"
    );

    Ok(graph)
}

/// Split a `neighbor:weight` token
fn parse_edge_token(line_no: usize, token: &str) -> Result<(&str, Weight)> {
    let token = token.trim();
    if token.is_empty() {
        bail_parse!(line_no, "empty edge entry");
    }

    let mut fields = token.split(':');
    let (Some(to), Some(weight), None) = (fields.next(), fields.next(), fields.next()) else {
        bail_parse!(line_no, "expected NEIGHBOR:WEIGHT, got {:?}", token);
    };

    let to = to.trim();
    if to.is_empty() {
        bail_parse!(line_no, "empty neighbor name in {:?}", token);
    }

    let weight = weight.trim();
    let weight = weight
        .parse::<Weight>()
        .map_err(|e| GraphwalkError::parse(line_no, format!("invalid weight {weight:?}: {e}")))?;

    Ok((to, weight))
}
