use crate::error::GraphwalkError;
use serde::Serialize;

/// Edge weight. Any integer is accepted; negative weights void the
/// uniform-cost optimality guarantee.
pub type Weight = i64;

/// Accumulated path cost.
///
/// Paths never revisit a node, so a sum of `Weight`s along one always fits.
pub type Cost = i128;

/// One entry of an adjacency list.
///
/// Field order matters: the derived ordering compares `node` first and
/// `weight` second, which is the order searches sort adjacency lists by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Neighbor {
    pub node: String,
    pub weight: Weight,
}

impl Neighbor {
    pub fn new(node: impl Into<String>, weight: Weight) -> Self {
        Neighbor {
            node: node.into(),
            weight,
        }
    }
}

/// Uninformed search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Depth-first, stack based, visited-on-pop
    Dfs,
    /// Breadth-first, queue based, visited-on-enqueue
    Bfs,
    /// Uniform-cost, priority queue ordered by accumulated cost
    Ucs,
}

impl Algorithm {
    /// All strategies in the order `all` runs them
    pub const ALL: [Algorithm; 3] = [Algorithm::Dfs, Algorithm::Bfs, Algorithm::Ucs];

    /// Upper-case label used in human output
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "DFS",
            Algorithm::Bfs => "BFS",
            Algorithm::Ucs => "UCS",
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = GraphwalkError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "bfs" => Ok(Algorithm::Bfs),
            "ucs" => Ok(Algorithm::Ucs),
            other => Err(GraphwalkError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Ucs => write!(f, "ucs"),
        }
    }
}

/// One strategy, or every strategy in turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmSelection {
    One(Algorithm),
    /// DFS, BFS then UCS
    All,
}

impl AlgorithmSelection {
    pub fn algorithms(&self) -> Vec<Algorithm> {
        match self {
            AlgorithmSelection::One(algorithm) => vec![*algorithm],
            AlgorithmSelection::All => Algorithm::ALL.to_vec(),
        }
    }
}

impl Default for AlgorithmSelection {
    fn default() -> Self {
        AlgorithmSelection::One(Algorithm::Bfs)
    }
}

impl std::str::FromStr for AlgorithmSelection {
    type Err = GraphwalkError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(AlgorithmSelection::All)
        } else {
            s.parse().map(AlgorithmSelection::One)
        }
    }
}

/// Outcome of a successful search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// Nodes from start to goal, inclusive
    pub path: Vec<String>,
    /// Nodes in the order they were finalized
    #[serde(rename = "order_of_exploration")]
    pub exploration_order: Vec<String>,
    /// Number of edges on `path`
    pub depth: usize,
    /// Sum of edge weights along `path`
    pub cost: Cost,
}

impl SearchResult {
    /// Build a result from the goal frame and the exploration log
    pub fn new(
        algorithm: Algorithm,
        path: Vec<String>,
        exploration_order: Vec<String>,
        cost: Cost,
    ) -> Self {
        SearchResult {
            algorithm,
            depth: path.len().saturating_sub(1),
            path,
            exploration_order,
            cost,
        }
    }

    pub fn joined_path(&self, separator: &str) -> String {
        self.path.join(separator)
    }

    pub fn joined_exploration_order(&self, separator: &str) -> String {
        self.exploration_order.join(separator)
    }
}
