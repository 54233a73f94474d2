//! Graph store and search operations
//!
//! Provides the adjacency-list graph and the uninformed searches over it:
//! - Loader for the `NODE:NEIGHBOR:WEIGHT,...` file format
//! - DFS, BFS and uniform-cost search producing a shared result record
//! - Graph provider trait the searches are written against

pub mod algos;
pub mod load;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{bfs_search, dfs_search, search, ucs_search};
pub use load::{load_graph, parse_graph, WeightPolicy};
pub use store::Graph;
pub use traversal::GraphProvider;
pub use types::{Algorithm, AlgorithmSelection, Cost, Neighbor, SearchResult, Weight};
