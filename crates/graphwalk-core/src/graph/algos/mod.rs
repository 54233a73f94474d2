//! Graph algorithm implementations
//!
//! Contains the uninformed search strategies:
//! - `dfs`: Depth-first search over an explicit stack
//! - `bfs`: Breadth-first search for fewest-edge paths
//! - `ucs`: Uniform-cost search for cheapest paths
//! - `shared`: Frontier frames and per-call search state

pub mod bfs;
pub mod dfs;
mod shared;
pub mod ucs;

pub use bfs::bfs_search;
pub use dfs::dfs_search;
pub use ucs::ucs_search;

use crate::graph::types::{Algorithm, SearchResult};
use crate::graph::GraphProvider;

/// Run `algorithm` from `start` to `goal`.
///
/// Returns `None` when the goal is unreachable; that is not an error.
pub fn search(
    algorithm: Algorithm,
    provider: &dyn GraphProvider,
    start: &str,
    goal: &str,
) -> Option<SearchResult> {
    match algorithm {
        Algorithm::Dfs => dfs_search(provider, start, goal),
        Algorithm::Bfs => bfs_search(provider, start, goal),
        Algorithm::Ucs => ucs_search(provider, start, goal),
    }
}
