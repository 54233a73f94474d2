//! Graphwalk Core Library
//!
//! Graph store, file loader and uninformed search algorithms for graphwalk.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
