//! CLI commands for graphwalk

pub mod dispatch;
pub mod search;
