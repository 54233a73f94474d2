//! CLI argument parsing for graphwalk
//!
//! Uses clap for argument parsing. Exactly three positionals are accepted:
//! the graph file, the start node and the goal node.

pub mod output;

use clap::Parser;
use std::path::PathBuf;

pub use output::{AlgorithmArg, FormatArg};

/// Graphwalk - uninformed search over a weighted directed graph
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Adjacency-list file (NODE:NEIGHBOR:WEIGHT,... per line)
    pub graph_file: PathBuf,

    /// Node to start from
    pub start: String,

    /// Node to reach
    pub goal: String,

    /// Search strategy [default: bfs]
    #[arg(long, short, value_enum)]
    pub algorithm: Option<AlgorithmArg>,

    /// Output format [default: human]
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Config file (defaults to ./graphwalk.toml when present)
    #[arg(long, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reject negative edge weights while loading
    #[arg(long)]
    pub reject_negative: bool,

    /// String placed between node ids in human and records output
    #[arg(long)]
    pub separator: Option<String>,

    /// Suppress error messages on stderr
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}
