use clap::ValueEnum;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{Algorithm, AlgorithmSelection};

/// `--algorithm` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Depth-first search
    Dfs,
    /// Breadth-first search (fewest edges)
    Bfs,
    /// Uniform-cost search (cheapest path)
    Ucs,
    /// Run dfs, bfs and ucs in turn
    All,
}

impl From<AlgorithmArg> for AlgorithmSelection {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Dfs => AlgorithmSelection::One(Algorithm::Dfs),
            AlgorithmArg::Bfs => AlgorithmSelection::One(Algorithm::Bfs),
            AlgorithmArg::Ucs => AlgorithmSelection::One(Algorithm::Ucs),
            AlgorithmArg::All => AlgorithmSelection::All,
        }
    }
}

/// `--format` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Human,
    Json,
    Records,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Records => OutputFormat::Records,
        }
    }
}
