//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE: &str = "graphwalk.toml";

/// Top-level graphwalk configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphwalkConfig {
    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// Graph loading rules for edge weights
    #[serde(default)]
    pub weights: WeightsConfig,

    /// Result rendering defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for which search runs when no flag is given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// "dfs", "bfs", "ucs" or "all"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
}

/// Configuration for edge weight validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightsConfig {
    /// Fail the load when any edge weight is negative
    #[serde(default)]
    pub reject_negative: bool,
}

/// Configuration for result output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// "human", "json" or "records"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// String placed between node ids in human and records output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}
