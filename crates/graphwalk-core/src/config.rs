//! Configuration for graphwalk
//!
//! Read from `graphwalk.toml` in the working directory, or from the file
//! named by `--config` / `GRAPHWALK_CONFIG`. Every key is optional; command
//! line flags take precedence over anything set here.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::format::OutputFormat;
use crate::graph::{AlgorithmSelection, WeightPolicy};

pub use types::{
    GraphwalkConfig, OutputConfig, SearchConfig, WeightsConfig, CONFIG_FILE,
};

impl GraphwalkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GraphwalkConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path (from `--config` or `GRAPHWALK_CONFIG`) must exist.
    /// Otherwise `graphwalk.toml` under `dir` is used when present, and the
    /// defaults apply when it is not.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let local = dir.join(CONFIG_FILE);
        if local.is_file() {
            Self::load(&local)
        } else {
            Ok(Self::default())
        }
    }

    /// Configured algorithm, if any
    pub fn algorithm(&self) -> Result<Option<AlgorithmSelection>> {
        self.search
            .algorithm
            .as_deref()
            .map(str::parse)
            .transpose()
    }

    /// Configured output format, if any
    pub fn format(&self) -> Result<Option<OutputFormat>> {
        self.output.format.as_deref().map(str::parse).transpose()
    }

    pub fn separator(&self) -> Option<&str> {
        self.output.separator.as_deref()
    }

    pub fn weight_policy(&self) -> WeightPolicy {
        if self.weights.reject_negative {
            WeightPolicy::RejectNegative
        } else {
            WeightPolicy::AllowNegative
        }
    }
}
