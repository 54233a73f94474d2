//! Command trait and context for dispatching commands

use std::env;
use std::time::Instant;

use crate::cli::Cli;
use graphwalk_core::config::GraphwalkConfig;
use graphwalk_core::bail_usage;
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{AlgorithmSelection, WeightPolicy};

/// Shared context for command execution.
///
/// Holds the settings after merging CLI flags over the config file over
/// built-in defaults.
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
    /// Start node id, trimmed like node names in the graph file
    pub start_node: String,
    /// Goal node id, trimmed like node names in the graph file
    pub goal_node: String,
    pub algorithms: AlgorithmSelection,
    pub format: OutputFormat,
    pub separator: String,
    pub weight_policy: WeightPolicy,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let cwd = env::current_dir()?;
        let config = GraphwalkConfig::resolve(cli.config.as_deref(), &cwd)?;
        Self::from_config(cli, &config, start)
    }

    fn from_config(cli: &'a Cli, config: &GraphwalkConfig, start: Instant) -> Result<Self> {
        let start_node = cli.start.trim();
        let goal_node = cli.goal.trim();
        if start_node.is_empty() || goal_node.is_empty() {
            bail_usage!("start and goal node ids must not be empty");
        }

        let algorithms = match cli.algorithm {
            Some(arg) => arg.into(),
            None => config.algorithm()?.unwrap_or_default(),
        };

        let format = match cli.format {
            Some(arg) => arg.into(),
            None => config.format()?.unwrap_or_default(),
        };

        let separator = cli
            .separator
            .as_deref()
            .or(config.separator())
            .unwrap_or_default()
            .to_string();

        let weight_policy = if cli.reject_negative {
            WeightPolicy::RejectNegative
        } else {
            config.weight_policy()
        };

        Ok(Self {
            cli,
            start,
            start_node: start_node.to_string(),
            goal_node: goal_node.to_string(),
            algorithms,
            format,
            separator,
            weight_policy,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use graphwalk_core::graph::Algorithm;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["graphwalk"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let cli = parse(&["g.txt", "A", "D"]);
        let ctx =
            CommandContext::from_config(&cli, &GraphwalkConfig::default(), Instant::now()).unwrap();

        assert_eq!(ctx.algorithms, AlgorithmSelection::One(Algorithm::Bfs));
        assert_eq!(ctx.format, OutputFormat::Human);
        assert_eq!(ctx.separator, "");
        assert_eq!(ctx.weight_policy, WeightPolicy::AllowNegative);
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let cli = parse(&["g.txt", "A", "D"]);
        let config: GraphwalkConfig = toml::from_str(
            "[search]\nalgorithm = \"all\"\n[weights]\nreject_negative = true\n[output]\nformat = \"records\"\nseparator = \",\"\n",
        )
        .unwrap();

        let ctx = CommandContext::from_config(&cli, &config, Instant::now()).unwrap();
        assert_eq!(ctx.algorithms, AlgorithmSelection::All);
        assert_eq!(ctx.format, OutputFormat::Records);
        assert_eq!(ctx.separator, ",");
        assert_eq!(ctx.weight_policy, WeightPolicy::RejectNegative);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&["-a", "dfs", "--format", "json", "--separator", " ", "g.txt", "A", "D"]);
        let config: GraphwalkConfig =
            toml::from_str("[search]\nalgorithm = \"ucs\"\n[output]\nformat = \"records\"\n")
                .unwrap();

        let ctx = CommandContext::from_config(&cli, &config, Instant::now()).unwrap();
        assert_eq!(ctx.algorithms, AlgorithmSelection::One(Algorithm::Dfs));
        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(ctx.separator, " ");
    }

    #[test]
    fn test_node_ids_are_trimmed() {
        let cli = parse(&["g.txt", " A", "D\t"]);
        let ctx =
            CommandContext::from_config(&cli, &GraphwalkConfig::default(), Instant::now()).unwrap();

        assert_eq!(ctx.start_node, "A");
        assert_eq!(ctx.goal_node, "D");
    }

    #[test]
    fn test_empty_node_id_is_usage_error() {
        let cli = parse(&["g.txt", "", "D"]);
        let err = CommandContext::from_config(&cli, &GraphwalkConfig::default(), Instant::now())
            .err()
            .unwrap();
        assert_eq!(err.exit_code(), graphwalk_core::error::ExitCode::Usage);
    }

    #[test]
    fn test_bad_config_value_is_reported() {
        let cli = parse(&["g.txt", "A", "D"]);
        let config: GraphwalkConfig = toml::from_str("[output]\nformat = \"yaml\"\n").unwrap();

        assert!(CommandContext::from_config(&cli, &config, Instant::now()).is_err());
    }
}
