//! Search command: load the graph, run the selected strategies, print results

mod human;
mod json;
mod records;

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{self, load_graph, Algorithm, Cost, SearchResult};
use graphwalk_core::trace_time;
use serde::Serialize;
use std::time::Instant;

use crate::commands::dispatch::{Command, CommandContext};

/// Result of one strategy for one start/goal pair.
///
/// `result` is `None` when the goal is unreachable.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    pub algorithm: Algorithm,
    pub start: &'a str,
    pub goal: &'a str,
    pub result: Option<SearchResult>,
}

/// JSON shape of a `SearchOutcome`
#[derive(Debug, Serialize)]
struct OutcomeView<'a> {
    algorithm: Algorithm,
    start: &'a str,
    goal: &'a str,
    found: bool,
    #[serde(flatten)]
    result: Option<ResultView<'a>>,
}

#[derive(Debug, Serialize)]
struct ResultView<'a> {
    path: &'a [String],
    order_of_exploration: &'a [String],
    depth: usize,
    cost: Cost,
}

impl<'a> From<&'a SearchOutcome<'a>> for OutcomeView<'a> {
    fn from(outcome: &'a SearchOutcome<'a>) -> Self {
        OutcomeView {
            algorithm: outcome.algorithm,
            start: outcome.start,
            goal: outcome.goal,
            found: outcome.result.is_some(),
            result: outcome.result.as_ref().map(|r| ResultView {
                path: &r.path,
                order_of_exploration: &r.exploration_order,
                depth: r.depth,
                cost: r.cost,
            }),
        }
    }
}

pub struct SearchCommand;

impl Command for SearchCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let cli = ctx.cli;

        let load_start = Instant::now();
        let graph = load_graph(&cli.graph_file, ctx.weight_policy)?;
        trace_time!(load_start, "load_graph");

        if !graph.contains(&ctx.start_node) {
            tracing::info!(start = %ctx.start_node, "start node does not appear in the graph");
        }

        let outcomes: Vec<SearchOutcome> = ctx
            .algorithms
            .algorithms()
            .into_iter()
            .map(|algorithm| {
                let search_start = Instant::now();
                let result = graph::search(algorithm, &graph, &ctx.start_node, &ctx.goal_node);
                trace_time!(search_start, "search", algorithm = algorithm.label());
                SearchOutcome {
                    algorithm,
                    start: &ctx.start_node,
                    goal: &ctx.goal_node,
                    result,
                }
            })
            .collect();

        let rendered = match ctx.format {
            OutputFormat::Human => human::render(&outcomes, &ctx.separator),
            OutputFormat::Json => json::render(&outcomes)?,
            OutputFormat::Records => records::render(&outcomes, &ctx.separator),
        };
        print!("{}", rendered);

        tracing::debug!(elapsed = ?ctx.start.elapsed(), "search_complete");
        Ok(())
    }
}
