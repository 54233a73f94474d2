//! Graphwalk - uninformed graph search CLI
//!
//! Loads a weighted directed graph from an adjacency-list file and runs
//! depth-first, breadth-first or uniform-cost search between two nodes.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use commands::dispatch::CommandContext;
use graphwalk_core::error::{ExitCode as GraphwalkExitCode, GraphwalkError};
use graphwalk_core::format::OutputFormat;
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors happen before `Cli.format` exists, so look at argv
            // directly to decide whether to emit a JSON envelope.
            if argv_format_json {
                let error = match err.kind() {
                    // Help and version are informational, not errors - let clap handle them
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => GraphwalkError::UsageError(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let ctx = match CommandContext::new(&cli, start) {
        Ok(ctx) => ctx,
        Err(e) => {
            let format = cli.format.map(OutputFormat::from).unwrap_or_default();
            return report_error(&cli, format, e);
        }
    };

    match commands::dispatch::run(&ctx) {
        Ok(()) => ExitCode::from(GraphwalkExitCode::Success as u8),
        Err(e) => report_error(&cli, ctx.format, e),
    }
}

/// Print `error` in the requested format and map it to a process exit code
fn report_error(cli: &Cli, format: OutputFormat, error: GraphwalkError) -> ExitCode {
    let exit_code = error.exit_code();

    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
    }

    ExitCode::from(exit_code as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
