//! Command dispatch logic for graphwalk

use graphwalk_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext};

use crate::commands::search::SearchCommand;

pub fn run(ctx: &CommandContext) -> Result<()> {
    debug!(
        elapsed = ?ctx.start.elapsed(),
        format = %ctx.format,
        policy = ?ctx.weight_policy,
        "resolve_settings"
    );

    SearchCommand.execute(ctx)
}
