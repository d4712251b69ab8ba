//! Inspect shard allocation of Elasticsearch-like clusters from captured API responses.
use anyhow::Result;
use clap::Parser;

mod cmd;
mod formatter;
mod globals;
mod input;
mod logging;
mod utils;

pub mod errors;

use self::cmd::Cli;
use self::globals::Globals;

/// Initialise the shardview process and invoke a command implementation.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    let globals = Globals::initialise(cli)?;

    match &globals.cli.command {
        cmd::Command::Indices(cmd) => cmd::indices::run(&globals, cmd),
        cmd::Command::Nodes(cmd) => cmd::nodes::run(&globals, cmd),
        cmd::Command::Unassigned(cmd) => cmd::unassigned::run(&globals, cmd),
        cmd::Command::View(cmd) => cmd::view::run(&globals, cmd),
        cmd::Command::Watermarks(cmd) => cmd::watermarks::run(&globals, cmd),
    }
}
