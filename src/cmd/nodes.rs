//! Show shard allocation and resource usage per node.
use anyhow::Result;
use clap::Args;

use crate::Globals;

/// Show shard allocation and resource usage per node.
///
/// Usage is colored with the disk watermarks from `--settings`, when given,
/// or with the configured thresholds otherwise.
#[derive(Args, Debug)]
pub struct NodesCli {}

/// Execute the `shardview nodes` command.
pub fn run(globals: &Globals, _: &NodesCli) -> Result<i32> {
    let thresholds = crate::input::watermarks(globals)?.thresholds();
    let view = crate::input::view(globals, Default::default())?;
    let allocations = view.node_allocations();
    println!("{}", globals.formatter.nodes(&allocations, &thresholds)?);
    Ok(0)
}
