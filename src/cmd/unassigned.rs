//! List shards not assigned to any node.
use anyhow::Result;
use clap::Args;

use crate::Globals;

/// List shards not assigned to any node.
#[derive(Args, Debug)]
pub struct UnassignedCli {
    /// Exit with a non-zero code when unassigned shards are found.
    #[arg(long)]
    pub check: bool,
}

/// Execute the `shardview unassigned` command.
pub fn run(globals: &Globals, cmd: &UnassignedCli) -> Result<i32> {
    let view = crate::input::view(globals, Default::default())?;
    let unassigned = view.unassigned();
    println!("{}", globals.formatter.unassigned(unassigned)?);
    if cmd.check && !unassigned.is_empty() {
        return Ok(2);
    }
    Ok(0)
}
