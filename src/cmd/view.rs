//! Show the complete shard view.
use anyhow::Result;
use clap::Args;

use shardview_view::IndexQuery;

use crate::Globals;

/// Show the complete shard view.
#[derive(Args, Debug)]
pub struct ViewCli {}

/// Execute the `shardview view` command.
pub fn run(globals: &Globals, _: &ViewCli) -> Result<i32> {
    let thresholds = crate::input::watermarks(globals)?.thresholds();
    let defaults = &globals.conf.indices;
    let query = IndexQuery {
        show_only_affected: defaults.show_only_affected,
        sort_ascending: defaults.sort_ascending,
        ..Default::default()
    };
    let view = crate::input::view(globals, query)?;
    println!("{}", globals.formatter.view(&view, &thresholds)?);
    Ok(0)
}
