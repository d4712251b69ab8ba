//! List indices with shard counts and sizes.
use anyhow::Result;
use clap::Args;
use slog::debug;

use shardview_conf::IndicesConf;
use shardview_view::IndexQuery;

use crate::Globals;

/// List indices with shard counts and sizes.
#[derive(Args, Debug)]
pub struct IndicesCli {
    /// Only list indices with a name containing this text (case-insensitive).
    #[arg(long, short = 'f', default_value = "")]
    pub filter: String,

    /// Only list indices with unassigned, relocating or initialising shards.
    #[arg(long, conflicts_with = "all")]
    pub affected: bool,

    /// List all indices, even if configured to list only affected ones.
    #[arg(long)]
    pub all: bool,

    /// Sort indices in ascending order by name.
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Sort indices in descending order by name.
    #[arg(long)]
    pub desc: bool,
}

impl IndicesCli {
    /// Combine CLI flags with the configured index list defaults.
    fn query(&self, defaults: &IndicesConf) -> IndexQuery {
        let sort_ascending = match (self.asc, self.desc) {
            (true, _) => true,
            (_, true) => false,
            _ => defaults.sort_ascending,
        };
        let show_only_affected = match (self.affected, self.all) {
            (true, _) => true,
            (_, true) => false,
            _ => defaults.show_only_affected,
        };
        IndexQuery {
            filter_text: self.filter.clone(),
            show_only_affected,
            sort_ascending,
        }
    }
}

/// Execute the `shardview indices` command.
pub fn run(globals: &Globals, cmd: &IndicesCli) -> Result<i32> {
    let query = cmd.query(&globals.conf.indices);
    debug!(
        globals.logger, "Listing indices";
        "filter" => &query.filter_text,
        "affected" => query.show_only_affected,
        "ascending" => query.sort_ascending,
    );
    let view = crate::input::view(globals, query)?;
    let summaries = view.index_summaries();
    println!("{}", globals.formatter.indices(&summaries)?);
    Ok(0)
}
