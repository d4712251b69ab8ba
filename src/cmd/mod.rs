//! CLI interface for the shard allocation inspector.
use clap::Parser;
use clap::Subcommand;

pub mod indices;
pub mod nodes;
pub mod unassigned;
pub mod view;
pub mod watermarks;

use crate::formatter::FormatOpts;
use crate::input::InputOpts;
use crate::logging::LogOpt;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " [",
    env!("GIT_BUILD_HASH"),
    "; ",
    env!("GIT_BUILD_TAINT"),
    "]",
);

/// CLI definition for the shardview binary.
#[derive(Debug, Parser)]
#[command(about)]
#[command(propagate_version = true)]
#[command(version = VERSION)]
pub struct Cli {
    /// Path to a YAML configuration file.
    #[arg(long = "config", global = true, env = "SHARDVIEW_CONFIG")]
    pub config: Option<String>,

    /// Select the `shardview` command to run.
    #[command(subcommand)]
    pub command: Command,

    /// Configure how `shardview` output is formatted.
    #[command(flatten)]
    pub format: FormatOpts,

    /// Captured cluster API responses to inspect.
    #[command(flatten)]
    pub input: InputOpts,

    /// Configure how `shardview` logs are emitted.
    #[command(flatten)]
    pub log: LogOpt,
}

/// Select the `shardview` command to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List indices with shard counts and sizes.
    #[command(alias = "idx")]
    Indices(indices::IndicesCli),

    /// Show shard allocation and resource usage per node.
    Nodes(nodes::NodesCli),

    /// List shards not assigned to any node.
    Unassigned(unassigned::UnassignedCli),

    /// Show the complete shard view.
    View(view::ViewCli),

    /// Show disk watermark thresholds resolved from cluster settings.
    Watermarks(watermarks::WatermarksCli),
}
