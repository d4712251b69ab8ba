//! Abstract how information is presented to users to enable different interaction styles.
//!
//! For example:
//!
//! - The default `Human` formatter renders tables suitable for an interactive session.
//! - The `JSON` formatter renders documents suitable for automated scripts.
//!
//! Formatters return the rendered output so commands decide where to emit it.
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use clap::ValueEnum;

use shardview_models::ShardRecord;
use shardview_models::WatermarkThresholds;
use shardview_view::IndexSummary;
use shardview_view::NodeAllocation;
use shardview_view::ResolvedWatermarks;
use shardview_view::ShardViewModel;

mod human;
mod json;

/// List of available output formats.
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum FormatId {
    /// Optimise output for viewing by humans.
    #[default]
    Human,

    /// Output information as JSON documents.
    Json,
}

/// Configure output formatting for `shardview`.
#[derive(Args, Debug)]
pub struct FormatOpts {
    /// Select the format to use for output.
    #[arg(
        long = "format",
        global = true,
        env = "SHARDVIEW_FORMAT",
        default_value_t,
        value_enum
    )]
    pub format: FormatId,
}

/// Interface to implement user output formatting.
pub trait FormatterStrategy {
    /// Render summaries of the selected indices.
    fn indices(&self, summaries: &[IndexSummary]) -> Result<String>;

    /// Render shard allocation per node, colouring usage with the given thresholds.
    fn nodes(
        &self,
        allocations: &[NodeAllocation],
        thresholds: &WatermarkThresholds,
    ) -> Result<String>;

    /// Render the list of unassigned shards.
    fn unassigned(&self, shards: &[Arc<ShardRecord>]) -> Result<String>;

    /// Render a complete shard view.
    fn view(&self, view: &ShardViewModel, thresholds: &WatermarkThresholds) -> Result<String>;

    /// Render resolved watermark thresholds.
    fn watermarks(&self, watermarks: &ResolvedWatermarks) -> Result<String>;
}

/// Instantiate a formatter based on CLI configuration.
pub fn select(format: &FormatOpts) -> Box<dyn FormatterStrategy> {
    match format.format {
        FormatId::Human => Box::new(self::human::HumanFormatter),
        FormatId::Json => Box::new(self::json::JsonFormatter),
    }
}
