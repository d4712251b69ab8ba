//! Format output for easy consumption by people interacting with `shardview`.
use std::sync::Arc;

use anyhow::Result;

use shardview_models::ShardRecord;
use shardview_models::WatermarkThresholds;
use shardview_view::IndexSummary;
use shardview_view::NodeAllocation;
use shardview_view::ResolvedWatermarks;
use shardview_view::ShardViewModel;

use super::FormatterStrategy;

mod indices;
mod nodes;
mod shards;
mod watermarks;

/// Format output for easy consumption by people interacting with `shardview`.
pub struct HumanFormatter;

impl FormatterStrategy for HumanFormatter {
    fn indices(&self, summaries: &[IndexSummary]) -> Result<String> {
        Ok(self::indices::table(summaries).to_string())
    }

    fn nodes(
        &self,
        allocations: &[NodeAllocation],
        thresholds: &WatermarkThresholds,
    ) -> Result<String> {
        Ok(self::nodes::table(allocations, thresholds).to_string())
    }

    fn unassigned(&self, shards: &[Arc<ShardRecord>]) -> Result<String> {
        if shards.is_empty() {
            return Ok("All shards are assigned.".into());
        }
        Ok(self::shards::unassigned(shards).to_string())
    }

    fn view(&self, view: &ShardViewModel, thresholds: &WatermarkThresholds) -> Result<String> {
        let mut sections = Vec::new();
        sections.push(format!(
            "Shards by state:\n{}",
            self::shards::states(view)
        ));

        let summaries = view.index_summaries();
        sections.push(format!(
            "Indices ({} of {}):\n{}",
            summaries.len(),
            view.by_index.len(),
            self::indices::table(&summaries),
        ));

        let allocations = view.node_allocations();
        if !allocations.is_empty() {
            sections.push(format!(
                "Nodes:\n{}",
                self::nodes::table(&allocations, thresholds)
            ));
        }

        let unassigned = view.unassigned();
        if !unassigned.is_empty() {
            sections.push(format!(
                "Unassigned shards:\n{}",
                self::shards::unassigned(unassigned)
            ));
        }
        Ok(sections.join("\n\n"))
    }

    fn watermarks(&self, watermarks: &ResolvedWatermarks) -> Result<String> {
        Ok(self::watermarks::table(watermarks).to_string())
    }
}
