//! Format output to JSON.
use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use shardview_models::ShardRecord;
use shardview_models::WatermarkThresholds;
use shardview_view::IndexSummary;
use shardview_view::NodeAllocation;
use shardview_view::ResolvedWatermarks;
use shardview_view::ShardViewModel;
use shardview_view::WatermarkColor;

use super::FormatterStrategy;

/// Format output to JSON.
pub struct JsonFormatter;

/// Node allocation decorated with usage colors.
#[derive(Serialize)]
struct NodeEntry<'a> {
    #[serde(flatten)]
    allocation: &'a NodeAllocation,

    #[serde(skip_serializing_if = "Option::is_none")]
    heap_color: Option<WatermarkColor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    disk_color: Option<WatermarkColor>,
}

/// Node allocations along with the thresholds used to color them.
#[derive(Serialize)]
struct NodeList<'a> {
    nodes: Vec<NodeEntry<'a>>,
    thresholds: &'a WatermarkThresholds,
}

impl<'a> NodeList<'a> {
    fn new(allocations: &'a [NodeAllocation], thresholds: &'a WatermarkThresholds) -> Self {
        let nodes = allocations
            .iter()
            .map(|allocation| NodeEntry {
                allocation,
                heap_color: allocation.heap_color(thresholds),
                disk_color: allocation.disk_color(thresholds),
            })
            .collect();
        NodeList { nodes, thresholds }
    }
}

/// Complete shard view along with the derived summaries.
#[derive(Serialize)]
struct ViewDocument<'a> {
    view: &'a ShardViewModel,
    indices: Vec<IndexSummary>,
    #[serde(flatten)]
    nodes: NodeList<'a>,
}

impl FormatterStrategy for JsonFormatter {
    fn indices(&self, summaries: &[IndexSummary]) -> Result<String> {
        to_json(&summaries)
    }

    fn nodes(
        &self,
        allocations: &[NodeAllocation],
        thresholds: &WatermarkThresholds,
    ) -> Result<String> {
        to_json(&NodeList::new(allocations, thresholds))
    }

    fn unassigned(&self, shards: &[Arc<ShardRecord>]) -> Result<String> {
        let shards: Vec<&ShardRecord> = shards.iter().map(Arc::as_ref).collect();
        to_json(&shards)
    }

    fn view(&self, view: &ShardViewModel, thresholds: &WatermarkThresholds) -> Result<String> {
        let allocations = view.node_allocations();
        let document = ViewDocument {
            view,
            indices: view.index_summaries(),
            nodes: NodeList::new(&allocations, thresholds),
        };
        to_json(&document)
    }

    fn watermarks(&self, watermarks: &ResolvedWatermarks) -> Result<String> {
        to_json(watermarks)
    }
}

/// Pretty print a serialisable value as JSON.
fn to_json<V>(value: &V) -> Result<String>
where
    V: Serialize + ?Sized,
{
    let value = serde_json::to_string_pretty(value)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use serde_json::Value;

    use shardview_models::NodeRecord;
    use shardview_models::ShardRecord;
    use shardview_models::ShardState;
    use shardview_models::WatermarkThresholds;

    use super::JsonFormatter;
    use crate::formatter::FormatterStrategy;

    #[test]
    fn nodes_include_colors() {
        let node = NodeRecord {
            disk_used_bytes: 91,
            disk_total_bytes: 100,
            ..NodeRecord::new("n1")
        };
        let shard = ShardRecord::new("a", 0, true, ShardState::Started).on_node("n1");
        let view = shardview_view::build_shard_view_model(vec![shard], vec![node]);
        let thresholds = WatermarkThresholds::default();
        let output = JsonFormatter
            .nodes(&view.node_allocations(), &thresholds)
            .unwrap();
        let output: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(output["nodes"][0]["name"], json!("n1"));
        assert_eq!(output["nodes"][0]["total_count"], json!(1));
        assert_eq!(output["nodes"][0]["disk_color"], json!("orange"));
        assert_eq!(output["nodes"][0]["heap_color"], json!("blue"));
        assert_eq!(output["thresholds"]["flood_stage"], json!(95.0));
    }

    #[test]
    fn view_document() {
        let shard = ShardRecord::new("a", 0, false, ShardState::Unassigned);
        let view = shardview_view::build_shard_view_model(vec![shard], Vec::new());
        let output = JsonFormatter
            .view(&view, &WatermarkThresholds::default())
            .unwrap();
        let output: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(output["view"]["unassigned"][0]["index"], json!("a"));
        assert_eq!(output["indices"][0]["has_issues"], json!(true));
        assert_eq!(output["nodes"], json!([]));
    }
}
