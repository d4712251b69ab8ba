//! Per-node shard allocation summaries.
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use shardview_models::NodeRecord;
use shardview_models::WatermarkThresholds;

use crate::color_for;
use crate::ShardViewModel;
use crate::WatermarkColor;
use crate::UNASSIGNED_NODE;

/// Shard allocation on a node, joined with the node's resource usage when known.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeAllocation {
    /// Name of the node shards are allocated to.
    pub name: String,

    pub primary_count: usize,
    pub replica_count: usize,
    pub total_count: usize,

    /// Node information and usage, missing if the node is not in the node list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<NodeMetrics>,
}

impl NodeAllocation {
    /// Color of the node disk usage, if usage is known.
    pub fn disk_color(&self, thresholds: &WatermarkThresholds) -> Option<WatermarkColor> {
        self.metrics
            .as_ref()
            .map(|metrics| color_for(f64::from(metrics.disk_percent), thresholds))
    }

    /// Color of the node heap usage, if usage is known.
    pub fn heap_color(&self, thresholds: &WatermarkThresholds) -> Option<WatermarkColor> {
        self.metrics
            .as_ref()
            .map(|metrics| color_for(f64::from(metrics.heap_percent), thresholds))
    }
}

/// Node information and resource usage attached to a [`NodeAllocation`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct NodeMetrics {
    pub ip: String,
    pub roles: BTreeSet<String>,
    pub is_master: bool,

    pub heap_used_bytes: u64,
    pub heap_max_bytes: u64,
    pub heap_percent: u32,

    pub disk_used_bytes: u64,
    pub disk_total_bytes: u64,
    pub disk_percent: u32,
}

impl From<&NodeRecord> for NodeMetrics {
    fn from(node: &NodeRecord) -> Self {
        NodeMetrics {
            ip: node.ip.clone(),
            roles: node.roles.clone(),
            is_master: node.is_master,
            heap_used_bytes: node.heap_used_bytes,
            heap_max_bytes: node.heap_max_bytes,
            heap_percent: percent(node.heap_used_bytes, node.heap_max_bytes),
            disk_used_bytes: node.disk_used_bytes,
            disk_total_bytes: node.disk_total_bytes,
            disk_percent: percent(node.disk_used_bytes, node.disk_total_bytes),
        }
    }
}

/// Summarise shard allocation for every node with shards, in [`ShardViewModel::by_node`] order.
///
/// The [`UNASSIGNED_NODE`] group is not a node and is skipped.
pub fn node_allocations(view: &ShardViewModel) -> Vec<NodeAllocation> {
    view.by_node
        .iter()
        .filter(|(name, _)| name.as_str() != UNASSIGNED_NODE)
        .map(|(name, shards)| {
            let primary_count = shards.iter().filter(|shard| shard.primary).count();
            let metrics = view.nodes.get(name).map(|node| NodeMetrics::from(node.as_ref()));
            NodeAllocation {
                name: name.clone(),
                primary_count,
                replica_count: shards.len() - primary_count,
                total_count: shards.len(),
                metrics,
            }
        })
        .collect()
}

/// Rounded percentage of `used` over `max`, or `0` when `max` is `0`.
///
/// Usage above the maximum is reported as is (above 100).
pub fn percent(used: u64, max: u64) -> u32 {
    if max == 0 {
        return 0;
    }
    let ratio = used as f64 / max as f64;
    (ratio * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use shardview_models::NodeRecord;

    use super::percent;
    use super::NodeMetrics;

    #[test]
    fn percent_rounds() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 200), 1);
        assert_eq!(percent(50, 100), 50);
    }

    #[test]
    fn percent_with_zero_max() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1024, 0), 0);
    }

    #[test]
    fn percent_over_max() {
        assert_eq!(percent(150, 100), 150);
    }

    #[test]
    fn metrics_from_node() {
        let node = NodeRecord {
            heap_used_bytes: 3,
            heap_max_bytes: 4,
            disk_used_bytes: 10,
            disk_total_bytes: 0,
            ..NodeRecord::new("n1")
        };
        let metrics = NodeMetrics::from(&node);
        assert_eq!(metrics.heap_percent, 75);
        assert_eq!(metrics.disk_percent, 0);
    }
}
