use std::sync::Arc;

use indexmap::IndexMap;
use serde::ser::SerializeStruct;

use shardview_models::NodeRecord;
use shardview_models::ShardRecord;
use shardview_models::ShardState;

use crate::IndexQuery;
use crate::IndexSummary;
use crate::NodeAllocation;
use crate::ShardGroups;
use crate::UNASSIGNED_NODE;

mod builder;
mod refs;

#[cfg(test)]
mod tests;

pub use self::builder::ShardViewBuilder;

/// Synthetic in-memory view of shard allocation in a cluster.
///
/// Shard records are shared by all groups so each record is stored once.
#[derive(Clone, Debug)]
pub struct ShardViewModel {
    // Input records.
    pub nodes: IndexMap<String, Arc<NodeRecord>>,
    pub shards: Vec<Arc<ShardRecord>>,

    // "Indexes" to access shards in different ways.
    pub by_index: ShardGroups<String>,
    pub by_node: ShardGroups<String>,
    pub by_state: ShardGroups<ShardState>,

    // Projection of index names for display.
    pub filtered_sorted_index_names: Vec<String>,
    pub index_query: IndexQuery,
}

impl ShardViewModel {
    /// Start building an empty `ShardViewModel`.
    pub fn builder() -> ShardViewBuilder {
        ShardViewBuilder::new()
    }

    /// Summarise each index in [`filtered_sorted_index_names`] order.
    ///
    /// [`filtered_sorted_index_names`]: ShardViewModel::filtered_sorted_index_names
    pub fn index_summaries(&self) -> Vec<IndexSummary> {
        self.filtered_sorted_index_names
            .iter()
            .filter_map(|name| {
                self.by_index
                    .get(name)
                    .map(|shards| IndexSummary::new(name, shards))
            })
            .collect()
    }

    /// Lookup a node record by name.
    pub fn node(&self, name: &str) -> Option<&NodeRecord> {
        self.nodes.get(name).map(Arc::as_ref)
    }

    /// Summarise shard allocation on each node.
    pub fn node_allocations(&self) -> Vec<NodeAllocation> {
        crate::node_allocations(self)
    }

    /// Shards allocated to a node, or not allocated if `node` is [`UNASSIGNED_NODE`].
    pub fn shards_on_node(&self, node: &str) -> &[Arc<ShardRecord>] {
        self.by_node.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Shards copies not allocated to any node.
    pub fn unassigned(&self) -> &[Arc<ShardRecord>] {
        self.shards_on_node(UNASSIGNED_NODE)
    }
}

impl serde::Serialize for ShardViewModel {
    /// Serialise a ShardViewModel as a structured object.
    ///
    /// Groups reference the same records listed in `shards` so they are serialised as
    /// [`ShardRef`](refs::ShardRef)s to avoid repeating full records multiple times.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ShardViewModel", 8)?;
        let nodes: Vec<&NodeRecord> = self.nodes.values().map(Arc::as_ref).collect();
        let shards: Vec<&ShardRecord> = self.shards.iter().map(Arc::as_ref).collect();
        state.serialize_field("nodes", &nodes)?;
        state.serialize_field("shards", &shards)?;

        state.serialize_field("by_index", &refs::groups(&self.by_index))?;
        state.serialize_field("by_node", &refs::groups(&self.by_node))?;
        state.serialize_field("by_state", &refs::groups(&self.by_state))?;
        state.serialize_field("unassigned", &refs::list(self.unassigned()))?;

        state.serialize_field(
            "filtered_sorted_index_names",
            &self.filtered_sorted_index_names,
        )?;
        state.serialize_field("index_query", &self.index_query)?;
        state.end()
    }
}
