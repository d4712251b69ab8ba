use std::sync::Arc;

use indexmap::IndexMap;

use shardview_models::NodeRecord;
use shardview_models::ShardRecord;

use crate::derive_index_list;
use crate::group::node_key;
use crate::group_by;
use crate::IndexQuery;
use crate::ShardViewModel;

/// Collect shard and node records to build a [`ShardViewModel`] from.
///
/// Records are collected as given and grouped only when the view is built,
/// so the order in which records are added is the order they appear in the view.
#[derive(Debug, Default)]
pub struct ShardViewBuilder {
    index_query: IndexQuery,
    nodes: IndexMap<String, Arc<NodeRecord>>,
    shards: Vec<Arc<ShardRecord>>,
}

impl ShardViewBuilder {
    /// Start building an empty `ShardViewModel`.
    pub(crate) fn new() -> ShardViewBuilder {
        ShardViewBuilder::default()
    }

    /// Convert this view builder into a complete ShardViewModel.
    pub fn build(self) -> ShardViewModel {
        let by_index = group_by(&self.shards, |shard| shard.index.clone());
        let by_node = group_by(&self.shards, |shard| node_key(shard));
        let by_state = group_by(&self.shards, |shard| shard.effective_state());
        let filtered_sorted_index_names = derive_index_list(
            &by_index,
            &self.index_query.filter_text,
            self.index_query.show_only_affected,
            self.index_query.sort_ascending,
        );
        ShardViewModel {
            nodes: self.nodes,
            shards: self.shards,
            by_index,
            by_node,
            by_state,
            filtered_sorted_index_names,
            index_query: self.index_query,
        }
    }

    /// Set the projection used to derive the list of index names.
    pub fn index_query(&mut self, query: IndexQuery) -> &mut Self {
        self.index_query = query;
        self
    }

    /// Add node information to the view.
    ///
    /// Nodes are unique by name: a later record for the same node replaces the earlier one.
    pub fn node(&mut self, node: NodeRecord) -> &mut Self {
        self.nodes.insert(node.name.clone(), Arc::new(node));
        self
    }

    /// Add many nodes to the view.
    pub fn nodes<I>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator<Item = NodeRecord>,
    {
        for node in nodes {
            self.node(node);
        }
        self
    }

    /// Add a shard copy to the view.
    pub fn shard(&mut self, shard: ShardRecord) -> &mut Self {
        self.shards.push(Arc::new(shard));
        self
    }

    /// Add many shard copies to the view.
    pub fn shards<I>(&mut self, shards: I) -> &mut Self
    where
        I: IntoIterator<Item = ShardRecord>,
    {
        self.shards.extend(shards.into_iter().map(Arc::new));
        self
    }
}
