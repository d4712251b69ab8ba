//! Stable grouping of records into insertion ordered maps.
use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexMap;

use shardview_models::ShardRecord;

/// Key of the [`ShardViewModel::by_node`] group collecting shards not allocated to any node.
///
/// [`ShardViewModel::by_node`]: crate::ShardViewModel::by_node
pub const UNASSIGNED_NODE: &str = "UNASSIGNED";

/// Shards grouped by a key, in the order keys were first seen.
pub type ShardGroups<K> = IndexMap<K, Vec<Arc<ShardRecord>>>;

/// Group records by the key returned by `key`.
///
/// Groups are ordered by the first appearance of their key and records within a group keep
/// their relative input order. Every input record ends up in exactly one group.
pub fn group_by<T, K, F>(records: &[T], mut key: F) -> IndexMap<K, Vec<T>>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for record in records {
        groups
            .entry(key(record))
            .or_insert_with(Vec::new)
            .push(record.clone());
    }
    groups
}

/// Node grouping key for a shard, substituting [`UNASSIGNED_NODE`] when no node is set.
pub(crate) fn node_key(shard: &ShardRecord) -> String {
    match &shard.node {
        Some(node) => node.clone(),
        None => UNASSIGNED_NODE.to_string(),
    }
}
