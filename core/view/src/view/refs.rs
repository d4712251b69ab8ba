use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use shardview_models::ShardRecord;

/// Shard attributes to serialise a shard reference from a grouped view.
#[derive(Serialize)]
pub struct ShardRef<'view> {
    pub index: &'view str,
    pub shard_number: u32,
    pub primary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<&'view str>,
}

impl<'view> From<&'view ShardRecord> for ShardRef<'view> {
    fn from(shard: &'view ShardRecord) -> ShardRef<'view> {
        ShardRef {
            index: &shard.index,
            shard_number: shard.shard_number,
            primary: shard.primary,
            node: shard.node.as_deref(),
        }
    }
}

/// Convert a list of shards into references.
pub fn list(shards: &[Arc<ShardRecord>]) -> Vec<ShardRef> {
    shards.iter().map(|shard| shard.as_ref().into()).collect()
}

/// Convert grouped shards into references, preserving group order.
pub fn groups<K>(groups: &IndexMap<K, Vec<Arc<ShardRecord>>>) -> IndexMap<&K, Vec<ShardRef>>
where
    K: Hash + Eq,
{
    groups.iter().map(|(key, shards)| (key, list(shards))).collect()
}
