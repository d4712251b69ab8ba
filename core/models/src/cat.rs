//! Rows returned by the `_cat` APIs in JSON format.
//!
//! The `_cat` APIs report every column as a string, or `null` when a value does not apply.
//! Rows are expected to be requested with `bytes=b` so sizes are plain byte counts:
//!
//! - `GET _cat/shards?format=json&bytes=b`
//! - `GET _cat/nodes?format=json&bytes=b&h=name,ip,node.role,master,heap.current,heap.max,disk.used,disk.total`
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::DecodeError;
use crate::NodeRecord;
use crate::ShardRecord;
use crate::ShardState;

/// Marker separating source and target node of relocating shards.
const RELOCATION_ARROW: &str = " -> ";

/// A row of the `_cat/shards` API.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CatShard {
    pub index: String,

    #[serde(default)]
    pub shard: Option<String>,

    /// `p` for primaries, `r` for replicas.
    #[serde(default)]
    pub prirep: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub docs: Option<String>,

    #[serde(default)]
    pub store: Option<String>,

    #[serde(default)]
    pub ip: Option<String>,

    /// Node name, or `source -> ip id target` for relocating shards.
    #[serde(default)]
    pub node: Option<String>,

    #[serde(default, rename = "unassigned.reason")]
    pub unassigned_reason: Option<String>,
}

impl TryFrom<CatShard> for ShardRecord {
    type Error = DecodeError;

    fn try_from(row: CatShard) -> Result<Self, Self::Error> {
        let shard_number = row.shard.as_deref().unwrap_or_default();
        let shard_number = match shard_number.trim().parse::<u32>() {
            Ok(number) => number,
            Err(_) => return Err(DecodeError::invalid_shard_number(row.index, shard_number)),
        };
        let state = row.state.as_deref().unwrap_or_default();
        let state = match ShardState::parse(state.trim()) {
            Some(state) => state,
            None => return Err(DecodeError::unknown_state(row.index, shard_number, state)),
        };

        let primary = matches!(row.prirep.as_deref().map(str::trim), Some("p"));
        let (node, relocating_node) = split_node(row.node.as_deref());
        let unassigned_reason = row
            .unassigned_reason
            .filter(|reason| !reason.trim().is_empty());
        Ok(ShardRecord {
            index: row.index,
            shard_number,
            primary,
            state,
            node,
            docs: parse_count(row.docs.as_deref()),
            store_bytes: parse_count(row.store.as_deref()),
            relocating_node,
            unassigned_reason,
        })
    }
}

/// A row of the `_cat/nodes` API.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CatNode {
    pub name: String,

    #[serde(default)]
    pub ip: Option<String>,

    /// One letter per node role, or `-` for coordinating only nodes.
    #[serde(default, rename = "node.role")]
    pub node_role: Option<String>,

    /// `*` for the elected master, `-` otherwise.
    #[serde(default)]
    pub master: Option<String>,

    #[serde(default, rename = "heap.current")]
    pub heap_current: Option<String>,

    #[serde(default, rename = "heap.max")]
    pub heap_max: Option<String>,

    #[serde(default, rename = "disk.used")]
    pub disk_used: Option<String>,

    #[serde(default, rename = "disk.total")]
    pub disk_total: Option<String>,
}

impl From<CatNode> for NodeRecord {
    fn from(row: CatNode) -> Self {
        let roles = row.node_role.as_deref().map(role_names).unwrap_or_default();
        let is_master = matches!(row.master.as_deref().map(str::trim), Some("*"));
        NodeRecord {
            name: row.name,
            ip: row.ip.unwrap_or_default(),
            roles,
            is_master,
            heap_used_bytes: parse_count(row.heap_current.as_deref()).unwrap_or(0),
            heap_max_bytes: parse_count(row.heap_max.as_deref()).unwrap_or(0),
            disk_used_bytes: parse_count(row.disk_used.as_deref()).unwrap_or(0),
            disk_total_bytes: parse_count(row.disk_total.as_deref()).unwrap_or(0),
        }
    }
}

/// Decode a full `_cat/shards` response, failing on the first invalid row.
pub fn decode_shards<I>(rows: I) -> Result<Vec<ShardRecord>, DecodeError>
where
    I: IntoIterator<Item = CatShard>,
{
    rows.into_iter().map(ShardRecord::try_from).collect()
}

/// Decode a full `_cat/nodes` response.
pub fn decode_nodes<I>(rows: I) -> Vec<NodeRecord>
where
    I: IntoIterator<Item = CatNode>,
{
    rows.into_iter().map(NodeRecord::from).collect()
}

/// Expand the `node.role` abbreviations into role names.
///
/// Unknown abbreviations are kept as they are so no information is lost.
pub fn role_names(letters: &str) -> BTreeSet<String> {
    let letters = letters.trim();
    if letters == "-" {
        return BTreeSet::new();
    }
    letters
        .chars()
        .map(|letter| {
            let name = match letter {
                'c' => "data_cold",
                'd' => "data",
                'f' => "data_frozen",
                'h' => "data_hot",
                'i' => "ingest",
                'l' => "ml",
                'm' => "master",
                'r' => "remote_cluster_client",
                's' => "data_content",
                't' => "transform",
                'v' => "voting_only",
                'w' => "data_warm",
                other => return other.to_string(),
            };
            name.to_string()
        })
        .collect()
}

fn parse_count(value: Option<&str>) -> Option<u64> {
    value.and_then(|value| value.trim().parse::<u64>().ok())
}

/// Split the `node` column into the allocated node and the relocation target, if any.
fn split_node(node: Option<&str>) -> (Option<String>, Option<String>) {
    let node = match node.map(str::trim) {
        None | Some("") => return (None, None),
        Some(node) => node,
    };
    match node.split_once(RELOCATION_ARROW) {
        None => (Some(node.to_string()), None),
        Some((source, target)) => {
            // The target is rendered as `ip id name` and names may contain spaces.
            let target = target.trim().splitn(3, ' ').nth(2).map(str::to_string);
            (Some(source.trim().to_string()), target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CatNode;
    use super::CatShard;
    use crate::DecodeError;
    use crate::NodeRecord;
    use crate::ShardRecord;
    use crate::ShardState;

    fn started_row() -> CatShard {
        serde_json::from_str(
            r#"{"index":"logs-2024","shard":"3","prirep":"p","state":"STARTED",
               "docs":"1200","store":"52340","ip":"10.0.0.1","node":"es-data-1"}"#,
        )
        .unwrap()
    }

    #[test]
    fn decode_started_shard() {
        let shard = ShardRecord::try_from(started_row()).unwrap();
        assert_eq!(shard.index, "logs-2024");
        assert_eq!(shard.shard_number, 3);
        assert!(shard.primary);
        assert_eq!(shard.state, ShardState::Started);
        assert_eq!(shard.node.as_deref(), Some("es-data-1"));
        assert_eq!(shard.docs, Some(1200));
        assert_eq!(shard.store_bytes, Some(52340));
        assert_eq!(shard.relocating_node, None);
    }

    #[test]
    fn decode_unassigned_shard() {
        let row: CatShard = serde_json::from_str(
            r#"{"index":"logs","shard":"0","prirep":"r","state":"UNASSIGNED",
               "docs":null,"store":null,"ip":null,"node":null,"unassigned.reason":"NODE_LEFT"}"#,
        )
        .unwrap();
        let shard = ShardRecord::try_from(row).unwrap();
        assert!(!shard.primary);
        assert_eq!(shard.node, None);
        assert_eq!(shard.docs, None);
        assert_eq!(shard.unassigned_reason.as_deref(), Some("NODE_LEFT"));
    }

    #[test]
    fn decode_relocating_shard() {
        let row = CatShard {
            state: Some("RELOCATING".into()),
            node: Some("es-data-1 -> 10.0.0.2 Xk3rTQ es data 2".into()),
            ..started_row()
        };
        let shard = ShardRecord::try_from(row).unwrap();
        assert_eq!(shard.node.as_deref(), Some("es-data-1"));
        assert_eq!(shard.relocating_node.as_deref(), Some("es data 2"));
    }

    #[test]
    fn human_sizes_are_absent() {
        let row = CatShard {
            store: Some("51.1kb".into()),
            ..started_row()
        };
        let shard = ShardRecord::try_from(row).unwrap();
        assert_eq!(shard.store_bytes, None);
    }

    #[test]
    fn invalid_shard_number() {
        let row = CatShard {
            shard: Some("three".into()),
            ..started_row()
        };
        match ShardRecord::try_from(row) {
            Err(DecodeError::InvalidShardNumber(index, value)) => {
                assert_eq!(index, "logs-2024");
                assert_eq!(value, "three");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn unknown_state() {
        let row = CatShard {
            state: Some("BROKEN".into()),
            ..started_row()
        };
        match ShardRecord::try_from(row) {
            Err(DecodeError::UnknownState(index, shard, state)) => {
                assert_eq!(index, "logs-2024");
                assert_eq!(shard, 3);
                assert_eq!(state, "BROKEN");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn decode_node() {
        let row: CatNode = serde_json::from_str(
            r#"{"name":"es-master-1","ip":"10.0.0.9","node.role":"dim","master":"*",
               "heap.current":"512","heap.max":"1024","disk.used":"10","disk.total":"100"}"#,
        )
        .unwrap();
        let node = NodeRecord::from(row);
        assert_eq!(node.name, "es-master-1");
        assert!(node.is_master);
        assert!(node.has_role("data"));
        assert!(node.has_role("ingest"));
        assert!(node.has_role("master"));
        assert_eq!(node.heap_used_bytes, 512);
        assert_eq!(node.heap_max_bytes, 1024);
        assert_eq!(node.disk_total_bytes, 100);
    }

    #[test]
    fn decode_coordinating_node_with_missing_metrics() {
        let row: CatNode =
            serde_json::from_str(r#"{"name":"coord","node.role":"-","master":"-"}"#).unwrap();
        let node = NodeRecord::from(row);
        assert!(node.roles.is_empty());
        assert!(!node.is_master);
        assert_eq!(node.heap_max_bytes, 0);
        assert_eq!(node.ip, "");
    }

    #[test]
    fn unknown_role_letters_are_kept() {
        let roles = super::role_names("dz");
        assert!(roles.contains("data"));
        assert!(roles.contains("z"));
    }
}
