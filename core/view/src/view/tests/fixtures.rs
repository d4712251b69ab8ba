use shardview_models::NodeRecord;
use shardview_models::ShardRecord;
use shardview_models::ShardState;

/// Fixtures for a small cluster with two nodes and a shard out of place.
pub mod cluster_small {
    use super::*;

    pub fn shards() -> Vec<ShardRecord> {
        vec![
            ShardRecord::new("a", 0, true, ShardState::Started).on_node("n1"),
            ShardRecord::new("a", 1, false, ShardState::Unassigned),
            ShardRecord::new("b", 0, true, ShardState::Relocating).on_node("n2"),
        ]
    }
}

/// Fixtures for a fictional logging cluster.
pub mod cluster_logs {
    use super::*;

    pub fn node_hot_1() -> NodeRecord {
        NodeRecord {
            name: "hot-1".into(),
            ip: "10.0.0.1".into(),
            roles: ["data_hot", "ingest", "master"]
                .into_iter()
                .map(String::from)
                .collect(),
            is_master: true,
            heap_used_bytes: 600,
            heap_max_bytes: 1000,
            disk_used_bytes: 870,
            disk_total_bytes: 1000,
        }
    }

    pub fn node_hot_2() -> NodeRecord {
        NodeRecord {
            name: "hot-2".into(),
            ip: "10.0.0.2".into(),
            roles: ["data_hot", "ingest"].into_iter().map(String::from).collect(),
            is_master: false,
            heap_used_bytes: 200,
            heap_max_bytes: 1000,
            disk_used_bytes: 960,
            disk_total_bytes: 1000,
        }
    }

    pub fn node_coordinating() -> NodeRecord {
        NodeRecord {
            ip: "10.0.0.3".into(),
            ..NodeRecord::new("coord-1")
        }
    }

    pub fn nodes() -> Vec<NodeRecord> {
        vec![node_hot_1(), node_hot_2(), node_coordinating()]
    }

    fn shard(
        index: &str,
        number: u32,
        primary: bool,
        state: ShardState,
        node: Option<&str>,
    ) -> ShardRecord {
        let mut shard = ShardRecord::new(index, number, primary, state);
        shard.node = node.map(String::from);
        shard.docs = node.map(|_| 100);
        shard.store_bytes = node.map(|_| 4096);
        shard
    }

    pub fn shards() -> Vec<ShardRecord> {
        vec![
            shard("Metrics-2024", 0, true, ShardState::Started, Some("hot-1")),
            shard("Metrics-2024", 0, false, ShardState::Started, Some("hot-2")),
            shard("logs-2024.05", 0, true, ShardState::Started, Some("hot-2")),
            shard("logs-2024.05", 0, false, ShardState::Initializing, Some("hot-1")),
            shard("logs-2024.06", 0, true, ShardState::Started, Some("hot-1")),
            shard("logs-2024.06", 0, false, ShardState::Unassigned, None),
            shard(".kibana", 0, true, ShardState::Started, Some("hot-1")),
            shard(".kibana", 0, false, ShardState::Started, Some("hot-2")),
            shard("audit", 0, true, ShardState::Started, Some("gone-3")),
            // Reports started without a node.
            shard("audit", 0, false, ShardState::Started, None),
        ]
    }
}
