use shardview_models::NodeRecord;
use shardview_models::ShardRecord;
use shardview_models::ShardState;
use shardview_models::WatermarkThresholds;

use super::fixtures;
use crate::build_shard_view_model;
use crate::WatermarkColor;

#[test]
fn allocations_skip_unassigned_sentinel() {
    let view = build_shard_view_model(
        fixtures::cluster_logs::shards(),
        fixtures::cluster_logs::nodes(),
    );
    let allocations = view.node_allocations();
    let names: Vec<&str> = allocations.iter().map(|node| node.name.as_str()).collect();
    // Nodes without shards are not listed.
    assert_eq!(names, vec!["hot-1", "hot-2", "gone-3"]);
}

#[test]
fn allocations_count_primaries_and_replicas() {
    let view = build_shard_view_model(
        fixtures::cluster_logs::shards(),
        fixtures::cluster_logs::nodes(),
    );
    let allocations = view.node_allocations();
    let counts: Vec<(usize, usize, usize)> = allocations
        .iter()
        .map(|node| (node.primary_count, node.replica_count, node.total_count))
        .collect();
    assert_eq!(counts, vec![(3, 1, 4), (1, 2, 3), (1, 0, 1)]);
}

#[test]
fn allocations_join_node_metrics() {
    let view = build_shard_view_model(
        fixtures::cluster_logs::shards(),
        fixtures::cluster_logs::nodes(),
    );
    let allocations = view.node_allocations();

    let hot_1 = allocations[0].metrics.as_ref().expect("hot-1 metrics missing");
    assert_eq!(hot_1.ip, "10.0.0.1");
    assert!(hot_1.is_master);
    assert!(hot_1.roles.contains("master"));
    assert_eq!(hot_1.heap_percent, 60);
    assert_eq!(hot_1.disk_percent, 87);

    let hot_2 = allocations[1].metrics.as_ref().expect("hot-2 metrics missing");
    assert!(!hot_2.is_master);
    assert_eq!(hot_2.heap_percent, 20);
    assert_eq!(hot_2.disk_percent, 96);

    // Shards reference a node missing from the node list.
    assert!(allocations[2].metrics.is_none());
}

#[test]
fn allocations_colors() {
    let view = build_shard_view_model(
        fixtures::cluster_logs::shards(),
        fixtures::cluster_logs::nodes(),
    );
    let thresholds = WatermarkThresholds::default();
    let allocations = view.node_allocations();
    assert_eq!(
        allocations[0].disk_color(&thresholds),
        Some(WatermarkColor::Yellow)
    );
    assert_eq!(
        allocations[0].heap_color(&thresholds),
        Some(WatermarkColor::Blue)
    );
    assert_eq!(
        allocations[1].disk_color(&thresholds),
        Some(WatermarkColor::Red)
    );
    assert_eq!(allocations[2].disk_color(&thresholds), None);
}

#[test]
fn zero_capacity_node() {
    let node = NodeRecord {
        heap_used_bytes: 512,
        heap_max_bytes: 0,
        disk_used_bytes: 0,
        disk_total_bytes: 0,
        ..NodeRecord::new("n1")
    };
    let shard = ShardRecord::new("a", 0, true, ShardState::Started).on_node("n1");
    let view = build_shard_view_model(vec![shard], vec![node]);
    let allocations = view.node_allocations();
    let metrics = allocations[0].metrics.as_ref().unwrap();
    assert_eq!(metrics.heap_percent, 0);
    assert_eq!(metrics.disk_percent, 0);
    assert_eq!(
        allocations[0].heap_color(&WatermarkThresholds::default()),
        Some(WatermarkColor::Blue)
    );
}
