//! Format [`NodeAllocation`] lists.
use comfy_table::Cell;
use comfy_table::Color;
use comfy_table::Table;

use shardview_models::WatermarkThresholds;
use shardview_view::NodeAllocation;
use shardview_view::WatermarkColor;

use crate::utils::human_bytes;
use crate::utils::yes_or_no;

/// Placeholder for information about nodes missing from the node list.
const UNKNOWN: &str = "-";

/// Format a list of [`NodeAllocation`] objects into a table.
///
/// Heap and disk usage cells are colored according to the watermark thresholds.
pub fn table(allocations: &[NodeAllocation], thresholds: &WatermarkThresholds) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "NODE",
        "IP",
        "ROLES",
        "MASTER",
        "PRIMARIES",
        "REPLICAS",
        "TOTAL",
        "HEAP",
        "DISK",
    ]);
    for allocation in allocations {
        let mut row = vec![Cell::new(&allocation.name)];
        match &allocation.metrics {
            None => {
                row.push(Cell::new(UNKNOWN));
                row.push(Cell::new(UNKNOWN));
                row.push(Cell::new(UNKNOWN));
            }
            Some(metrics) => {
                let roles: Vec<&str> = metrics.roles.iter().map(String::as_str).collect();
                row.push(Cell::new(&metrics.ip));
                row.push(Cell::new(roles.join(",")));
                row.push(Cell::new(yes_or_no(metrics.is_master)));
            }
        }
        row.push(Cell::new(allocation.primary_count));
        row.push(Cell::new(allocation.replica_count));
        row.push(Cell::new(allocation.total_count));
        row.push(usage(
            allocation.metrics.as_ref().map(|metrics| {
                (metrics.heap_used_bytes, metrics.heap_max_bytes, metrics.heap_percent)
            }),
            allocation.heap_color(thresholds),
        ));
        row.push(usage(
            allocation.metrics.as_ref().map(|metrics| {
                (metrics.disk_used_bytes, metrics.disk_total_bytes, metrics.disk_percent)
            }),
            allocation.disk_color(thresholds),
        ));
        table.add_row(row);
    }
    table
}

/// Render a `(used, max, percent)` usage triple as a colored cell.
fn usage(usage: Option<(u64, u64, u32)>, color: Option<WatermarkColor>) -> Cell {
    let (used, max, percent) = match usage {
        None => return Cell::new(UNKNOWN),
        Some(usage) => usage,
    };
    let cell = Cell::new(format!(
        "{}% ({} / {})",
        percent,
        human_bytes(used),
        human_bytes(max)
    ));
    match color {
        None => cell,
        Some(color) => cell.fg(term_color(color)),
    }
}

/// Map watermark colors onto terminal colors.
fn term_color(color: WatermarkColor) -> Color {
    match color {
        WatermarkColor::Blue => Color::Blue,
        WatermarkColor::Yellow => Color::Yellow,
        WatermarkColor::Orange => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        WatermarkColor::Red => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use shardview_models::NodeRecord;
    use shardview_models::ShardRecord;
    use shardview_models::ShardState;
    use shardview_models::WatermarkThresholds;

    #[test]
    fn render_known_and_unknown_nodes() {
        let node = NodeRecord {
            ip: "10.0.0.1".into(),
            roles: ["data", "master"].into_iter().map(String::from).collect(),
            is_master: true,
            heap_used_bytes: 512,
            heap_max_bytes: 1024,
            ..NodeRecord::new("n1")
        };
        let shards = vec![
            ShardRecord::new("a", 0, true, ShardState::Started).on_node("n1"),
            ShardRecord::new("a", 0, false, ShardState::Started).on_node("n2"),
        ];
        let view = shardview_view::build_shard_view_model(shards, vec![node]);
        let output = super::table(&view.node_allocations(), &WatermarkThresholds::default())
            .to_string();
        assert!(output.contains("10.0.0.1"));
        assert!(output.contains("data,master"));
        assert!(output.contains("50% (512b / 1.0kb)"));
        assert!(output.contains("n2"));
    }
}
