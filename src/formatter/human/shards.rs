//! Format shard lists and state counts.
use std::sync::Arc;

use comfy_table::Table;

use shardview_models::ShardRecord;
use shardview_models::ShardState;
use shardview_view::ShardViewModel;

/// Format unassigned shards, with the reason when known.
pub fn unassigned(shards: &[Arc<ShardRecord>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["INDEX", "SHARD", "PRIREP", "REASON"]);
    for shard in shards {
        let prirep = if shard.primary { "p" } else { "r" };
        table.add_row(vec![
            shard.index.clone(),
            shard.shard_number.to_string(),
            prirep.to_string(),
            shard.unassigned_reason.clone().unwrap_or_default(),
        ]);
    }
    table
}

/// Format the number of shards in each state.
///
/// All states are listed, in lifecycle order, even when no shard is in them.
pub fn states(view: &ShardViewModel) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["STATE", "SHARDS"]);
    for state in ShardState::all() {
        let count = view.by_state.get(&state).map(Vec::len).unwrap_or(0);
        table.add_row(vec![state.to_string(), count.to_string()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shardview_models::ShardRecord;
    use shardview_models::ShardState;

    #[test]
    fn render_unassigned_reason() {
        let mut shard = ShardRecord::new("a", 3, false, ShardState::Unassigned);
        shard.unassigned_reason = Some("NODE_LEFT".into());
        let output = super::unassigned(&[Arc::new(shard)]).to_string();
        assert!(output.contains("NODE_LEFT"));
        assert!(output.contains("REASON"));
    }
}
