//! Format [`IndexSummary`] lists.
use comfy_table::Table;

use shardview_view::IndexSummary;

use crate::utils::human_bytes;
use crate::utils::yes_or_no;

/// Format a list of [`IndexSummary`] objects into a table.
pub fn table(summaries: &[IndexSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "INDEX",
        "PRIMARIES",
        "REPLICAS",
        "UNASSIGNED",
        "DOCS",
        "STORE",
        "ISSUES",
    ]);
    for summary in summaries {
        table.add_row(vec![
            summary.name.clone(),
            summary.primary_count.to_string(),
            summary.replica_count.to_string(),
            summary.unassigned_count.to_string(),
            summary.docs.to_string(),
            human_bytes(summary.store_bytes),
            yes_or_no(summary.has_issues).to_string(),
        ]);
    }
    table
}
