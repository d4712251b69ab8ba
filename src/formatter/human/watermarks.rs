//! Format [`ResolvedWatermarks`].
use comfy_table::Table;

use shardview_view::ResolvedWatermarks;

/// Format resolved watermarks along with the section they came from.
pub fn table(watermarks: &ResolvedWatermarks) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["WATERMARK", "PERCENT", "SOURCE", "REJECTED"]);
    for (name, watermark) in watermarks.iter() {
        table.add_row(vec![
            name.to_string(),
            format!("{}%", watermark.percent),
            watermark.source.to_string(),
            watermark.rejected.clone().unwrap_or_default(),
        ]);
    }
    table
}
