//! Synthetic, render-ready views of shard allocation across a cluster.
//!
//! A [`ShardViewModel`] is derived from a flat list of [`ShardRecord`]s and [`NodeRecord`]s.
//! It groups shards by state, index and node and exposes the projections an operator needs:
//!
//! - The filtered and sorted list of index names ([`derive_index_list`]).
//! - Per-node allocation summaries joined with heap and disk usage ([`NodeAllocation`]).
//! - The set of unassigned shards ([`ShardViewModel::unassigned`]).
//!
//! Views are pure functions of their inputs: they are never updated in place,
//! a new view is built whenever the inputs change.
//! Malformed inputs are coerced into safe defaults so building a view never fails.
//!
//! [`ShardRecord`]: shardview_models::ShardRecord
//! [`NodeRecord`]: shardview_models::NodeRecord
use shardview_models::NodeRecord;
use shardview_models::ShardRecord;

mod collate;
mod color;
mod group;
mod indices;
mod nodes;
mod view;
mod watermarks;

pub use self::collate::locale_compare;
pub use self::color::color_for;
pub use self::color::WatermarkColor;
pub use self::group::group_by;
pub use self::group::ShardGroups;
pub use self::group::UNASSIGNED_NODE;
pub use self::indices::derive_index_list;
pub use self::indices::IndexQuery;
pub use self::indices::IndexSummary;
pub use self::nodes::node_allocations;
pub use self::nodes::percent;
pub use self::nodes::NodeAllocation;
pub use self::nodes::NodeMetrics;
pub use self::view::ShardViewBuilder;
pub use self::view::ShardViewModel;
pub use self::watermarks::extract_watermarks;
pub use self::watermarks::resolve_watermarks;
pub use self::watermarks::ResolvedWatermark;
pub use self::watermarks::ResolvedWatermarks;
pub use self::watermarks::WatermarkSource;

/// Build a [`ShardViewModel`] with the default index list projection.
pub fn build_shard_view_model<S, N>(shards: S, nodes: N) -> ShardViewModel
where
    S: IntoIterator<Item = ShardRecord>,
    N: IntoIterator<Item = NodeRecord>,
{
    let mut builder = ShardViewModel::builder();
    builder.shards(shards).nodes(nodes);
    builder.build()
}
