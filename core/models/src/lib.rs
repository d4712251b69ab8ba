//! Data models describing the shards and nodes of an Elasticsearch-like cluster.
//!
//! The records in this crate are the inputs of the shard allocation view:
//!
//! - [`ShardRecord`]s describe individual shard copies and where they are allocated.
//! - [`NodeRecord`]s describe cluster nodes along with their heap and disk usage.
//! - [`WatermarkThresholds`] hold the disk usage percentages that drive allocation decisions.
//!
//! The [`cat`] module decodes rows returned by the `_cat` APIs into these records.
pub mod cat;

mod errors;
mod node;
mod shard;
mod watermark;

pub use self::errors::DecodeError;
pub use self::node::NodeRecord;
pub use self::shard::ShardRecord;
pub use self::shard::ShardState;
pub use self::watermark::WatermarkThresholds;
