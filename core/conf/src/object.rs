//! Data object storing shard view configuration.
use serde::Deserialize;
use serde::Serialize;

use shardview_models::WatermarkThresholds;

/// Global configuration for the shard view tools.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Conf {
    /// Default projection of the index list.
    #[serde(default)]
    pub indices: IndicesConf,

    /// Watermark thresholds used when cluster settings do not provide a usable value.
    #[serde(default)]
    pub watermarks: WatermarkThresholds,
}

/// Default projection of the index list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct IndicesConf {
    /// List only indices with unassigned, relocating or initialising shards.
    #[serde(default)]
    pub show_only_affected: bool,

    /// Sort index names in ascending order (descending otherwise).
    #[serde(default = "IndicesConf::default_sort_ascending")]
    pub sort_ascending: bool,
}

impl IndicesConf {
    fn default_sort_ascending() -> bool {
        true
    }
}

impl Default for IndicesConf {
    fn default() -> Self {
        IndicesConf {
            show_only_affected: false,
            sort_ascending: Self::default_sort_ascending(),
        }
    }
}
