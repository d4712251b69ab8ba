//! Disk watermark thresholds.
use serde::Deserialize;
use serde::Serialize;

/// Disk usage percentages at which the cluster changes allocation behaviour.
///
/// Thresholds are expected in the `(0, 100]` range with `low <= high <= flood_stage`.
/// Nothing enforces the ordering: consumers evaluate thresholds as given.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatermarkThresholds {
    /// Shards are no longer allocated to nodes above this usage.
    pub low: f64,

    /// Shards are moved away from nodes above this usage.
    pub high: f64,

    /// Indices with shards on nodes above this usage are made read-only.
    pub flood_stage: f64,
}

impl WatermarkThresholds {
    pub const DEFAULT_LOW: f64 = 85.0;
    pub const DEFAULT_HIGH: f64 = 90.0;
    pub const DEFAULT_FLOOD_STAGE: f64 = 95.0;
}

impl Default for WatermarkThresholds {
    fn default() -> Self {
        WatermarkThresholds {
            low: Self::DEFAULT_LOW,
            high: Self::DEFAULT_HIGH,
            flood_stage: Self::DEFAULT_FLOOD_STAGE,
        }
    }
}
