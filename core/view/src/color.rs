//! Watermark based usage coloring.
use serde::Deserialize;
use serde::Serialize;

use shardview_models::WatermarkThresholds;

/// Severity color of a usage percentage compared to watermark thresholds.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatermarkColor {
    /// Usage is below the low watermark.
    Blue,

    /// Usage reached the low watermark.
    Yellow,

    /// Usage reached the high watermark.
    Orange,

    /// Usage reached the flood stage watermark.
    Red,
}

impl WatermarkColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl std::fmt::Display for WatermarkColor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Color a usage percentage based on watermark thresholds.
///
/// Bands include their lower bound, so a value equal to a threshold gets the more severe color.
/// Thresholds are checked from flood stage down to low exactly as given: out of order
/// thresholds still produce a deterministic (if surprising) color.
pub fn color_for(percent: f64, thresholds: &WatermarkThresholds) -> WatermarkColor {
    if percent >= thresholds.flood_stage {
        WatermarkColor::Red
    } else if percent >= thresholds.high {
        WatermarkColor::Orange
    } else if percent >= thresholds.low {
        WatermarkColor::Yellow
    } else {
        WatermarkColor::Blue
    }
}
