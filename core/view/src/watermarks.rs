//! Resolve disk watermark thresholds from cluster settings.
//!
//! Cluster settings responses (`GET _cluster/settings?include_defaults=true`) are split in
//! `transient`, `persistent` and `defaults` sections. Each threshold is looked up in the
//! sections in that order and the first section that sets it decides its value.
//!
//! Only percentages can be compared with usage so values are converted as follows:
//!
//! - `"85%"` is a percentage.
//! - `"0.85"` is a ratio and becomes `85`.
//! - Anything else (including byte sizes like `"10gb"`) falls back to the default value.
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as Json;

use shardview_models::WatermarkThresholds;

/// Settings prefix shared by all disk watermark settings.
const WATERMARK_SETTING: &str = "cluster.routing.allocation.disk.watermark";

/// Settings sections to look thresholds up in, by priority.
const SECTIONS: [(&str, WatermarkSource); 3] = [
    ("transient", WatermarkSource::Transient),
    ("persistent", WatermarkSource::Persistent),
    ("defaults", WatermarkSource::Defaults),
];

/// Where the value of a resolved watermark came from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatermarkSource {
    Transient,
    Persistent,
    Defaults,

    /// No usable setting was found and the configured default was used.
    Fallback,
}

impl std::fmt::Display for WatermarkSource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Transient => write!(f, "transient"),
            Self::Persistent => write!(f, "persistent"),
            Self::Defaults => write!(f, "defaults"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// A single watermark threshold resolved from cluster settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedWatermark {
    /// Threshold as a usage percentage.
    pub percent: f64,

    /// Section the threshold was taken from.
    pub source: WatermarkSource,

    /// Setting value that could not be used as a percentage, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
}

impl ResolvedWatermark {
    fn fallback(percent: f64, rejected: Option<String>) -> ResolvedWatermark {
        ResolvedWatermark {
            percent,
            source: WatermarkSource::Fallback,
            rejected,
        }
    }
}

/// All disk watermark thresholds resolved from cluster settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedWatermarks {
    pub low: ResolvedWatermark,
    pub high: ResolvedWatermark,
    pub flood_stage: ResolvedWatermark,
}

impl ResolvedWatermarks {
    /// Iterate over thresholds along with their setting name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ResolvedWatermark)> {
        [
            ("low", &self.low),
            ("high", &self.high),
            ("flood_stage", &self.flood_stage),
        ]
        .into_iter()
    }

    /// Thresholds as plain percentages.
    pub fn thresholds(&self) -> WatermarkThresholds {
        WatermarkThresholds {
            low: self.low.percent,
            high: self.high.percent,
            flood_stage: self.flood_stage.percent,
        }
    }
}

/// Extract watermark thresholds from cluster settings, falling back to built-in defaults.
pub fn extract_watermarks(settings: &Json) -> WatermarkThresholds {
    resolve_watermarks(settings, &WatermarkThresholds::default()).thresholds()
}

/// Resolve each watermark threshold from cluster settings independently.
///
/// A threshold that is not set in any section, or whose value is not a usable percentage,
/// takes the matching value from `defaults`. Other thresholds are unaffected.
pub fn resolve_watermarks(settings: &Json, defaults: &WatermarkThresholds) -> ResolvedWatermarks {
    ResolvedWatermarks {
        low: resolve(settings, "low", defaults.low),
        high: resolve(settings, "high", defaults.high),
        flood_stage: resolve(settings, "flood_stage", defaults.flood_stage),
    }
}

fn resolve(settings: &Json, name: &str, default: f64) -> ResolvedWatermark {
    let path = format!("{}.{}", WATERMARK_SETTING, name);
    let path: Vec<&str> = path.split('.').collect();
    for (section, source) in SECTIONS {
        let value = match settings.get(section).and_then(|section| lookup(section, &path)) {
            None => continue,
            Some(value) => value,
        };

        // The first section setting the threshold decides it, usable or not.
        return match value.as_str().and_then(parse_percent) {
            Some(percent) => ResolvedWatermark {
                percent,
                source,
                rejected: None,
            },
            None => {
                let rejected = match value {
                    Json::String(value) => value.clone(),
                    value => value.to_string(),
                };
                ResolvedWatermark::fallback(default, Some(rejected))
            }
        };
    }
    ResolvedWatermark::fallback(default, None)
}

/// Find a dotted setting in a section that may use nested objects, flat keys or a mix of both.
fn lookup<'a>(object: &'a Json, path: &[&str]) -> Option<&'a Json> {
    let object = object.as_object()?;
    for split in 1..=path.len() {
        let key = path[..split].join(".");
        let value = match object.get(&key) {
            None => continue,
            Some(value) => value,
        };
        let found = if split == path.len() {
            Some(value).filter(|value| !value.is_null())
        } else {
            lookup(value, &path[split..])
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Convert a watermark setting into a usage percentage, if possible.
fn parse_percent(value: &str) -> Option<f64> {
    let value = value.trim();
    let percent = match value.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f64>().ok()?,
        None => {
            let ratio = value.parse::<f64>().ok()?;
            if !(0.0..=1.0).contains(&ratio) {
                return None;
            }
            ratio * 100.0
        }
    };
    if percent.is_finite() && percent > 0.0 && percent <= 100.0 {
        Some(percent)
    } else {
        None
    }
}
