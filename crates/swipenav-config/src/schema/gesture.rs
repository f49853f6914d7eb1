//! Swipe recognition thresholds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum travel along the dominant axis, in CSS pixels (valid range: 0-500).
    pub min_distance_px: f64,
    /// How much the dominant axis must exceed the other one (valid range: 1.0-10.0).
    pub axis_ratio: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_distance_px: 40.0,
            axis_ratio: 1.2,
        }
    }
}
