//! Element ids, selectors and CSS classes the web binding looks up.

use serde::{Deserialize, Serialize};
use swipenav_common::Side;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DomConfig {
    /// Id of the container that receives touch input and the transform.
    pub viewport_id: String,
    /// Class present on the viewport while a transition runs.
    pub animating_class: String,
    /// Class toggled on an indicator when its direction is available.
    pub indicator_active_class: String,
    pub indicators: IndicatorSelectors,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            viewport_id: "viewport".into(),
            animating_class: "is-animating".into(),
            indicator_active_class: "is-active".into(),
            indicators: IndicatorSelectors::default(),
        }
    }
}

/// CSS selectors for the four direction markers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSelectors {
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
}

impl IndicatorSelectors {
    pub fn for_side(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::Up => &self.up,
            Side::Down => &self.down,
        }
    }
}

impl Default for IndicatorSelectors {
    fn default() -> Self {
        Self {
            left: ".dot-left".into(),
            right: ".dot-right".into(),
            up: ".dot-up".into(),
            down: ".dot-down".into(),
        }
    }
}
