//! What the binding looks for in the page, resolved from configuration.

use swipenav_common::{PanelCoord, Side};
use swipenav_config::SwipeNavConfig;

/// A video element to bind, keyed by its position in the config list.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaTarget {
    pub index: usize,
    pub element_id: String,
    pub panel: PanelCoord,
    pub muted: bool,
}

/// Element ids, selectors and class names for one mount.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementPlan {
    /// Required. Without it nothing is mounted.
    pub viewport_id: String,
    pub animating_class: String,
    pub indicator_active_class: String,
    /// Indicator selector per side, in [`Side::ALL`] order.
    pub indicators: Vec<(Side, String)>,
    pub media: Vec<MediaTarget>,
}

impl ElementPlan {
    pub fn from_config(config: &SwipeNavConfig) -> Self {
        let dom = &config.dom;
        Self {
            viewport_id: dom.viewport_id.clone(),
            animating_class: dom.animating_class.clone(),
            indicator_active_class: dom.indicator_active_class.clone(),
            indicators: Side::ALL
                .iter()
                .map(|&side| (side, dom.indicators.for_side(side).to_string()))
                .collect(),
            media: config
                .media
                .iter()
                .enumerate()
                .map(|(index, m)| MediaTarget {
                    index,
                    element_id: m.element_id.clone(),
                    panel: m.panel,
                    muted: m.muted,
                })
                .collect(),
        }
    }
}
