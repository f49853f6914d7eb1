//! Video element bindings.

use serde::{Deserialize, Serialize};
use swipenav_common::PanelCoord;

/// Binds one video element to the panel where it autoplays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaBindingConfig {
    /// DOM id of the `<video>` element.
    pub element_id: String,
    /// Panel on which the video plays.
    pub panel: PanelCoord,
    /// Whether the element is muted when bound. Browsers only allow
    /// unprompted playback of muted media.
    #[serde(default = "default_muted")]
    pub muted: bool,
}

fn default_muted() -> bool {
    true
}

impl MediaBindingConfig {
    pub fn new(element_id: impl Into<String>, panel: PanelCoord) -> Self {
        Self {
            element_id: element_id.into(),
            panel,
            muted: true,
        }
    }
}

/// The stock bindings: two feature videos below home, one staff video above.
pub fn default_media_bindings() -> Vec<MediaBindingConfig> {
    vec![
        MediaBindingConfig::new("feature-video", PanelCoord::new(0, 1)),
        MediaBindingConfig::new("feature-video-2", PanelCoord::new(0, 2)),
        MediaBindingConfig::new("staff-video", PanelCoord::new(0, -1)),
    ]
}
