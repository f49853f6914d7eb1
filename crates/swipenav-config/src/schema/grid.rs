//! Panel grid configuration.

use serde::{Deserialize, Serialize};
use swipenav_common::PanelCoord;

/// The set of reachable panels, as `[x, y]` pairs relative to home.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Reachable panels. Must include `[0, 0]`.
    pub panels: Vec<PanelCoord>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            panels: vec![
                PanelCoord::new(0, 0),
                PanelCoord::new(0, -1),
                PanelCoord::new(0, -2),
                PanelCoord::new(1, 0),
                PanelCoord::new(2, 0),
                PanelCoord::new(-1, 0),
                PanelCoord::new(-2, 0),
                PanelCoord::new(0, 1),
                PanelCoord::new(0, 2),
            ],
        }
    }
}
