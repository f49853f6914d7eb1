//! Configuration schema types for the swipe navigator.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the stock page: a
//! nine-panel plus layout, three bound videos and the standard DOM ids.

mod dom;
mod gesture;
mod grid;
mod logging;
mod media;
mod transition;

pub use dom::*;
pub use gesture::*;
pub use grid::*;
pub use logging::*;
pub use media::*;
pub use transition::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change. Note that `[[media]]` entries
/// replace the default bindings as a whole rather than merging with them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeNavConfig {
    pub grid: GridConfig,
    pub gesture: GestureConfig,
    pub transition: TransitionConfig,
    pub media: Vec<MediaBindingConfig>,
    pub dom: DomConfig,
    pub logging: LoggingConfig,
}

impl Default for SwipeNavConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            gesture: GestureConfig::default(),
            transition: TransitionConfig::default(),
            media: default_media_bindings(),
            dom: DomConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
