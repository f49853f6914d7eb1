//! Panel transition timing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// How long a panel change takes before input is accepted again, in
    /// milliseconds (valid range: 1-10000). Should match the CSS transition
    /// on the viewport.
    pub duration_ms: u32,
}

impl TransitionConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { duration_ms: 520 }
    }
}
