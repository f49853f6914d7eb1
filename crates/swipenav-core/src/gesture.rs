//! Swipe recognition and the swipe-to-panel mapping.
//!
//! A swipe is the straight line between touch-start and touch-end. It counts
//! when one axis clearly dominates (by `axis_ratio`) and travels further than
//! `min_distance`. Both comparisons are strict, so a 40 px swipe with the
//! default thresholds is not recognized.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use swipenav_common::PanelCoord;
use swipenav_config::schema::GestureConfig;

/// A recognized swipe, named after the finger's movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwipeDirection {
    SwipeLeft,
    SwipeRight,
    SwipeUp,
    SwipeDown,
}

impl SwipeDirection {
    /// Grid delta for this swipe. The content follows the finger, so the
    /// panel revealed lies opposite to the swipe.
    pub fn delta(self) -> (i32, i32) {
        match self {
            SwipeDirection::SwipeLeft => (1, 0),
            SwipeDirection::SwipeRight => (-1, 0),
            SwipeDirection::SwipeUp => (0, 1),
            SwipeDirection::SwipeDown => (0, -1),
        }
    }

    /// The panel this swipe asks for when starting at `from`. Membership is
    /// not checked here.
    pub fn target(self, from: PanelCoord) -> PanelCoord {
        let (dx, dy) = self.delta();
        from.offset(dx, dy)
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SwipeDirection::SwipeLeft => "swipe-left",
            SwipeDirection::SwipeRight => "swipe-right",
            SwipeDirection::SwipeUp => "swipe-up",
            SwipeDirection::SwipeDown => "swipe-down",
        };
        f.write_str(s)
    }
}

impl FromStr for SwipeDirection {
    type Err = String;

    /// Accepts `swipe-left` as well as the bare `left`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.strip_prefix("swipe-").unwrap_or(&name) {
            "left" => Ok(SwipeDirection::SwipeLeft),
            "right" => Ok(SwipeDirection::SwipeRight),
            "up" => Ok(SwipeDirection::SwipeUp),
            "down" => Ok(SwipeDirection::SwipeDown),
            _ => Err(format!("unknown swipe direction: {s}")),
        }
    }
}

/// A touch position in client (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where and when a touch began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    pub point: TouchPoint,
    /// Host timestamp in milliseconds.
    pub at_ms: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureClassifier {
    pub min_distance: f64,
    pub axis_ratio: f64,
}

impl GestureClassifier {
    pub fn from_config(config: &GestureConfig) -> Self {
        Self {
            min_distance: config.min_distance_px,
            axis_ratio: config.axis_ratio,
        }
    }

    /// Classify the movement from `start` to `end`, if it is a swipe at all.
    pub fn classify(&self, start: TouchPoint, end: TouchPoint) -> Option<SwipeDirection> {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let (adx, ady) = (dx.abs(), dy.abs());

        if adx > ady * self.axis_ratio && adx > self.min_distance {
            Some(if dx > 0.0 {
                SwipeDirection::SwipeRight
            } else {
                SwipeDirection::SwipeLeft
            })
        } else if ady > adx * self.axis_ratio && ady > self.min_distance {
            Some(if dy > 0.0 {
                SwipeDirection::SwipeDown
            } else {
                SwipeDirection::SwipeUp
            })
        } else {
            None
        }
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::from_config(&GestureConfig::default())
    }
}
