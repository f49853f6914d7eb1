//! Raw touch input handling for Navigator.

use swipenav_common::NavEvent;
use tracing::debug;

use crate::gesture::{TouchPoint, TouchSample};

use super::Navigator;

impl Navigator {
    /// Remember where a touch began. Ignored mid-transition.
    pub fn touch_start(&mut self, point: TouchPoint, at_ms: f64) {
        if self.is_animating() {
            return;
        }
        self.touch = Some(TouchSample { point, at_ms });
    }

    /// Drop the pending sample without classifying it, for touch-ends the
    /// host could not read a position from.
    pub fn cancel_touch(&mut self) {
        self.touch = None;
    }

    /// Finish a touch and navigate if it was a swipe.
    ///
    /// The pending sample is cleared whatever the outcome. Returns `true` if
    /// a transition started.
    pub fn touch_end(&mut self, point: TouchPoint, at_ms: f64) -> bool {
        let start = self.touch.take();
        if self.is_animating() {
            return false;
        }
        let Some(start) = start else {
            return false;
        };

        match self.settings.classifier.classify(start.point, point) {
            Some(direction) => {
                debug!(
                    %direction,
                    elapsed_ms = at_ms - start.at_ms,
                    "swipe recognized"
                );
                self.navigate(direction)
            }
            None => {
                self.record(NavEvent::GestureIgnored);
                false
            }
        }
    }
}
