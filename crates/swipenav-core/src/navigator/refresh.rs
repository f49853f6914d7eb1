//! Indicator and media refresh for Navigator.

use swipenav_common::Side;
use tracing::info;

use super::Navigator;

impl Navigator {
    /// Push the initial indicator and playback state. Call once after all
    /// media is bound.
    pub fn start(&mut self) {
        info!(
            panels = self.settings.grid.len(),
            media = self.media.len(),
            "navigator started"
        );
        self.refresh_indicators();
        self.sync_media();
    }

    /// Toggle each direction marker according to the current panel's
    /// neighbors.
    pub fn refresh_indicators(&mut self) {
        let avail = self.settings.grid.availability(self.current);
        for side in Side::ALL {
            self.indicators.set_available(side, avail.on(side));
        }
    }

    /// Play the media bound to the current panel and pause the rest.
    pub fn sync_media(&mut self) {
        for event in self.media.sync(self.current) {
            self.record(event);
        }
    }

    /// Flip play/pause on one media element, whatever panel is visible.
    /// Returns `true` if the element changed state.
    pub fn toggle_media(&mut self, index: usize) -> bool {
        match self.media.toggle(index) {
            Some(event) => {
                self.record(event);
                true
            }
            None => false,
        }
    }
}
