//! Core types and constructors for Navigator.

use std::collections::VecDeque;
use std::time::Duration;

use swipenav_common::{NavEvent, PanelCoord, Translation};
use swipenav_config::SwipeNavConfig;

use crate::gesture::{GestureClassifier, TouchSample};
use crate::grid::PanelGrid;
use crate::host::{IndicatorSurface, MediaHandle, TransitionScheduler, ViewportSurface};
use crate::media::MediaSync;
use crate::transition::TransitionState;

/// Oldest events are discarded once this many are waiting to be drained.
pub const MAX_PENDING_EVENTS: usize = 256;

/// Fixed navigation parameters, built once at startup.
#[derive(Debug, Clone)]
pub struct NavSettings {
    pub grid: PanelGrid,
    pub classifier: GestureClassifier,
    pub transition_duration: Duration,
}

impl NavSettings {
    pub fn from_config(config: &SwipeNavConfig) -> Self {
        Self {
            grid: PanelGrid::from_config(&config.grid),
            classifier: GestureClassifier::from_config(&config.gesture),
            transition_duration: config.transition.duration(),
        }
    }
}

impl Default for NavSettings {
    fn default() -> Self {
        Self::from_config(&SwipeNavConfig::default())
    }
}

/// Owns the navigation state: current panel, the transition machine, the
/// pending touch sample, and the host surfaces it drives.
pub struct Navigator {
    pub(super) settings: NavSettings,
    /// Visible panel. Changes only when a transition completes.
    pub(super) current: PanelCoord,
    pub(super) state: TransitionState,
    /// Set on touch-start, taken on touch-end.
    pub(super) touch: Option<TouchSample>,
    pub(super) viewport: Box<dyn ViewportSurface>,
    pub(super) indicators: Box<dyn IndicatorSurface>,
    pub(super) media: MediaSync,
    pub(super) scheduler: Box<dyn TransitionScheduler>,
    pub(super) next_ticket: u64,
    pub(super) events: VecDeque<NavEvent>,
}

impl Navigator {
    /// Create a navigator resting on the home panel. Call [`start`](Self::start)
    /// once media is bound to push the initial indicator and playback state.
    pub fn new(
        settings: NavSettings,
        viewport: Box<dyn ViewportSurface>,
        indicators: Box<dyn IndicatorSurface>,
        scheduler: Box<dyn TransitionScheduler>,
    ) -> Self {
        Self {
            settings,
            current: PanelCoord::HOME,
            state: TransitionState::Idle,
            touch: None,
            viewport,
            indicators,
            media: MediaSync::new(),
            scheduler,
            next_ticket: 1,
            events: VecDeque::new(),
        }
    }

    /// Attach a media element that autoplays on `panel`.
    pub fn bind_media(
        &mut self,
        index: usize,
        panel: PanelCoord,
        handle: Box<dyn MediaHandle>,
        muted: bool,
    ) {
        self.media.bind(index, panel, handle, muted);
    }

    // -- Accessors --

    pub fn current(&self) -> PanelCoord {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn settings(&self) -> &NavSettings {
        &self.settings
    }

    pub fn grid(&self) -> &PanelGrid {
        &self.settings.grid
    }

    pub fn media(&self) -> &MediaSync {
        &self.media
    }

    pub fn pending_touch(&self) -> Option<TouchSample> {
        self.touch
    }

    /// Drain all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<NavEvent> {
        self.events.drain(..).collect()
    }

    pub(super) fn record(&mut self, event: NavEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Teardown cancels a pending completion and leaves the viewport at home
/// with no animating mark, the state a fresh navigator assumes.
impl Drop for Navigator {
    fn drop(&mut self) {
        let was_animating = match std::mem::take(&mut self.state) {
            TransitionState::Animating { timer, .. } => {
                timer.cancel();
                self.viewport.set_animating(false);
                true
            }
            TransitionState::Idle => false,
        };
        if was_animating || self.current != PanelCoord::HOME {
            let size = self.viewport.size();
            self.viewport
                .apply_translation(Translation::for_panel(PanelCoord::HOME, size));
        }
    }
}
