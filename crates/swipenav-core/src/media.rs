//! Panel-driven autoplay and manual play/pause toggling.
//!
//! Manual toggles and panel sync do not coordinate: whichever ran last
//! decides whether a video is playing.

use swipenav_common::{NavEvent, PanelCoord};
use tracing::debug;

use crate::host::MediaHandle;

/// One media element and the panel it autoplays on.
pub struct MediaBinding {
    /// Position in the configured binding list. Stable even when earlier
    /// elements are missing from the page.
    pub index: usize,
    pub panel: PanelCoord,
    pub handle: Box<dyn MediaHandle>,
}

#[derive(Default)]
pub struct MediaSync {
    bindings: Vec<MediaBinding>,
}

impl MediaSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding. The handle is muted (or not) right away.
    pub fn bind(
        &mut self,
        index: usize,
        panel: PanelCoord,
        mut handle: Box<dyn MediaHandle>,
        muted: bool,
    ) {
        handle.set_muted(muted);
        self.bindings.push(MediaBinding {
            index,
            panel,
            handle,
        });
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Play whatever is bound to `current` and pause everything else that is
    /// playing. Returns what changed.
    pub fn sync(&mut self, current: PanelCoord) -> Vec<NavEvent> {
        let mut events = Vec::new();
        for binding in &mut self.bindings {
            if binding.panel == current {
                match binding.handle.play() {
                    Ok(()) => events.push(NavEvent::MediaPlay {
                        index: binding.index,
                    }),
                    Err(e) => debug!(index = binding.index, "autoplay refused: {e}"),
                }
            } else if !binding.handle.is_paused() {
                binding.handle.pause();
                events.push(NavEvent::MediaPause {
                    index: binding.index,
                });
            }
        }
        events
    }

    /// Flip play/pause on the binding with `index`, regardless of panel.
    /// Returns `None` if nothing is bound under that index.
    pub fn toggle(&mut self, index: usize) -> Option<NavEvent> {
        let binding = self.bindings.iter_mut().find(|b| b.index == index)?;
        if binding.handle.is_paused() {
            match binding.handle.play() {
                Ok(()) => Some(NavEvent::MediaPlay { index }),
                Err(e) => {
                    debug!(index, "playback refused: {e}");
                    None
                }
            }
        } else {
            binding.handle.pause();
            Some(NavEvent::MediaPause { index })
        }
    }

    /// Whether the binding with `index` is currently paused.
    pub fn is_paused(&self, index: usize) -> Option<bool> {
        self.bindings
            .iter()
            .find(|b| b.index == index)
            .map(|b| b.handle.is_paused())
    }
}
