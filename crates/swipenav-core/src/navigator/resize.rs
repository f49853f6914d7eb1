//! Viewport resize handling for Navigator.

use swipenav_common::{NavEvent, Translation};

use super::Navigator;

impl Navigator {
    /// Re-center the current panel after the viewport changed size.
    ///
    /// Always uses the committed panel, even mid-transition, and leaves the
    /// transition state alone. An in-flight transition is not re-targeted.
    pub fn handle_resize(&mut self) {
        let size = self.viewport.size();
        self.viewport
            .apply_translation(Translation::for_panel(self.current, size));
        self.record(NavEvent::Resized {
            width: size.width,
            height: size.height,
        });
    }
}
