//! The navigator's view of its host environment.
//!
//! A browser binding implements these against real DOM elements; tests
//! implement them with recording fakes. All calls happen on one thread, so
//! none of the traits require `Send`.

use std::time::Duration;

use swipenav_common::{MediaError, Side, Translation, ViewportSize};

use crate::transition::TransitionTicket;

pub type Result<T> = std::result::Result<T, MediaError>;

/// The container that holds every panel and slides to show one of them.
pub trait ViewportSurface {
    /// Current viewport dimensions. Read fresh on every transition and resize.
    fn size(&self) -> ViewportSize;
    fn apply_translation(&mut self, translation: Translation);
    /// Mark the container as mid-transition (for CSS easing hooks).
    fn set_animating(&mut self, animating: bool);
}

/// The four "you can go this way" markers.
pub trait IndicatorSurface {
    fn set_available(&mut self, side: Side, available: bool);
}

/// A playable, pausable media element.
pub trait MediaHandle {
    /// Request playback. `Err` means the request was refused outright; hosts
    /// with asynchronous playback may also fail later without reporting.
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    fn set_muted(&mut self, muted: bool);
}

/// Schedules transition completion.
///
/// When the delay elapses the host must call
/// [`Navigator::complete_transition`](crate::Navigator::complete_transition)
/// with the same ticket.
pub trait TransitionScheduler {
    fn schedule(&mut self, delay: Duration, ticket: TransitionTicket) -> Box<dyn TimerHandle>;
}

/// A pending scheduled completion.
pub trait TimerHandle {
    /// Stop the completion from firing. No-op if it already fired.
    fn cancel(self: Box<Self>);
}
