//! Swipe navigation over a fixed grid of full-viewport panels.
//!
//! The [`Navigator`] turns touch gestures into panel changes, runs the
//! two-state transition machine, keeps the direction indicators current and
//! plays the video bound to the visible panel. Everything the navigator
//! touches in the outside world goes through the traits in [`host`].

pub mod commands;
pub mod gesture;
pub mod grid;
pub mod host;
pub mod media;
pub mod navigator;
pub mod transition;

pub use commands::NavCommand;
pub use gesture::{GestureClassifier, SwipeDirection, TouchPoint, TouchSample};
pub use grid::{Availability, PanelGrid};
pub use host::{IndicatorSurface, MediaHandle, TimerHandle, TransitionScheduler, ViewportSurface};
pub use media::{MediaBinding, MediaSync};
pub use navigator::{NavSettings, Navigator};
pub use transition::{TransitionState, TransitionTicket};
