//! Browser binding for the swipe navigator.
//!
//! On `wasm32` this crate mounts a [`swipenav_core::Navigator`] onto the
//! page: the viewport container, the direction indicators and the bound
//! video elements become host surfaces, touch and resize listeners feed it,
//! and `gloo` timers complete its transitions. The module auto-starts with
//! the default configuration; page scripts can remount it with their own
//! TOML through the exported `SwipeNav` class.
//!
//! Lookup planning and console logging are target-independent and tested
//! natively.

pub mod console;
pub mod plan;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{start, SwipeNav};

pub use console::{filter_directive, ConsoleMakeWriter, ConsoleSink};
pub use plan::{ElementPlan, MediaTarget};

use swipenav_common::NavEvent;

/// Serialize drained events for page scripts. Always a JSON array.
pub fn events_to_json(events: &[NavEvent]) -> String {
    serde_json::to_string(events).unwrap_or_else(|_| "[]".to_string())
}
