//! The Navigator coordinates gestures, transitions, indicators and media.

mod operations;
mod refresh;
mod resize;
mod touch;
mod types;

pub use types::*;

#[cfg(test)]
mod fakes;
