//! Full configuration validation.
//!
//! Validates numeric ranges, grid membership of media bindings, and the
//! shape of DOM identifiers. Each domain has its own submodule; this
//! orchestrator calls them all and collects errors into a single
//! `ConfigError`.

mod dom;
mod grid;
mod helpers;
mod media;
mod misc;


use crate::schema::SwipeNavConfig;
use swipenav_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SwipeNavConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    grid::validate_grid(&mut errors, config);
    media::validate_media(&mut errors, config);
    misc::validate_gesture(&mut errors, config);
    misc::validate_transition(&mut errors, config);
    dom::validate_dom(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
