//! Swipe navigator configuration.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use defaults matching the stock page so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust
//! use swipenav_config::{load_config, config_to_json};
//!
//! let config = load_config("[transition]\nduration_ms = 400\n").expect("valid config");
//! assert_eq!(config.transition.duration_ms, 400);
//! let json = config_to_json(&config);
//! assert!(json.contains("\"viewport\""));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{SwipeNavConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{default_config_toml, load_from_path, load_from_str};

use swipenav_common::ConfigError;

/// Parse and validate a config from TOML text.
///
/// Unlike [`load_from_str`], a config that parses but fails validation is
/// rejected.
pub fn load_config(toml: &str) -> Result<SwipeNavConfig, ConfigError> {
    toml_loader::load_validated_from_str(toml)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SwipeNavConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
