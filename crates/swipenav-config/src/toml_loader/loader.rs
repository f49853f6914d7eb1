//! Core TOML config loading: parse from a string or read from a path.

use crate::schema::SwipeNavConfig;
use crate::validation;
use std::path::Path;
use swipenav_common::ConfigError;
use tracing::{info, warn};

/// Parse config from TOML text.
///
/// Deserializes using serde defaults for any missing fields. After parsing,
/// the config is validated; if validation fails, a warning is logged and the
/// parsed config is returned as-is.
pub fn load_from_str(content: &str) -> Result<SwipeNavConfig, ConfigError> {
    let config = parse(content)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed config with potentially invalid values");
    }

    Ok(config)
}

/// Parse config from TOML text and reject it if validation fails.
pub fn load_validated_from_str(content: &str) -> Result<SwipeNavConfig, ConfigError> {
    let config = parse(content)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<SwipeNavConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let config = load_from_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

fn parse(content: &str) -> Result<SwipeNavConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}
