//! TOML config loading.

mod loader;
mod template;


pub use loader::{load_from_path, load_from_str, load_validated_from_str};
pub use template::default_config_toml;
