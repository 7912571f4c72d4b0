//! Horadric configuration system.
//!
//! A single TOML file holds provider, assistant and logging settings.
//! Every section uses serde defaults so an empty or partial file still
//! yields a working configuration.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use horadric_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{AssistantConfig, HoradricConfig, LogLevel, LoggingConfig, ProviderConfig};

use std::path::Path;

use horadric_common::ConfigError;

/// Load config from the platform default path.
///
/// Creates a commented default file if none exists. Validation problems are
/// logged and the parsed values kept, so one bad field never discards the rest.
pub fn load_config() -> Result<HoradricConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path (the `--config` override).
///
/// Unlike [`load_config`], a missing file is an error rather than a cue to
/// write defaults. Invalid values are kept and logged the same way.
pub fn load_config_from(path: &Path) -> Result<HoradricConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    toml_loader::load_from_path(path)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &HoradricConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
