//! Configuration for Curtain.
//!
//! The configuration is loaded once from the first JSONC file found by
//! [`config_paths`] and shared for the lifetime of the process. A missing file
//! is not an error: every setting has a default.

mod types;

use std::path::Path;
use std::sync::OnceLock;

pub use types::{
    ConfigError, CurtainConfig, FullscreenConfig, config_paths, load_config, load_config_from_path,
    load_layout,
};

/// Global configuration instance.
static CONFIG: OnceLock<CurtainConfig> = OnceLock::new();

/// Initializes the global configuration.
///
/// Uses `path` when given, otherwise searches the default locations. Falls back
/// to defaults (with a warning) when the file cannot be loaded. Later calls
/// return the configuration from the first call.
pub fn init(path: Option<&Path>) -> &'static CurtainConfig {
    CONFIG.get_or_init(|| {
        let loaded = path.map_or_else(load_config, load_config_from_path);
        match loaded {
            Ok((config, path)) => {
                tracing::debug!(path = %path.display(), "loaded configuration");
                config
            }
            Err(ConfigError::NotFound) => {
                tracing::debug!("no configuration file found, using defaults");
                CurtainConfig::default()
            }
            Err(err) => {
                tracing::warn!("{err}; using default configuration");
                CurtainConfig::default()
            }
        }
    })
}

/// Returns the JSON schema of the configuration file.
#[must_use]
pub fn schema() -> schemars::Schema { schemars::schema_for!(CurtainConfig) }
