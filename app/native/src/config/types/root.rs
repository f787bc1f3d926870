//! Root configuration types and loading functions.
//!
//! Contains the main `CurtainConfig` struct and configuration file loading utilities.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::fullscreen::FullscreenConfig;
use crate::core::constants::config::{
    CONFIG_DIR, CONFIG_FILE, CONFIG_FILE_ALT, CONFIG_FILE_LEGACY,
};
use crate::geometry::DisplayLayout;

/// Root configuration structure for Curtain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CurtainConfig {
    /// Fake fullscreen behavior.
    pub fullscreen: FullscreenConfig,
}

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at ~/.config/curtain/config.jsonc, \
        ~/Library/Application Support/curtain/config.jsonc, or ~/.curtain.jsonc"
    )]
    NotFound,

    /// A file passed explicitly does not exist.
    #[error("File not found: {0}")]
    MissingFile(PathBuf),

    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &[CONFIG_FILE, CONFIG_FILE_ALT];

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. `$XDG_CONFIG_HOME/curtain/` if the variable is set
/// 2. `~/.config/curtain/`
/// 3. The platform config directory (`~/Library/Application Support/curtain/` on macOS)
/// 4. `~/.curtain.jsonc` or `~/.curtain.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let dir = PathBuf::from(xdg_config).join(CONFIG_DIR);
        for filename in CONFIG_FILE_NAMES {
            paths.push(dir.join(filename));
        }
    }

    if let Some(home) = dirs::home_dir() {
        let dir = home.join(".config").join(CONFIG_DIR);
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            // XDG_CONFIG_HOME might be ~/.config
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join(CONFIG_DIR);
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    if let Some(home) = dirs::home_dir() {
        for filename in CONFIG_FILE_LEGACY {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Reads a JSONC file. Both `//` and `/* */` comments are stripped before parsing.
fn read_jsonc<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Loads the configuration from a specific file path.
///
/// # Errors
///
/// Returns `ConfigError::MissingFile` if the file does not exist,
/// `ConfigError::Io` if it could not be read and `ConfigError::Parse` if it
/// contains invalid JSON.
pub fn load_config_from_path(path: &Path) -> Result<(CurtainConfig, PathBuf), ConfigError> {
    let config = read_jsonc(path)?;
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, or the errors of [`load_config_from_path`].
pub fn load_config() -> Result<(CurtainConfig, PathBuf), ConfigError> {
    for path in config_paths() {
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Err(ConfigError::NotFound)
}

/// Loads a display layout description (JSONC) from `path`.
///
/// # Errors
///
/// Same as [`load_config_from_path`].
pub fn load_layout(path: &Path) -> Result<DisplayLayout, ConfigError> { read_jsonc(path) }
