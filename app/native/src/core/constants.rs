//! Application constants for Curtain.
//!
//! Version information, platform metrics used by the headless window service
//! and configuration file names.

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display and window metrics.
pub mod geometry {
    /// Height of the macOS menu bar on displays without a notch.
    pub const DEFAULT_MENU_BAR_HEIGHT: f64 = 25.0;

    /// Height of a standard titled window's title bar.
    pub const TITLEBAR_HEIGHT: f64 = 28.0;

    /// Tolerance used when comparing restored frames.
    pub const FRAME_EPSILON: f64 = 1e-6;
}

/// Default configuration file names.
pub mod config {
    /// Directory name under the user's config directories.
    pub const CONFIG_DIR: &str = "curtain";

    /// Primary config file name.
    pub const CONFIG_FILE: &str = "config.jsonc";

    /// Alternative config file name (JSON without comments).
    pub const CONFIG_FILE_ALT: &str = "config.json";

    /// Legacy config file names in the home directory.
    pub const CONFIG_FILE_LEGACY: &[&str] = &[".curtain.jsonc", ".curtain.json"];
}
