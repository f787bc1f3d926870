//! Configuration types.

mod fullscreen;
mod root;

pub use fullscreen::FullscreenConfig;
pub use root::{
    ConfigError, CurtainConfig, config_paths, load_config, load_config_from_path, load_layout,
};
