//! Curtain - fake fullscreen for desktop windows.
//!
//! Curtain stretches a window over its whole display without switching to a
//! separate fullscreen space, then restores it with display-aware geometry
//! when fullscreen ends, even if the window was moved to a differently sized
//! display in between.
//!
//! - [`fullscreen`] - Controller state machine and frame mapping
//! - [`geometry`] - Rectangles, displays and display layouts
//! - [`platform`] - Window, presentation and animation services
//! - [`config`] - JSONC configuration
//! - [`cli`] - Command-line interface over the headless platform
//! - [`core`] - Errors and constants

pub mod cli;
pub mod config;
pub mod core;
pub mod fullscreen;
pub mod geometry;
pub mod logging;
pub mod platform;

#[cfg(test)]
mod testing;

pub use crate::core::{Error, Result};

pub use fullscreen::{ControllerState, FullscreenController, FullscreenError, GeometryMapper};
pub use geometry::{Display, DisplayLayout, Rect};
