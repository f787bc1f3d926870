//! Fullscreen configuration types.

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::fullscreen::MapOptions;
use crate::platform::PresentationOptions;

/// Fake fullscreen behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct FullscreenConfig {
    /// Hide the menu bar while a window is fullscreen.
    /// Default: true
    pub hide_menu_bar: bool,

    /// Hide the dock while a window is fullscreen.
    /// Default: true
    pub hide_dock: bool,

    /// Duration of the title bar fade in milliseconds.
    /// `0` applies the change immediately; the state still only settles once
    /// the completion callback runs.
    /// Default: 0
    pub transition_duration_ms: u64,

    /// Keep restored windows below the menu bar of the display they return to.
    /// Default: true
    pub menu_bar_guard: bool,
}

impl Default for FullscreenConfig {
    fn default() -> Self {
        Self {
            hide_menu_bar: true,
            hide_dock: true,
            transition_duration_ms: 0,
            menu_bar_guard: true,
        }
    }
}

impl FullscreenConfig {
    /// Presentation options applied when entering fullscreen.
    #[must_use]
    pub const fn presentation_options(&self) -> PresentationOptions {
        PresentationOptions {
            auto_hide_menu_bar: self.hide_menu_bar,
            auto_hide_dock: self.hide_dock,
        }
    }

    #[must_use]
    pub const fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    /// Options for the restoration frame mapper.
    #[must_use]
    pub const fn map_options(&self) -> MapOptions {
        MapOptions {
            menu_bar_guard: self.menu_bar_guard,
        }
    }
}
