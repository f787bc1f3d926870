//! Window style and process presentation descriptors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The window decorations and behaviors overridden while fullscreen.
///
/// Mirrors the subset of `NSWindow.StyleMask` the fullscreen transition
/// touches. Movability and title bar transparency are separate window
/// properties and are not part of the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleDescriptor {
    /// The window has a title bar.
    pub titled: bool,
    /// The window shows a close button.
    pub closable: bool,
    /// The window can be minimized.
    pub miniaturizable: bool,
    /// The window can be resized by the user.
    pub resizable: bool,
    /// The window draws no frame.
    pub borderless: bool,
}

impl StyleDescriptor {
    /// A regular titled, closable, miniaturizable and resizable window.
    #[must_use]
    pub const fn windowed() -> Self {
        Self {
            titled: true,
            closable: true,
            miniaturizable: true,
            resizable: true,
            borderless: false,
        }
    }

    /// Returns a copy with the borderless bit added. Other bits are kept.
    #[must_use]
    pub const fn with_borderless(mut self) -> Self {
        self.borderless = true;
        self
    }

    /// Returns `true` if the style draws a title bar above the content.
    #[must_use]
    pub const fn has_titlebar(&self) -> bool { self.titled && !self.borderless }
}

impl Default for StyleDescriptor {
    fn default() -> Self { Self::windowed() }
}

/// Process-wide presentation options (`NSApplication.PresentationOptions`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PresentationOptions {
    /// The menu bar is hidden until the pointer reaches the top edge.
    pub auto_hide_menu_bar: bool,
    /// The dock is hidden until the pointer reaches its edge.
    pub auto_hide_dock: bool,
}

impl PresentationOptions {
    /// Hides both the menu bar and the dock.
    #[must_use]
    pub const fn hide_menu_bar_and_dock() -> Self {
        Self {
            auto_hide_menu_bar: true,
            auto_hide_dock: true,
        }
    }

    /// Returns `true` if nothing is overridden.
    #[must_use]
    pub const fn is_default(&self) -> bool { !self.auto_hide_menu_bar && !self.auto_hide_dock }
}
