//! Controller state and the pre-fullscreen snapshot.

use std::fmt;

use serde::Serialize;

use crate::geometry::{Display, Rect};
use crate::platform::{StyleDescriptor, Window};

/// Fullscreen state of a single window.
///
/// The two transitional states double as the reentrancy guard: while either
/// is active, toggles are dropped until the animation completion arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ControllerState {
    #[default]
    Windowed,
    EnteringFullscreen,
    Fullscreen,
    LeavingFullscreen,
}

impl ControllerState {
    /// Returns `true` while waiting for an animation completion.
    #[must_use]
    pub const fn is_transitioning(self) -> bool {
        matches!(self, Self::EnteringFullscreen | Self::LeavingFullscreen)
    }

    /// Returns `true` once the window is fully in fullscreen.
    #[must_use]
    pub const fn is_fullscreen(self) -> bool { matches!(self, Self::Fullscreen) }

    /// The state a toggle from this state moves into, if any.
    #[must_use]
    pub const fn toggle_target(self) -> Option<Self> {
        match self {
            Self::Windowed => Some(Self::EnteringFullscreen),
            Self::Fullscreen => Some(Self::LeavingFullscreen),
            Self::EnteringFullscreen | Self::LeavingFullscreen => None,
        }
    }

    /// The state reached once this transition completes.
    #[must_use]
    pub const fn settled(self) -> Self {
        match self {
            Self::Windowed | Self::LeavingFullscreen => Self::Windowed,
            Self::Fullscreen | Self::EnteringFullscreen => Self::Fullscreen,
        }
    }
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Windowed => "windowed",
            Self::EnteringFullscreen => "entering fullscreen",
            Self::Fullscreen => "fullscreen",
            Self::LeavingFullscreen => "leaving fullscreen",
        };
        f.write_str(label)
    }
}

/// Window geometry and style captured right before entering fullscreen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullscreenSnapshot {
    /// Content view frame in screen coordinates.
    pub saved_frame: Rect,
    /// Display the window was on.
    pub saved_display: Display,
    /// Style to restore on leave.
    pub saved_style: StyleDescriptor,
}

impl FullscreenSnapshot {
    /// Captures the snapshot from the window's current state.
    pub fn capture<W: Window + ?Sized>(window: &W, display: Display) -> Self {
        Self {
            saved_frame: window.convert_to_screen(window.content_frame()),
            saved_display: display,
            saved_style: window.style(),
        }
    }
}
