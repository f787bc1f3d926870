//! Fullscreen transition errors.
//!
//! None of these reach callers of
//! [`FullscreenController::toggle`](super::FullscreenController::toggle): it
//! logs them and leaves the controller untouched so the next toggle can retry.

use thiserror::Error;

use super::state::ControllerState;

/// Reasons a fullscreen transition did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FullscreenError {
    /// The window is not associated with any display.
    #[error("window has no current display")]
    NoDisplay,

    /// The window has no title bar control view to fade.
    #[error("window has no title bar control view")]
    NoTitlebarControl,

    /// A transition is still waiting for its completion callback.
    #[error("a transition is already in progress ({0})")]
    Busy(ControllerState),

    /// The requested transition does not start from the current state.
    #[error("cannot start this transition while {0}")]
    InvalidState(ControllerState),
}

impl FullscreenError {
    /// Returns `true` for the debounce case, which is expected rather than a
    /// sign of an unusable window.
    #[must_use]
    pub const fn is_busy(&self) -> bool { matches!(self, Self::Busy(_)) }
}

/// Result type for fullscreen operations.
pub type FullscreenResult<T> = std::result::Result<T, FullscreenError>;
