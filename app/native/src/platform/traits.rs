//! Window/Display service contract.
//!
//! The fullscreen controller never touches a windowing API directly. Every
//! side effect goes through these traits, which the platform layer (or the
//! [`headless`](super::headless) implementation in tests and the CLI)
//! implements.

use std::sync::Arc;
use std::time::Duration;

use super::style::{PresentationOptions, StyleDescriptor};
use crate::geometry::{Display, Rect, Size};

/// A view whose opacity can be changed, such as the title bar control group.
pub trait ControlView: Send + Sync {
    /// Sets the view's alpha value (`0.0` hidden, `1.0` opaque).
    fn set_alpha(&self, alpha: f64);
}

/// A single top-level window.
///
/// Handles are shared references; implementations use interior mutability
/// the same way `AppKit` window objects do.
pub trait Window {
    /// The display the window is currently on, if any.
    ///
    /// Absent while the window is being torn down or is off every display.
    fn current_display(&self) -> Option<Display>;

    /// The full window frame in screen coordinates.
    fn frame(&self) -> Rect;

    /// The content view frame in window coordinates.
    fn content_frame(&self) -> Rect;

    /// Converts a rect from window coordinates to screen coordinates.
    fn convert_to_screen(&self, rect: Rect) -> Rect;

    /// Grows a content rect into the window frame `style` would need.
    fn frame_rect_for_content_rect(&self, content: Rect, style: &StyleDescriptor) -> Rect;

    fn style(&self) -> StyleDescriptor;

    fn set_style(&self, style: StyleDescriptor);

    fn set_movable(&self, movable: bool);

    fn set_titlebar_transparent(&self, transparent: bool);

    /// Moves and resizes the window. `display` requests an immediate redraw.
    fn set_frame(&self, frame: Rect, display: bool);

    /// Resizes the content view.
    fn set_content_size(&self, size: Size);

    /// The view holding the title bar buttons.
    fn titlebar_control_view(&self) -> Option<Arc<dyn ControlView>>;
}

/// Process-wide presentation control.
pub trait Presentation: Send + Sync {
    /// Replaces the current presentation options.
    fn set_options(&self, options: PresentationOptions);

    /// Returns the current presentation options.
    fn options(&self) -> PresentationOptions;

    /// Hides (or restores) both the menu bar and the dock.
    fn set_hide_menu_bar_and_dock(&self, hide: bool) {
        let options = if hide {
            PresentationOptions::hide_menu_bar_and_dock()
        } else {
            PresentationOptions::default()
        };
        self.set_options(options);
    }
}

/// Work executed inside an animation group.
pub type Mutation = Box<dyn FnOnce() + Send>;

/// Callback invoked once an animation group has finished.
pub type Completion = Box<dyn FnOnce() + Send>;

/// Animation service.
pub trait Animator: Send + Sync {
    /// Runs `mutation`, then invokes `on_complete` once `duration` has elapsed.
    ///
    /// A zero duration is allowed. The completion is still delivered from the
    /// event loop, never re-entrantly from inside this call.
    fn animate(&self, duration: Duration, mutation: Mutation, on_complete: Completion);
}
