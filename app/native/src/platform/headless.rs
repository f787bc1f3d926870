//! In-memory window service.
//!
//! Implements the Window/Display contract without a windowing system so the
//! fullscreen controller can be driven from tests and from the CLI simulator.
//!
//! # Usage
//!
//! ```rust,ignore
//! let display = Display::new(1, "HD", Rect::new(0.0, 0.0, 1920.0, 1080.0));
//! let window = HeadlessWindow::new(Rect::new(100.0, 100.0, 800.0, 600.0), Some(display));
//! let animator = Arc::new(DeferredAnimator::new());
//!
//! controller.toggle(&window);
//! animator.run_pending(); // deliver the completion callback
//! ```

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::style::{PresentationOptions, StyleDescriptor};
use super::traits::{Animator, Completion, ControlView, Mutation, Presentation, Window};
use crate::core::constants::geometry::TITLEBAR_HEIGHT;
use crate::geometry::{Display, Rect, Size};

// ============================================================================
// Control View
// ============================================================================

/// Title bar control group with a recorded alpha value.
#[derive(Debug)]
pub struct HeadlessControlView {
    alpha: Mutex<f64>,
}

impl HeadlessControlView {
    #[must_use]
    pub fn new() -> Self { Self { alpha: Mutex::new(1.0) } }

    #[must_use]
    pub fn alpha(&self) -> f64 { *self.alpha.lock() }
}

impl Default for HeadlessControlView {
    fn default() -> Self { Self::new() }
}

impl ControlView for HeadlessControlView {
    fn set_alpha(&self, alpha: f64) { *self.alpha.lock() = alpha.clamp(0.0, 1.0); }
}

// ============================================================================
// Window
// ============================================================================

#[derive(Debug)]
struct WindowState {
    frame: Rect,
    content_size: Size,
    style: StyleDescriptor,
    movable: bool,
    titlebar_transparent: bool,
    display: Option<Display>,
    frame_changes: usize,
}

/// A window that only records the state applied to it.
///
/// The title bar takes [`TITLEBAR_HEIGHT`] points at the top of the frame
/// whenever the style has one.
#[derive(Debug)]
pub struct HeadlessWindow {
    state: Mutex<WindowState>,
    control: Option<Arc<HeadlessControlView>>,
}

impl HeadlessWindow {
    /// Creates a titled window with the given frame on `display`.
    #[must_use]
    pub fn new(frame: Rect, display: Option<Display>) -> Self {
        let style = StyleDescriptor::windowed();
        Self {
            state: Mutex::new(WindowState {
                frame,
                content_size: content_rect_for_frame(frame, &style).size(),
                style,
                movable: true,
                titlebar_transparent: false,
                display,
                frame_changes: 0,
            }),
            control: Some(Arc::new(HeadlessControlView::new())),
        }
    }

    /// Drops the title bar control view, as happens during teardown.
    #[must_use]
    pub fn without_titlebar_control(mut self) -> Self {
        self.control = None;
        self
    }

    /// Uses a custom style instead of the default windowed one.
    #[must_use]
    pub fn with_style(self, style: StyleDescriptor) -> Self {
        {
            let mut state = self.state.lock();
            state.style = style;
            state.content_size = content_rect_for_frame(state.frame, &style).size();
        }
        self
    }

    /// Moves the window to another display (or off every display).
    ///
    /// Only the association changes; the frame is left alone, as the window
    /// server does when a display is rearranged or disconnected.
    pub fn move_to_display(&self, display: Option<Display>) { self.state.lock().display = display; }

    #[must_use]
    pub fn is_movable(&self) -> bool { self.state.lock().movable }

    #[must_use]
    pub fn is_titlebar_transparent(&self) -> bool { self.state.lock().titlebar_transparent }

    #[must_use]
    pub fn content_size(&self) -> Size { self.state.lock().content_size }

    /// Alpha of the title bar controls, if the window has them.
    #[must_use]
    pub fn titlebar_alpha(&self) -> Option<f64> { self.control.as_ref().map(|view| view.alpha()) }

    /// Number of `set_frame` calls received.
    #[must_use]
    pub fn frame_changes(&self) -> usize { self.state.lock().frame_changes }
}

impl Window for HeadlessWindow {
    fn current_display(&self) -> Option<Display> { self.state.lock().display.clone() }

    fn frame(&self) -> Rect { self.state.lock().frame }

    fn content_frame(&self) -> Rect { Rect::from_size(self.state.lock().content_size) }

    fn convert_to_screen(&self, rect: Rect) -> Rect {
        let origin = self.state.lock().frame.origin();
        rect.offset(origin.x, origin.y)
    }

    fn frame_rect_for_content_rect(&self, content: Rect, style: &StyleDescriptor) -> Rect {
        if style.has_titlebar() {
            Rect::new(content.x, content.y, content.width, content.height + TITLEBAR_HEIGHT)
        } else {
            content
        }
    }

    fn style(&self) -> StyleDescriptor { self.state.lock().style }

    fn set_style(&self, style: StyleDescriptor) {
        let mut state = self.state.lock();
        state.style = style;
        state.content_size = content_rect_for_frame(state.frame, &style).size();
    }

    fn set_movable(&self, movable: bool) { self.state.lock().movable = movable; }

    fn set_titlebar_transparent(&self, transparent: bool) {
        self.state.lock().titlebar_transparent = transparent;
    }

    fn set_frame(&self, frame: Rect, _display: bool) {
        let mut state = self.state.lock();
        state.frame = frame;
        state.content_size = content_rect_for_frame(frame, &state.style).size();
        state.frame_changes += 1;
    }

    fn set_content_size(&self, size: Size) { self.state.lock().content_size = size; }

    fn titlebar_control_view(&self) -> Option<Arc<dyn ControlView>> {
        self.control.clone().map(|view| view as Arc<dyn ControlView>)
    }
}

/// Inverse of `frame_rect_for_content_rect`.
fn content_rect_for_frame(frame: Rect, style: &StyleDescriptor) -> Rect {
    if style.has_titlebar() {
        Rect::new(
            frame.x,
            frame.y,
            frame.width,
            (frame.height - TITLEBAR_HEIGHT).max(0.0),
        )
    } else {
        frame
    }
}

// ============================================================================
// Presentation
// ============================================================================

/// Records the process presentation options.
#[derive(Debug, Default)]
pub struct HeadlessPresentation {
    options: Mutex<PresentationOptions>,
}

impl HeadlessPresentation {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

impl Presentation for HeadlessPresentation {
    fn set_options(&self, options: PresentationOptions) { *self.options.lock() = options; }

    fn options(&self) -> PresentationOptions { *self.options.lock() }
}

// ============================================================================
// Animator
// ============================================================================

/// Applies mutations immediately and queues completions until the event loop
/// runs.
///
/// [`run_pending`](Self::run_pending) plays the role of the UI run loop
/// delivering zero-delay deferred calls.
#[derive(Default)]
pub struct DeferredAnimator {
    pending: Mutex<VecDeque<Completion>>,
    last_duration: Mutex<Option<Duration>>,
}

impl DeferredAnimator {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Number of completion callbacks waiting for delivery.
    #[must_use]
    pub fn pending(&self) -> usize { self.pending.lock().len() }

    /// Duration requested by the most recent animation.
    #[must_use]
    pub fn last_duration(&self) -> Option<Duration> { *self.last_duration.lock() }

    /// Delivers every queued completion in FIFO order and returns how many ran.
    ///
    /// The queue lock is released before each callback, so callbacks may
    /// schedule further animations.
    pub fn run_pending(&self) -> usize {
        let mut delivered = 0;
        loop {
            let next = self.pending.lock().pop_front();
            let Some(on_complete) = next else {
                break;
            };
            on_complete();
            delivered += 1;
        }
        delivered
    }
}

impl std::fmt::Debug for DeferredAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredAnimator")
            .field("pending", &self.pending())
            .field("last_duration", &self.last_duration())
            .finish()
    }
}

impl Animator for DeferredAnimator {
    fn animate(&self, duration: Duration, mutation: Mutation, on_complete: Completion) {
        *self.last_duration.lock() = Some(duration);
        mutation();
        self.pending.lock().push_back(on_complete);
    }
}
