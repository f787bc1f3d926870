//! Fake fullscreen state machine for a single window.
//!
//! Entering fullscreen saves the window's geometry and style, hides the menu
//! bar and dock, makes the window borderless and stretches it over the whole
//! display. Leaving restores the style and places the window back, mapped
//! onto whichever display it is on by then.
//!
//! Both transitions end with a (usually zero-length) animation of the title
//! bar controls. The state only settles when that animation's completion
//! callback runs; until then every toggle is dropped.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::error::{FullscreenError, FullscreenResult};
use super::mapper::GeometryMapper;
use super::state::{ControllerState, FullscreenSnapshot};
use crate::config::FullscreenConfig;
use crate::platform::{Animator, Completion, PresentationOptions, Presentation, StyleDescriptor, Window};

#[derive(Debug, Default)]
struct ControllerInner {
    state: ControllerState,
    snapshot: Option<FullscreenSnapshot>,
}

/// Drives the fullscreen transitions of one window.
pub struct FullscreenController {
    inner: Arc<Mutex<ControllerInner>>,
    presentation: Arc<dyn Presentation>,
    animator: Arc<dyn Animator>,
    mapper: GeometryMapper,
    config: FullscreenConfig,
}

impl FullscreenController {
    /// Creates a controller in the windowed state.
    #[must_use]
    pub fn new(
        presentation: Arc<dyn Presentation>,
        animator: Arc<dyn Animator>,
        config: FullscreenConfig,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ControllerInner::default())),
            presentation,
            animator,
            mapper: GeometryMapper::new(config.map_options()),
            config,
        }
    }

    #[must_use]
    pub fn state(&self) -> ControllerState { self.inner.lock().state }

    /// Returns `true` once the window has settled in fullscreen.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool { self.state().is_fullscreen() }

    /// Returns `true` while a transition waits for its completion callback.
    #[must_use]
    pub fn is_transitioning(&self) -> bool { self.state().is_transitioning() }

    /// The geometry saved by the last enter, if it has not been consumed yet.
    #[must_use]
    pub fn snapshot(&self) -> Option<FullscreenSnapshot> { self.inner.lock().snapshot.clone() }

    #[must_use]
    pub const fn config(&self) -> &FullscreenConfig { &self.config }

    /// Toggles fullscreen.
    ///
    /// Toggles during a transition are dropped. Windows without a display or
    /// title bar controls are left untouched. Neither case is reported to the
    /// caller; toggling again later retries.
    pub fn toggle<W: Window + ?Sized>(&self, window: &W) {
        if let Err(err) = self.try_toggle(window) {
            log_abort("toggle", err);
        }
    }

    /// Enters fullscreen, silently doing nothing when that is not possible.
    pub fn enter<W: Window + ?Sized>(&self, window: &W) {
        if let Err(err) = self.try_enter(window) {
            log_abort("enter", err);
        }
    }

    /// Leaves fullscreen, silently doing nothing when that is not possible.
    pub fn leave<W: Window + ?Sized>(&self, window: &W) {
        if let Err(err) = self.try_leave(window) {
            log_abort("leave", err);
        }
    }

    /// Toggles fullscreen and returns the transitional state entered.
    ///
    /// # Errors
    ///
    /// Returns `FullscreenError::Busy` during a transition, or the errors of
    /// [`try_enter`](Self::try_enter) and [`try_leave`](Self::try_leave).
    pub fn try_toggle<W: Window + ?Sized>(&self, window: &W) -> FullscreenResult<ControllerState> {
        let state = self.state();
        match state.toggle_target() {
            Some(ControllerState::EnteringFullscreen) => self.try_enter(window),
            Some(_) => self.try_leave(window),
            None => Err(FullscreenError::Busy(state)),
        }
    }

    /// Starts the transition into fullscreen.
    ///
    /// # Errors
    ///
    /// Returns `FullscreenError::NoDisplay` or `FullscreenError::NoTitlebarControl`
    /// when the window cannot be made fullscreen, and
    /// `FullscreenError::InvalidState` unless the controller is windowed. The
    /// controller and window are unchanged in every error case.
    pub fn try_enter<W: Window + ?Sized>(&self, window: &W) -> FullscreenResult<ControllerState> {
        self.ensure_state(ControllerState::Windowed)?;
        let screen = window.current_display().ok_or(FullscreenError::NoDisplay)?;
        let control = window.titlebar_control_view().ok_or(FullscreenError::NoTitlebarControl)?;

        let snapshot = FullscreenSnapshot::capture(window, screen.clone());
        let style = snapshot.saved_style;
        self.begin(ControllerState::EnteringFullscreen, Some(snapshot));

        debug!(display = screen.id, frame = %screen.frame, "entering fullscreen");

        self.presentation.set_options(self.config.presentation_options());
        window.set_style(style.with_borderless());
        window.set_titlebar_transparent(true);
        window.set_movable(false);

        window.set_frame(screen.frame, true);
        window.set_content_size(screen.frame.size());

        self.animator.animate(
            self.config.transition_duration(),
            Box::new(move || control.set_alpha(0.0)),
            self.completion(ControllerState::EnteringFullscreen),
        );

        Ok(ControllerState::EnteringFullscreen)
    }

    /// Starts the transition out of fullscreen.
    ///
    /// # Errors
    ///
    /// Returns `FullscreenError::NoDisplay` or `FullscreenError::NoTitlebarControl`
    /// when the window cannot be restored, and `FullscreenError::InvalidState`
    /// unless the controller is fullscreen. The controller and window are
    /// unchanged in every error case.
    pub fn try_leave<W: Window + ?Sized>(&self, window: &W) -> FullscreenResult<ControllerState> {
        self.ensure_state(ControllerState::Fullscreen)?;
        let screen = window.current_display().ok_or(FullscreenError::NoDisplay)?;
        let control = window.titlebar_control_view().ok_or(FullscreenError::NoTitlebarControl)?;

        let snapshot = self.begin(ControllerState::LeavingFullscreen, None);
        if snapshot.is_none() {
            warn!("leaving fullscreen without a saved frame; keeping the current frame");
        }

        let style = snapshot.as_ref().map_or_else(StyleDescriptor::windowed, |s| s.saved_style);
        window.set_style(style);
        window.set_titlebar_transparent(false);
        window.set_movable(true);

        self.presentation.set_options(PresentationOptions::default());

        let frame = self.mapper.map(snapshot.as_ref(), window, &screen);
        debug!(display = screen.id, frame = %frame, "leaving fullscreen");
        window.set_frame(frame, true);

        self.animator.animate(
            self.config.transition_duration(),
            Box::new(move || control.set_alpha(1.0)),
            self.completion(ControllerState::LeavingFullscreen),
        );

        Ok(ControllerState::LeavingFullscreen)
    }

    fn ensure_state(&self, expected: ControllerState) -> FullscreenResult<()> {
        match self.state() {
            state if state == expected => Ok(()),
            state if state.is_transitioning() => Err(FullscreenError::Busy(state)),
            state => Err(FullscreenError::InvalidState(state)),
        }
    }

    /// Moves into a transitional state, swapping in `snapshot` and returning
    /// the previous one.
    ///
    /// The lock is released before any window or animator call so completion
    /// callbacks can never deadlock against it.
    fn begin(
        &self,
        state: ControllerState,
        snapshot: Option<FullscreenSnapshot>,
    ) -> Option<FullscreenSnapshot> {
        let mut inner = self.inner.lock();
        inner.state = state;
        std::mem::replace(&mut inner.snapshot, snapshot)
    }

    /// Builds the completion callback that ends `transition`.
    ///
    /// Holds only a weak reference; a callback delivered after the controller
    /// is dropped does nothing.
    fn completion(&self, transition: ControllerState) -> Completion {
        let settled = transition.settled();
        let inner: Weak<Mutex<ControllerInner>> = Arc::downgrade(&self.inner);
        Box::new(move || {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            inner.lock().state = settled;
            debug!(state = %settled, "fullscreen transition complete");
        })
    }
}

impl std::fmt::Debug for FullscreenController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullscreenController")
            .field("state", &self.state())
            .field("mapper", &self.mapper)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn log_abort(operation: &str, err: FullscreenError) {
    if err.is_busy() {
        debug!(operation, "{err}; ignoring");
    } else {
        warn!(operation, "fullscreen {operation} aborted: {err}");
    }
}
