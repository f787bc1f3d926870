//! Fixtures for fullscreen tests.
//!
//! Provides standard displays and a controller wired to the headless
//! platform, so tests can drive transitions without a window server.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::testing::{Harness, hd_display};
//!
//! let harness = Harness::new();
//! let window = HeadlessWindow::new(Rect::new(100.0, 100.0, 800.0, 600.0), Some(hd_display()));
//!
//! harness.controller.toggle(&window);
//! harness.animator.run_pending();
//! assert!(harness.controller.is_fullscreen());
//! ```

#![cfg(test)]

use std::sync::Arc;

use crate::config::FullscreenConfig;
use crate::fullscreen::FullscreenController;
use crate::geometry::{Display, Rect};
use crate::platform::{DeferredAnimator, HeadlessPresentation};

// ============================================================================
// Displays
// ============================================================================

/// A 1080p display at the origin with a 25pt menu bar.
#[must_use]
pub fn hd_display() -> Display { Display::new(1, "HD", Rect::new(0.0, 0.0, 1920.0, 1080.0)) }

/// A 4K display at the origin with a 25pt menu bar.
#[must_use]
pub fn uhd_display() -> Display { Display::new(2, "4K", Rect::new(0.0, 0.0, 3840.0, 2160.0)) }

/// A MacBook 14" panel (default scaled resolution) with a notch-height menu bar.
#[must_use]
pub fn macbook_14_display() -> Display {
    let frame = Rect::new(0.0, 0.0, 1512.0, 982.0);
    Display::new(3, "Built-in", frame).with_visible_frame(Rect::new(0.0, 0.0, 1512.0, 945.0))
}

// ============================================================================
// Controller Harness
// ============================================================================

/// A controller together with the headless services it talks to.
pub struct Harness {
    pub controller: FullscreenController,
    pub presentation: Arc<HeadlessPresentation>,
    pub animator: Arc<DeferredAnimator>,
}

impl Harness {
    /// Creates a harness with the default configuration.
    #[must_use]
    pub fn new() -> Self { Self::with_config(FullscreenConfig::default()) }

    /// Creates a harness with a custom configuration.
    #[must_use]
    pub fn with_config(config: FullscreenConfig) -> Self {
        let presentation = Arc::new(HeadlessPresentation::new());
        let animator = Arc::new(DeferredAnimator::new());
        let controller = FullscreenController::new(presentation.clone(), animator.clone(), config);

        Self {
            controller,
            presentation,
            animator,
        }
    }
}

impl Default for Harness {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_displays_have_menu_bars() {
        assert_eq!(hd_display().menu_bar_height(), 25.0);
        assert_eq!(uhd_display().menu_bar_height(), 25.0);
        assert_eq!(macbook_14_display().menu_bar_height(), 37.0);
    }

    #[test]
    fn test_harness_starts_windowed() {
        let harness = Harness::new();
        assert!(!harness.controller.is_fullscreen());
        assert!(!harness.controller.is_transitioning());
        assert_eq!(harness.animator.pending(), 0);
    }

    #[test]
    fn test_default_harness_uses_default_config() {
        let harness = Harness::default();
        assert_eq!(*harness.controller.config(), FullscreenConfig::default());
    }
}
