//! Common test utilities.
//!
//! Standard displays, a controller wired to the headless platform and frame
//! assertions shared by every test module.

#![allow(dead_code)]

use std::sync::Arc;

pub use curtain_lib::config::FullscreenConfig;
pub use curtain_lib::fullscreen::{ControllerState, FullscreenController, FullscreenError};
pub use curtain_lib::geometry::{Display, Rect};
pub use curtain_lib::platform::{
    DeferredAnimator, HeadlessPresentation, HeadlessWindow, Presentation, PresentationOptions,
    StyleDescriptor, Window,
};

/// Tolerance for frame comparisons.
///
/// Restored positions go through a division and a multiplication, so they
/// can differ from hand-computed values in the last bits.
pub const FRAME_TOLERANCE: f64 = 1e-6;

/// Asserts that two frames are approximately equal within the tolerance.
#[macro_export]
macro_rules! assert_frame_approx_eq {
    ($left:expr, $right:expr) => {
        assert_frame_approx_eq!($left, $right, $crate::common::FRAME_TOLERANCE)
    };
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let left = &$left;
        let right = &$right;
        if !left.approx_eq(right, $tolerance) {
            panic!(
                "assertion failed: frames not approximately equal\n  left:  {}\n  right: {}\n  tolerance: {}",
                left, right, $tolerance
            );
        }
    }};
}

// ============================================================================
// Displays
// ============================================================================

/// 1080p primary display with a 25pt menu bar.
pub fn hd_display() -> Display { Display::new(1, "HD", Rect::new(0.0, 0.0, 1920.0, 1080.0)) }

/// 4K display to the right of [`hd_display`].
pub fn uhd_display_right() -> Display {
    Display::new(2, "4K", Rect::new(1920.0, 0.0, 3840.0, 2160.0))
}

/// MacBook panel with a 37pt notch menu bar and a 60pt dock.
pub fn notched_display() -> Display {
    Display::new(3, "Built-in", Rect::new(0.0, 0.0, 1512.0, 982.0))
        .with_visible_frame(Rect::new(0.0, 60.0, 1512.0, 885.0))
}

/// Display to the left of the primary, reaching below it.
pub fn left_display() -> Display {
    Display::new(4, "Left", Rect::new(-1440.0, -300.0, 1440.0, 900.0))
}

// ============================================================================
// Rig
// ============================================================================

/// A controller plus the headless services it drives.
pub struct Rig {
    pub controller: FullscreenController,
    pub presentation: Arc<HeadlessPresentation>,
    pub animator: Arc<DeferredAnimator>,
}

impl Default for Rig {
    fn default() -> Self { Self::new() }
}

impl Rig {
    pub fn new() -> Self { Self::with_config(FullscreenConfig::default()) }

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

    /// Toggles and lets the event loop deliver the completion.
    pub fn toggle_and_settle(&self, window: &HeadlessWindow) {
        self.controller.toggle(window);
        self.animator.run_pending();
    }
}
