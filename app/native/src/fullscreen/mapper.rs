//! Restoration geometry for leaving fullscreen.
//!
//! When a window leaves fullscreen it may be on a different display than the
//! one it was saved on, or the display may have changed size. The saved frame
//! is therefore not applied verbatim. Instead its position is expressed per
//! axis as a fraction of the free space ("slack") the source display left
//! around the window, measured from whichever edge the window was anchored
//! to, and the same fraction is applied to the target display.
//!
//! A window flush with the right edge of a laptop screen ends up flush with
//! the right edge of an external monitor, a centered window stays centered,
//! and a window hanging off one side keeps hanging off that side.
//!
//! Afterwards the frame is pushed below the target's menu bar if needed.
//! Width and height are never changed.

use tracing::trace;

use super::state::FullscreenSnapshot;
use crate::geometry::{Display, Rect};
use crate::platform::Window;

// ============================================================================
// Anchoring
// ============================================================================

/// Edge a window is positioned from on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Left (horizontal) or bottom (vertical) edge.
    Near,
    /// Right (horizontal) or top (vertical) edge.
    Far,
}

impl Anchor {
    /// Picks the anchor edge from the signed margins on one axis.
    ///
    /// The near edge wins unless the window crosses it while the far margin
    /// is still non-negative.
    #[must_use]
    pub fn choose(near_margin: f64, far_margin: f64) -> Self {
        if near_margin >= 0.0 || far_margin < 0.0 {
            Self::Near
        } else {
            Self::Far
        }
    }
}

/// Signed distances from a frame to each edge of its display.
///
/// Negative values mean the frame crosses that edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Margins {
    /// Measures `frame` against `bounds`.
    #[must_use]
    pub fn of(frame: &Rect, bounds: &Rect) -> Self {
        let left = frame.x - bounds.x;
        let bottom = frame.y - bounds.y;

        Self {
            left,
            right: bounds.width - (left + frame.width),
            bottom,
            top: bounds.height - (bottom + frame.height),
        }
    }
}

/// Relative position of a frame on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPlacement {
    pub anchor: Anchor,
    /// Share of the slack between the anchor edge and the frame.
    pub fraction: f64,
}

impl AxisPlacement {
    /// Computes the placement on one axis of the source display.
    ///
    /// `visible_len` is the length of the frame actually on the display. When
    /// it fills the display there is no slack and the fraction stays `0`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn measure(near_margin: f64, far_margin: f64, display_len: f64, visible_len: f64) -> Self {
        let anchor = Anchor::choose(near_margin, far_margin);
        let slack = display_len - visible_len;

        let fraction = if slack == 0.0 {
            0.0
        } else {
            let margin = match anchor {
                Anchor::Near => near_margin,
                Anchor::Far => far_margin,
            };
            margin / slack
        };

        Self { anchor, fraction }
    }

    /// Origin on a target axis starting at `origin` and spanning `display_len`.
    #[must_use]
    pub fn place(&self, origin: f64, display_len: f64, visible_len: f64, frame_len: f64) -> f64 {
        let offset = (display_len - visible_len) * self.fraction;
        match self.anchor {
            Anchor::Near => origin + offset,
            Anchor::Far => origin + display_len - offset - frame_len,
        }
    }
}

// ============================================================================
// Mapping
// ============================================================================

/// Options for [`map_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOptions {
    /// Keep the restored frame below the target display's menu bar.
    pub menu_bar_guard: bool,
}

impl Default for MapOptions {
    fn default() -> Self { Self { menu_bar_guard: true } }
}

/// Maps a window frame saved on `source` onto `target`.
#[must_use]
pub fn map_frame(saved: Rect, source: &Display, target: &Display, options: MapOptions) -> Rect {
    let source_frame = source.frame;
    let target_frame = target.frame;
    let visible = saved.intersection(&source_frame);
    let margins = Margins::of(&saved, &source_frame);

    let horizontal =
        AxisPlacement::measure(margins.left, margins.right, source_frame.width, visible.width);
    let vertical =
        AxisPlacement::measure(margins.bottom, margins.top, source_frame.height, visible.height);

    let x = horizontal.place(target_frame.x, target_frame.width, visible.width, saved.width);
    let y = vertical.place(target_frame.y, target_frame.height, visible.height, saved.height);
    let mut mapped = saved.with_origin(x, y);

    if options.menu_bar_guard {
        mapped = clear_menu_bar(mapped, margins.top, target);
    }

    trace!(
        source = source.id,
        target = target.id,
        ?horizontal,
        ?vertical,
        saved = %saved,
        mapped = %mapped,
        "mapped restoration frame"
    );

    mapped
}

/// Moves `frame` down when its top edge sits under `display`'s menu bar.
///
/// The frame is shifted by `original_top_margin - menu_bar_height`, where
/// `original_top_margin` is the saved frame's top margin on its source
/// display. The shift is never smaller than what is needed to clear the menu
/// bar, which matters when the saved frame itself was under a menu bar.
///
/// Frames already clear of the menu bar are returned unchanged.
#[must_use]
pub fn clear_menu_bar(frame: Rect, original_top_margin: f64, display: &Display) -> Rect {
    let top_margin = Margins::of(&frame, &display.frame).top;
    let menu_bar_height = display.menu_bar_height();

    if top_margin < menu_bar_height {
        let shift = (original_top_margin - menu_bar_height).max(menu_bar_height - top_margin);
        frame.offset(0.0, -shift)
    } else {
        frame
    }
}

/// Computes where a window returns to when it leaves fullscreen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeometryMapper {
    options: MapOptions,
}

impl GeometryMapper {
    #[must_use]
    pub const fn new(options: MapOptions) -> Self { Self { options } }

    #[must_use]
    pub const fn options(&self) -> MapOptions { self.options }

    /// Returns the frame `window` should take on `target`.
    ///
    /// Without a snapshot the window's current frame is returned unchanged.
    /// The snapshot's content rect is grown by the chrome its saved style adds
    /// before mapping.
    pub fn map<W: Window + ?Sized>(
        &self,
        snapshot: Option<&FullscreenSnapshot>,
        window: &W,
        target: &Display,
    ) -> Rect {
        let Some(snapshot) = snapshot else {
            return window.frame();
        };

        let saved = window.frame_rect_for_content_rect(snapshot.saved_frame, &snapshot.saved_style);
        map_frame(saved, &snapshot.saved_display, target, self.options)
    }
}
