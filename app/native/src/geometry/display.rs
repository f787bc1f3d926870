//! Display descriptions and layouts.
//!
//! Displays are enumerated and owned by the windowing platform. The fullscreen
//! logic only ever reads them, so they are plain cloneable values here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::rect::{Point, Rect};
use crate::core::constants::geometry::DEFAULT_MENU_BAR_HEIGHT;

/// Platform display identifier (`CGDirectDisplayID` on macOS).
pub type DisplayId = u32;

/// A physical screen with its full and visible frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    /// Unique display identifier.
    pub id: DisplayId,

    /// Human readable name (e.g., "Built-in Retina Display").
    #[serde(default)]
    pub name: String,

    /// Full physical bounds.
    pub frame: Rect,

    /// Bounds excluding the menu bar and dock.
    pub visible_frame: Rect,
}

impl Display {
    /// Creates a display whose visible frame reserves a standard menu bar at the top.
    #[must_use]
    pub fn new(id: DisplayId, name: &str, frame: Rect) -> Self {
        let visible_frame = Rect::new(
            frame.x,
            frame.y,
            frame.width,
            frame.height - DEFAULT_MENU_BAR_HEIGHT,
        );

        Self {
            id,
            name: name.to_string(),
            frame,
            visible_frame,
        }
    }

    /// Replaces the visible frame.
    #[must_use]
    pub const fn with_visible_frame(mut self, visible_frame: Rect) -> Self {
        self.visible_frame = visible_frame;
        self
    }

    /// Moves the display (and its visible frame) to a new origin.
    #[must_use]
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        let dx = x - self.frame.x;
        let dy = y - self.frame.y;
        self.frame = self.frame.offset(dx, dy);
        self.visible_frame = self.visible_frame.offset(dx, dy);
        self
    }

    /// Reserves a dock of the given height at the bottom of the visible frame.
    #[must_use]
    pub fn with_dock(mut self, height: f64) -> Self {
        self.visible_frame.y += height;
        self.visible_frame.height -= height;
        self
    }

    /// Height of the chrome reserved at the top of the display.
    ///
    /// Measured relative to the display origin so displays stacked above or
    /// below the primary one report the same value as the primary.
    #[must_use]
    pub fn menu_bar_height(&self) -> f64 {
        let visible_top = self.visible_frame.height + (self.visible_frame.y - self.frame.y);
        self.frame.height - visible_top
    }
}

/// The set of displays currently attached, in platform order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DisplayLayout {
    /// Connected displays. The first entry is the main display.
    pub displays: Vec<Display>,
}

impl DisplayLayout {
    #[must_use]
    pub const fn new(displays: Vec<Display>) -> Self { Self { displays } }

    /// Returns the display with the given identifier.
    #[must_use]
    pub fn get(&self, id: DisplayId) -> Option<&Display> { self.displays.iter().find(|d| d.id == id) }

    /// Returns the main display.
    #[must_use]
    pub fn main(&self) -> Option<&Display> { self.displays.first() }

    /// Returns the display whose frame contains `point`.
    #[must_use]
    pub fn display_containing(&self, point: Point) -> Option<&Display> {
        self.displays.iter().find(|d| d.frame.contains_point(point))
    }

    #[must_use]
    pub fn len(&self) -> usize { self.displays.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.displays.is_empty() }
}
