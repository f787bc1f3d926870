//! Rectangle, point and size primitives in display space.
//!
//! Coordinates follow the `AppKit` convention: the origin is the bottom-left
//! corner of the primary display and `y` grows upward.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A point in display space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }
}

/// An axis-aligned rectangle in display space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A `0x0` rectangle at the origin.
    #[must_use]
    pub const fn zero() -> Self { Self::new(0.0, 0.0, 0.0, 0.0) }

    /// Creates a rectangle at the origin with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self { Self::new(0.0, 0.0, size.width, size.height) }

    #[must_use]
    pub const fn origin(&self) -> Point { Point::new(self.x, self.y) }

    #[must_use]
    pub const fn size(&self) -> Size { Size::new(self.width, self.height) }

    #[must_use]
    pub fn max_x(&self) -> f64 { self.x + self.width }

    #[must_use]
    pub fn max_y(&self) -> f64 { self.y + self.height }

    /// Returns `true` if the rectangle has no area.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.width <= 0.0 || self.height <= 0.0 }

    /// Returns the overlapping area of two rectangles.
    ///
    /// Disjoint rectangles (including ones that only touch along an edge)
    /// produce [`Rect::zero`], matching `NSIntersectionRect`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());

        if max_x <= x || max_y <= y {
            return Self::zero();
        }

        Self::new(x, y, max_x - x, max_y - y)
    }

    /// Returns `true` if the point lies inside the rectangle.
    ///
    /// The minimum edges are inclusive and the maximum edges exclusive, so
    /// adjacent displays never both claim the same point.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.max_x() && point.y >= self.y && point.y < self.max_y()
    }

    /// Returns `true` if `other` lies entirely within this rectangle.
    #[must_use]
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Returns a copy moved to the given origin.
    #[must_use]
    pub const fn with_origin(self, x: f64, y: f64) -> Self { Self::new(x, y, self.width, self.height) }

    /// Returns a copy translated by `dx`/`dy`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Compares two rectangles component-wise within `epsilon`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.width - other.width).abs() <= epsilon
            && (self.height - other.height).abs() <= epsilon
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}x{}", self.x, self.y, self.width, self.height)
    }
}

/// Parses `"x,y,width,height"`.
impl FromStr for Rect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| format!("Invalid frame '{s}': {err}"))?;

        match parts.as_slice() {
            &[x, y, width, height] => {
                if !parts.iter().all(|value| value.is_finite()) {
                    return Err(format!("Invalid frame '{s}': values must be finite"));
                }
                if width < 0.0 || height < 0.0 {
                    return Err(format!("Invalid frame '{s}': size must not be negative"));
                }
                Ok(Self::new(x, y, width, height))
            }
            _ => Err(format!(
                "Invalid frame '{s}'. Expected four comma-separated numbers: x,y,width,height"
            )),
        }
    }
}
