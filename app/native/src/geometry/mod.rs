//! Display-space geometry.
//!
//! - [`rect`] - Rectangle, point and size primitives
//! - [`display`] - Display descriptions and layouts

pub mod display;
pub mod rect;

pub use display::{Display, DisplayId, DisplayLayout};
pub use rect::{Point, Rect, Size};
