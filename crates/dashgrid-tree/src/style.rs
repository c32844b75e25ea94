#![forbid(unsafe_code)]

//! Persisted widget style records.

use dashgrid_core::geometry::Rect;
use serde::{Deserialize, Serialize};

/// A widget's persisted position and size, in its parent's coordinate space.
///
/// All values are pixels and non-negative; the controllers are the only
/// writers and never commit a violating value. A widget has no style until
/// the first gesture places it; once present, the host renderer is expected
/// to reflect it as `position: absolute; top; left; width; height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetStyle {
    /// Offset from the parent's top edge.
    pub top: f64,
    /// Offset from the parent's left edge.
    pub left: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl WidgetStyle {
    /// Create a style record.
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Build a style record from a parent-local rectangle.
    #[must_use]
    pub const fn from_rect(rect: Rect) -> Self {
        Self {
            top: rect.y,
            left: rect.x,
            width: rect.width,
            height: rect.height,
        }
    }

    /// The parent-local rectangle this style describes.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }
}
