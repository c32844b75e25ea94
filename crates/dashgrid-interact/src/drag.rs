#![forbid(unsafe_code)]

//! Drag controller: repositioning a widget inside its drop parent.
//!
//! A drag is an owned gesture value: created on pointer-down over a widget
//! body, fed every subsequent pointer-move, dropped on pointer-up. The
//! lifecycle is `Idle → Dragging → Idle`; holding the value IS the
//! `Dragging` state.
//!
//! Drop bounds are resolved once, at gesture start. Dragging assumes a
//! stable container; only resizing has to tolerate a container changing
//! mid-gesture (see the resize controller).

use dashgrid_core::geometry::{Point, clamp_offset};
use dashgrid_tree::{DropBounds, WidgetId, WidgetStyle, WidgetTree};

/// Offset between the pointer-down point and the widget's top-left corner,
/// constant for the duration of one drag gesture.
///
/// The corner is the widget's parent-local offset, so subtracting the origin
/// from a later page-absolute pointer position yields the widget's new
/// parent-local position directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOrigin {
    pub start_x: f64,
    pub start_y: f64,
}

/// An in-progress drag gesture on one widget.
#[derive(Debug, Clone)]
pub struct DragGesture {
    widget: WidgetId,
    origin: DragOrigin,
    bounds: DropBounds,
}

impl DragGesture {
    /// Start a drag: resolve the drop bounds and capture the pointer offset.
    ///
    /// Returns `None` if the widget is not in the tree.
    #[must_use]
    pub fn begin(tree: &WidgetTree, widget: WidgetId, pointer: Point) -> Option<Self> {
        let geometry = tree.geometry(widget)?;
        let origin = DragOrigin {
            start_x: pointer.x - geometry.x,
            start_y: pointer.y - geometry.y,
        };
        Some(Self {
            widget,
            origin,
            bounds: DropBounds::resolve(tree, widget),
        })
    }

    /// The widget being dragged.
    #[must_use]
    pub const fn widget(&self) -> WidgetId {
        self.widget
    }

    /// Pointer offset captured at gesture start.
    #[must_use]
    pub const fn origin(&self) -> DragOrigin {
        self.origin
    }

    /// Apply one pointer-move: clamp the candidate position to the drop
    /// bounds and write the style record.
    ///
    /// Each axis clamps to `max(0, min(candidate, bounds − extent))`: the
    /// widget tracks the pointer, stops at the container edges, and pins to
    /// the origin when the container is smaller than the widget. Every move
    /// writes the style in place: immediate feedback, no batching.
    ///
    /// Returns the committed style, or `None` when the widget has vanished
    /// from the tree mid-gesture.
    pub fn on_move(&self, tree: &mut WidgetTree, pointer: Point) -> Option<WidgetStyle> {
        let geometry = tree.geometry(self.widget)?;
        let left = clamp_offset(
            pointer.x - self.origin.start_x,
            geometry.width,
            self.bounds.width,
        );
        let top = clamp_offset(
            pointer.y - self.origin.start_y,
            geometry.height,
            self.bounds.height,
        );
        let style = WidgetStyle::new(top, left, geometry.width, geometry.height);
        tree.commit_style(self.widget, style);
        Some(style)
    }
}
