#![forbid(unsafe_code)]

//! DashGrid public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.
//!
//! DashGrid is a geometry-constraint engine for nestable widget panels: a
//! host renderer feeds it pointer events, and the engine computes clamped
//! drag/resize geometry and writes each widget's style record.
//!
//! ```
//! use dashgrid::prelude::*;
//!
//! let mut tree = WidgetTree::new(Size::new(400.0, 300.0));
//! let widget = tree.insert_root(Rect::new(50.0, 50.0, 100.0, 100.0));
//! let mut controller = InteractionController::new();
//!
//! let press = Event::Pointer(PointerEvent::new(
//!     PointerEventKind::Down(PointerButton::Primary),
//!     100.0,
//!     100.0,
//! ));
//! assert_eq!(
//!     controller.handle_event(&mut tree, press),
//!     EventOutcome::DragStarted { widget }
//! );
//! ```

// --- Core re-exports -------------------------------------------------------

pub use dashgrid_core::event::{
    Event, Modifiers, PointerButton, PointerEvent, PointerEventKind,
};
pub use dashgrid_core::geometry::{Point, Rect, Size, clamp_offset};

// --- Tree re-exports -------------------------------------------------------

pub use dashgrid_tree::{
    DropBounds, WidgetId, WidgetStyle, WidgetTree, WidgetTreeError,
};

// --- Interaction re-exports ------------------------------------------------

pub use dashgrid_interact::{
    DEFAULT_CHILD_MARGIN, DragGesture, DragOrigin, EdgeAdjuster, EventOutcome, GestureState,
    HandleKind, IgnoreReason, InteractionConfig, InteractionController, ResizeGesture,
    ResizeOrigin,
};

/// Convenience prelude for typical hosts.
pub mod prelude {
    pub use crate::{
        DropBounds, Event, EventOutcome, GestureState, HandleKind, InteractionConfig,
        InteractionController, Point, PointerButton, PointerEvent, PointerEventKind, Rect, Size,
        WidgetId, WidgetStyle, WidgetTree,
    };
}
