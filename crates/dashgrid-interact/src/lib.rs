#![forbid(unsafe_code)]

//! Interaction: the geometry-constraint engine for widget panels.
//!
//! Two controllers compute clamped geometry from pointer movement:
//!
//! - [`drag`] repositions a widget inside its drop parent.
//! - [`resize`] adjusts one or two edges via eight border handles, keeping
//!   a minimum margin derived from the widget's first child.
//!
//! [`controller`] routes raw pointer events to at most one active gesture,
//! standing in for document-level listener attach/detach.

pub mod controller;
pub mod drag;
pub mod resize;

pub use controller::{
    EventOutcome, GestureState, IgnoreReason, InteractionConfig, InteractionController,
};
pub use drag::{DragGesture, DragOrigin};
pub use resize::{DEFAULT_CHILD_MARGIN, EdgeAdjuster, HandleKind, ResizeGesture, ResizeOrigin};
