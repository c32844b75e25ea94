#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The engine consumes three pointer events (down, move, up) in page
//! coordinates plus a container resize notification. All events derive
//! `Clone` and `PartialEq` for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Pointer coordinates are page-absolute `f64` pixels; whichever surface
//!   hosts the widget tree is responsible for producing them.
//! - `Modifiers` use bitflags for easy combination.
//! - Terminal hosts can adapt crossterm mouse events via
//!   [`Event::from_crossterm`]; cell coordinates map 1:1 onto logical pixels.

use crate::geometry::Point;
use bitflags::bitflags;
#[cfg(not(target_arch = "wasm32"))]
use crossterm::event as cte;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A pointer event (down/move/up).
    Pointer(PointerEvent),

    /// The outermost container was resized.
    Resize {
        /// New container width in pixels.
        width: f64,
        /// New container height in pixels.
        height: f64,
    },
}

impl Event {
    /// Convert a crossterm event into a dashgrid [`Event`].
    ///
    /// Key, focus, paste, and scroll events have no counterpart here and map
    /// to `None`.
    #[must_use]
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        map_crossterm_event_internal(event)
    }
}

/// A pointer event in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// X coordinate, page-absolute pixels.
    pub x: f64,

    /// Y coordinate, page-absolute pixels.
    pub y: f64,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event with no modifiers.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Pointer position as a [`Point`].
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Check if this is a primary-button press.
    #[must_use]
    pub const fn is_primary_down(&self) -> bool {
        matches!(self.kind, PointerEventKind::Down(PointerButton::Primary))
    }

    /// Check if this releases the primary button.
    #[must_use]
    pub const fn is_primary_up(&self) -> bool {
        matches!(self.kind, PointerEventKind::Up(PointerButton::Primary))
    }
}

/// Pointer event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed down.
    Down(PointerButton),

    /// Pointer moved (with or without a button held).
    Move,

    /// Button released.
    Up(PointerButton),
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (usually left).
    Primary,

    /// Secondary button (usually right).
    Secondary,

    /// Middle button.
    Middle,
}

bitflags! {
    /// Modifier keys held during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE = 0;
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Alt/Option key.
        const ALT = 1 << 1;
        /// Control key.
        const CTRL = 1 << 2;
        /// Super/Meta/Cmd key.
        const SUPER = 1 << 3;
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_crossterm_event_internal(event: cte::Event) -> Option<Event> {
    match event {
        cte::Event::Mouse(mouse) => map_mouse_event(mouse).map(Event::Pointer),
        cte::Event::Resize(width, height) => Some(Event::Resize {
            width: f64::from(width),
            height: f64::from(height),
        }),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_mouse_event(event: cte::MouseEvent) -> Option<PointerEvent> {
    let kind = match event.kind {
        cte::MouseEventKind::Down(button) => PointerEventKind::Down(map_mouse_button(button)),
        cte::MouseEventKind::Up(button) => PointerEventKind::Up(map_mouse_button(button)),
        cte::MouseEventKind::Drag(_) | cte::MouseEventKind::Moved => PointerEventKind::Move,
        // Scroll has no pointer-gesture counterpart
        _ => return None,
    };

    Some(
        PointerEvent::new(kind, f64::from(event.column), f64::from(event.row))
            .with_modifiers(map_modifiers(event.modifiers)),
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn map_mouse_button(button: cte::MouseButton) -> PointerButton {
    match button {
        cte::MouseButton::Left => PointerButton::Primary,
        cte::MouseButton::Right => PointerButton::Secondary,
        cte::MouseButton::Middle => PointerButton::Middle,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_modifiers(modifiers: cte::KeyModifiers) -> Modifiers {
    let mut mapped = Modifiers::NONE;
    if modifiers.contains(cte::KeyModifiers::SHIFT) {
        mapped |= Modifiers::SHIFT;
    }
    if modifiers.contains(cte::KeyModifiers::ALT) {
        mapped |= Modifiers::ALT;
    }
    if modifiers.contains(cte::KeyModifiers::CONTROL) {
        mapped |= Modifiers::CTRL;
    }
    if modifiers.contains(cte::KeyModifiers::SUPER)
        || modifiers.contains(cte::KeyModifiers::HYPER)
        || modifiers.contains(cte::KeyModifiers::META)
    {
        mapped |= Modifiers::SUPER;
    }
    mapped
}
