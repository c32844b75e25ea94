#![forbid(unsafe_code)]

//! Gesture routing: the explicit stand-in for document-level listeners.
//!
//! [`InteractionController`] owns at most one active gesture. Pointer-down
//! hit-tests the tree and arms a drag (widget body) or a resize (border
//! handle); while a gesture is active every move and up event routes to it
//! regardless of pointer position, the equivalent of listening on the
//! document so a fast pointer that leaves the widget mid-gesture is not
//! lost. The deepest widget under the pointer wins the press; ancestors
//! never see it, which is what keeps a single press from starting
//! simultaneous gestures up a nested tree.
//!
//! Release is structural: the active gesture is `take()`n on pointer-up and
//! on [`cancel`](InteractionController::cancel), so capture cannot outlive
//! the gesture on any exit path. Every event yields an [`EventOutcome`];
//! events that change nothing report an explicit [`IgnoreReason`].

use dashgrid_core::event::{Event, PointerButton, PointerEvent, PointerEventKind};
use dashgrid_core::geometry::{Point, Size};
use dashgrid_tree::{WidgetId, WidgetStyle, WidgetTree};
use tracing::{debug, trace};

use crate::drag::DragGesture;
use crate::resize::{DEFAULT_CHILD_MARGIN, HandleKind, ResizeGesture};

/// Tunables for gesture recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    /// Depth of the border zones that act as resize handles (default: 6).
    pub handle_thickness: f64,
    /// Minimum resize margin when a widget has no placed child
    /// (default: [`DEFAULT_CHILD_MARGIN`]).
    pub child_margin_floor: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            handle_thickness: 6.0,
            child_margin_floor: DEFAULT_CHILD_MARGIN,
        }
    }
}

impl InteractionConfig {
    /// Create a config with a custom handle zone depth.
    #[must_use]
    pub fn with_handle_thickness(mut self, thickness: f64) -> Self {
        self.handle_thickness = thickness;
        self
    }

    /// Create a config with a custom margin floor.
    #[must_use]
    pub fn with_child_margin_floor(mut self, floor: f64) -> Self {
        self.child_margin_floor = floor;
        self
    }
}

/// Current lifecycle state of the controller.
///
/// ```text
/// Idle -> Dragging -> Idle
/// Idle -> Resizing(handle) -> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging { widget: WidgetId },
    Resizing { widget: WidgetId, handle: HandleKind },
}

/// What one input event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// A drag gesture began on the widget body.
    DragStarted { widget: WidgetId },
    /// A resize gesture began on a border handle.
    ResizeStarted { widget: WidgetId, handle: HandleKind },
    /// A drag move committed this style.
    DragMoved { widget: WidgetId, style: WidgetStyle },
    /// A resize move ran the handle's adjusters; `discarded` counts the
    /// axes whose candidate was silently dropped for this move.
    ResizeMoved {
        widget: WidgetId,
        applied: u8,
        discarded: u8,
    },
    /// Pointer-up ended the active gesture.
    Released { widget: WidgetId },
    /// A host resize notification was applied to the tree.
    ContainerResized { width: f64, height: f64 },
    /// The event changed nothing.
    Ignored(IgnoreReason),
}

/// Why an event was safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Pointer-down outside every widget.
    NoWidgetAtPoint,
    /// Pointer-down while a gesture is already active.
    GestureInProgress,
    /// Move or up with no active gesture (an up without a prior down).
    NoActiveGesture,
    /// Pointer-down with a non-primary button.
    NonPrimaryButton,
    /// The gestured widget was removed from the tree mid-gesture.
    WidgetVanished,
}

#[derive(Debug, Clone)]
enum ActiveGesture {
    Drag(DragGesture),
    Resize(ResizeGesture),
}

impl ActiveGesture {
    fn widget(&self) -> WidgetId {
        match self {
            Self::Drag(gesture) => gesture.widget(),
            Self::Resize(gesture) => gesture.widget(),
        }
    }
}

/// Routes pointer events to at most one drag or resize gesture.
#[derive(Debug, Default)]
pub struct InteractionController {
    config: InteractionConfig,
    active: Option<ActiveGesture>,
}

impl InteractionController {
    /// Create a controller with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(InteractionConfig::default())
    }

    /// Create a controller with the given configuration.
    #[must_use]
    pub fn with_config(config: InteractionConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        match &self.active {
            None => GestureState::Idle,
            Some(ActiveGesture::Drag(gesture)) => GestureState::Dragging {
                widget: gesture.widget(),
            },
            Some(ActiveGesture::Resize(gesture)) => GestureState::Resizing {
                widget: gesture.widget(),
                handle: gesture.handle(),
            },
        }
    }

    /// Feed one input event through the controller.
    pub fn handle_event(&mut self, tree: &mut WidgetTree, event: Event) -> EventOutcome {
        match event {
            Event::Resize { width, height } => {
                tree.set_container_size(Size::new(width, height));
                EventOutcome::ContainerResized { width, height }
            }
            Event::Pointer(pointer) => self.handle_pointer(tree, pointer),
        }
    }

    /// End the active gesture without a pointer-up (focus loss, programmatic
    /// teardown). Returns the widget whose gesture was released.
    pub fn cancel(&mut self) -> Option<WidgetId> {
        let widget = self.active.take().map(|gesture| gesture.widget());
        if let Some(widget) = widget {
            debug!(widget = %widget, "gesture canceled");
        }
        widget
    }

    fn handle_pointer(&mut self, tree: &mut WidgetTree, event: PointerEvent) -> EventOutcome {
        match event.kind {
            PointerEventKind::Down(PointerButton::Primary) => {
                self.on_down(tree, event.position())
            }
            PointerEventKind::Down(_) => EventOutcome::Ignored(IgnoreReason::NonPrimaryButton),
            PointerEventKind::Move => self.on_move(tree, event.position()),
            PointerEventKind::Up(_) => self.on_up(),
        }
    }

    fn on_down(&mut self, tree: &WidgetTree, point: Point) -> EventOutcome {
        if self.active.is_some() {
            return EventOutcome::Ignored(IgnoreReason::GestureInProgress);
        }
        let Some(widget) = tree.hit_test(point) else {
            return EventOutcome::Ignored(IgnoreReason::NoWidgetAtPoint);
        };
        let Some(page_rect) = tree.absolute_rect(widget) else {
            return EventOutcome::Ignored(IgnoreReason::WidgetVanished);
        };

        if let Some(handle) = HandleKind::hit(page_rect, point, self.config.handle_thickness) {
            let Some(gesture) = ResizeGesture::begin(tree, widget, handle, point) else {
                return EventOutcome::Ignored(IgnoreReason::WidgetVanished);
            };
            debug!(widget = %widget, handle = ?handle, "resize started");
            self.active = Some(ActiveGesture::Resize(gesture));
            EventOutcome::ResizeStarted { widget, handle }
        } else {
            let Some(gesture) = DragGesture::begin(tree, widget, point) else {
                return EventOutcome::Ignored(IgnoreReason::WidgetVanished);
            };
            debug!(widget = %widget, "drag started");
            self.active = Some(ActiveGesture::Drag(gesture));
            EventOutcome::DragStarted { widget }
        }
    }

    fn on_move(&mut self, tree: &mut WidgetTree, point: Point) -> EventOutcome {
        match &self.active {
            None => EventOutcome::Ignored(IgnoreReason::NoActiveGesture),
            Some(ActiveGesture::Drag(gesture)) => match gesture.on_move(tree, point) {
                Some(style) => {
                    trace!(widget = %gesture.widget(), top = style.top, left = style.left, "drag moved");
                    EventOutcome::DragMoved {
                        widget: gesture.widget(),
                        style,
                    }
                }
                None => EventOutcome::Ignored(IgnoreReason::WidgetVanished),
            },
            Some(ActiveGesture::Resize(gesture)) => {
                if tree.geometry(gesture.widget()).is_none() {
                    return EventOutcome::Ignored(IgnoreReason::WidgetVanished);
                }
                let (applied, discarded) =
                    gesture.on_move(tree, point, self.config.child_margin_floor);
                trace!(
                    widget = %gesture.widget(),
                    handle = ?gesture.handle(),
                    applied,
                    discarded,
                    "resize moved"
                );
                EventOutcome::ResizeMoved {
                    widget: gesture.widget(),
                    applied,
                    discarded,
                }
            }
        }
    }

    fn on_up(&mut self) -> EventOutcome {
        match self.active.take() {
            Some(gesture) => {
                let widget = gesture.widget();
                debug!(widget = %widget, "gesture released");
                EventOutcome::Released { widget }
            }
            // up with no prior down: the "listeners" are simply absent
            None => EventOutcome::Ignored(IgnoreReason::NoActiveGesture),
        }
    }
}
