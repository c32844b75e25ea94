#![forbid(unsafe_code)]

//! Resize controller: eight border handles, expressed as data.
//!
//! Every handle maps to an ordered list of one or two edge adjusters
//! (`Up`, `Down`, `Left`, `Right`); a corner is just the composition of two
//! edge primitives. Each adjuster owns its half of the style record
//! (`top`+`height` or `left`+`width`) and clamps against the immutable
//! [`ResizeOrigin`] snapshot, never against the other adjuster's
//! just-written value, so the two axes of a corner never interfere.
//!
//! Unlike drag, every adjuster invocation re-resolves the drop bounds: the
//! containing box may itself be resizing in the same gesture chain.
//!
//! # Invariants
//!
//! 1. A widget never shrinks below the space its first child occupies
//!    (`child_offset + child_extent`), floored at
//!    [`DEFAULT_CHILD_MARGIN`].
//! 2. An adjuster whose candidate violates its bound commits nothing for
//!    that move: the widget stops following the pointer on that axis until
//!    the pointer returns to the valid range. Discard, not clamp-and-stick.
//! 3. North/west adjusters move the origin edge and grow the extent by the
//!    same amount; the far edge stays put.

use dashgrid_core::geometry::{Point, Rect};
use dashgrid_tree::{DropBounds, WidgetId, WidgetStyle, WidgetTree};

/// Minimum margin a widget keeps when shrinking, in pixels, when it has no
/// placed child to derive one from.
pub const DEFAULT_CHILD_MARGIN: f64 = 20.0;

/// Snapshot of widget geometry and pointer-to-edge offsets taken at the
/// moment a handle is pressed. Immutable for the duration of the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOrigin {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    /// Pointer x minus widget left at press time.
    pub diff_x: f64,
    /// Pointer y minus widget top at press time.
    pub diff_y: f64,
}

impl ResizeOrigin {
    /// Capture a snapshot from the widget's current parent-local geometry.
    #[must_use]
    pub fn capture(geometry: Rect, pointer: Point) -> Self {
        Self {
            top: geometry.y,
            left: geometry.x,
            width: geometry.width,
            height: geometry.height,
            diff_x: pointer.x - geometry.x,
            diff_y: pointer.y - geometry.y,
        }
    }
}

/// One of the eight resize handles on a widget's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl HandleKind {
    /// All handles, edges before corners.
    pub const ALL: [HandleKind; 8] = [
        Self::N,
        Self::S,
        Self::E,
        Self::W,
        Self::NE,
        Self::NW,
        Self::SE,
        Self::SW,
    ];

    /// The edge adjusters this handle applies, in order, on every move.
    #[must_use]
    pub const fn adjusters(self) -> &'static [EdgeAdjuster] {
        match self {
            Self::N => &[EdgeAdjuster::Up],
            Self::S => &[EdgeAdjuster::Down],
            Self::E => &[EdgeAdjuster::Right],
            Self::W => &[EdgeAdjuster::Left],
            Self::SW => &[EdgeAdjuster::Down, EdgeAdjuster::Left],
            Self::NE => &[EdgeAdjuster::Up, EdgeAdjuster::Right],
            Self::NW => &[EdgeAdjuster::Up, EdgeAdjuster::Left],
            Self::SE => &[EdgeAdjuster::Down, EdgeAdjuster::Right],
        }
    }

    /// Classify a page-absolute point against a widget's border zones.
    ///
    /// `rect` is the widget's page-absolute rectangle; `thickness` is the
    /// handle zone depth, capped at half the widget extent so small widgets
    /// keep a draggable body. Corners win over edges; a point outside the
    /// rectangle or in the interior is no handle.
    #[must_use]
    pub fn hit(rect: Rect, point: Point, thickness: f64) -> Option<HandleKind> {
        if !rect.contains(point) {
            return None;
        }
        let t = thickness.min(rect.width / 2.0).min(rect.height / 2.0);
        let near_left = point.x < rect.x + t;
        let near_right = point.x >= rect.right() - t;
        let near_top = point.y < rect.y + t;
        let near_bottom = point.y >= rect.bottom() - t;

        match (near_top, near_bottom, near_left, near_right) {
            (true, _, true, _) => Some(Self::NW),
            (true, _, _, true) => Some(Self::NE),
            (_, true, true, _) => Some(Self::SW),
            (_, true, _, true) => Some(Self::SE),
            (true, ..) => Some(Self::N),
            (_, true, ..) => Some(Self::S),
            (_, _, true, _) => Some(Self::W),
            (_, _, _, true) => Some(Self::E),
            _ => None,
        }
    }
}

/// A single-edge resize primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeAdjuster {
    /// North edge: moves `top`, grows `height`.
    Up,
    /// South edge: grows `height`.
    Down,
    /// West edge: moves `left`, grows `width`.
    Left,
    /// East edge: grows `width`.
    Right,
}

impl EdgeAdjuster {
    /// Apply this adjuster for one pointer-move.
    ///
    /// Re-resolves drop bounds, recomputes the child margin for its axis,
    /// computes the candidate from the immutable `origin`, and either
    /// commits its style fields or discards the whole update for this move.
    pub fn apply(
        self,
        tree: &mut WidgetTree,
        widget: WidgetId,
        origin: &ResizeOrigin,
        pointer: Point,
        margin_floor: f64,
    ) -> bool {
        let Some(geometry) = tree.geometry(widget) else {
            return false;
        };
        let bounds = DropBounds::resolve(tree, widget);

        let committed = match self {
            Self::Up => {
                let margin = vertical_margin(tree, widget, margin_floor);
                let lowest = origin.top + origin.height - margin;
                let top = (pointer.y - origin.diff_y).min(lowest);
                let height = origin.top - top + origin.height;
                (top >= 0.0 && bounds.height - height >= 0.0).then(|| {
                    WidgetStyle::new(top, geometry.x, geometry.width, height)
                })
            }
            Self::Down => {
                let margin = vertical_margin(tree, widget, margin_floor);
                let height =
                    (pointer.y - origin.diff_y + origin.height - geometry.y).max(margin);
                (origin.top + height <= bounds.height).then(|| {
                    WidgetStyle::new(geometry.y, geometry.x, geometry.width, height)
                })
            }
            Self::Left => {
                let margin = horizontal_margin(tree, widget, margin_floor);
                let rightest = origin.left + origin.width - margin;
                let left = (pointer.x - origin.diff_x).min(rightest);
                let width = origin.left - left + origin.width;
                (left >= 0.0 && bounds.width - width >= 0.0).then(|| {
                    WidgetStyle::new(geometry.y, left, width, geometry.height)
                })
            }
            Self::Right => {
                let margin = horizontal_margin(tree, widget, margin_floor);
                let width =
                    (pointer.x - origin.diff_x + origin.width - geometry.x).max(margin);
                (origin.left + width <= bounds.width).then(|| {
                    WidgetStyle::new(geometry.y, geometry.x, width, geometry.height)
                })
            }
        };

        match committed {
            Some(style) => {
                tree.commit_style(widget, style);
                true
            }
            None => false,
        }
    }
}

/// Minimum height a widget may shrink to: its first child's bottom edge
/// offset (`child.top + child.height`), floored at `margin_floor`. No child,
/// or a child that has never been placed, falls back to the floor.
fn vertical_margin(tree: &WidgetTree, widget: WidgetId, margin_floor: f64) -> f64 {
    match tree.first_child_style(widget) {
        Some(child) => (child.height + child.top).max(margin_floor),
        None => margin_floor,
    }
}

/// Horizontal counterpart of [`vertical_margin`].
fn horizontal_margin(tree: &WidgetTree, widget: WidgetId, margin_floor: f64) -> f64 {
    match tree.first_child_style(widget) {
        Some(child) => (child.width + child.left).max(margin_floor),
        None => margin_floor,
    }
}

/// An in-progress resize gesture on one widget.
#[derive(Debug, Clone)]
pub struct ResizeGesture {
    widget: WidgetId,
    handle: HandleKind,
    origin: ResizeOrigin,
}

impl ResizeGesture {
    /// Start a resize: snapshot the widget's geometry and pointer offsets.
    ///
    /// Returns `None` if the widget is not in the tree.
    #[must_use]
    pub fn begin(
        tree: &WidgetTree,
        widget: WidgetId,
        handle: HandleKind,
        pointer: Point,
    ) -> Option<Self> {
        let geometry = tree.geometry(widget)?;
        Some(Self {
            widget,
            handle,
            origin: ResizeOrigin::capture(geometry, pointer),
        })
    }

    /// The widget being resized.
    #[must_use]
    pub const fn widget(&self) -> WidgetId {
        self.widget
    }

    /// The handle that initiated this gesture.
    #[must_use]
    pub const fn handle(&self) -> HandleKind {
        self.handle
    }

    /// Geometry snapshot taken at handle press.
    #[must_use]
    pub const fn origin(&self) -> ResizeOrigin {
        self.origin
    }

    /// Apply one pointer-move: run every adjuster for this handle in order.
    ///
    /// Returns `(applied, discarded)` adjuster counts; a discarded axis left
    /// the style record untouched for this move.
    pub fn on_move(
        &self,
        tree: &mut WidgetTree,
        pointer: Point,
        margin_floor: f64,
    ) -> (u8, u8) {
        let mut applied = 0;
        let mut discarded = 0;
        for adjuster in self.handle.adjusters() {
            if adjuster.apply(tree, self.widget, &self.origin, pointer, margin_floor) {
                applied += 1;
            } else {
                discarded += 1;
            }
        }
        (applied, discarded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashgrid_core::geometry::Size;

    // 400x300 container, widget at {top:50,left:50} 100x100, pressed with a
    // 30px pointer offset from the widget corner on both axes.
    fn fixture() -> (WidgetTree, WidgetId, ResizeOrigin) {
        let mut tree = WidgetTree::new(Size::new(400.0, 300.0));
        let widget = tree.insert_root(Rect::new(50.0, 50.0, 100.0, 100.0));
        let origin = ResizeOrigin::capture(
            tree.geometry(widget).unwrap(),
            Point::new(80.0, 80.0),
        );
        (tree, widget, origin)
    }

    fn style(tree: &WidgetTree, widget: WidgetId) -> WidgetStyle {
        tree.style(widget).expect("style committed")
    }

    // === Handle mapping ===

    #[test]
    fn corners_compose_edge_primitives() {
        assert_eq!(HandleKind::N.adjusters(), &[EdgeAdjuster::Up]);
        assert_eq!(
            HandleKind::SW.adjusters(),
            &[EdgeAdjuster::Down, EdgeAdjuster::Left]
        );
        assert_eq!(
            HandleKind::NE.adjusters(),
            &[EdgeAdjuster::Up, EdgeAdjuster::Right]
        );
        assert_eq!(
            HandleKind::NW.adjusters(),
            &[EdgeAdjuster::Up, EdgeAdjuster::Left]
        );
        assert_eq!(
            HandleKind::SE.adjusters(),
            &[EdgeAdjuster::Down, EdgeAdjuster::Right]
        );
    }

    #[test]
    fn handle_hit_classifies_zones() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let t = 6.0;
        assert_eq!(HandleKind::hit(rect, Point::new(2.0, 2.0), t), Some(HandleKind::NW));
        assert_eq!(
            HandleKind::hit(rect, Point::new(97.0, 2.0), t),
            Some(HandleKind::NE)
        );
        assert_eq!(
            HandleKind::hit(rect, Point::new(2.0, 97.0), t),
            Some(HandleKind::SW)
        );
        assert_eq!(
            HandleKind::hit(rect, Point::new(97.0, 97.0), t),
            Some(HandleKind::SE)
        );
        assert_eq!(HandleKind::hit(rect, Point::new(50.0, 2.0), t), Some(HandleKind::N));
        assert_eq!(
            HandleKind::hit(rect, Point::new(50.0, 97.0), t),
            Some(HandleKind::S)
        );
        assert_eq!(HandleKind::hit(rect, Point::new(2.0, 50.0), t), Some(HandleKind::W));
        assert_eq!(
            HandleKind::hit(rect, Point::new(97.0, 50.0), t),
            Some(HandleKind::E)
        );
        // interior and outside are not handles
        assert_eq!(HandleKind::hit(rect, Point::new(50.0, 50.0), t), None);
        assert_eq!(HandleKind::hit(rect, Point::new(120.0, 50.0), t), None);
    }

    #[test]
    fn handle_hit_caps_thickness_for_small_widgets() {
        let rect = Rect::new(0.0, 0.0, 8.0, 8.0);
        // an oversized thickness still leaves the exact center un-handled
        assert_eq!(HandleKind::hit(rect, Point::new(4.0, 4.0), 20.0), None);
    }

    // === South edge ===

    #[test]
    fn resize_down_grows_toward_pointer() {
        let (mut tree, widget, origin) = fixture();
        // pointer 40px lower: height 100 -> 140
        let ok = EdgeAdjuster::Down.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(80.0, 120.0),
            DEFAULT_CHILD_MARGIN,
        );
        assert!(ok);
        assert_eq!(style(&tree, widget), WidgetStyle::new(50.0, 50.0, 100.0, 140.0));
    }

    #[test]
    fn resize_down_floors_at_default_margin() {
        let (mut tree, widget, origin) = fixture();
        let ok = EdgeAdjuster::Down.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(80.0, -500.0),
            DEFAULT_CHILD_MARGIN,
        );
        assert!(ok);
        assert_eq!(style(&tree, widget).height, DEFAULT_CHILD_MARGIN);
    }

    #[test]
    fn resize_down_discards_past_container_bottom() {
        let (mut tree, widget, origin) = fixture();
        // candidate height 260 would end at 50 + 260 > 300
        let ok = EdgeAdjuster::Down.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(80.0, 240.0),
            DEFAULT_CHILD_MARGIN,
        );
        assert!(!ok);
        assert_eq!(tree.style(widget), None, "discarded move must not write style");
    }

    #[test]
    fn resize_down_respects_child_margin() {
        let (mut tree, widget, origin) = fixture();
        let child = tree
            .insert_child(widget, Rect::new(10.0, 30.0, 40.0, 40.0))
            .unwrap();
        tree.commit_style(child, WidgetStyle::new(30.0, 10.0, 40.0, 40.0));

        // margin = child.top + child.height = 70
        let ok = EdgeAdjuster::Down.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(80.0, -500.0),
            DEFAULT_CHILD_MARGIN,
        );
        assert!(ok);
        assert_eq!(style(&tree, widget).height, 70.0);
    }

    // === North edge ===

    #[test]
    fn resize_up_moves_top_and_grows_height() {
        let (mut tree, widget, origin) = fixture();
        // pointer 20px higher: top 50 -> 30, height 100 -> 120
        let ok = EdgeAdjuster::Up.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(80.0, 60.0),
            DEFAULT_CHILD_MARGIN,
        );
        assert!(ok);
        assert_eq!(style(&tree, widget), WidgetStyle::new(30.0, 50.0, 100.0, 120.0));
    }

    #[test]
    fn resize_up_stops_at_margin_floor() {
        let (mut tree, widget, origin) = fixture();
        // pointer far below: top clamps to origin.top + origin.height - 20
        let ok = EdgeAdjuster::Up.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(80.0, 500.0),
            DEFAULT_CHILD_MARGIN,
        );
        assert!(ok);
        assert_eq!(style(&tree, widget), WidgetStyle::new(130.0, 50.0, 100.0, 20.0));
    }

    #[test]
    fn resize_up_respects_child_margin() {
        let (mut tree, widget, origin) = fixture();
        let child = tree
            .insert_child(widget, Rect::new(10.0, 30.0, 40.0, 40.0))
            .unwrap();
        tree.commit_style(child, WidgetStyle::new(30.0, 10.0, 40.0, 40.0));

        // margin 70: top clamps to 50 + 100 - 70 even with the pointer far
        // below the widget
        let ok = EdgeAdjuster::Up.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(80.0, 500.0),
            DEFAULT_CHILD_MARGIN,
        );
        assert!(ok);
        assert_eq!(style(&tree, widget), WidgetStyle::new(80.0, 50.0, 100.0, 70.0));
    }

    #[test]
    fn resize_up_discards_above_container_top() {
        let (mut tree, widget, origin) = fixture();
        let ok = EdgeAdjuster::Up.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(80.0, -40.0),
            DEFAULT_CHILD_MARGIN,
        );
        assert!(!ok);
        assert_eq!(tree.style(widget), None);
    }

    #[test]
    fn resize_up_discards_when_taller_than_container() {
        let mut tree = WidgetTree::new(Size::new(400.0, 120.0));
        let widget = tree.insert_root(Rect::new(50.0, 10.0, 100.0, 100.0));
        let origin =
            ResizeOrigin::capture(tree.geometry(widget).unwrap(), Point::new(80.0, 40.0));

        // top 10 -> 5 gives height 105 < 120: fine
        assert!(EdgeAdjuster::Up.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(80.0, 35.0),
            DEFAULT_CHILD_MARGIN,
        ));
        // top 10 -> -10 would need height 120 at top -10: discarded
        assert!(!EdgeAdjuster::Up.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(80.0, 20.0),
            DEFAULT_CHILD_MARGIN,
        ));
        assert_eq!(style(&tree, widget), WidgetStyle::new(5.0, 50.0, 100.0, 105.0));
    }

    // === West/east edges (horizontal mirrors) ===

    #[test]
    fn resize_left_moves_left_and_grows_width() {
        let (mut tree, widget, origin) = fixture();
        let ok = EdgeAdjuster::Left.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(55.0, 80.0),
            DEFAULT_CHILD_MARGIN,
        );
        assert!(ok);
        assert_eq!(style(&tree, widget), WidgetStyle::new(50.0, 25.0, 125.0, 100.0));
    }

    #[test]
    fn resize_left_discards_past_container_left() {
        let (mut tree, widget, origin) = fixture();
        let ok = EdgeAdjuster::Left.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(-40.0, 80.0),
            DEFAULT_CHILD_MARGIN,
        );
        assert!(!ok);
        assert_eq!(tree.style(widget), None);
    }

    #[test]
    fn resize_left_respects_container() {
        // width check mirrors the north edge: growing wider than the
        // container discards even while left stays non-negative. The widget
        // overhangs a 100-wide container (it shrank mid-gesture).
        let mut tree = WidgetTree::new(Size::new(100.0, 300.0));
        let widget = tree.insert_root(Rect::new(30.0, 50.0, 80.0, 100.0));
        let origin =
            ResizeOrigin::capture(tree.geometry(widget).unwrap(), Point::new(40.0, 80.0));

        // left 30 -> 15 gives width 95 <= 100: fine
        assert!(EdgeAdjuster::Left.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(25.0, 80.0),
            DEFAULT_CHILD_MARGIN,
        ));
        assert_eq!(style(&tree, widget), WidgetStyle::new(50.0, 15.0, 95.0, 100.0));

        // left 5 is non-negative but width 105 > 100: discarded
        assert!(!EdgeAdjuster::Left.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(15.0, 80.0),
            DEFAULT_CHILD_MARGIN,
        ));
        assert_eq!(style(&tree, widget), WidgetStyle::new(50.0, 15.0, 95.0, 100.0));
    }

    #[test]
    fn resize_right_grows_toward_pointer() {
        let (mut tree, widget, origin) = fixture();
        // origin.width 100, diff_x 30, pointer 500 in a 400-wide container
        // -> width 520 discarded; pointer 250 -> width 270
        assert!(!EdgeAdjuster::Right.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(500.0, 80.0),
            DEFAULT_CHILD_MARGIN,
        ));
        assert_eq!(tree.style(widget), None);

        assert!(EdgeAdjuster::Right.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(250.0, 80.0),
            DEFAULT_CHILD_MARGIN,
        ));
        assert_eq!(style(&tree, widget).width, 270.0);
    }

    #[test]
    fn resize_right_floors_at_child_margin() {
        let (mut tree, widget, origin) = fixture();
        let child = tree
            .insert_child(widget, Rect::new(15.0, 5.0, 50.0, 20.0))
            .unwrap();
        tree.commit_style(child, WidgetStyle::new(5.0, 15.0, 50.0, 20.0));

        // margin = child.left + child.width = 65
        assert!(EdgeAdjuster::Right.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(-500.0, 80.0),
            DEFAULT_CHILD_MARGIN,
        ));
        assert_eq!(style(&tree, widget).width, 65.0);
    }

    // === Gestures and corner independence ===

    #[test]
    fn se_corner_axes_match_single_edges() {
        let pointer = Point::new(130.0, 145.0);

        let (mut tree_corner, widget_c, _) = fixture();
        let corner =
            ResizeGesture::begin(&tree_corner, widget_c, HandleKind::SE, Point::new(80.0, 80.0))
                .unwrap();
        corner.on_move(&mut tree_corner, pointer, DEFAULT_CHILD_MARGIN);

        let (mut tree_east, widget_e, _) = fixture();
        let east =
            ResizeGesture::begin(&tree_east, widget_e, HandleKind::E, Point::new(80.0, 80.0))
                .unwrap();
        east.on_move(&mut tree_east, pointer, DEFAULT_CHILD_MARGIN);

        let (mut tree_south, widget_s, _) = fixture();
        let south =
            ResizeGesture::begin(&tree_south, widget_s, HandleKind::S, Point::new(80.0, 80.0))
                .unwrap();
        south.on_move(&mut tree_south, pointer, DEFAULT_CHILD_MARGIN);

        assert_eq!(
            style(&tree_corner, widget_c).width,
            style(&tree_east, widget_e).width
        );
        assert_eq!(
            style(&tree_corner, widget_c).height,
            style(&tree_south, widget_s).height
        );
    }

    #[test]
    fn corner_discards_one_axis_keeps_the_other() {
        let (mut tree, widget, _) = fixture();
        let gesture =
            ResizeGesture::begin(&tree, widget, HandleKind::SE, Point::new(80.0, 80.0)).unwrap();

        // x pushes past the container, y stays valid
        let (applied, discarded) =
            gesture.on_move(&mut tree, Point::new(500.0, 120.0), DEFAULT_CHILD_MARGIN);
        assert_eq!((applied, discarded), (1, 1));
        let committed = style(&tree, widget);
        assert_eq!(committed.height, 140.0);
        assert_eq!(committed.width, 100.0, "discarded axis keeps prior value");
    }

    #[test]
    fn gesture_on_removed_widget_discards_everything() {
        let (mut tree, widget, _) = fixture();
        let gesture =
            ResizeGesture::begin(&tree, widget, HandleKind::SE, Point::new(80.0, 80.0)).unwrap();
        tree.remove(widget).unwrap();
        let (applied, discarded) =
            gesture.on_move(&mut tree, Point::new(130.0, 130.0), DEFAULT_CHILD_MARGIN);
        assert_eq!((applied, discarded), (0, 2));
    }

    #[test]
    fn resize_reacts_to_container_shrinking_mid_gesture() {
        let (mut tree, widget, origin) = fixture();
        // valid at 400 wide
        assert!(EdgeAdjuster::Right.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(250.0, 80.0),
            DEFAULT_CHILD_MARGIN,
        ));
        // container shrinks mid-gesture; same pointer is now out of range
        tree.set_container_size(Size::new(300.0, 300.0));
        assert!(!EdgeAdjuster::Right.apply(
            &mut tree,
            widget,
            &origin,
            Point::new(250.0, 80.0),
            DEFAULT_CHILD_MARGIN,
        ));
        assert_eq!(style(&tree, widget).width, 270.0);
    }
}
