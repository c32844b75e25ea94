#![forbid(unsafe_code)]

//! Widget tree: an arena of nestable widget panels.
//!
//! The tree is the single structural authority the controllers consult: it
//! owns each widget's live rendered geometry (parent-local), its optional
//! persisted [`WidgetStyle`], and the parent/child edges that determine
//! which box bounds a widget's movement. Rendering is the host's job; the
//! host keeps geometry in sync via [`WidgetTree::set_geometry`] and reflects
//! committed styles on re-render.
//!
//! Widgets are addressed by [`WidgetId`], an arena index that stays valid
//! until the widget is removed and is never reused afterwards.

pub mod bounds;
pub mod style;

use std::fmt;

use dashgrid_core::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

pub use bounds::DropBounds;
pub use style::WidgetStyle;

/// Stable identifier for widgets in a [`WidgetTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(usize);

impl WidgetId {
    /// Get the raw arena index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural faults in tree manipulation.
///
/// Geometry is never an error; these cover misuse of the arena itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetTreeError {
    /// The id does not name a live widget (never inserted, or removed).
    UnknownWidget { id: WidgetId },
}

impl fmt::Display for WidgetTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWidget { id } => write!(f, "unknown widget {id}"),
        }
    }
}

impl std::error::Error for WidgetTreeError {}

/// One widget record in the arena.
#[derive(Debug, Clone)]
struct WidgetNode {
    /// Live rendered geometry, parent-local. Kept current by the host
    /// outside gestures and by the controllers during them.
    geometry: Rect,
    /// Persisted style; absent until a gesture first places the widget.
    style: Option<WidgetStyle>,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
}

/// Arena of widget panels inside one bounding container.
///
/// Root widgets are bounded by the container; every other widget is bounded
/// by its parent. Removal tombstones the slot, so ids are never reused.
#[derive(Debug, Clone)]
pub struct WidgetTree {
    nodes: Vec<Option<WidgetNode>>,
    roots: Vec<WidgetId>,
    container: Size,
}

impl WidgetTree {
    /// Create an empty tree inside a container of the given size.
    #[must_use]
    pub fn new(container: Size) -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            container,
        }
    }

    /// Current size of the outermost container.
    #[must_use]
    pub const fn container_size(&self) -> Size {
        self.container
    }

    /// Update the container size (host resize notification).
    pub fn set_container_size(&mut self, size: Size) {
        self.container = size;
    }

    /// Number of live widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    /// Check if the tree holds no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Root widgets in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    /// Insert a top-level widget with the given initial geometry.
    pub fn insert_root(&mut self, geometry: Rect) -> WidgetId {
        let id = self.push_node(WidgetNode {
            geometry,
            style: None,
            parent: None,
            children: Vec::new(),
        });
        self.roots.push(id);
        id
    }

    /// Insert a widget under `parent`, appended after its existing children.
    pub fn insert_child(
        &mut self,
        parent: WidgetId,
        geometry: Rect,
    ) -> Result<WidgetId, WidgetTreeError> {
        self.node(parent)
            .ok_or(WidgetTreeError::UnknownWidget { id: parent })?;
        let id = self.push_node(WidgetNode {
            geometry,
            style: None,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(node) = self.node_mut(parent) {
            node.children.push(id);
        }
        Ok(id)
    }

    /// Remove a widget and its entire subtree.
    pub fn remove(&mut self, id: WidgetId) -> Result<(), WidgetTreeError> {
        let node = self
            .nodes
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(WidgetTreeError::UnknownWidget { id })?;

        match node.parent {
            Some(parent) => {
                if let Some(parent_node) = self.node_mut(parent) {
                    parent_node.children.retain(|child| *child != id);
                }
            }
            None => self.roots.retain(|root| *root != id),
        }

        let mut pending = node.children;
        while let Some(child) = pending.pop() {
            if let Some(child_node) = self.nodes.get_mut(child.0).and_then(Option::take) {
                pending.extend(child_node.children);
            }
        }
        Ok(())
    }

    /// The widget's parent, if it is not a root.
    #[must_use]
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// The widget's children in order. Empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.node(id).map_or(&[], |node| node.children.as_slice())
    }

    /// Live parent-local geometry of a widget.
    #[must_use]
    pub fn geometry(&self, id: WidgetId) -> Option<Rect> {
        self.node(id).map(|node| node.geometry)
    }

    /// Sync a widget's live geometry from the host layout.
    pub fn set_geometry(&mut self, id: WidgetId, geometry: Rect) -> Result<(), WidgetTreeError> {
        match self.node_mut(id) {
            Some(node) => {
                node.geometry = geometry;
                Ok(())
            }
            None => Err(WidgetTreeError::UnknownWidget { id }),
        }
    }

    /// The widget's persisted style, if a gesture has placed it.
    #[must_use]
    pub fn style(&self, id: WidgetId) -> Option<WidgetStyle> {
        self.node(id).and_then(|node| node.style)
    }

    /// The persisted style of the widget's first child, if both exist.
    ///
    /// This is the record the resize margin is derived from; a first child
    /// that has never been placed yields `None`.
    #[must_use]
    pub fn first_child_style(&self, id: WidgetId) -> Option<WidgetStyle> {
        let first = self.children(id).first().copied()?;
        self.style(first)
    }

    /// Write a widget's style record and mirror it into live geometry.
    ///
    /// Controller write path; called on every committed move. A stale id
    /// (widget removed mid-gesture) is a quiet no-op, consistent with the
    /// discard policy for invalid updates.
    pub fn commit_style(&mut self, id: WidgetId, style: WidgetStyle) {
        if let Some(node) = self.node_mut(id) {
            node.style = Some(style);
            node.geometry = style.rect();
        }
    }

    /// Page-absolute origin of a widget (sum of ancestor offsets).
    #[must_use]
    pub fn absolute_origin(&self, id: WidgetId) -> Option<Point> {
        let mut x = 0.0;
        let mut y = 0.0;
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.node(current)?;
            x += node.geometry.x;
            y += node.geometry.y;
            cursor = node.parent;
        }
        Some(Point::new(x, y))
    }

    /// Page-absolute rectangle of a widget.
    #[must_use]
    pub fn absolute_rect(&self, id: WidgetId) -> Option<Rect> {
        let origin = self.absolute_origin(id)?;
        let geometry = self.geometry(id)?;
        Some(Rect::new(
            origin.x,
            origin.y,
            geometry.width,
            geometry.height,
        ))
    }

    /// Deepest widget under a page-absolute point.
    ///
    /// Later siblings render on top, so they are tested first; descent stops
    /// at the innermost hit. This is what confines a pointer-down to a single
    /// widget in a nested tree: ancestors of the hit never see the gesture.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<WidgetId> {
        self.hit_in(&self.roots, Point::default(), point)
    }

    fn hit_in(&self, candidates: &[WidgetId], parent_origin: Point, point: Point) -> Option<WidgetId> {
        for id in candidates.iter().rev() {
            let Some(node) = self.node(*id) else {
                continue;
            };
            let rect = node.geometry.translated(parent_origin.x, parent_origin.y);
            if rect.contains(point) {
                let inner = self.hit_in(&node.children, rect.origin(), point);
                return Some(inner.unwrap_or(*id));
            }
        }
        None
    }

    fn push_node(&mut self, node: WidgetNode) -> WidgetId {
        let id = WidgetId(self.nodes.len());
        self.nodes.push(Some(node));
        id
    }

    fn node(&self, id: WidgetId) -> Option<&WidgetNode> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: WidgetId) -> Option<&mut WidgetNode> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }
}
