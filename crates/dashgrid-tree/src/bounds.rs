#![forbid(unsafe_code)]

//! Drop-bounds resolution.
//!
//! A widget is confined to its "drop parent": the immediate containing box.
//! Bounds are read from live tree state on demand and never cached: the
//! containing box may itself be mid-resize (an ancestor handle dragged in
//! the same gesture chain), so drag resolves once per gesture while resize
//! re-resolves on every move step.

use crate::{WidgetId, WidgetTree};
use dashgrid_core::geometry::Size;

/// Current pixel size of a widget's containing box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DropBounds {
    /// Containing box width.
    pub width: f64,
    /// Containing box height.
    pub height: f64,
}

impl DropBounds {
    /// Read the current size of `id`'s containing box.
    ///
    /// Roots are bounded by the tree's container; everything else by its
    /// parent's live geometry. An unknown id resolves to zero bounds, which
    /// degenerates clamping to the origin.
    #[must_use]
    pub fn resolve(tree: &WidgetTree, id: WidgetId) -> Self {
        let size = match tree.parent(id) {
            Some(parent) => tree
                .geometry(parent)
                .map(|rect| rect.size())
                .unwrap_or_default(),
            None if tree.geometry(id).is_some() => tree.container_size(),
            None => Size::default(),
        };
        Self {
            width: size.width,
            height: size.height,
        }
    }
}
