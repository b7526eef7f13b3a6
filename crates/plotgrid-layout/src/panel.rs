// ABOUTME: Panels are the units placed into grid cells.
// ABOUTME: A panel is either an opaque leaf or a whole nested arrangement.

use plotgrid_core::{Axis, PanelId};
use serde::Serialize;

use crate::Arrangement;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "arrangement", rename_all = "snake_case")]
pub enum PanelContent {
    Leaf,
    Nested(Arrangement),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    id: PanelId,
    content: PanelContent,
    share_x: bool,
    share_y: bool,
}

impl Panel {
    /// A plot panel; joins shared axis groups by default
    pub fn leaf(id: impl Into<PanelId>) -> Self {
        Self {
            id: id.into(),
            content: PanelContent::Leaf,
            share_x: true,
            share_y: true,
        }
    }

    /// Wrap an arrangement so it fills a single cell of an outer grid.
    /// Joins the outer grid's axis groups like a leaf; the group lives on the
    /// outer cell, so the wrapped arrangement itself is never modified.
    pub fn nested(id: impl Into<PanelId>, arrangement: Arrangement) -> Self {
        Self {
            id: id.into(),
            content: PanelContent::Nested(arrangement),
            share_x: true,
            share_y: true,
        }
    }

    pub fn with_share_x(mut self, share: bool) -> Self {
        self.share_x = share;
        self
    }

    pub fn with_share_y(mut self, share: bool) -> Self {
        self.share_y = share;
        self
    }

    pub fn id(&self) -> &PanelId {
        &self.id
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    pub fn arrangement(&self) -> Option<&Arrangement> {
        match &self.content {
            PanelContent::Nested(arrangement) => Some(arrangement),
            PanelContent::Leaf => None,
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self.content, PanelContent::Nested(_))
    }

    /// Whether this panel takes part in sharing along the given axis
    pub fn shares(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.share_x,
            Axis::Y => self.share_y,
        }
    }

    /// Leaf ids under this panel, depth-first
    pub fn leaf_ids(&self) -> Vec<&PanelId> {
        let mut out = Vec::new();
        self.collect_leaf_ids(&mut out);
        out
    }

    pub(crate) fn collect_leaf_ids<'a>(&'a self, out: &mut Vec<&'a PanelId>) {
        match &self.content {
            PanelContent::Leaf => out.push(&self.id),
            PanelContent::Nested(arrangement) => {
                for cell in arrangement.cells() {
                    cell.panel().collect_leaf_ids(out);
                }
            }
        }
    }
}
