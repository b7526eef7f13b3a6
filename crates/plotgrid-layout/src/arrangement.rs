// ABOUTME: Immutable grid of panels produced by composition.
// ABOUTME: Rows carry height fractions, cells carry width fractions and axis groups.

use plotgrid_core::{Axis, AxisGroupId, Margin, PanelId};
use serde::Serialize;

use crate::{compose, ComposeOptions, LayoutError, Panel, PanelContent};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub(crate) panel: Panel,
    pub(crate) width: f32,
    pub(crate) x_group: Option<AxisGroupId>,
    pub(crate) y_group: Option<AxisGroupId>,
}

impl Cell {
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Width as a fraction of the row
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn group(&self, axis: Axis) -> Option<AxisGroupId> {
        match axis {
            Axis::X => self.x_group,
            Axis::Y => self.y_group,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub(crate) height: f32,
    pub(crate) cells: Vec<Cell>,
}

impl Row {
    /// Height as a fraction of the arrangement
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Position of a cell: (row, column) at each nesting level, outermost first
pub type CellPath = Vec<(usize, usize)>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arrangement {
    pub(crate) rows: Vec<Row>,
    pub(crate) margin: Margin,
    pub(crate) share_x: bool,
    pub(crate) share_y: bool,
}

impl Arrangement {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }

    pub fn shares(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.share_x,
            Axis::Y => self.share_y,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells at this level; nested arrangements count once
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    pub fn row_heights(&self) -> Vec<f32> {
        self.rows.iter().map(|row| row.height).collect()
    }

    pub fn row_widths(&self, index: usize) -> Option<Vec<f32>> {
        self.rows
            .get(index)
            .map(|row| row.cells.iter().map(|cell| cell.width).collect())
    }

    /// Cells at this level, row-major
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }

    /// All leaf ids, row-major and depth-first through nested arrangements
    pub fn panel_ids(&self) -> Vec<&PanelId> {
        let mut out = Vec::new();
        for cell in self.cells() {
            cell.panel.collect_leaf_ids(&mut out);
        }
        out
    }

    /// 1 for a flat grid, plus one per level of nesting
    pub fn depth(&self) -> usize {
        1 + self
            .cells()
            .filter_map(|cell| cell.panel.arrangement())
            .map(Arrangement::depth)
            .max()
            .unwrap_or(0)
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.find(id).is_some()
    }

    /// Locate a panel (leaf or nested) by id
    pub fn find(&self, id: &PanelId) -> Option<CellPath> {
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.cells.iter().enumerate() {
                if cell.panel.id() == id {
                    return Some(vec![(r, c)]);
                }
                if let PanelContent::Nested(inner) = cell.panel.content() {
                    if let Some(mut path) = inner.find(id) {
                        path.insert(0, (r, c));
                        return Some(path);
                    }
                }
            }
        }
        None
    }

    /// Cell at a path returned by [`Arrangement::find`]
    pub fn cell_at(&self, path: &[(usize, usize)]) -> Option<&Cell> {
        let ((r, c), rest) = path.split_first()?;
        let cell = self.rows.get(*r)?.cells.get(*c)?;
        if rest.is_empty() {
            Some(cell)
        } else {
            cell.panel.arrangement()?.cell_at(rest)
        }
    }

    /// Ids of the cells tagged with a group at this level
    pub fn group_members(&self, group: AxisGroupId) -> Vec<&PanelId> {
        self.cells()
            .filter(|cell| cell.group(group.axis) == Some(group))
            .map(|cell| cell.panel.id())
            .collect()
    }

    pub fn into_panel(self, id: impl Into<PanelId>) -> Panel {
        Panel::nested(id, self)
    }

    /// New arrangement with this one as its first cell followed by `panels`.
    /// `self` is left untouched.
    pub fn compose_with(
        &self,
        id: impl Into<PanelId>,
        panels: impl IntoIterator<Item = Panel>,
        options: &ComposeOptions,
    ) -> Result<Arrangement, LayoutError> {
        let mut all = vec![self.clone().into_panel(id)];
        all.extend(panels);
        compose(all, options)
    }
}
