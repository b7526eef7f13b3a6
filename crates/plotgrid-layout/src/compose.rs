// ABOUTME: Builds an arrangement from a flat list of panels.
// ABOUTME: Validates grid dimensions, normalizes size fractions, tags shared axes.

use std::collections::HashSet;

use plotgrid_core::{Axis, AxisGroupId, Margin, PanelId};

use crate::{Arrangement, Cell, LayoutError, Panel, PanelContent, Row};

/// Grid parameters for [`compose`]
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeOptions {
    pub rows: usize,
    /// One fraction per row; equal shares when `None`
    pub heights: Option<Vec<f32>>,
    /// One fraction per column; every row must then have the same column count
    pub widths: Option<Vec<f32>>,
    pub share_x: bool,
    pub share_y: bool,
    pub margin: Margin,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            rows: 1,
            heights: None,
            widths: None,
            share_x: false,
            share_y: false,
            margin: Margin::default(),
        }
    }
}

impl ComposeOptions {
    pub fn rows(rows: usize) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn heights(mut self, heights: impl Into<Vec<f32>>) -> Self {
        self.heights = Some(heights.into());
        self
    }

    pub fn widths(mut self, widths: impl Into<Vec<f32>>) -> Self {
        self.widths = Some(widths.into());
        self
    }

    pub fn share_x(mut self, share: bool) -> Self {
        self.share_x = share;
        self
    }

    pub fn share_y(mut self, share: bool) -> Self {
        self.share_y = share;
        self
    }

    pub fn margin(mut self, margin: impl Into<Margin>) -> Self {
        self.margin = margin.into();
        self
    }
}

/// Arrange `panels` row-major into `options.rows` rows.
///
/// With `n` panels and `r` rows each row holds `n / r` panels and the last
/// `n % r` rows hold one extra, so `[a, b, c]` over two rows is `[[a], [b, c]]`.
/// Nested arrangements fill a single cell and are carried over unchanged.
pub fn compose(panels: Vec<Panel>, options: &ComposeOptions) -> Result<Arrangement, LayoutError> {
    if panels.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    let count = panels.len();
    let rows = options.rows;
    if rows == 0 {
        return Err(LayoutError::invalid("row count must be at least 1"));
    }
    if rows > count {
        return Err(LayoutError::invalid(format!(
            "{rows} rows requested for {count} panels"
        )));
    }
    if !options.margin.is_valid() {
        return Err(LayoutError::invalid(format!(
            "margin {:?} must be finite, non-negative and below 0.5 on every side",
            options.margin.as_array()
        )));
    }

    let row_sizes = distribute(count, rows);

    let heights = match &options.heights {
        Some(heights) => normalized("heights", heights, rows)?,
        None => vec![1.0 / rows as f32; rows],
    };

    let widths = match &options.widths {
        Some(widths) => {
            let columns = row_sizes[0];
            if row_sizes.iter().any(|&size| size != columns) {
                return Err(LayoutError::invalid(format!(
                    "explicit widths need the same column count in every row, got {row_sizes:?}"
                )));
            }
            Some(normalized("widths", widths, columns)?)
        }
        None => None,
    };

    check_margin_fits(&options.margin, &row_sizes, &heights, widths.as_deref())?;
    check_unique_ids(&panels)?;

    tracing::debug!(
        panels = count,
        rows,
        share_x = options.share_x,
        share_y = options.share_y,
        "Composing arrangement"
    );

    let mut remaining = panels.into_iter();
    let mut grid = Vec::with_capacity(rows);
    for (row_index, (&size, &height)) in row_sizes.iter().zip(&heights).enumerate() {
        let mut cells = Vec::with_capacity(size);
        for (column, panel) in remaining.by_ref().take(size).enumerate() {
            let width = widths
                .as_ref()
                .map(|widths| widths[column])
                .unwrap_or(1.0 / size as f32);
            let x_group =
                (options.share_x && panel.shares(Axis::X)).then_some(AxisGroupId::x(column));
            let y_group =
                (options.share_y && panel.shares(Axis::Y)).then_some(AxisGroupId::y(row_index));
            tracing::trace!(panel = %panel.id(), row = row_index, column, ?x_group, ?y_group, "Placed panel");
            cells.push(Cell {
                panel,
                width,
                x_group,
                y_group,
            });
        }
        grid.push(Row { height, cells });
    }

    Ok(Arrangement {
        rows: grid,
        margin: options.margin,
        share_x: options.share_x,
        share_y: options.share_y,
    })
}

/// Panels per row, extras going to the bottom rows
fn distribute(count: usize, rows: usize) -> Vec<usize> {
    let base = count / rows;
    let extra = count % rows;
    (0..rows)
        .map(|row| if row >= rows - extra { base + 1 } else { base })
        .collect()
}

fn normalized(kind: &str, fractions: &[f32], expected: usize) -> Result<Vec<f32>, LayoutError> {
    if fractions.len() != expected {
        return Err(LayoutError::invalid(format!(
            "{kind} has {} entries, grid needs {expected}",
            fractions.len()
        )));
    }
    if let Some(&value) = fractions.iter().find(|f| !(f.is_finite() && **f > 0.0)) {
        return Err(LayoutError::NegativeFraction { value });
    }
    let total: f32 = fractions.iter().sum();
    if !total.is_finite() {
        return Err(LayoutError::invalid(format!("{kind} overflow when summed")));
    }
    Ok(fractions.iter().map(|f| f / total).collect())
}

/// The margin is taken off every cell, so it must leave the smallest cell some area
fn check_margin_fits(
    margin: &Margin,
    row_sizes: &[usize],
    heights: &[f32],
    widths: Option<&[f32]>,
) -> Result<(), LayoutError> {
    let narrowest = match widths {
        Some(widths) => widths.iter().copied().fold(f32::INFINITY, f32::min),
        None => {
            let columns = row_sizes.iter().copied().max().unwrap_or(1);
            1.0 / columns as f32
        }
    };
    let shortest = heights.iter().copied().fold(f32::INFINITY, f32::min);

    if margin.left + margin.right >= narrowest {
        return Err(LayoutError::invalid(format!(
            "horizontal margin {} leaves no room in a cell {narrowest} wide",
            margin.left + margin.right
        )));
    }
    if margin.top + margin.bottom >= shortest {
        return Err(LayoutError::invalid(format!(
            "vertical margin {} leaves no room in a row {shortest} high",
            margin.top + margin.bottom
        )));
    }
    Ok(())
}

fn check_unique_ids(panels: &[Panel]) -> Result<(), LayoutError> {
    let mut seen: HashSet<&PanelId> = HashSet::new();
    let mut stack: Vec<&Panel> = panels.iter().collect();
    while let Some(panel) = stack.pop() {
        if !seen.insert(panel.id()) {
            return Err(LayoutError::DuplicatePanel(panel.id().clone()));
        }
        if let PanelContent::Nested(inner) = panel.content() {
            stack.extend(inner.cells().map(Cell::panel));
        }
    }
    Ok(())
}
