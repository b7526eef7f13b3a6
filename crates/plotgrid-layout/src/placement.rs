// ABOUTME: Flattens an arrangement into leaf rectangles on the unit square.
// ABOUTME: Also resolves shared-axis groups into global axis numbers.

use std::collections::BTreeMap;

use plotgrid_core::{PanelId, Rect};
use serde::Serialize;

use crate::links::AxisLinks;
use crate::{Arrangement, PanelContent};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPanel {
    pub id: PanelId,
    /// Normalized area after margins, origin top-left
    pub rect: Rect,
    /// Axis numbers start at 1; linked panels share a number
    pub x_axis: usize,
    pub y_axis: usize,
    /// 0 for cells of the outermost arrangement
    pub depth: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub panels: Vec<PlacedPanel>,
    pub x_axes: usize,
    pub y_axes: usize,
}

impl Placement {
    pub fn get(&self, id: &PanelId) -> Option<&PlacedPanel> {
        self.panels.iter().find(|panel| &panel.id == id)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Panels whose x axis is linked to the given panel's, itself included
    pub fn linked_x(&self, id: &PanelId) -> Vec<&PanelId> {
        match self.get(id) {
            Some(target) => self
                .panels
                .iter()
                .filter(|panel| panel.x_axis == target.x_axis)
                .map(|panel| &panel.id)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn linked_y(&self, id: &PanelId) -> Vec<&PanelId> {
        match self.get(id) {
            Some(target) => self
                .panels
                .iter()
                .filter(|panel| panel.y_axis == target.y_axis)
                .map(|panel| &panel.id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Leaf under a normalized point, innermost match wins
    pub fn panel_at(&self, x: f32, y: f32) -> Option<&PlacedPanel> {
        self.panels
            .iter()
            .filter(|panel| panel.rect.contains_point(x, y))
            .max_by_key(|panel| panel.depth)
    }
}

impl Arrangement {
    /// Resolve every leaf to its rectangle on the unit square and link axes
    pub fn resolve(&self) -> Placement {
        self.resolve_in(Rect::full())
    }

    pub fn resolve_in(&self, area: Rect) -> Placement {
        let mut panels = Vec::new();
        let mut x_links = AxisLinks::default();
        let mut y_links = AxisLinks::default();
        collect_panels(self, area, 0, &mut panels, &mut x_links, &mut y_links);

        let x_numbers = x_links.numbering();
        let y_numbers = y_links.numbering();
        let panels: Vec<PlacedPanel> = panels
            .into_iter()
            .enumerate()
            .map(|(index, (id, rect, depth))| PlacedPanel {
                id,
                rect,
                x_axis: x_numbers[index],
                y_axis: y_numbers[index],
                depth,
            })
            .collect();

        let x_axes = x_numbers.iter().copied().max().unwrap_or(0);
        let y_axes = y_numbers.iter().copied().max().unwrap_or(0);
        tracing::debug!(panels = panels.len(), x_axes, y_axes, "Resolved placement");

        Placement {
            panels,
            x_axes,
            y_axes,
        }
    }
}

/// Appends leaves of `arrangement` inside `area`; returns the indices of the leaves added
fn collect_panels(
    arrangement: &Arrangement,
    area: Rect,
    depth: usize,
    out: &mut Vec<(PanelId, Rect, usize)>,
    x_links: &mut AxisLinks,
    y_links: &mut AxisLinks,
) -> Vec<usize> {
    let mut added = Vec::new();
    let mut x_groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    let mut y_groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();

    let mut y = 0.0;
    for row in arrangement.rows() {
        let mut x = 0.0;
        for cell in row.cells() {
            let local = Rect::new(x, y, cell.width(), row.height()).inset(&arrangement.margin());
            let cell_rect = area.sub_rect(local);

            let leaves = match cell.panel().content() {
                PanelContent::Leaf => {
                    let index = out.len();
                    out.push((cell.panel().id().clone(), cell_rect, depth));
                    x_links.add();
                    y_links.add();
                    vec![index]
                }
                PanelContent::Nested(inner) => {
                    collect_panels(inner, cell_rect, depth + 1, out, x_links, y_links)
                }
            };

            if let Some(group) = cell.x_group {
                x_groups.entry(group.index).or_default().extend(&leaves);
            }
            if let Some(group) = cell.y_group {
                y_groups.entry(group.index).or_default().extend(&leaves);
            }
            added.extend(leaves);
            x += cell.width();
        }
        y += row.height();
    }

    for members in x_groups.values() {
        x_links.link_all(members);
    }
    for members in y_groups.values() {
        y_links.link_all(members);
    }
    added
}
