// ABOUTME: Property tests for composition invariants.
// ABOUTME: Normalization, row distribution, nesting and shared-axis tagging.

use plotgrid_core::{Axis, AxisGroupId};
use plotgrid_layout::{compose, ComposeOptions, LayoutError, Panel};
use proptest::prelude::*;

fn leaves(prefix: &str, count: usize) -> Vec<Panel> {
    (0..count)
        .map(|i| Panel::leaf(format!("{prefix}{i}")))
        .collect()
}

/// Panel count plus a row count that does not exceed it
fn grid_shape() -> impl Strategy<Value = (usize, usize)> {
    (1usize..40).prop_flat_map(|count| (Just(count), 1..=count))
}

proptest! {
    #[test]
    fn row_heights_sum_to_one(
        (count, rows) in grid_shape(),
        seed in prop::collection::vec(0.01f32..100.0, 40),
    ) {
        let heights: Vec<f32> = seed[..rows].to_vec();
        let arrangement = compose(
            leaves("p", count),
            &ComposeOptions::rows(rows).heights(heights).margin(0.0),
        )
        .expect("valid heights must compose");
        let total: f32 = arrangement.row_heights().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-4, "heights sum to {}", total);
    }

    #[test]
    fn row_widths_sum_to_one((count, rows) in grid_shape()) {
        let arrangement = compose(leaves("p", count), &ComposeOptions::rows(rows).margin(0.0))
            .expect("default widths must compose");
        for index in 0..arrangement.row_count() {
            let total: f32 = arrangement.row_widths(index).unwrap().iter().sum();
            prop_assert!((total - 1.0).abs() < 1e-4, "row {} widths sum to {}", index, total);
        }
    }

    #[test]
    fn explicit_widths_sum_to_one(
        columns in 1usize..8,
        rows in 1usize..6,
        seed in prop::collection::vec(0.01f32..50.0, 8),
    ) {
        let widths: Vec<f32> = seed[..columns].to_vec();
        let arrangement = compose(
            leaves("p", columns * rows),
            &ComposeOptions::rows(rows).widths(widths).margin(0.0),
        )
        .expect("uniform rows accept explicit widths");
        for index in 0..rows {
            let total: f32 = arrangement.row_widths(index).unwrap().iter().sum();
            prop_assert!((total - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn even_division_gives_equal_rows(per_row in 1usize..10, rows in 1usize..10) {
        let arrangement = compose(leaves("p", per_row * rows), &ComposeOptions::rows(rows)).unwrap();
        prop_assert_eq!(arrangement.row_count(), rows);
        for row in arrangement.rows() {
            prop_assert_eq!(row.len(), per_row);
        }
    }

    #[test]
    fn panels_keep_index_order((count, rows) in grid_shape()) {
        let arrangement = compose(leaves("p", count), &ComposeOptions::rows(rows).margin(0.0)).unwrap();
        let ids: Vec<String> = arrangement.panel_ids().iter().map(|id| id.to_string()).collect();
        let expected: Vec<String> = (0..count).map(|i| format!("p{i}")).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn nesting_preserves_inner_arrangement(
        (count, rows) in grid_shape(),
        share_x in any::<bool>(),
        share_y in any::<bool>(),
        extra in 1usize..5,
    ) {
        let inner = compose(
            leaves("in", count),
            &ComposeOptions::rows(rows).share_x(share_x).share_y(share_y).margin(0.0),
        )
        .unwrap();
        let snapshot = inner.clone();

        let mut panels = vec![inner.into_panel("nested")];
        panels.extend(leaves("out", extra));
        let outer = compose(panels, &ComposeOptions::rows(2.min(extra + 1)).share_x(true)).unwrap();

        let nested = outer.rows()[0].cells()[0].panel().arrangement().unwrap();
        prop_assert_eq!(nested, &snapshot);
    }

    #[test]
    fn share_x_groups_follow_columns(per_row in 1usize..8, rows in 1usize..8) {
        let arrangement = compose(
            leaves("p", per_row * rows),
            &ComposeOptions::rows(rows).share_x(true),
        )
        .unwrap();
        for row in arrangement.rows() {
            for (column, cell) in row.cells().iter().enumerate() {
                prop_assert_eq!(cell.group(Axis::X), Some(AxisGroupId::x(column)));
            }
        }
        let placement = arrangement.resolve();
        prop_assert_eq!(placement.x_axes, per_row);
        prop_assert_eq!(placement.y_axes, per_row * rows);
    }

    #[test]
    fn share_x_includes_nested_cells(per_row in 1usize..6, rows in 2usize..6, nested_at in 0usize..36) {
        let count = per_row * rows;
        let nested_at = nested_at % count;
        let inner = compose(leaves("in", 2), &ComposeOptions::default()).unwrap();

        let mut panels = leaves("p", count - 1);
        panels.insert(nested_at, inner.into_panel("nested"));
        let arrangement = compose(panels, &ComposeOptions::rows(rows).share_x(true)).unwrap();

        for row in arrangement.rows() {
            for (column, cell) in row.cells().iter().enumerate() {
                prop_assert_eq!(cell.group(Axis::X), Some(AxisGroupId::x(column)));
            }
        }
    }

    #[test]
    fn share_y_groups_follow_rows((count, rows) in grid_shape(), with_nested in any::<bool>()) {
        let mut panels = leaves("p", count);
        if with_nested {
            let inner = compose(leaves("in", 2), &ComposeOptions::default()).unwrap();
            panels[0] = inner.into_panel("nested");
        }
        let arrangement = compose(panels, &ComposeOptions::rows(rows).share_y(true).margin(0.0)).unwrap();
        for (index, row) in arrangement.rows().iter().enumerate() {
            for cell in row.cells() {
                prop_assert_eq!(cell.group(Axis::Y), Some(AxisGroupId::y(index)));
            }
        }
        prop_assert_eq!(arrangement.resolve().y_axes, rows);
    }

    #[test]
    fn resolved_rects_have_area_or_compose_fails(
        (count, rows) in grid_shape(),
        margin in 0.0f32..0.2,
    ) {
        match compose(leaves("p", count), &ComposeOptions::rows(rows).margin(margin)) {
            Ok(arrangement) => {
                for panel in arrangement.resolve().panels {
                    prop_assert!(panel.rect.width > 0.0 && panel.rect.height > 0.0);
                    prop_assert!(panel.rect.x >= -1e-5 && panel.rect.right() <= 1.0 + 1e-5);
                    prop_assert!(panel.rect.y >= -1e-5 && panel.rect.bottom() <= 1.0 + 1e-5);
                }
            }
            Err(err) => {
                prop_assert!(matches!(err, LayoutError::InvalidLayout(_)));
            }
        }
    }
}
