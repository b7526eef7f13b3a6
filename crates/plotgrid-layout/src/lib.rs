// ABOUTME: Subplot composition for plotgrid.
// ABOUTME: Arranges panels into row/column grids with nesting and shared-axis linking.

mod arrangement;
mod compose;
mod document;
mod error;
mod links;
mod panel;
mod placement;

pub use arrangement::{Arrangement, Cell, CellPath, Row};
pub use compose::{compose, ComposeOptions};
pub use document::{DocumentError, LayoutDocument, MarginValue, PanelEntry};
pub use error::LayoutError;
pub use panel::{Panel, PanelContent};
pub use placement::{Placement, PlacedPanel};
