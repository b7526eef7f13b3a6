// ABOUTME: Shared types and configuration for plotgrid.
// ABOUTME: Defines normalized geometry, panel/axis identifiers, and config file handling.

pub mod config;
pub mod geometry;
pub mod ids;

pub use config::{Config, ConfigError, OutputFormat};
pub use geometry::{Margin, Rect};
pub use ids::{Axis, AxisGroupId, PanelId};
