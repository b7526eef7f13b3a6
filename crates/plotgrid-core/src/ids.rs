// ABOUTME: Identifiers for panels and shared-axis groups.
// ABOUTME: Panel ids are user-chosen names; axis groups are derived from grid position.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(pub String);

impl PanelId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PanelId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn prefix(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

/// Shared-axis group: X groups follow the column index, Y groups the row index.
/// Only meaningful within the arrangement that assigned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisGroupId {
    pub axis: Axis,
    pub index: usize,
}

impl AxisGroupId {
    pub const fn x(column: usize) -> Self {
        Self {
            axis: Axis::X,
            index: column,
        }
    }

    pub const fn y(row: usize) -> Self {
        Self {
            axis: Axis::Y,
            index: row,
        }
    }
}

impl fmt::Display for AxisGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis.prefix(), self.index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_display_is_one_based() {
        assert_eq!(AxisGroupId::x(0).to_string(), "x1");
        assert_eq!(AxisGroupId::y(2).to_string(), "y3");
    }

    #[test]
    fn panel_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&PanelId::from("scatter")).unwrap();
        assert_eq!(json, "\"scatter\"");
    }
}
