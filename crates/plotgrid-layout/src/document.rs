// ABOUTME: Declarative layout files (TOML or JSON) describing a composition.
// ABOUTME: Documents nest the same way arrangements do and build through `compose`.

use std::path::Path;

use plotgrid_core::{Config, Margin, PanelId};
use serde::{Deserialize, Serialize};

use crate::{compose, Arrangement, ComposeOptions, LayoutError, Panel};

/// Margin written either as one number or as a table of sides
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarginValue {
    Uniform(f32),
    /// `[left, right, top, bottom]`
    Array([f32; 4]),
    Sides(Margin),
}

impl From<MarginValue> for Margin {
    fn from(value: MarginValue) -> Self {
        match value {
            MarginValue::Uniform(v) => Margin::uniform(v),
            MarginValue::Array([left, right, top, bottom]) => Margin::sides(left, right, top, bottom),
            MarginValue::Sides(margin) => margin,
        }
    }
}

/// One grid cell: a leaf, or a nested layout when `layout` is present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelEntry {
    pub id: PanelId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Box<LayoutDocument>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_x: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_y: Option<bool>,
}

impl PanelEntry {
    pub fn leaf(id: impl Into<PanelId>) -> Self {
        Self {
            id: id.into(),
            layout: None,
            share_x: None,
            share_y: None,
        }
    }

    pub fn is_nested(&self) -> bool {
        self.layout.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutDocument {
    pub rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heights: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widths: Option<Vec<f32>>,
    /// Falls back to the config default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_x: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_y: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<MarginValue>,
    pub panels: Vec<PanelEntry>,
}

impl Default for LayoutDocument {
    fn default() -> Self {
        Self {
            rows: 1,
            heights: None,
            widths: None,
            share_x: None,
            share_y: None,
            margin: None,
            panels: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to read layout file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML layout: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON layout: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Layout '{path}' is invalid: {source}")]
    Layout {
        path: String,
        #[source]
        source: LayoutError,
    },
}

impl LayoutDocument {
    pub fn from_toml_str(content: &str) -> Result<Self, DocumentError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from disk; `.json` files are read as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Compose options for this level, unset fields taken from `config`
    pub fn options(&self, config: &Config) -> ComposeOptions {
        ComposeOptions {
            rows: self.rows,
            heights: self.heights.clone(),
            widths: self.widths.clone(),
            share_x: self.share_x.unwrap_or(config.share_x),
            share_y: self.share_y.unwrap_or(config.share_y),
            margin: self.margin.map(Margin::from).unwrap_or(config.margin),
        }
    }

    pub fn build(&self, config: &Config) -> Result<Arrangement, DocumentError> {
        self.build_at("root", config)
    }

    fn build_at(&self, path: &str, config: &Config) -> Result<Arrangement, DocumentError> {
        let mut panels = Vec::with_capacity(self.panels.len());
        for entry in &self.panels {
            let panel = match &entry.layout {
                None => Panel::leaf(entry.id.clone()),
                Some(layout) => {
                    let inner = layout.build_at(&format!("{path}.{}", entry.id), config)?;
                    Panel::nested(entry.id.clone(), inner)
                }
            };
            panels.push(apply_sharing(panel, entry.share_x, entry.share_y));
        }

        compose(panels, &self.options(config)).map_err(|source| DocumentError::Layout {
            path: path.to_string(),
            source,
        })
    }
}

fn apply_sharing(mut panel: Panel, share_x: Option<bool>, share_y: Option<bool>) -> Panel {
    if let Some(share) = share_x {
        panel = panel.with_share_x(share);
    }
    if let Some(share) = share_y {
        panel = panel.with_share_y(share);
    }
    panel
}
