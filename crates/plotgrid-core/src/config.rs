// ABOUTME: Composer defaults and output preferences.
// ABOUTME: Loads and saves settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::Margin;

/// How a resolved placement is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Pretty-printed JSON - default
    #[default]
    Json,
    /// Plain text table, one leaf per line
    Table,
    /// Standalone HTML page with absolutely positioned boxes
    Html,
}

impl OutputFormat {
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
            OutputFormat::Html => "html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Margin applied when a layout does not set its own
    pub margin: Margin,

    /// Link X axes per column unless a layout says otherwise
    pub share_x: bool,

    /// Link Y axes per row unless a layout says otherwise
    pub share_y: bool,

    /// Output format used when none is given on the command line
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            share_x: false,
            share_y: false,
            output: OutputFormat::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid margin {0:?}: sides must be finite, non-negative and below 0.5")]
    InvalidMargin([f32; 4]),
}

impl Config {
    /// Get the default config file path (~/.config/plotgrid/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("plotgrid").join("config.toml"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if !config.margin.is_valid() {
            return Err(ConfigError::InvalidMargin(config.margin.as_array()));
        }
        Ok(config)
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_margin_keeps_other_sides() {
        let config = Config::from_toml_str(
            r#"
            share_x = true
            output = "html"

            [margin]
            left = 0.1
            "#,
        )
        .unwrap();
        assert!(config.share_x);
        assert!(!config.share_y);
        assert_eq!(config.output, OutputFormat::Html);
        assert_eq!(config.margin.left, 0.1);
        assert_eq!(config.margin.right, 0.02);
    }

    #[test]
    fn rejects_oversized_margin() {
        let err = Config::from_toml_str("[margin]\ntop = 0.6\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMargin(_)));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            margin: Margin::sides(0.01, 0.02, 0.03, 0.04),
            share_x: true,
            share_y: true,
            output: OutputFormat::Table,
        };

        let temp_path = std::env::temp_dir()
            .join("plotgrid-config-test")
            .join("config.toml");
        config.save(&temp_path).unwrap();
        let loaded = Config::load(&temp_path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_default_path() {
        if let Some(p) = Config::default_path() {
            assert!(p.ends_with("plotgrid/config.toml"));
        }
    }
}
