// ABOUTME: Command-line argument parsing for the plotgrid binary.
// ABOUTME: Flags override config-file defaults before the layout is built.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use plotgrid_core::{Config, Margin, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Table,
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

/// Compose subplot layouts and print where every panel lands
#[derive(Parser, Debug)]
#[command(name = "plotgrid", version, about = "Compose subplot layouts")]
pub struct CliArgs {
    /// Layout file (TOML, or JSON with a .json extension)
    #[arg(value_name = "LAYOUT")]
    pub layout: PathBuf,

    /// Output format (defaults to the config value)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Write output here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ~/.config/plotgrid/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Default margin for layout levels that do not set one
    #[arg(long, value_name = "F")]
    pub margin: Option<f32>,

    /// Link X axes per column where the layout does not say
    #[arg(long, overrides_with = "no_share_x")]
    pub share_x: bool,

    /// Keep X axes independent where the layout does not say
    #[arg(long, overrides_with = "share_x")]
    pub no_share_x: bool,

    /// Link Y axes per row where the layout does not say
    #[arg(long, overrides_with = "no_share_y")]
    pub share_y: bool,

    /// Keep Y axes independent where the layout does not say
    #[arg(long, overrides_with = "share_y")]
    pub no_share_y: bool,
}

impl CliArgs {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_to(&self, mut config: Config) -> Result<Config> {
        if let Some(margin) = self.margin {
            let margin = Margin::uniform(margin);
            if !margin.is_valid() {
                bail!(
                    "--margin {} must be finite, non-negative and below 0.5",
                    margin.left
                );
            }
            config.margin = margin;
        }
        if let Some(share) = flag_pair(self.share_x, self.no_share_x) {
            config.share_x = share;
        }
        if let Some(share) = flag_pair(self.share_y, self.no_share_y) {
            config.share_y = share;
        }
        if let Some(format) = self.format {
            config.output = format.into();
        }
        Ok(config)
    }
}

/// `--flag` / `--no-flag`; clap keeps only the last one given
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
