// ABOUTME: plotgrid command-line entry point.
// ABOUTME: Loads config and a layout file, composes it, and writes the resolved placement.

mod cli;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use plotgrid_core::Config;
use plotgrid_layout::LayoutDocument;

use cli::CliArgs;

fn load_config(args: &CliArgs) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load_or_default()),
    }
}

fn run(args: CliArgs) -> Result<()> {
    let config = load_config(&args)?;
    let config = args.apply_to(config)?;
    tracing::info!(
        margin = ?config.margin.as_array(),
        share_x = config.share_x,
        share_y = config.share_y,
        format = config.output.label(),
        "Loaded config"
    );

    let document = LayoutDocument::load(&args.layout)
        .with_context(|| format!("Failed to read layout {}", args.layout.display()))?;
    let arrangement = document.build(&config)?;
    let placement = arrangement.resolve();
    tracing::info!(
        panels = placement.len(),
        depth = arrangement.depth(),
        "Composed {}",
        args.layout.display()
    );

    let rendered = render::render(&placement, config.output)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    logging::init();

    let args = CliArgs::parse();
    tracing::debug!(?args, "Starting plotgrid");

    run(args)
}
