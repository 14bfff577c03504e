use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gallery::config::{Cli, Config};
use gallery::content;
use gallery::view;

fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse()).context("invalid configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .init();

    let deck = content::hero_slides().context("hero slides are misconfigured")?;
    let catalog = content::catalog();
    info!(
        slides = deck.len(),
        artworks = catalog.len(),
        interval_ms = config.slide_interval.as_millis() as u64,
        route = %config.start_route,
        "starting gallery kiosk"
    );

    view::run(&config, deck, catalog);
    Ok(())
}
