use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pipe_risk_map::cli::{Cli, Commands};
use pipe_risk_map::commands::{bounds, compare, render};
use pipe_risk_map::config::load_config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &cli.config {
        anyhow::ensure!(path.is_file(), "Config file not found: {}", path.display());
    }
    let config = load_config(cli.config.as_deref(), &cli.overrides())
        .map_err(|e| anyhow::Error::from(*e))
        .context("Failed to load configuration")?;

    match &cli.command {
        Commands::Render(args) => render::run(&cli, &config, args),
        Commands::Compare(args) => compare::run(&cli, &config, args),
        Commands::Bounds(args) => bounds::run(&cli, &config, args),
    }
}
