use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    cli::{BoundsArgs, Cli},
    commands::resolve_input,
    config::Config,
    geom::compute_bounds,
    io::read_feature_collection,
};

pub fn run(_cli: &Cli, config: &Config, args: &BoundsArgs) -> Result<()> {
    let mode = args.mode.unwrap_or(config.default_mode);
    let input = resolve_input(config, mode, args.input.as_deref());
    info!(%mode, input = %input.display(), "[bounds]");

    let features = read_feature_collection(&input)?;
    let viewport = compute_bounds(&features)
        .with_context(|| format!("Failed to compute bounds of {}", input.display()))?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &viewport)?;
    writeln!(stdout)?;
    Ok(())
}
