use anyhow::{Context, Result};
use tracing::info;

use crate::{
    cli::{Cli, OutputFormat, RenderArgs},
    commands::{resolve_input, write_output},
    config::Config,
    io::read_feature_collection,
    map::{build_map, with_tooltips},
};

pub fn run(_cli: &Cli, config: &Config, args: &RenderArgs) -> Result<()> {
    let mode = args.mode.unwrap_or(config.default_mode);
    let input = resolve_input(config, mode, args.input.as_deref());
    info!(%mode, input = %input.display(), output = %args.output.display(), "[render]");

    let features = read_feature_collection(&input)
        .with_context(|| format!("Failed to load predictions for {mode}"))?;

    let artifact = build_map(&features, mode, &config.map_options())
        .with_context(|| format!("Failed to build map from {}", input.display()))?;

    let augmented = match args.format {
        OutputFormat::Geojson => vec![with_tooltips(&features, mode.fields())],
        _ => Vec::new(),
    };

    write_output(&args.output, args.format, args.force, &artifact, &augmented)
}
