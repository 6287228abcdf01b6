use anyhow::{Context, Result};
use tracing::info;

use crate::{
    cli::{Cli, CompareArgs, OutputFormat},
    commands::{resolve_input, write_output},
    config::Config,
    io::CollectionCache,
    map::{build_comparison_map, with_tooltips},
    risk::Mode,
};

pub fn run(_cli: &Cli, config: &Config, args: &CompareArgs) -> Result<()> {
    let poisson_path = resolve_input(config, Mode::Poisson, args.poisson.as_deref());
    let gbt_path = resolve_input(config, Mode::Gbt, args.gbt.as_deref());
    info!(poisson = %poisson_path.display(), gbt = %gbt_path.display(), output = %args.output.display(), "[compare]");

    // Both models are often stored in one file with both field sets.
    let mut cache = CollectionCache::new();
    let poisson = cache.load(&poisson_path)
        .with_context(|| format!("Failed to load predictions for {}", Mode::Poisson))?;
    let gbt = cache.load(&gbt_path)
        .with_context(|| format!("Failed to load predictions for {}", Mode::Gbt))?;

    let artifact = build_comparison_map(&poisson, &gbt, &config.map_options())
        .context("Failed to build comparison map")?;

    let augmented = match args.format {
        OutputFormat::Geojson => vec![
            with_tooltips(&poisson, Mode::Poisson.fields()),
            with_tooltips(&gbt, Mode::Gbt.fields()),
        ],
        _ => Vec::new(),
    };

    write_output(&args.output, args.format, args.force, &artifact, &augmented)
}
