pub mod bounds;
pub mod compare;
pub mod render;

use std::{io::Write, path::{Path, PathBuf}};

use anyhow::{Context, Result};

use crate::{
    cli::OutputFormat,
    config::Config,
    feature::FeatureCollection,
    io::{assert_not_stdout, html::render_html, is_stdout, open_for_write, write_feature_collection},
    map::MapArtifact,
    risk::Mode,
};

/// Input file for a model: the explicit path if given, otherwise the bundled one.
pub(crate) fn resolve_input(config: &Config, mode: Mode, explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(|| config.input_for(mode), Path::to_path_buf)
}

/// Write the artifact in the requested format, atomically for files.
/// `augmented` are the tooltip-bearing collections used for GeoJSON output.
pub(crate) fn write_output(
    output: &Path,
    format: OutputFormat,
    force: bool,
    artifact: &MapArtifact,
    augmented: &[FeatureCollection],
) -> Result<()> {
    if format == OutputFormat::Html { assert_not_stdout(output, "html")? }

    if is_stdout(output) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        write_format(&mut lock, format, artifact, augmented)?;
        lock.flush()?;
        return Ok(());
    }

    let mut pending = open_for_write(output, force)?;
    write_format(&mut pending, format, artifact, augmented)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    pending.finalize()?;
    Ok(())
}

fn write_format<W: Write>(writer: &mut W, format: OutputFormat, artifact: &MapArtifact, augmented: &[FeatureCollection]) -> Result<()> {
    match format {
        OutputFormat::Html => render_html(writer, artifact)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, artifact)?;
            writeln!(writer)?;
        }
        OutputFormat::Geojson => match augmented {
            [single] => write_feature_collection(writer, single)?,
            many => {
                // One collection per model, keyed by layer name.
                let by_layer: serde_json::Map<String, serde_json::Value> = artifact.layers.iter()
                    .zip(many)
                    .map(|(layer, fc)| -> Result<(String, serde_json::Value)> {
                        Ok((layer.name.clone(), serde_json::to_value(fc)?))
                    })
                    .collect::<Result<_>>()?;
                serde_json::to_writer(&mut *writer, &by_layer)?;
                writeln!(writer)?;
            }
        },
    }
    Ok(())
}
