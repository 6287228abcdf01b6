use tracing::{debug, warn};

use crate::{
    error::Result,
    feature::FeatureCollection,
    geom::compute_bounds,
    map::{highlight, style, with_tooltips, GeoJsonLayer, MapArtifact, MapOptions, StyledFeature, TooltipBinding},
    risk::{Mode, ModeFields, FALLBACK_COLOR},
};

/// Build the styled, tooltip-bearing layer for one model. The input is not modified.
pub fn build_layer(features: &FeatureCollection, fields: &ModeFields, options: &MapOptions) -> GeoJsonLayer {
    let augmented = with_tooltips(features, fields);

    let features: Vec<StyledFeature> = augmented.features.into_iter()
        .map(|feature| {
            let style = style(&feature, fields);
            StyledFeature { feature, style }
        })
        .collect();

    let unknown = features.iter().filter(|f| f.style.color == FALLBACK_COLOR).count();
    if unknown > 0 {
        warn!(layer = fields.layer_name, field = fields.bucket, count = unknown,
            "[build_map] unrecognized risk buckets drawn with fallback color");
    }

    GeoJsonLayer {
        name: fields.layer_name.to_string(),
        features,
        highlight: highlight(),
        tooltip: TooltipBinding::new(options.tooltip_sticky),
    }
}

/// Build the interactive map for one model's predictions.
pub fn build_map(features: &FeatureCollection, mode: Mode, options: &MapOptions) -> Result<MapArtifact> {
    let fields = mode.fields();
    debug!(%mode, features = features.len(), "[build_map] resolving fields {:?}", fields);

    let viewport = compute_bounds(features)?;
    let layer = build_layer(features, fields, options);

    Ok(MapArtifact::new(options, viewport, vec![layer]))
}

/// Build one map holding both models as separate toggleable layers.
/// The viewport covers the union of both collections.
pub fn build_comparison_map(poisson: &FeatureCollection, gbt: &FeatureCollection, options: &MapOptions) -> Result<MapArtifact> {
    debug!(poisson = poisson.len(), gbt = gbt.len(), "[build_comparison_map] building layers");

    // Each side must have geometry of its own; an empty one is not masked by the other.
    let viewport = compute_bounds(poisson)?.union(&compute_bounds(gbt)?);

    let layers = vec![
        build_layer(poisson, Mode::Poisson.fields(), options),
        build_layer(gbt, Mode::Gbt.fields(), options),
    ];

    Ok(MapArtifact::new(options, viewport, layers))
}
